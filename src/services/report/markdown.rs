use std::fmt::{self, Display, Formatter};

use crate::dto::report::ReportDto;

pub struct MarkdownReport<'a>(pub &'a ReportDto);

impl Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        write!(f, "# {}\n\n", report.title)?;
        write!(f, "*Opdateret: {}*\n\n", report.updated_at)?;

        for store in &report.stores {
            writeln!(f, "## {}", store.name)?;
            write!(f, "**Adresse:** {}\n\n", store.address)?;

            for clearance in &store.clearances {
                writeln!(f, "### {}", clearance.description)?;
                writeln!(
                    f,
                    "- 💰 ~~{}~~ → **{}**",
                    clearance.original_price, clearance.new_price
                )?;
                writeln!(f, "- 🏷️ Rabat: **{}**", clearance.percent)?;
                writeln!(f, "- 📦 Beholdning: {}", clearance.stock)?;
                writeln!(f, "- ⏰ Gyldig indtil: {}", clearance.valid_until)?;
                if let Some(image) = &clearance.source_image_url {
                    writeln!(f, "- 🖼️ [Se billede]({image})")?;
                }
                write!(f, "\n---\n\n")?;
            }
        }
        Ok(())
    }
}

pub fn render_markdown(report: &ReportDto) -> String {
    MarkdownReport(report).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::report::{ClearanceDto, StoreDto};

    fn clearance(description: &str, image: Option<&str>) -> ClearanceDto {
        ClearanceDto {
            description: description.to_string(),
            image_url: image.map(str::to_string),
            source_image_url: image.map(str::to_string),
            original_price: "25.00 DKK".to_string(),
            new_price: "12.50 DKK".to_string(),
            discount: "-50.0%".to_string(),
            percent: "50.0%".to_string(),
            stock: "1.50 kg".to_string(),
            valid_until: "01/06/2024 kl. 20:00".to_string(),
        }
    }

    fn report() -> ReportDto {
        ReportDto::new(
            "01/06/2024 kl. 12:30".to_string(),
            vec![StoreDto {
                name: "Føtex Frederiks Allé".to_string(),
                address: "Frederiks Allé 22, 8000 Aarhus C".to_string(),
                clearances: vec![
                    clearance("Kyllingebryst", Some("https://dam.dsg.dk/x/id/ABC/y")),
                    clearance("Rugbrød", None),
                ],
            }],
        )
    }

    #[test]
    fn starts_with_title_and_update_line() {
        let md = render_markdown(&report());
        assert!(md.starts_with(
            "# Tilbud med kort holdbarhed\n\n*Opdateret: 01/06/2024 kl. 12:30*\n\n## Føtex Frederiks Allé\n**Adresse:** Frederiks Allé 22, 8000 Aarhus C\n\n"
        ));
    }

    #[test]
    fn renders_one_section_per_clearance() {
        let md = render_markdown(&report());

        assert_eq!(md.lines().filter(|l| l.starts_with("### ")).count(), 2);
        assert_eq!(md.lines().filter(|l| *l == "---").count(), 2);
        assert!(md.contains("- 💰 ~~25.00 DKK~~ → **12.50 DKK**\n"));
        assert!(md.contains("- 🏷️ Rabat: **50.0%**\n"));
        assert!(md.contains("- 📦 Beholdning: 1.50 kg\n"));
    }

    #[test]
    fn links_the_original_image_only_when_present() {
        let md = render_markdown(&report());

        assert_eq!(md.matches("[Se billede]").count(), 1);
        assert!(md.contains("[Se billede](https://dam.dsg.dk/x/id/ABC/y)"));
    }
}
