use std::fmt::{self, Display, Formatter};

use crate::dto::report::ReportDto;

/// Console transcript of a report.
pub struct TextSummary<'a>(pub &'a ReportDto);

impl Display for TextSummary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.stores.is_empty() {
            return writeln!(f, "\nIngen butikker fundet.");
        }

        for store in &self.0.stores {
            writeln!(f, "\nButik: {}", store.name)?;
            writeln!(f, "Adresse: {}", store.address)?;
            writeln!(f, "\nTilbud (sorteret efter størst beholdning):")?;

            if store.clearances.is_empty() {
                writeln!(f, "\n  Ingen tilbud i øjeblikket.")?;
            }

            for clearance in &store.clearances {
                writeln!(f, "\n- {}", clearance.description)?;
                writeln!(f, "  Oprindelig pris: {}", clearance.original_price)?;
                writeln!(f, "  Ny pris: {}", clearance.new_price)?;
                writeln!(f, "  Rabat: {}", clearance.discount)?;
                writeln!(f, "  Beholdning: {}", clearance.stock)?;
                writeln!(f, "  Gyldig indtil: {}", clearance.valid_until)?;
            }
        }
        Ok(())
    }
}

pub fn render_text(report: &ReportDto) -> String {
    TextSummary(report).to_string()
}
