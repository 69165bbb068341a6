//! Interactive terminal menu.

use dialoguer::{Input, Select};

use crate::client::{ClearanceReader, DEFAULT_RADIUS_KM};
use crate::pdf::PdfEngine;
use crate::services::report::{Clock, RenderedReport, Renderer};
use crate::services::search::{SearchRequest, run_search};

const MENU_ITEMS: [&str; 4] = [
    "Search by ZIP code",
    "Search by coordinates",
    "Search by store ID",
    "Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Zip,
    Coordinates,
    Store,
    Exit,
}

impl MenuChoice {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Zip),
            1 => Some(Self::Coordinates),
            2 => Some(Self::Store),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Runs the menu until the user exits.
///
/// Failures of a single search are reported and the loop continues; only
/// terminal I/O errors end it.
pub fn run<R, E, C>(reader: &R, renderer: &Renderer<E, C>) -> Result<(), dialoguer::Error>
where
    R: ClearanceReader,
    E: PdfEngine,
    C: Clock,
{
    loop {
        println!();
        let index = Select::new()
            .with_prompt("Food Waste Search Options")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        let request = match MenuChoice::from_index(index) {
            Some(MenuChoice::Zip) => prompt_zip()?,
            Some(MenuChoice::Coordinates) => prompt_coordinates()?,
            Some(MenuChoice::Store) => prompt_store()?,
            Some(MenuChoice::Exit) => break,
            None => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };

        match run_search(&request, reader, renderer) {
            Ok(report) => print_report(&report),
            Err(e) => {
                log::error!("Search {request:?} failed: {e}");
                println!("Error: {e}");
            }
        }
    }
    Ok(())
}

fn prompt_zip() -> Result<SearchRequest, dialoguer::Error> {
    let zip: String = Input::new().with_prompt("Enter ZIP code").interact_text()?;
    Ok(SearchRequest::Zip(zip))
}

fn prompt_coordinates() -> Result<SearchRequest, dialoguer::Error> {
    let latitude: f64 = Input::new()
        .with_prompt("Enter latitude (e.g., 56.154459)")
        .interact_text()?;
    let longitude: f64 = Input::new()
        .with_prompt("Enter longitude (e.g., 10.206777)")
        .interact_text()?;
    let radius_km: u32 = Input::new()
        .with_prompt("Enter radius in km")
        .default(DEFAULT_RADIUS_KM)
        .interact_text()?;
    Ok(SearchRequest::Coordinates {
        latitude,
        longitude,
        radius_km,
    })
}

fn prompt_store() -> Result<SearchRequest, dialoguer::Error> {
    let store_id: String = Input::new().with_prompt("Enter store ID").interact_text()?;
    Ok(SearchRequest::Store(store_id))
}

fn print_report(report: &RenderedReport) {
    println!("\nOutput filer genereret:");
    println!("- HTML: {}", report.html_path.display());
    println!("- PDF: {}", report.pdf_path.display());
    println!("- Markdown: {}", report.markdown_path.display());
    print!("{}", report.text_summary);
}
