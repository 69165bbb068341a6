use crate::client::{ClearanceReader, DEFAULT_RADIUS_KM};
use crate::pdf::PdfEngine;
use crate::services::ServiceResult;
use crate::services::report::{Clock, RenderedReport, Renderer};

/// One user request from the interactive menu.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    Zip(String),
    Coordinates {
        latitude: f64,
        longitude: f64,
        radius_km: u32,
    },
    Store(String),
}

impl SearchRequest {
    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        Self::Coordinates {
            latitude,
            longitude,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

/// Runs one search and renders every report format for the result.
///
/// The reader is called exactly once; rendering only starts after the API
/// call succeeded.
pub fn run_search<R, E, C>(
    request: &SearchRequest,
    reader: &R,
    renderer: &Renderer<E, C>,
) -> ServiceResult<RenderedReport>
where
    R: ClearanceReader,
    E: PdfEngine,
    C: Clock,
{
    log::debug!("Running search {request:?}");
    let batch = match request {
        SearchRequest::Zip(zip) => reader.search_by_zip(zip)?,
        SearchRequest::Coordinates {
            latitude,
            longitude,
            radius_km,
        } => reader.search_by_coordinates(*latitude, *longitude, *radius_km)?,
        SearchRequest::Store(store_id) => reader.get_store_clearances(store_id)?,
    };
    renderer.render(batch)
}
