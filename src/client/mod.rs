//! Blocking client for the Salling Group food-waste API.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};

use crate::models::config::ApiConfig;
use crate::services::{ServiceError, ServiceResult};

pub mod payload;

pub use payload::ClearanceBatch;

pub const DEFAULT_BASE_URL: &str = "https://api.sallinggroup.com/v1/food-waste";
pub const DEFAULT_RADIUS_KM: u32 = 5;

/// Read-only access to clearance searches.
pub trait ClearanceReader {
    fn search_by_zip(&self, zip: &str) -> ServiceResult<ClearanceBatch>;
    fn search_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: u32,
    ) -> ServiceResult<ClearanceBatch>;
    /// Returns the single-store shape of [`ClearanceBatch`].
    fn get_store_clearances(&self, store_id: &str) -> ServiceResult<ClearanceBatch>;
}

#[derive(Debug, Clone)]
pub struct FoodWasteClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl FoodWasteClient {
    pub fn new(config: &ApiConfig, token: impl Into<String>) -> ServiceResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    fn zip_request(&self, zip: &str) -> RequestBuilder {
        self.http
            .get(self.base_url.clone())
            .bearer_auth(&self.token)
            .query(&[("zip", zip)])
    }

    fn coordinates_request(&self, latitude: f64, longitude: f64, radius_km: u32) -> RequestBuilder {
        self.http
            .get(self.base_url.clone())
            .bearer_auth(&self.token)
            .query(&[
                ("geo", format!("{latitude},{longitude}")),
                ("radius", radius_km.to_string()),
            ])
    }

    /// The store id is percent-encoded as a single path segment.
    fn store_request(&self, store_id: &str) -> RequestBuilder {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(store_id.trim());
        }
        self.http.get(url).bearer_auth(&self.token)
    }

    fn execute(&self, request: RequestBuilder) -> ServiceResult<ClearanceBatch> {
        let response = request.send()?;
        let status = response.status();
        log::debug!("GET {} -> {status}", response.url());
        let body = response.text()?;

        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let batch: ClearanceBatch =
            serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))?;
        log::info!("Received clearances for {} store(s)", batch.store_count());
        Ok(batch)
    }
}

fn parse_base_url(raw: &str) -> ServiceResult<Url> {
    let invalid = |reason: String| ServiceError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_string()));
    }
    Ok(url)
}

impl ClearanceReader for FoodWasteClient {
    fn search_by_zip(&self, zip: &str) -> ServiceResult<ClearanceBatch> {
        self.execute(self.zip_request(zip.trim()))
    }

    fn search_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: u32,
    ) -> ServiceResult<ClearanceBatch> {
        self.execute(self.coordinates_request(latitude, longitude, radius_km))
    }

    fn get_store_clearances(&self, store_id: &str) -> ServiceResult<ClearanceBatch> {
        self.execute(self.store_request(store_id))
    }
}
