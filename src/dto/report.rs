use serde::Serialize;

use crate::domain::clearance::{Clearance, Store};
use crate::services::formatting::{
    TimestampParseError, format_discount, format_percent, format_price, format_stock_in,
    format_timestamp,
};
use crate::services::images::normalize_image_url;
use crate::services::ranking::rank_clearances;

/// Title shared by the HTML and Markdown reports.
pub const REPORT_TITLE: &str = "Tilbud med kort holdbarhed";

/// One clearance with every field already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClearanceDto {
    pub description: String,
    /// Optimized image URL used by the HTML report.
    pub image_url: Option<String>,
    /// Image URL as delivered by the API, linked from Markdown.
    pub source_image_url: Option<String>,
    pub original_price: String,
    pub new_price: String,
    /// Badge text such as `-25.0%`.
    pub discount: String,
    /// Plain percentage such as `25.0%`.
    pub percent: String,
    pub stock: String,
    pub valid_until: String,
}

impl TryFrom<Clearance> for ClearanceDto {
    type Error = TimestampParseError;

    fn try_from(value: Clearance) -> Result<Self, Self::Error> {
        let offer = value.offer;
        let currency = offer.currency.as_str();
        let original_price = format_price(offer.original_price.get(), currency);
        let new_price = format_price(offer.new_price.get(), currency);
        let image_url = value
            .product
            .image
            .as_deref()
            .map(normalize_image_url)
            .filter(|url| !url.is_empty());

        Ok(Self {
            description: value.product.description.into_inner(),
            image_url,
            source_image_url: value.product.image,
            original_price,
            new_price,
            discount: format_discount(offer.percent_discount.get()),
            percent: format_percent(offer.percent_discount.get()),
            stock: format_stock_in(offer.stock.get(), &offer.stock_unit),
            valid_until: format_timestamp(offer.end_time.as_str())?,
        })
    }
}

/// A store with its clearances ranked for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreDto {
    pub name: String,
    pub address: String,
    pub clearances: Vec<ClearanceDto>,
}

impl TryFrom<Store> for StoreDto {
    type Error = TimestampParseError;

    fn try_from(value: Store) -> Result<Self, Self::Error> {
        let mut clearances = value.clearances;
        rank_clearances(&mut clearances);

        Ok(Self {
            name: value.name.into_inner(),
            address: value.address.one_line(),
            clearances: clearances
                .into_iter()
                .map(ClearanceDto::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Everything a report renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDto {
    pub title: &'static str,
    /// Local time the report was generated, already formatted.
    pub updated_at: String,
    pub stores: Vec<StoreDto>,
}

impl ReportDto {
    pub fn new(updated_at: String, stores: Vec<StoreDto>) -> Self {
        Self {
            title: REPORT_TITLE,
            updated_at,
            stores,
        }
    }

    pub fn clearance_count(&self) -> usize {
        self.stores.iter().map(|s| s.clearances.len()).sum()
    }
}
