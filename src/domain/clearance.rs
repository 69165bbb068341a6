use serde::Serialize;

use crate::domain::types::{
    City, CurrencyCode, DiscountAmount, Ean, OfferTimestamp, PercentDiscount, PostalCode, Price,
    ProductDescription, StockQuantity, StockUnit, Street, StoreName,
};

/// Price and stock details of a discounted product.
#[derive(Debug, Clone)]
pub struct Offer {
    pub currency: CurrencyCode,
    pub discount: Option<DiscountAmount>,
    pub ean: Option<Ean>,
    pub start_time: Option<OfferTimestamp>,
    /// End of the validity window, still in the API's UTC notation.
    pub end_time: OfferTimestamp,
    pub last_update: Option<OfferTimestamp>,
    pub new_price: Price,
    pub original_price: Price,
    pub percent_discount: PercentDiscount,
    pub stock: StockQuantity,
    pub stock_unit: StockUnit,
}

#[derive(Debug, Clone)]
pub struct Product {
    pub description: ProductDescription,
    pub ean: Option<Ean>,
    /// Image URL exactly as delivered; empty strings are stored as `None`.
    pub image: Option<String>,
}

/// A discounted offer tied to one product at one store.
#[derive(Debug, Clone)]
pub struct Clearance {
    pub offer: Offer,
    pub product: Product,
}

#[derive(Debug, Clone, Serialize)]
pub struct Address {
    pub street: Street,
    pub zip: PostalCode,
    pub city: City,
}

impl Address {
    /// `"<street>, <zip> <city>"`, the form used in every report.
    pub fn one_line(&self) -> String {
        format!("{}, {} {}", self.street, self.zip, self.city)
    }
}

/// A store and its clearances in the order the API returned them.
#[derive(Debug, Clone)]
pub struct Store {
    pub id: Option<String>,
    pub brand: Option<String>,
    pub name: StoreName,
    pub address: Address,
    pub clearances: Vec<Clearance>,
}
