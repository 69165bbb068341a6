//! Raw JSON records returned by the food-waste API.
//!
//! Every field is optional at the serde level so that a missing value surfaces
//! as a [`ClearanceFormError`] naming the field, instead of an opaque decode
//! failure. Conversion into [`crate::domain`] types happens through `TryFrom`.

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::clearance::{Address, Clearance, Offer, Product, Store};
use crate::domain::types::{
    City, CurrencyCode, DiscountAmount, Ean, OfferTimestamp, PercentDiscount, PostalCode, Price,
    ProductDescription, StockQuantity, StockUnit, Street, StoreName, TypeConstraintError,
};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OfferPayload {
    #[validate(required)]
    pub currency: Option<String>,
    pub discount: Option<f64>,
    pub ean: Option<String>,
    #[validate(required)]
    pub end_time: Option<String>,
    pub last_update: Option<String>,
    #[validate(required)]
    pub new_price: Option<f64>,
    #[validate(required)]
    pub original_price: Option<f64>,
    #[validate(required)]
    pub percent_discount: Option<f64>,
    pub start_time: Option<String>,
    #[validate(required)]
    pub stock: Option<f64>,
    #[validate(required)]
    pub stock_unit: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductPayload {
    #[validate(required)]
    pub description: Option<String>,
    pub ean: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClearancePayload {
    pub offer: Option<OfferPayload>,
    pub product: Option<ProductPayload>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddressPayload {
    #[validate(required)]
    pub street: Option<String>,
    #[validate(required)]
    pub zip: Option<String>,
    #[validate(required)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StoreInfoPayload {
    pub id: Option<String>,
    pub brand: Option<String>,
    #[validate(required)]
    pub name: Option<String>,
    pub address: Option<AddressPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorePayload {
    pub store: Option<StoreInfoPayload>,
    pub clearances: Option<Vec<ClearancePayload>>,
}

/// Response body of a search: a list of stores, or a single store when
/// querying by store identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ClearanceBatch {
    Many(Vec<StorePayload>),
    One(StorePayload),
}

impl ClearanceBatch {
    /// Number of stores in the batch regardless of its shape.
    pub fn store_count(&self) -> usize {
        match self {
            Self::Many(stores) => stores.len(),
            Self::One(_) => 1,
        }
    }

    /// Validates every record and returns the stores in response order.
    ///
    /// The first malformed record aborts the conversion; nothing is skipped.
    pub fn into_stores(self) -> Result<Vec<Store>, ClearanceFormError> {
        let payloads = match self {
            Self::Many(stores) => stores,
            Self::One(store) => vec![store],
        };

        payloads
            .into_iter()
            .enumerate()
            .map(|(idx, payload)| {
                Store::try_from(payload).map_err(|e| e.in_context(&format!("store #{}", idx + 1)))
            })
            .collect()
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClearanceFormError {
    #[error("Clearance payload validation failed: {0}")]
    Validation(String),
    #[error("Clearance payload contains invalid data: {0}")]
    TypeConstraint(String),
}

impl ClearanceFormError {
    fn in_context(self, context: &str) -> Self {
        match self {
            Self::Validation(msg) => Self::Validation(format!("{context}: {msg}")),
            Self::TypeConstraint(msg) => Self::TypeConstraint(format!("{context}: {msg}")),
        }
    }
}

impl From<ValidationErrors> for ClearanceFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ClearanceFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, TypeConstraintError> {
    value.ok_or(TypeConstraintError::MissingField(field))
}

/// Blank optional strings are treated as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_timestamp(value: Option<String>) -> Result<Option<OfferTimestamp>, TypeConstraintError> {
    non_blank(value).map(OfferTimestamp::new).transpose()
}

impl TryFrom<OfferPayload> for Offer {
    type Error = ClearanceFormError;

    fn try_from(value: OfferPayload) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            currency: CurrencyCode::new(required(value.currency, "offer.currency")?)?,
            discount: value.discount.map(DiscountAmount::new).transpose()?,
            ean: non_blank(value.ean).map(Ean::new).transpose()?,
            start_time: optional_timestamp(value.start_time)?,
            end_time: OfferTimestamp::new(required(value.end_time, "offer.endTime")?)?,
            last_update: optional_timestamp(value.last_update)?,
            new_price: Price::new(required(value.new_price, "offer.newPrice")?)?,
            original_price: Price::new(required(value.original_price, "offer.originalPrice")?)?,
            percent_discount: PercentDiscount::new(required(
                value.percent_discount,
                "offer.percentDiscount",
            )?)?,
            stock: StockQuantity::new(required(value.stock, "offer.stock")?)?,
            stock_unit: StockUnit::try_from(required(value.stock_unit, "offer.stockUnit")?)?,
        })
    }
}

impl TryFrom<ProductPayload> for Product {
    type Error = ClearanceFormError;

    fn try_from(value: ProductPayload) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            description: ProductDescription::new(required(
                value.description,
                "product.description",
            )?)?,
            ean: non_blank(value.ean).map(Ean::new).transpose()?,
            image: non_blank(value.image),
        })
    }
}

impl TryFrom<ClearancePayload> for Clearance {
    type Error = ClearanceFormError;

    fn try_from(value: ClearancePayload) -> Result<Self, Self::Error> {
        Ok(Self {
            offer: Offer::try_from(required(value.offer, "offer")?)?,
            product: Product::try_from(required(value.product, "product")?)?,
        })
    }
}

impl TryFrom<AddressPayload> for Address {
    type Error = ClearanceFormError;

    fn try_from(value: AddressPayload) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            street: Street::new(required(value.street, "address.street")?)?,
            zip: PostalCode::new(required(value.zip, "address.zip")?)?,
            city: City::new(required(value.city, "address.city")?)?,
        })
    }
}

impl TryFrom<StorePayload> for Store {
    type Error = ClearanceFormError;

    fn try_from(value: StorePayload) -> Result<Self, Self::Error> {
        let info = required(value.store, "store")?;
        info.validate()?;
        let clearances = required(value.clearances, "clearances")?
            .into_iter()
            .enumerate()
            .map(|(idx, payload)| {
                Clearance::try_from(payload)
                    .map_err(|e| e.in_context(&format!("clearance #{}", idx + 1)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: non_blank(info.id),
            brand: non_blank(info.brand),
            name: StoreName::new(required(info.name, "store.name")?)?,
            address: Address::try_from(required(info.address, "store.address")?)?,
            clearances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_json(description: Option<&str>) -> serde_json::Value {
        let mut product = json!({ "ean": "5700000000001", "image": "" });
        if let Some(description) = description {
            product["description"] = json!(description);
        }
        json!({
            "store": {
                "id": "efba0457-090e-4132-81ba-c5b1fe2e8a3c",
                "brand": "netto",
                "name": "Netto Vestergade",
                "address": { "street": "Vestergade 1", "zip": "8000", "city": "Aarhus C" }
            },
            "clearances": [{
                "offer": {
                    "currency": "DKK",
                    "discount": 10,
                    "ean": "5700000000001",
                    "endTime": "2024-06-01T20:00:00.000Z",
                    "lastUpdate": "2024-06-01T08:00:00.000Z",
                    "newPrice": 15,
                    "originalPrice": 25,
                    "percentDiscount": 40,
                    "startTime": "2024-06-01T06:00:00.000Z",
                    "stock": 3,
                    "stockUnit": "each"
                },
                "product": product
            }]
        })
    }

    #[test]
    fn single_store_object_is_wrapped() {
        let batch: ClearanceBatch = serde_json::from_value(store_json(Some("Rugbrød"))).unwrap();
        assert_eq!(batch.store_count(), 1);

        let stores = batch.into_stores().unwrap();
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].name, "Netto Vestergade");
        assert_eq!(stores[0].brand.as_deref(), Some("netto"));
        assert_eq!(stores[0].clearances[0].product.description, "Rugbrød");
    }

    #[test]
    fn store_list_keeps_response_order() {
        let mut second = store_json(Some("Mælk"));
        second["store"]["name"] = json!("Føtex Frederiks Allé");
        let batch: ClearanceBatch =
            serde_json::from_value(json!([store_json(Some("Rugbrød")), second])).unwrap();

        let stores = batch.into_stores().unwrap();
        assert_eq!(stores.len(), 2);
        assert_eq!(stores[1].name, "Føtex Frederiks Allé");
    }

    #[test]
    fn empty_image_is_treated_as_missing() {
        let batch: ClearanceBatch = serde_json::from_value(store_json(Some("Rugbrød"))).unwrap();
        let stores = batch.into_stores().unwrap();
        assert!(stores[0].clearances[0].product.image.is_none());
    }

    #[test]
    fn missing_description_is_rejected() {
        let batch: ClearanceBatch = serde_json::from_value(store_json(None)).unwrap();
        let err = batch.into_stores().unwrap_err();

        match err {
            ClearanceFormError::Validation(msg) => {
                assert!(msg.contains("store #1"));
                assert!(msg.contains("clearance #1"));
                assert!(msg.contains("description"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_description_is_rejected() {
        let batch: ClearanceBatch = serde_json::from_value(store_json(Some("  "))).unwrap();
        assert!(matches!(
            batch.into_stores(),
            Err(ClearanceFormError::TypeConstraint(_))
        ));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut value = store_json(Some("Rugbrød"));
        value["clearances"][0]["offer"]["newPrice"] = json!(-1.0);
        let batch: ClearanceBatch = serde_json::from_value(value).unwrap();

        let err = batch.into_stores().unwrap_err();
        assert!(err.to_string().contains("price must be zero or greater"));
    }

    #[test]
    fn missing_offer_is_rejected() {
        let mut value = store_json(Some("Rugbrød"));
        value["clearances"][0]
            .as_object_mut()
            .unwrap()
            .remove("offer");
        let batch: ClearanceBatch = serde_json::from_value(value).unwrap();

        let err = batch.into_stores().unwrap_err();
        assert!(err.to_string().contains("offer is required"));
    }
}
