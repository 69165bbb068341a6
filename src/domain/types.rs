//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that text
//! values, prices and stock quantities are checked once, when an API payload
//! is converted, and can be trusted by the formatting code afterwards.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A numeric value required to be non-negative was negative or not finite.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A required field was absent from the payload.
    #[error("{0} is required")]
    MissingField(&'static str),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

macro_rules! non_negative_f64_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Constructs a finite numeric value that is zero or greater.
            pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
                if value.is_finite() && value >= 0.0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NegativeNumber($field))
                }
            }

            /// Returns the raw `f64` value.
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<f64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<f64> for $name {
            fn eq(&self, other: &f64) -> bool {
                self.0 == *other
            }
        }
    };
}

non_empty_string_newtype!(
    ProductDescription,
    "Product description enforcing non-empty values.",
    "product.description"
);
non_empty_string_newtype!(Ean, "European article number of a product.", "ean");
non_empty_string_newtype!(
    CurrencyCode,
    "ISO currency code attached to an offer.",
    "offer.currency"
);
non_empty_string_newtype!(
    OfferTimestamp,
    "Raw UTC timestamp string as delivered by the API.",
    "offer timestamp"
);
non_empty_string_newtype!(StoreName, "Store display name.", "store.name");
non_empty_string_newtype!(Street, "Street part of a store address.", "address.street");
non_empty_string_newtype!(PostalCode, "Postal code of a store address.", "address.zip");
non_empty_string_newtype!(City, "City of a store address.", "address.city");

non_negative_f64_newtype!(Price, "Non-negative price in currency units.", "price");
non_negative_f64_newtype!(
    DiscountAmount,
    "Absolute discount in currency units.",
    "offer.discount"
);
non_negative_f64_newtype!(
    PercentDiscount,
    "Discount expressed in percent of the original price.",
    "offer.percentDiscount"
);
non_negative_f64_newtype!(
    StockQuantity,
    "Remaining stock, either a count or a weight depending on the unit.",
    "offer.stock"
);

/// Measure in which the remaining stock of an offer is expressed.
///
/// Codes are matched case-insensitively. Codes outside the known set are kept
/// verbatim so they can be displayed as delivered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StockUnit {
    Each,
    Kilogram,
    Gram,
    Other(String),
}

impl StockUnit {
    pub fn parse(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "each" => Self::Each,
            "kg" => Self::Kilogram,
            "g" => Self::Gram,
            _ => Self::Other(code.to_string()),
        }
    }

    /// Localized label shown next to the quantity.
    pub fn label(&self) -> &str {
        match self {
            Self::Each => "stk.",
            Self::Kilogram => "kg",
            Self::Gram => "g",
            Self::Other(code) => code,
        }
    }

    pub fn is_kilograms(&self) -> bool {
        matches!(self, Self::Kilogram)
    }
}

impl Display for StockUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for StockUnit {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = trim_and_require_non_empty(value, "offer.stockUnit")?;
        Ok(Self::parse(&trimmed))
    }
}

impl TryFrom<String> for StockUnit {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
