//! Error conversion glue between the ingestion, formatting, PDF and service
//! layers.
//!
//! Lower layers define their own error types and stay unaware of
//! [`ServiceError`].

use crate::client::payload::ClearanceFormError;
use crate::domain::types::TypeConstraintError;
use crate::pdf::PdfError;
use crate::services::ServiceError;
use crate::services::formatting::TimestampParseError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<ClearanceFormError> for ServiceError {
    fn from(val: ClearanceFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<TimestampParseError> for ServiceError {
    fn from(val: TimestampParseError) -> Self {
        ServiceError::Parse(val.to_string())
    }
}

impl From<PdfError> for ServiceError {
    fn from(val: PdfError) -> Self {
        ServiceError::Render(val.to_string())
    }
}
