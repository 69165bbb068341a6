pub use errors::{ServiceError, ServiceResult};

pub mod errors;
pub mod formatting;
pub mod images;
pub mod ranking;
pub mod report;
pub mod search;
