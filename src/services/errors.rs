use thiserror::Error;

/// Error type shared by the client, ingestion and rendering layers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The API answered with a non-2xx status.
    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },
    /// The configured API base URL is not an absolute URL.
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not a clearance batch.
    #[error("failed to decode API response: {0}")]
    Decode(String),
    /// A record is missing required fields or holds invalid values.
    #[error("invalid clearance data: {0}")]
    Validation(String),
    /// A timestamp did not have the expected shape.
    #[error("invalid timestamp: {0}")]
    Parse(String),
    /// The HTML page template could not be loaded or rendered.
    #[error("template error: {0}")]
    Template(String),
    /// HTML to PDF conversion failed.
    #[error("PDF rendering failed: {0}")]
    Render(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
