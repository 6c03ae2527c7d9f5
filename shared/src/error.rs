use thiserror::Error;

/// Failure retrieving data from one of the site's API endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("fetch error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(String),
}
