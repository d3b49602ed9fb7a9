//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Request could not be sent or the response never arrived.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Category service answered with a non-2xx status. `body` is the raw response text.
    #[error("HTTP {status} from {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("UI error: {0}")]
    Ui(String),
}

impl DomainError {
    /// HTTP status of a rejected request, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            DomainError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
