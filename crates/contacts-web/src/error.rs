use contacts_api::service;
use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the contacts service layer
    #[error("Service error: {0}")]
    Service(#[from] service::Error),

    /// the request body could not be read as a contact payload
    #[error("{0}")]
    MalformedBody(String),
}
