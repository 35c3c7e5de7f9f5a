pub mod constants;
pub mod contact;
pub mod util;
pub mod validation;

use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or addressing contact documents
#[derive(Debug, Error)]
pub enum Error {
    /// the given identifier is not a valid contact id
    #[error("invalid contact id: {0}")]
    InvalidId(String),

    /// the document does not satisfy the storage schema
    #[error("{0}")]
    Schema(String),
}
