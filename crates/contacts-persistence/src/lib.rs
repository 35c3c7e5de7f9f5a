pub mod constants;
pub mod contact;
pub mod db;
#[cfg(test)]
mod tests;

use thiserror::Error;

/// Generic persistence result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic persistence error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("SurrealDB connection error {0}")]
    SurrealConnection(#[from] surrealdb::Error),

    #[error("Failed to insert into database: {0}")]
    InsertFailed(String),

    #[error("stored document is invalid: {0}")]
    Core(#[from] contacts_core::Error),
}

pub use contact::ContactStoreApi;
pub use db::{SurrealDbConfig, contact::SurrealContactStore, get_surreal_db};
