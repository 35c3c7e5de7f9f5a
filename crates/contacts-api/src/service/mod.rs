pub mod contact_service;

use super::Config;
use crate::persistence::DbContext;
use contact_service::{ContactService, ContactServiceApi};
use contacts_core::validation::ValidationErrors;
use std::sync::Arc;
use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the persistence layer
    #[error("Persistence error: {0}")]
    Persistence(#[from] contacts_persistence::Error),

    /// errors that currently return early http status code Status::NotFound
    #[error("not found")]
    NotFound,

    /// the given identifier is not a valid contact id
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// errors that stem from validating the fields of a request
    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationErrors),

    /// the resulting document violates the storage schema
    #[error("{0}")]
    Constraint(String),
}

impl From<contacts_core::Error> for Error {
    fn from(value: contacts_core::Error) -> Self {
        match value {
            contacts_core::Error::InvalidId(id) => Error::InvalidId(id),
            contacts_core::Error::Schema(msg) => Error::Constraint(msg),
        }
    }
}

/// A dependency container for all services that are used by the application
#[derive(Clone)]
pub struct ServiceContext {
    pub config: Config,
    pub contact_service: Arc<dyn ContactServiceApi>,
}

pub fn create_service_context(config: Config, db: DbContext) -> ServiceContext {
    let contact_service = Arc::new(ContactService::new(db.contact_store));
    ServiceContext {
        config,
        contact_service,
    }
}
