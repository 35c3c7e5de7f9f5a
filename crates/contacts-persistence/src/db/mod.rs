use super::Result;
use log::info;
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
};

pub mod contact;

#[derive(Debug, Clone)]
pub struct SurrealDbConfig {
    pub connection_string: String,
    pub namespace: String,
    pub database: String,
}

impl SurrealDbConfig {
    pub fn new(connection_string: &str, namespace: &str, database: &str) -> Self {
        Self {
            connection_string: connection_string.to_owned(),
            namespace: namespace.to_owned(),
            database: database.to_owned(),
        }
    }
}

/// Connects to the database, failing if it's not reachable
pub async fn get_surreal_db(config: &SurrealDbConfig) -> Result<Surreal<Any>> {
    info!(
        "Connecting to SurrealDB at {} (ns: {}, db: {})",
        config.connection_string, config.namespace, config.database
    );
    let db = connect(config.connection_string.as_str()).await?;
    db.use_ns(config.namespace.as_str())
        .use_db(config.database.as_str())
        .await?;
    Ok(db)
}
