use crate::Config;
use contacts_persistence::{ContactStoreApi, SurrealContactStore, SurrealDbConfig, get_surreal_db};
use std::sync::Arc;

/// A container for all persistence related dependencies.
#[derive(Clone)]
pub struct DbContext {
    pub contact_store: Arc<dyn ContactStoreApi>,
}

/// Creates a new instance of the DbContext with the given SurrealDB configuration.
pub async fn get_db_context(conf: &Config) -> contacts_persistence::Result<DbContext> {
    let surreal_db_config = SurrealDbConfig::new(
        &conf.surreal_db_connection,
        &conf.surreal_db_namespace,
        &conf.surreal_db_database,
    );
    let db = get_surreal_db(&surreal_db_config).await?;

    let contact_store = Arc::new(SurrealContactStore::new(db));

    Ok(DbContext { contact_store })
}
