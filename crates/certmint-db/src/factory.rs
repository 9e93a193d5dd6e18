use std::sync::Arc;

use anyhow::{anyhow, Result};
use sqlx::PgPool;

use certmint_core::{CollectionStoreBackend, Config};

use crate::memory::InMemoryCollectionStore;
use crate::postgres::PgCollectionRepository;
use crate::store::CollectionStore;

/// Create the collection store selected by `COLLECTION_STORE`.
///
/// The Postgres backend needs the pool created at startup.
pub fn create_collection_store(
    config: &Config,
    pool: Option<PgPool>,
) -> Result<Arc<dyn CollectionStore>> {
    match config.collection_store() {
        CollectionStoreBackend::Postgres => {
            let pool = pool.ok_or_else(|| {
                anyhow!("Postgres collection store selected but no database pool was created")
            })?;
            Ok(Arc::new(PgCollectionRepository::new(pool)))
        }
        CollectionStoreBackend::Memory => {
            tracing::warn!("Using in-memory collection store; collections are lost on restart");
            Ok(Arc::new(InMemoryCollectionStore::new()))
        }
    }
}
