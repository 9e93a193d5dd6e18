use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres};

use certmint_core::models::Collection;

use crate::store::CollectionStore;

/// Collections in the `collections` table. Asset ids are stored as a JSON array
/// in a TEXT column.
#[derive(Clone)]
pub struct PgCollectionRepository {
    pool: PgPool,
}

impl PgCollectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionStore for PgCollectionRepository {
    #[tracing::instrument(skip(self, collection), fields(db.table = "collections", db.operation = "insert", db.record_id = %collection.share_token))]
    async fn insert_if_absent(&self, collection: &Collection) -> Result<bool> {
        let asset_ids = serde_json::to_string(&collection.asset_ids)
            .context("Failed to serialize asset ids")?;

        let result = sqlx::query(
            "INSERT INTO collections (id, asset_ids, created_at) VALUES ($1, $2, $3) ON CONFLICT (id) DO NOTHING",
        )
        .bind(&collection.share_token)
        .bind(asset_ids)
        .bind(collection.created_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert collection")?;

        Ok(result.rows_affected() == 1)
    }

    #[tracing::instrument(skip(self), fields(db.table = "collections", db.operation = "select", db.record_id = %share_token))]
    async fn get(&self, share_token: &str) -> Result<Option<Collection>> {
        let row = sqlx::query_as::<Postgres, (String, String, DateTime<Utc>)>(
            "SELECT id, asset_ids, created_at FROM collections WHERE id = $1",
        )
        .bind(share_token)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch collection")?;

        row.map(|(id, asset_ids, created_at)| {
            let asset_ids: Vec<String> = serde_json::from_str(&asset_ids)
                .with_context(|| format!("Stored asset ids for collection {} are not a JSON array", id))?;
            Ok(Collection {
                share_token: id,
                asset_ids,
                created_at,
            })
        })
        .transpose()
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database ping failed")?;
        Ok(())
    }
}
