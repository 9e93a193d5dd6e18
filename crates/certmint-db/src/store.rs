use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;

use certmint_core::models::Collection;

use crate::token::generate_share_token;

/// Attempts at finding an unused share token before giving up
pub const MAX_TOKEN_ATTEMPTS: usize = 5;

/// Collection persistence
///
/// Collections are written once and never updated or deleted. Backends only
/// need an atomic insert-if-absent keyed on the share token.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Store `collection` unless its share token is taken. Returns whether it
    /// was stored.
    async fn insert_if_absent(&self, collection: &Collection) -> Result<bool>;

    /// Look up a collection by share token.
    async fn get(&self, share_token: &str) -> Result<Option<Collection>>;

    /// Backend name for logs and health output.
    fn backend_name(&self) -> &'static str;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    /// Store `asset_ids` under a freshly generated share token.
    async fn create(&self, asset_ids: &[String]) -> Result<Collection> {
        for attempt in 1..=MAX_TOKEN_ATTEMPTS {
            let collection = Collection {
                share_token: generate_share_token(),
                asset_ids: asset_ids.to_vec(),
                created_at: Utc::now(),
            };

            if self.insert_if_absent(&collection).await? {
                tracing::info!(
                    share_token = %collection.share_token,
                    asset_count = asset_ids.len(),
                    backend = self.backend_name(),
                    "Collection saved"
                );
                return Ok(collection);
            }

            tracing::warn!(attempt, "Share token already taken, generating another");
        }

        Err(anyhow!(
            "Could not allocate a unique share token after {} attempts",
            MAX_TOKEN_ATTEMPTS
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Rejects the first `collisions` inserts.
    struct CollidingStore {
        collisions: usize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CollectionStore for CollidingStore {
        async fn insert_if_absent(&self, _collection: &Collection) -> Result<bool> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(call >= self.collisions)
        }

        async fn get(&self, _share_token: &str) -> Result<Option<Collection>> {
            Ok(None)
        }

        fn backend_name(&self) -> &'static str {
            "colliding"
        }
    }

    #[tokio::test]
    async fn retries_after_token_collision() {
        let store = CollidingStore {
            collisions: 2,
            calls: AtomicUsize::new(0),
        };
        let collection = store.create(&["id1".to_string()]).await.unwrap();
        assert_eq!(collection.asset_ids, vec!["id1"]);
        assert_eq!(store.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_bounded_attempts() {
        let store = CollidingStore {
            collisions: usize::MAX,
            calls: AtomicUsize::new(0),
        };
        assert!(store.create(&["id1".to_string()]).await.is_err());
        assert_eq!(store.calls.load(Ordering::SeqCst), MAX_TOKEN_ATTEMPTS);
    }
}
