use std::collections::hash_map::Entry;
use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use certmint_core::models::Collection;

use crate::store::CollectionStore;

/// Process-local collection store; contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryCollectionStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl InMemoryCollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.collections.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.collections.read().await.is_empty()
    }
}

#[async_trait]
impl CollectionStore for InMemoryCollectionStore {
    async fn insert_if_absent(&self, collection: &Collection) -> Result<bool> {
        let mut collections = self.collections.write().await;
        match collections.entry(collection.share_token.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(collection.clone());
                Ok(true)
            }
        }
    }

    async fn get(&self, share_token: &str) -> Result<Option<Collection>> {
        Ok(self.collections.read().await.get(share_token).cloned())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
