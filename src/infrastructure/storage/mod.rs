//! In-memory session storage

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::errors::StorageError;
use crate::domain::traits::SessionStore;

/// Map-backed store, lives as long as the process
#[derive(Clone, Default)]
pub struct MemoryStore {
    kv: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let kv = self.kv.read().await;
        Ok(kv.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut kv = self.kv.write().await;
        kv.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut kv = self.kv.write().await;
        kv.remove(key);
        Ok(())
    }
}
