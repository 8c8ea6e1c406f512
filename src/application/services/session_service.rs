use crate::application::errors::StorageError;
use crate::domain::entities::{GroupContext, GroupInfo};
use crate::domain::traits::SessionStore;

/// Key holding the active group as JSON
pub const GROUP_KEY: &str = "group";
/// Key holding the display locale
pub const LOCALE_KEY: &str = "locale";

/// Typed access to the session store
pub struct SessionService<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn load_group(&self) -> Result<Option<GroupInfo>, StorageError> {
        let Some(raw) = self.store.get(GROUP_KEY).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Serialization(format!("Invalid stored group: {}", e)))
    }

    pub async fn save_group(&self, group: &GroupInfo) -> Result<(), StorageError> {
        let raw = serde_json::to_string(group)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(GROUP_KEY, &raw).await?;
        tracing::info!("Active group set to {}", group.group_id);
        Ok(())
    }

    /// The active group's context, or `NotFound` when none was saved
    pub async fn group_context(&self) -> Result<GroupContext, StorageError> {
        self.load_group()
            .await?
            .map(|g| g.context())
            .ok_or_else(|| StorageError::NotFound(GROUP_KEY.to_string()))
    }

    pub async fn clear_group(&self) -> Result<(), StorageError> {
        self.store.delete(GROUP_KEY).await
    }

    pub async fn load_locale(&self) -> Result<Option<String>, StorageError> {
        self.store.get(LOCALE_KEY).await
    }

    pub async fn save_locale(&self, locale: &str) -> Result<(), StorageError> {
        self.store.set(LOCALE_KEY, locale).await
    }
}
