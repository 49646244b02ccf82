use crate::infrastructure::db::dto::WebhookRow;
use crate::infrastructure::db::stores::webhook_store::{WebhookRepositoryError, WebhookStore};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mutex-backed webhook store for tests and single-process deployments.
#[derive(Default)]
pub struct InMemoryWebhookStore {
    rows: Mutex<Vec<WebhookRow>>,
}

impl InMemoryWebhookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WebhookStore for InMemoryWebhookStore {
    async fn get(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<Option<WebhookRow>, WebhookRepositoryError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;
        Ok(rows.iter().find(|r| r.id == webhook_id).cloned())
    }

    async fn list(&self) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;
        let mut listed = rows.clone();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn list_active_by_event(
        &self,
        event: &str,
    ) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;
        Ok(rows
            .iter()
            .filter(|r| r.subscribes_to(event))
            .cloned()
            .collect())
    }

    async fn upsert(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;
        if let Some(existing) = rows.iter_mut().find(|r| r.id == row.id) {
            let mut updated = row.clone();
            updated.created_at = existing.created_at;
            *existing = updated.clone();
            return Ok(updated);
        }
        rows.push(row.clone());
        Ok(row.clone())
    }

    async fn delete(&self, webhook_id: uuid::Uuid) -> Result<(), WebhookRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| WebhookRepositoryError::StorageUnavailable)?;
        let before = rows.len();
        rows.retain(|r| r.id != webhook_id);
        if rows.len() == before {
            return Err(WebhookRepositoryError::NotFound);
        }
        Ok(())
    }
}
