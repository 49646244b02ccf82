use crate::infrastructure::db::dto::WebhookRow;
use crate::infrastructure::db::stores::webhook_store::{WebhookRepositoryError, WebhookStore};
use std::sync::Arc;

pub struct WebhookRepository {
    store: Arc<dyn WebhookStore>,
}

impl WebhookRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn WebhookStore>) -> Self {
        Self { store }
    }

    /// Fetch a webhook by its ID. Returns `None` if it doesn't exist.
    pub async fn get(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<Option<WebhookRow>, WebhookRepositoryError> {
        self.store.get(webhook_id).await
    }

    /// List every configured webhook, newest first.
    pub async fn list(&self) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        self.store.list().await
    }

    /// Active endpoints subscribed to the given event, the fan-out set.
    pub async fn find_active_subscribers(
        &self,
        event: &str,
    ) -> Result<Vec<WebhookRow>, WebhookRepositoryError> {
        self.store.list_active_by_event(event).await
    }

    /// Insert or replace a webhook keyed by ID; returns what was stored.
    pub async fn upsert(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError> {
        self.store.upsert(row).await
    }

    /// Delete a webhook by its ID. Returns an error if it doesn't exist.
    pub async fn delete(&self, webhook_id: uuid::Uuid) -> Result<(), WebhookRepositoryError> {
        self.store.delete(webhook_id).await
    }
}
