use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::WebhookRow;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookRepositoryError {
    NotFound,
    Conflict,
    InvalidInput,
    StorageUnavailable,
}

impl From<DatabaseError> for WebhookRepositoryError {
    fn from(_: DatabaseError) -> Self {
        WebhookRepositoryError::StorageUnavailable
    }
}

#[async_trait]
pub trait WebhookStore: Send + Sync {
    /// Fetch a webhook by its ID. Returns `None` if it doesn't exist.
    async fn get(
        &self,
        webhook_id: uuid::Uuid,
    ) -> Result<Option<WebhookRow>, WebhookRepositoryError>;
    /// List every configured webhook, newest first.
    async fn list(&self) -> Result<Vec<WebhookRow>, WebhookRepositoryError>;
    /// List active webhooks subscribed to the given event name.
    async fn list_active_by_event(
        &self,
        event: &str,
    ) -> Result<Vec<WebhookRow>, WebhookRepositoryError>;
    /// Insert or replace a webhook keyed by ID and return what was stored.
    /// An update keeps the original `created_at`.
    async fn upsert(&self, row: &WebhookRow) -> Result<WebhookRow, WebhookRepositoryError>;
    /// Delete a webhook by its ID. Returns an error if it doesn't exist.
    /// Delivery log rows referencing the webhook are untouched.
    async fn delete(&self, webhook_id: uuid::Uuid) -> Result<(), WebhookRepositoryError>;
}
