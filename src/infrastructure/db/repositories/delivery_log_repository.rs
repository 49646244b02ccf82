use crate::infrastructure::db::dto::DeliveryLogRow;
use crate::infrastructure::db::stores::delivery_log_store::{
    DeliveryLogRepositoryError, DeliveryLogStore,
};
use std::sync::Arc;

pub struct DeliveryLogRepository {
    store: Arc<dyn DeliveryLogStore>,
}

impl DeliveryLogRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn DeliveryLogStore>) -> Self {
        Self { store }
    }

    /// Append one delivery record and return what was stored.
    pub async fn insert(
        &self,
        row: &DeliveryLogRow,
    ) -> Result<DeliveryLogRow, DeliveryLogRepositoryError> {
        self.store.insert(row).await
    }

    /// List records newest first, optionally filtered by webhook.
    pub async fn list(
        &self,
        webhook_id: Option<uuid::Uuid>,
        limit: u32,
    ) -> Result<Vec<DeliveryLogRow>, DeliveryLogRepositoryError> {
        self.store.list(webhook_id, limit).await
    }
}
