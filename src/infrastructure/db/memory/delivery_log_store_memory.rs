use crate::infrastructure::db::dto::DeliveryLogRow;
use crate::infrastructure::db::stores::delivery_log_store::{
    DeliveryLogRepositoryError, DeliveryLogStore,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mutex-backed append-only delivery log for tests and single-process use.
#[derive(Default)]
pub struct InMemoryDeliveryLogStore {
    rows: Mutex<Vec<DeliveryLogRow>>,
}

impl InMemoryDeliveryLogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeliveryLogStore for InMemoryDeliveryLogStore {
    async fn insert(
        &self,
        row: &DeliveryLogRow,
    ) -> Result<DeliveryLogRow, DeliveryLogRepositoryError> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| DeliveryLogRepositoryError::StorageUnavailable)?;
        if rows.iter().any(|r| r.id == row.id) {
            return Err(DeliveryLogRepositoryError::Conflict);
        }
        rows.push(row.clone());
        Ok(row.clone())
    }

    async fn list(
        &self,
        webhook_id: Option<uuid::Uuid>,
        limit: u32,
    ) -> Result<Vec<DeliveryLogRow>, DeliveryLogRepositoryError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| DeliveryLogRepositoryError::StorageUnavailable)?;
        let mut listed: Vec<DeliveryLogRow> = rows
            .iter()
            .filter(|r| webhook_id.map(|id| r.webhook_id == id).unwrap_or(true))
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        listed.truncate(limit as usize);
        Ok(listed)
    }
}
