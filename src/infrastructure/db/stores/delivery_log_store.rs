use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::DeliveryLogRow;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryLogRepositoryError {
    NotFound,
    Conflict,
    InvalidInput,
    StorageUnavailable,
}

impl From<DatabaseError> for DeliveryLogRepositoryError {
    fn from(_: DatabaseError) -> Self {
        DeliveryLogRepositoryError::StorageUnavailable
    }
}

#[async_trait]
pub trait DeliveryLogStore: Send + Sync {
    /// Append one delivery record and return exactly what was stored.
    /// The log is append-only; there is no update or delete.
    async fn insert(&self, row: &DeliveryLogRow)
        -> Result<DeliveryLogRow, DeliveryLogRepositoryError>;
    /// List records newest first, optionally filtered by webhook.
    async fn list(
        &self,
        webhook_id: Option<uuid::Uuid>,
        limit: u32,
    ) -> Result<Vec<DeliveryLogRow>, DeliveryLogRepositoryError>;
}
