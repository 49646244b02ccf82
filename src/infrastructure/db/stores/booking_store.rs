use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::BookingDetailsRow;
use async_trait::async_trait;
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRepositoryError {
    NotFound,
    InvalidInput,
    StorageUnavailable,
}

impl From<DatabaseError> for BookingRepositoryError {
    fn from(_: DatabaseError) -> Self {
        BookingRepositoryError::StorageUnavailable
    }
}

/// Read-only access to booking data. The pipeline never writes bookings;
/// it only resolves the joined details a payload needs.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Fetch a booking joined with its client and clinic. Returns `None`
    /// when the booking or a required relation is missing.
    async fn get_details(
        &self,
        booking_id: uuid::Uuid,
    ) -> Result<Option<BookingDetailsRow>, BookingRepositoryError>;

    /// IDs of deposit-paid bookings whose clinic date falls inside the
    /// inclusive window, used by the balance reminder sweep.
    async fn list_balance_due_ids(
        &self,
        from: Date,
        until: Date,
    ) -> Result<Vec<uuid::Uuid>, BookingRepositoryError>;
}
