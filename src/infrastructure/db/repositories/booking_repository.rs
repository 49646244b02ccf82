use crate::infrastructure::db::dto::BookingDetailsRow;
use crate::infrastructure::db::stores::booking_store::{BookingRepositoryError, BookingStore};
use std::sync::Arc;
use time::Date;

pub struct BookingRepository {
    store: Arc<dyn BookingStore>,
}

impl BookingRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    /// Fetch a booking joined with its client and clinic.
    pub async fn get_details(
        &self,
        booking_id: uuid::Uuid,
    ) -> Result<Option<BookingDetailsRow>, BookingRepositoryError> {
        self.store.get_details(booking_id).await
    }

    /// Deposit-paid bookings whose clinic date falls inside the window.
    pub async fn list_balance_due_ids(
        &self,
        from: Date,
        until: Date,
    ) -> Result<Vec<uuid::Uuid>, BookingRepositoryError> {
        self.store.list_balance_due_ids(from, until).await
    }
}
