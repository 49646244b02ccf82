use crate::infrastructure::db::dto::BookingDetailsRow;
use crate::infrastructure::db::stores::booking_store::{BookingRepositoryError, BookingStore};
use async_trait::async_trait;
use std::sync::Mutex;
use time::Date;

#[derive(Debug, Clone)]
struct BookingRecord {
    details: BookingDetailsRow,
    payment_status: String,
}

/// Mutex-backed booking projection for tests and single-process use.
/// Seeded through [`InMemoryBookingStore::put`]; the pipeline itself only
/// reads.
#[derive(Default)]
pub struct InMemoryBookingStore {
    rows: Mutex<Vec<BookingRecord>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace a booking projection.
    pub fn put(&self, details: BookingDetailsRow, payment_status: &str) {
        let mut rows = match self.rows.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rows.retain(|r| r.details.booking_id != details.booking_id);
        rows.push(BookingRecord {
            details,
            payment_status: payment_status.to_string(),
        });
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn get_details(
        &self,
        booking_id: uuid::Uuid,
    ) -> Result<Option<BookingDetailsRow>, BookingRepositoryError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| BookingRepositoryError::StorageUnavailable)?;
        Ok(rows
            .iter()
            .find(|r| r.details.booking_id == booking_id)
            .map(|r| r.details.clone()))
    }

    async fn list_balance_due_ids(
        &self,
        from: Date,
        until: Date,
    ) -> Result<Vec<uuid::Uuid>, BookingRepositoryError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| BookingRepositoryError::StorageUnavailable)?;
        Ok(rows
            .iter()
            .filter(|r| {
                r.payment_status == "deposit_paid"
                    && r.details.clinic_date >= from
                    && r.details.clinic_date <= until
            })
            .map(|r| r.details.booking_id)
            .collect())
    }
}
