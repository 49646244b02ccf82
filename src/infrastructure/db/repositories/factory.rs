use std::sync::Arc;

use crate::infrastructure::db::database::{Database, DatabaseError};
use crate::infrastructure::db::memory::{
    InMemoryBookingStore, InMemoryDeliveryLogStore, InMemoryWebhookStore,
};
use crate::infrastructure::db::postgres::booking_store_postgres::BookingStorePostgres;
use crate::infrastructure::db::postgres::delivery_log_store_postgres::DeliveryLogStorePostgres;
use crate::infrastructure::db::postgres::webhook_store_postgres::WebhookStorePostgres;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::repositories::booking_repository::BookingRepository;
use crate::infrastructure::db::repositories::delivery_log_repository::DeliveryLogRepository;
use crate::infrastructure::db::repositories::webhook_repository::WebhookRepository;
use crate::infrastructure::db::stores::booking_store::BookingStore;
use crate::infrastructure::db::stores::delivery_log_store::DeliveryLogStore;
use crate::infrastructure::db::stores::webhook_store::WebhookStore;

/// The injected persistence surface: opened once, passed to every
/// component. Swappable per backend so tests run against memory stores.
#[derive(Clone)]
pub struct Repositories {
    db: Option<Arc<PostgresDatabase>>,
    pub webhook: Arc<WebhookRepository>,
    pub delivery_log: Arc<DeliveryLogRepository>,
    pub booking: Arc<BookingRepository>,
}

impl Repositories {
    /// Wire repositories against explicit store implementations.
    pub fn with_stores(
        webhook: Arc<dyn WebhookStore>,
        delivery_log: Arc<dyn DeliveryLogStore>,
        booking: Arc<dyn BookingStore>,
    ) -> Self {
        Self {
            db: None,
            webhook: Arc::new(WebhookRepository::new(webhook)),
            delivery_log: Arc::new(DeliveryLogRepository::new(delivery_log)),
            booking: Arc::new(BookingRepository::new(booking)),
        }
    }

    /// Wire every repository against Postgres.
    pub fn postgres(db: Arc<PostgresDatabase>) -> Self {
        let mut repos = Self::with_stores(
            Arc::new(WebhookStorePostgres::new(db.clone())),
            Arc::new(DeliveryLogStorePostgres::new(db.clone())),
            Arc::new(BookingStorePostgres::new(db.clone())),
        );
        repos.db = Some(db);
        repos
    }

    /// Wire every repository against in-process memory stores.
    pub fn in_memory() -> Self {
        Self::with_stores(
            Arc::new(InMemoryWebhookStore::new()),
            Arc::new(InMemoryDeliveryLogStore::new()),
            Arc::new(InMemoryBookingStore::new()),
        )
    }

    /// Run a raw probe query, used by the readiness endpoint. Memory-backed
    /// wiring has nothing to probe and always reports healthy.
    pub async fn execute(&self, query: &str) -> Result<u64, DatabaseError> {
        match &self.db {
            Some(db) => db.execute(query).await,
            None => Ok(0),
        }
    }
}
