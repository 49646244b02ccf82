pub mod booking_store_memory;
pub mod delivery_log_store_memory;
pub mod webhook_store_memory;

pub use booking_store_memory::InMemoryBookingStore;
pub use delivery_log_store_memory::InMemoryDeliveryLogStore;
pub use webhook_store_memory::InMemoryWebhookStore;
