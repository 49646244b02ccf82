pub mod booking_store;
pub mod delivery_log_store;
pub mod webhook_store;
