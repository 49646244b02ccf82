pub mod booking_store_postgres;
pub mod database;
pub mod delivery_log_store_postgres;
pub mod webhook_store_postgres;

pub use database::PostgresDatabase;
