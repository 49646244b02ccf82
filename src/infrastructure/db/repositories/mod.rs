pub mod booking_repository;
pub mod delivery_log_repository;
pub mod factory;
pub mod webhook_repository;

pub use factory::Repositories;
