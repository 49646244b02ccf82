pub mod delivery_log;
pub mod health;
pub mod metrics;
pub mod ready;
pub mod trigger;
pub mod webhook;
