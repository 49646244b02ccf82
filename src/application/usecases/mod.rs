pub mod balance_reminder_sweep;
pub mod build_payload;
pub mod delete_webhook;
pub mod deliver_webhook;
pub mod test_webhook;
pub mod trigger_webhook;
pub mod upsert_webhook;
