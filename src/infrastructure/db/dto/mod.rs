pub mod booking;
pub mod delivery_log;
pub mod webhook;

pub use booking::BookingDetailsRow;
pub use delivery_log::DeliveryLogRow;
pub use webhook::WebhookRow;
