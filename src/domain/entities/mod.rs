pub mod event_kind;
pub mod payload;
