use time::OffsetDateTime;

/// One delivery attempt, append-only. Rows are never updated or deleted by
/// the pipeline, and they outlive the endpoint they reference.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DeliveryLogRow {
    pub id: uuid::Uuid,
    /// May reference a since-deleted webhook; kept for audit.
    pub webhook_id: uuid::Uuid,
    pub event: String,
    /// The exact JSON body that was sent.
    pub payload: serde_json::Value,
    pub response_status: Option<i32>,
    pub response_body: Option<String>,
    pub error_message: Option<String>,
    pub delivered_at: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

impl DeliveryLogRow {
    /// An HTTP response was received, whatever its status.
    pub fn got_response(&self) -> bool {
        self.response_status.is_some()
    }

    /// The attempt failed before any response arrived.
    pub fn transport_failed(&self) -> bool {
        self.error_message.is_some()
    }

    /// Terminal records carry exactly one of status or error.
    pub fn is_terminal(&self) -> bool {
        self.got_response() != self.transport_failed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::timestamps::Timestamp;

    fn row(status: Option<i32>, error: Option<&str>) -> DeliveryLogRow {
        let now = Timestamp::now_utc().as_inner();
        DeliveryLogRow {
            id: uuid::Uuid::new_v4(),
            webhook_id: uuid::Uuid::new_v4(),
            event: "payment.received".to_string(),
            payload: serde_json::json!({}),
            response_status: status,
            response_body: None,
            error_message: error.map(str::to_string),
            delivered_at: now,
            created_at: now,
        }
    }

    #[test]
    fn given_response_or_error_when_checked_should_be_terminal() {
        assert!(row(Some(200), None).is_terminal());
        assert!(row(Some(500), None).is_terminal());
        assert!(row(None, Some("connection refused")).is_terminal());
    }

    #[test]
    fn given_both_or_neither_when_checked_should_not_be_terminal() {
        assert!(!row(None, None).is_terminal());
        assert!(!row(Some(200), Some("oops")).is_terminal());
    }
}
