use time::OffsetDateTime;

/// An admin-configured outbound endpoint and its event subscriptions.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WebhookRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub url: String,
    pub secret: Option<String>,
    pub is_active: bool,
    pub events: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl WebhookRow {
    /// Whether this endpoint should receive deliveries for the given event.
    pub fn subscribes_to(&self, event: &str) -> bool {
        self.is_active && self.events.iter().any(|e| e == event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::timestamps::Timestamp;

    fn row(is_active: bool, events: Vec<&str>) -> WebhookRow {
        let now = Timestamp::now_utc().as_inner();
        WebhookRow {
            id: uuid::Uuid::new_v4(),
            name: "make.com".to_string(),
            url: "https://hooks.example.com/abc".to_string(),
            secret: None,
            is_active,
            events: events.into_iter().map(str::to_string).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn given_active_subscriber_when_checked_should_match() {
        assert!(row(true, vec!["payment.received"]).subscribes_to("payment.received"));
    }

    #[test]
    fn given_inactive_or_unsubscribed_when_checked_should_not_match() {
        assert!(!row(false, vec!["payment.received"]).subscribes_to("payment.received"));
        assert!(!row(true, vec!["balance.due"]).subscribes_to("payment.received"));
        assert!(!row(true, vec![]).subscribes_to("payment.received"));
    }
}
