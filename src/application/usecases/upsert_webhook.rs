// Use case: upsert_webhook.

use crate::application::context::AppContext;
use crate::domain::entities::event_kind::EventKind;
use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::dto::WebhookRow;

/// Creates or replaces a webhook endpoint. A command without an ID
/// creates; a command with an ID replaces mutable fields and bumps
/// `updated_at`, keeping identity and `created_at` intact.
pub struct UpsertWebhookUseCase;

#[derive(Debug)]
pub enum UpsertWebhookError {
    /// One of the subscribed event names is not a known event kind.
    UnknownEventKind(String),
    Storage(String),
}

#[derive(Debug, Clone)]
pub struct UpsertWebhookCommand {
    pub id: Option<uuid::Uuid>,
    pub name: String,
    pub url: String,
    pub secret: Option<String>,
    pub is_active: bool,
    pub events: Vec<String>,
}

impl UpsertWebhookUseCase {
    pub async fn execute(
        ctx: &AppContext,
        cmd: UpsertWebhookCommand,
    ) -> Result<WebhookRow, UpsertWebhookError> {
        // Step 1: Fail fast on event names outside the closed set.
        if let Some(unknown) = cmd.events.iter().find(|e| EventKind::parse(e).is_none()) {
            return Err(UpsertWebhookError::UnknownEventKind(unknown.clone()));
        }

        // Step 2: Build the row; a missing ID means a fresh endpoint.
        let now = Timestamp::now_utc().as_inner();
        let row = WebhookRow {
            id: cmd.id.unwrap_or_else(uuid::Uuid::new_v4),
            name: cmd.name,
            url: cmd.url,
            secret: cmd.secret,
            is_active: cmd.is_active,
            events: cmd.events,
            created_at: now,
            updated_at: now,
        };

        // Step 3: Persist and return the stored state.
        ctx.repos
            .webhook
            .upsert(&row)
            .await
            .map_err(|e| UpsertWebhookError::Storage(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{UpsertWebhookCommand, UpsertWebhookError, UpsertWebhookUseCase};
    use crate::application::context::test_support::test_context;

    fn command(events: Vec<&str>) -> UpsertWebhookCommand {
        UpsertWebhookCommand {
            id: None,
            name: "make.com bridge".to_string(),
            url: "https://hooks.example.com/abc".to_string(),
            secret: Some("shh".to_string()),
            is_active: true,
            events: events.into_iter().map(str::to_string).collect(),
        }
    }

    #[tokio::test]
    async fn given_new_command_when_executed_should_create_webhook() {
        let ctx = test_context();

        let stored = UpsertWebhookUseCase::execute(&ctx, command(vec!["payment.received"]))
            .await
            .unwrap();

        assert!(!stored.id.is_nil());
        assert!(stored.is_active);
        assert_eq!(stored.events, vec!["payment.received".to_string()]);
    }

    #[tokio::test]
    async fn given_existing_id_when_executed_should_replace_mutable_fields() {
        let ctx = test_context();
        let created = UpsertWebhookUseCase::execute(&ctx, command(vec!["payment.received"]))
            .await
            .unwrap();

        let mut update = command(vec!["balance.due"]);
        update.id = Some(created.id);
        update.name = "renamed".to_string();
        update.is_active = false;
        let stored = UpsertWebhookUseCase::execute(&ctx, update).await.unwrap();

        assert_eq!(stored.id, created.id);
        assert_eq!(stored.name, "renamed");
        assert!(!stored.is_active);
        assert_eq!(stored.events, vec!["balance.due".to_string()]);
        assert_eq!(stored.created_at, created.created_at);
        assert!(stored.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn given_unknown_event_name_when_executed_should_fail_fast() {
        let ctx = test_context();

        let result =
            UpsertWebhookUseCase::execute(&ctx, command(vec!["booking.confirmed", "nope"])).await;

        match result {
            Err(UpsertWebhookError::UnknownEventKind(name)) => assert_eq!(name, "nope"),
            other => panic!("expected UnknownEventKind, got {other:?}"),
        }
    }
}
