// Use case: delete_webhook.

use crate::application::context::AppContext;
use crate::infrastructure::db::stores::webhook_store::WebhookRepositoryError;

/// Removes a webhook endpoint. Existing delivery records keep their
/// reference to the deleted endpoint; the audit trail survives.
pub struct DeleteWebhookUseCase;

#[derive(Debug)]
pub enum DeleteWebhookError {
    NotFound,
    Storage(String),
}

impl DeleteWebhookUseCase {
    pub async fn execute(ctx: &AppContext, webhook_id: uuid::Uuid) -> Result<(), DeleteWebhookError> {
        ctx.repos
            .webhook
            .delete(webhook_id)
            .await
            .map_err(|e| match e {
                WebhookRepositoryError::NotFound => DeleteWebhookError::NotFound,
                other => DeleteWebhookError::Storage(format!("{other:?}")),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{DeleteWebhookError, DeleteWebhookUseCase};
    use crate::application::context::test_support::test_context;
    use crate::application::usecases::upsert_webhook::{
        UpsertWebhookCommand, UpsertWebhookUseCase,
    };

    #[tokio::test]
    async fn given_existing_webhook_when_deleted_should_disappear_from_list() {
        let ctx = test_context();
        let stored = UpsertWebhookUseCase::execute(
            &ctx,
            UpsertWebhookCommand {
                id: None,
                name: "ops".to_string(),
                url: "https://hooks.example.com/x".to_string(),
                secret: None,
                is_active: true,
                events: vec!["booking.cancelled".to_string()],
            },
        )
        .await
        .unwrap();

        DeleteWebhookUseCase::execute(&ctx, stored.id).await.unwrap();

        assert!(ctx.repos.webhook.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn given_missing_webhook_when_deleted_should_report_not_found() {
        let ctx = test_context();

        let result = DeleteWebhookUseCase::execute(&ctx, uuid::Uuid::new_v4()).await;

        assert!(matches!(result, Err(DeleteWebhookError::NotFound)));
    }
}
