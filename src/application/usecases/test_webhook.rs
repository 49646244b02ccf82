// Use case: test_webhook.

use crate::application::context::AppContext;
use crate::application::usecases::deliver_webhook::{DeliverWebhookUseCase, DeliveryOutcome};
use crate::domain::entities::event_kind::EventKind;
use crate::domain::entities::payload::EventPayload;
use crate::domain::value_objects::timestamps::Timestamp;

/// Sends a synthetic sample payload to one endpoint on operator request.
/// Runs regardless of the endpoint's active flag or subscriptions, and
/// logs the outcome like any other delivery.
pub struct TestWebhookUseCase;

#[derive(Debug)]
pub enum TestWebhookError {
    NotFound,
    Storage(String),
}

impl TestWebhookUseCase {
    pub async fn execute(
        ctx: &AppContext,
        webhook_id: uuid::Uuid,
    ) -> Result<DeliveryOutcome, TestWebhookError> {
        // Step 1: Load the endpoint.
        let webhook = ctx
            .repos
            .webhook
            .get(webhook_id)
            .await
            .map_err(|e| TestWebhookError::Storage(format!("{e:?}")))?
            .ok_or(TestWebhookError::NotFound)?;

        // Step 2: Deliver a sample payload with the ordinary executor.
        let payload = EventPayload::sample(Timestamp::now_utc().to_rfc3339());
        let timeout = std::time::Duration::from_millis(ctx.settings.delivery.request_timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TestWebhookError::Storage(e.to_string()))?;

        Ok(DeliverWebhookUseCase::execute(
            ctx,
            &client,
            &webhook,
            EventKind::BookingConfirmed,
            &payload,
        )
        .await)
    }
}

#[cfg(test)]
mod tests {
    use super::{TestWebhookError, TestWebhookUseCase};
    use crate::application::context::test_support::test_context;

    #[tokio::test]
    async fn given_missing_webhook_when_tested_should_report_not_found() {
        let ctx = test_context();

        let result = TestWebhookUseCase::execute(&ctx, uuid::Uuid::new_v4()).await;

        assert!(matches!(result, Err(TestWebhookError::NotFound)));
    }
}
