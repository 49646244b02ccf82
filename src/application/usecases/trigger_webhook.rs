// Use case: trigger_webhook.

use crate::application::context::AppContext;
use crate::application::usecases::build_payload::{BuildPayloadError, BuildPayloadUseCase};
use crate::application::usecases::deliver_webhook::{DeliverWebhookUseCase, DeliveryOutcome};
use crate::domain::entities::event_kind::EventKind;
use crate::domain::value_objects::ids::BookingId;
use futures::future::join_all;
use metrics::counter;
use tracing::{error, warn};

/// Fans one triggered event out to every matching active endpoint. All
/// failures are swallowed after being logged; nothing a trigger point does
/// can be blocked or failed by webhook delivery.
pub struct TriggerWebhookUseCase;

/// Delivery tallies for one trigger, returned for observability only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerWebhookResult {
    /// Endpoints that matched the event.
    pub matched: usize,
    /// Deliveries accepted with a 2xx response.
    pub delivered: usize,
    /// Deliveries rejected by the endpoint or lost to transport failures.
    pub failed: usize,
}

impl TriggerWebhookUseCase {
    pub async fn execute(
        ctx: &AppContext,
        event: EventKind,
        booking_id: BookingId,
    ) -> TriggerWebhookResult {
        // Step 1: Build the payload. A build failure aborts the trigger
        // before any delivery; there is nothing to attribute a record to.
        let payload = match BuildPayloadUseCase::execute(ctx, event, booking_id).await {
            Ok(payload) => payload,
            Err(BuildPayloadError::BookingNotFound) => {
                warn!(event = %event, booking_id = %booking_id, "booking not found for webhook trigger");
                counter!("webhook_trigger_build_failures_total", "event" => event.as_str())
                    .increment(1);
                return TriggerWebhookResult::default();
            }
            Err(BuildPayloadError::Storage(detail)) => {
                error!(event = %event, booking_id = %booking_id, detail, "storage failure building webhook payload");
                counter!("webhook_trigger_build_failures_total", "event" => event.as_str())
                    .increment(1);
                return TriggerWebhookResult::default();
            }
        };

        // Step 2: Resolve the fan-out set.
        let subscribers = match ctx
            .repos
            .webhook
            .find_active_subscribers(event.as_str())
            .await
        {
            Ok(subscribers) => subscribers,
            Err(err) => {
                error!(event = %event, error = ?err, "failed to load webhook subscribers");
                return TriggerWebhookResult::default();
            }
        };
        if subscribers.is_empty() {
            return TriggerWebhookResult::default();
        }

        // Step 3: Build an HTTP client with the configured per-delivery
        // timeout.
        let timeout = std::time::Duration::from_millis(ctx.settings.delivery.request_timeout_ms);
        let client = match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(err) => {
                error!(event = %event, error = %err, "failed to build webhook http client");
                return TriggerWebhookResult::default();
            }
        };

        // Step 4: Fan out concurrently. Each delivery captures its own
        // outcome and appends its own record; none can fail a sibling.
        let outcomes = join_all(subscribers.iter().map(|webhook| {
            DeliverWebhookUseCase::execute(ctx, &client, webhook, event, &payload)
        }))
        .await;

        let delivered = outcomes
            .iter()
            .filter(|o| matches!(o, DeliveryOutcome::Accepted(_)))
            .count();
        TriggerWebhookResult {
            matched: subscribers.len(),
            delivered,
            failed: outcomes.len() - delivered,
        }
    }
}
