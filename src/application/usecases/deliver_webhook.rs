// Use case: deliver_webhook.

use crate::application::context::AppContext;
use crate::domain::entities::event_kind::EventKind;
use crate::domain::entities::payload::EventPayload;
use crate::domain::value_objects::timestamps::Timestamp;
use crate::infrastructure::db::dto::DeliveryLogRow;
use metrics::{counter, histogram};
use tracing::{error, warn};

/// Header carrying the endpoint's shared secret. This is a raw secret, not
/// a signature over the body: it offers no replay or tamper protection if
/// the header value leaks.
pub const SECRET_HEADER: &str = "X-Webhook-Secret";

/// Performs one HTTP POST to one endpoint and appends exactly one delivery
/// record, whatever the outcome. Never raises to its caller.
pub struct DeliverWebhookUseCase;

/// Terminal outcome of a single delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// 2xx response.
    Accepted(u16),
    /// Non-2xx response; recorded as a completed attempt, not a transport
    /// error.
    Rejected(u16),
    /// No response at all (refused connection, timeout, DNS, bad URL).
    TransportFailed,
}

impl DeliverWebhookUseCase {
    pub async fn execute(
        ctx: &AppContext,
        client: &reqwest::Client,
        webhook: &crate::infrastructure::db::dto::WebhookRow,
        event: EventKind,
        payload: &EventPayload,
    ) -> DeliveryOutcome {
        // Step 1: Send the request, with the secret header iff configured.
        let started = std::time::Instant::now();
        let mut request = client.post(&webhook.url).json(payload);
        if let Some(secret) = &webhook.secret {
            request = request.header(SECRET_HEADER, secret);
        }
        let response = request.send().await;
        let elapsed_ms = started.elapsed().as_millis() as f64;

        // Step 2: Capture the terminal outcome.
        let max_chars = ctx.settings.delivery.response_body_max_chars;
        let (outcome, response_status, response_body, error_message) = match response {
            Ok(resp) => {
                let status = resp.status().as_u16();
                let body = resp.text().await.unwrap_or_else(|_| String::new());
                let outcome = if (200..300).contains(&status) {
                    DeliveryOutcome::Accepted(status)
                } else {
                    warn!(
                        webhook_id = %webhook.id,
                        event = %event,
                        status,
                        "webhook delivery rejected by endpoint"
                    );
                    DeliveryOutcome::Rejected(status)
                };
                (
                    outcome,
                    Some(status as i32),
                    Some(truncate_chars(&body, max_chars)),
                    None,
                )
            }
            Err(err) => {
                warn!(
                    webhook_id = %webhook.id,
                    event = %event,
                    error = %err,
                    "webhook delivery transport failure"
                );
                (
                    DeliveryOutcome::TransportFailed,
                    None,
                    None,
                    Some(err.to_string()),
                )
            }
        };

        histogram!("webhook_delivery_duration_ms", "event" => event.as_str()).record(elapsed_ms);
        counter!(
            "webhook_deliveries_total",
            "event" => event.as_str(),
            "outcome" => outcome_label(outcome)
        )
        .increment(1);

        // Step 3: Append the delivery record. A log-write failure is
        // reported operationally only; it must never break sibling
        // deliveries.
        let now = Timestamp::now_utc().as_inner();
        let row = DeliveryLogRow {
            id: uuid::Uuid::new_v4(),
            webhook_id: webhook.id,
            event: event.as_str().to_string(),
            payload: serde_json::to_value(payload).unwrap_or(serde_json::Value::Null),
            response_status,
            response_body,
            error_message,
            delivered_at: now,
            created_at: now,
        };
        if let Err(err) = ctx.repos.delivery_log.insert(&row).await {
            error!(
                webhook_id = %webhook.id,
                event = %event,
                error = ?err,
                "failed to append webhook delivery record"
            );
        }

        outcome
    }
}

fn outcome_label(outcome: DeliveryOutcome) -> &'static str {
    match outcome {
        DeliveryOutcome::Accepted(_) => "accepted",
        DeliveryOutcome::Rejected(_) => "rejected",
        DeliveryOutcome::TransportFailed => "transport_failed",
    }
}

/// Cap a response body at `max` characters, respecting char boundaries.
fn truncate_chars(body: &str, max: usize) -> String {
    body.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_short_body_when_truncated_should_be_unchanged() {
        assert_eq!(truncate_chars("ok", 1000), "ok");
    }

    #[test]
    fn given_long_body_when_truncated_should_cap_at_limit() {
        let body = "x".repeat(1500);
        assert_eq!(truncate_chars(&body, 1000).len(), 1000);
    }

    #[test]
    fn given_multibyte_body_when_truncated_should_respect_char_boundaries() {
        let body = "é".repeat(10);
        let truncated = truncate_chars(&body, 4);
        assert_eq!(truncated.chars().count(), 4);
        assert_eq!(truncated, "éééé");
    }

    #[test]
    fn given_outcomes_when_labelled_should_use_stable_names() {
        assert_eq!(outcome_label(DeliveryOutcome::Accepted(204)), "accepted");
        assert_eq!(outcome_label(DeliveryOutcome::Rejected(500)), "rejected");
        assert_eq!(
            outcome_label(DeliveryOutcome::TransportFailed),
            "transport_failed"
        );
    }
}
