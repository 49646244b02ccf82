// HTTP routes: manual trigger for operator recovery.

use crate::application::usecases::trigger_webhook::TriggerWebhookUseCase;
use crate::domain::entities::event_kind::EventKind;
use crate::domain::value_objects::ids::BookingId;
use crate::interface::http::dto::webhook::{TriggerRequest, TriggerResponse};
use crate::interface::http::problem::{problem, CRL_EVENT_UNKNOWN};
use crate::interface::http::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Json;

/// Builds the manual trigger route.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/triggers", post(trigger))
}

/// Re-runs the fan-out for an event and booking. Delivery failures are
/// recorded, not surfaced; the response only carries tallies.
async fn trigger(State(state): State<AppState>, Json(payload): Json<TriggerRequest>) -> Response {
    // Step 1: Reject event names outside the closed set.
    let Some(event) = EventKind::parse(&payload.event) else {
        return problem(
            StatusCode::BAD_REQUEST,
            CRL_EVENT_UNKNOWN,
            Some(format!("unknown event kind: {}", payload.event)),
        );
    };

    // Step 2: Run the dispatcher; it never fails upward.
    let result =
        TriggerWebhookUseCase::execute(&state.ctx, event, BookingId(payload.booking_id)).await;

    (
        StatusCode::ACCEPTED,
        Json(TriggerResponse {
            matched: result.matched,
            delivered: result.delivered,
            failed: result.failed,
        }),
    )
        .into_response()
}
