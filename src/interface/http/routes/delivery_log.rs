// HTTP routes: delivery log inspection.

use crate::interface::http::dto::delivery_log::{DeliveryLogResponse, ListDeliveryLogsQuery};
use crate::interface::http::problem::{problem, CRL_STORAGE_DB_ERROR};
use crate::interface::http::state::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;

/// Builds delivery log routes.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/webhook-logs", get(list_logs))
}

/// Lists delivery records newest first, optionally filtered by webhook.
/// The limit defaults from settings and is capped there too.
async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<ListDeliveryLogsQuery>,
) -> Response {
    let settings = &state.ctx.settings.delivery;
    let limit = query
        .limit
        .unwrap_or(settings.log_default_limit)
        .min(settings.log_max_limit);

    match state
        .ctx
        .repos
        .delivery_log
        .list(query.webhook_id, limit)
        .await
    {
        Ok(rows) => {
            let body: Vec<DeliveryLogResponse> =
                rows.into_iter().map(DeliveryLogResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(_) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            CRL_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}
