use crate::interface::http::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ReadyResponse {
    status: &'static str,
    storage: &'static str,
}

/// Builds the readiness route. Unlike `/health`, this one probes the
/// backing store and reports 503 until it answers.
pub fn router() -> Router<AppState> {
    Router::new().route("/ready", get(ready))
}

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.ctx.repos.execute("SELECT 1").await {
        Ok(_) => (
            StatusCode::OK,
            Json(ReadyResponse {
                status: "ready",
                storage: "ok",
            }),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyResponse {
                status: "not_ready",
                storage: "unreachable",
            }),
        ),
    }
}
