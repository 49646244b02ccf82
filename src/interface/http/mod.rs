pub mod dto;
pub mod problem;
pub mod routes;
pub mod state;
pub mod trace;

use axum::middleware;
use axum::Router;
use state::AppState;

/// Builds the admin HTTP application.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::webhook::router())
        .merge(routes::delivery_log::router())
        .merge(routes::trigger::router())
        .merge(routes::ready::router())
        .merge(routes::metrics::router())
        .with_state(state)
        .merge(routes::health::router())
        .layer(middleware::from_fn(trace::request_log_middleware))
        .layer(middleware::from_fn(trace::trace_id_middleware))
}
