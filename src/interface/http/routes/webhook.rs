// HTTP routes: webhook registry management.

use crate::application::usecases::delete_webhook::{DeleteWebhookError, DeleteWebhookUseCase};
use crate::application::usecases::deliver_webhook::DeliveryOutcome;
use crate::application::usecases::test_webhook::{TestWebhookError, TestWebhookUseCase};
use crate::application::usecases::upsert_webhook::{
    UpsertWebhookCommand, UpsertWebhookError, UpsertWebhookUseCase,
};
use crate::interface::http::dto::webhook::{
    DeleteWebhookResponse, TestWebhookResponse, UpsertWebhookRequest, WebhookResponse,
};
use crate::interface::http::problem::{
    problem, CRL_EVENT_UNKNOWN, CRL_REQUEST_MALFORMED, CRL_STORAGE_DB_ERROR,
    CRL_WEBHOOK_NOT_FOUND,
};
use crate::interface::http::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;

/// Builds webhook registry routes.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/webhooks", get(list_webhooks).post(upsert_webhook))
        .route("/webhooks/:webhook_id", get(get_webhook).delete(delete_webhook))
        .route("/webhooks/:webhook_id/test", post(test_webhook))
}

/// Lists configured webhooks, newest first.
async fn list_webhooks(State(state): State<AppState>) -> Response {
    match state.ctx.repos.webhook.list().await {
        Ok(rows) => {
            let body: Vec<WebhookResponse> = rows.into_iter().map(WebhookResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(_) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            CRL_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Fetches a single webhook.
async fn get_webhook(
    State(state): State<AppState>,
    Path(webhook_id): Path<uuid::Uuid>,
) -> Response {
    match state.ctx.repos.webhook.get(webhook_id).await {
        Ok(Some(row)) => (StatusCode::OK, Json(WebhookResponse::from(row))).into_response(),
        Ok(None) => problem(
            StatusCode::NOT_FOUND,
            CRL_WEBHOOK_NOT_FOUND,
            Some("webhook not found".to_string()),
        ),
        Err(_) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            CRL_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Creates a webhook, or replaces one's mutable fields when an id is given.
async fn upsert_webhook(
    State(state): State<AppState>,
    Json(payload): Json<UpsertWebhookRequest>,
) -> Response {
    // Step 1: Validate payload basics.
    if payload.url.trim().is_empty() {
        return problem(
            StatusCode::BAD_REQUEST,
            CRL_REQUEST_MALFORMED,
            Some("url is required".to_string()),
        );
    }
    if payload.events.is_empty() {
        return problem(
            StatusCode::BAD_REQUEST,
            CRL_REQUEST_MALFORMED,
            Some("events list is required".to_string()),
        );
    }

    // Step 2: Execute the use case.
    let created = payload.id.is_none();
    let result = UpsertWebhookUseCase::execute(
        &state.ctx,
        UpsertWebhookCommand {
            id: payload.id,
            name: payload.name,
            url: payload.url,
            secret: payload.secret,
            is_active: payload.is_active,
            events: payload.events,
        },
    )
    .await;

    // Step 3: Map output to HTTP response.
    match result {
        Ok(row) => {
            let status = if created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(WebhookResponse::from(row))).into_response()
        }
        Err(UpsertWebhookError::UnknownEventKind(name)) => problem(
            StatusCode::BAD_REQUEST,
            CRL_EVENT_UNKNOWN,
            Some(format!("unknown event kind: {name}")),
        ),
        Err(UpsertWebhookError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            CRL_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Deletes a webhook. Its past delivery records remain.
async fn delete_webhook(
    State(state): State<AppState>,
    Path(webhook_id): Path<uuid::Uuid>,
) -> Response {
    match DeleteWebhookUseCase::execute(&state.ctx, webhook_id).await {
        Ok(()) => (StatusCode::OK, Json(DeleteWebhookResponse { deleted: true })).into_response(),
        Err(DeleteWebhookError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            CRL_WEBHOOK_NOT_FOUND,
            Some("webhook not found".to_string()),
        ),
        Err(DeleteWebhookError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            CRL_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}

/// Sends a sample payload to one endpoint and reports the outcome.
async fn test_webhook(
    State(state): State<AppState>,
    Path(webhook_id): Path<uuid::Uuid>,
) -> Response {
    match TestWebhookUseCase::execute(&state.ctx, webhook_id).await {
        Ok(outcome) => {
            let (label, status) = match outcome {
                DeliveryOutcome::Accepted(code) => ("accepted", Some(code)),
                DeliveryOutcome::Rejected(code) => ("rejected", Some(code)),
                DeliveryOutcome::TransportFailed => ("transport_failed", None),
            };
            (
                StatusCode::OK,
                Json(TestWebhookResponse {
                    outcome: label.to_string(),
                    response_status: status,
                }),
            )
                .into_response()
        }
        Err(TestWebhookError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            CRL_WEBHOOK_NOT_FOUND,
            Some("webhook not found".to_string()),
        ),
        Err(TestWebhookError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            CRL_STORAGE_DB_ERROR,
            Some("storage unavailable".to_string()),
        ),
    }
}
