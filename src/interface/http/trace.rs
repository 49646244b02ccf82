use axum::http::{header, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, histogram};
use tracing::info;

/// A per-request trace identifier used for support and debugging.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

/// Injects a trace id into request extensions and response headers.
pub async fn trace_id_middleware(req: Request<axum::body::Body>, next: Next) -> Response {
    // Step 1: Reuse a client-provided id or generate a new one.
    let trace_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let trace_id = TraceId(trace_id);

    // Step 2: Attach the trace id for downstream handlers.
    let mut req = req;
    req.extensions_mut().insert(trace_id.clone());

    // Step 3: Run the request.
    let mut response = next.run(req).await;

    // Step 4: Mirror the trace id on the response.
    if let Ok(value) = HeaderValue::from_str(&trace_id.0) {
        response
            .headers_mut()
            .insert(header::HeaderName::from_static("x-request-id"), value);
    }
    response.extensions_mut().insert(trace_id);

    response
}

/// Emits a structured request log with the trace id, status, and latency.
pub async fn request_log_middleware(req: Request<axum::body::Body>, next: Next) -> Response {
    // Step 1: Capture request metadata and start the timer.
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let trace_id = req.extensions().get::<TraceId>().map(|t| t.0.clone());
    let start = std::time::Instant::now();

    // Step 2: Run the request.
    let response = next.run(req).await;

    // Step 3: Emit metrics and a structured log entry.
    let latency_ms = start.elapsed().as_millis() as u64;
    let status_code = response.status().as_u16();
    counter!(
        "http_requests_total",
        "method" => method.as_str().to_string(),
        "status" => status_class(status_code)
    )
    .increment(1);
    histogram!(
        "http_request_duration_ms",
        "method" => method.as_str().to_string(),
        "status" => status_class(status_code)
    )
    .record(latency_ms as f64);
    info!(
        trace_id = trace_id.as_deref().unwrap_or(""),
        method = %method,
        path = %path,
        status = status_code,
        latency_ms,
        "http_request"
    );

    response
}

fn status_class(code: u16) -> &'static str {
    match code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::status_class;

    #[test]
    fn given_status_codes_when_classed_should_bucket_by_hundreds() {
        assert_eq!(status_class(200), "2xx");
        assert_eq!(status_class(404), "4xx");
        assert_eq!(status_class(503), "5xx");
        assert_eq!(status_class(99), "other");
    }
}
