//! API middleware

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use chrono::Utc;
use core_kernel::OperationMetadata;
use tracing::info;
use uuid::Uuid;

/// Header naming the filer the gateway authenticated
pub const IDENTITY_HEADER: &str = "ERIC-Identity";

/// Header carrying the caller's correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

fn header<'a>(request: &'a Request<Body>, name: &str) -> Option<&'a str> {
    request
        .headers()
        .get(name)
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Identity middleware
///
/// Turns the gateway headers into the operation metadata that services
/// record against stored submissions.
pub async fn identity_middleware(mut request: Request<Body>, next: Next) -> Response {
    let correlation_id = header(&request, REQUEST_ID_HEADER)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut metadata = OperationMetadata::with_correlation_id(correlation_id);
    if let Some(user) = header(&request, IDENTITY_HEADER) {
        metadata = metadata.initiated_by(user);
    }

    request.extensions_mut().insert(metadata);
    next.run(request).await
}

/// Audit logging middleware
///
/// Logs all API requests for compliance and debugging
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user_id = request
        .extensions()
        .get::<OperationMetadata>()
        .and_then(|m| m.initiated_by.clone())
        .unwrap_or_else(|| "anonymous".to_string());

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        user = %user_id,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
