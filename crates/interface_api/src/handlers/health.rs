//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use core_kernel::{AdapterHealth, HealthCheckResult};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dependencies: Vec<HealthCheckResult>,
}

/// Liveness check, including the collaborators the state was built with
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let mut dependencies = Vec::with_capacity(state.health.len());
    for dependency in state.health.iter() {
        dependencies.push(dependency.health_check().await);
    }

    let healthy = dependencies
        .iter()
        .all(|d| d.status != AdapterHealth::Unhealthy);
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            dependencies,
        }),
    )
}
