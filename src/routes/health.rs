//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! It never touches the upstream, so a failing fact API does not fail the probe.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check handler.
///
/// Returns `{"status":"ok"}` to indicate the service is running.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
