//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK with a fixed JSON status
//! whenever the process can answer HTTP. It checks nothing else.

use axum::Json;
use serde::Serialize;

/// Body of the `/health` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub const HEALTHY: Self = Self { status: "healthy" };
}

/// Health check handler.
///
/// Always answers `{"status":"healthy"}` as `application/json`.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::HEALTHY)
}
