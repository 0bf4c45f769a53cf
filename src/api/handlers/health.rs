//! Health check endpoint handlers.
//!
//! The store is in-process, so readiness never depends on an external
//! database; the SMS gateway check is configuration-only and advisory.

use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HEALTH_TAG;
use crate::state::AppState;

/// Health check response structure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Application version
    pub version: String,
    /// Timestamp of the health check (RFC 3339)
    pub timestamp: String,
    /// Detailed checks for various components
    pub checks: HashMap<String, ComponentHealth>,
}

/// Health status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All systems operational
    Healthy,
    /// Some non-critical issues
    Degraded,
}

/// Individual component health information.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealth {
    pub status: HealthStatus,
    pub message: Option<String>,
}

/// Creates health check routes.
pub fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(health_check))
        .routes(routes!(readiness_check))
        .routes(routes!(liveness_check))
}

/// GET /health - Basic health check
///
/// Reports the record store and the SMS gateway configuration. Missing
/// gateway credentials degrade the report but do not fail it: the service
/// still persists records, and dispatch failures are contained by design.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service health report", body = HealthResponse)
    )
)]
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();

    checks.insert(
        "store".to_string(),
        ComponentHealth {
            status: HealthStatus::Healthy,
            message: Some(format!(
                "{} notification(s) stored",
                state.repositories.notifications.count()
            )),
        },
    );

    let sms = if state.sms_configured {
        ComponentHealth {
            status: HealthStatus::Healthy,
            message: Some("Gateway credentials configured".to_string()),
        }
    } else {
        ComponentHealth {
            status: HealthStatus::Degraded,
            message: Some("Gateway credentials not configured; SMS dispatch will fail".to_string()),
        }
    };
    checks.insert("sms_provider".to_string(), sms);

    let status = if checks
        .values()
        .all(|c| c.status == HealthStatus::Healthy)
    {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: jiff::Timestamp::now().to_string(),
        checks,
    })
}

/// GET /health/ready - Readiness probe
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is ready")
    )
)]
async fn readiness_check() -> StatusCode {
    // Storage is in-process; once the router is serving, we are ready.
    StatusCode::OK
}

/// GET /health/live - Liveness probe
#[utoipa::path(
    get,
    path = "/health/live",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is alive")
    )
)]
async fn liveness_check() -> StatusCode {
    StatusCode::OK
}
