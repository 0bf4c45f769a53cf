//! Router configuration for the API.
//!
//! Central route registration and middleware configuration.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// Middleware is applied in reverse order of declaration (last added runs
/// first), so the request id is set before logging reads it.
///
/// # Routes
/// - `/api/notifications` - Notification CRUD and dispatch
/// - `/health`, `/health/ready`, `/health/live` - Health probes
/// - `/swagger-ui` - Interactive API documentation
pub fn create_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest(
            "/api/notifications",
            handlers::notifications::notification_routes(),
        )
        .merge(handlers::health::health_routes())
        .split_for_parts();

    router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}
