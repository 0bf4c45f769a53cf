//! Notification API handlers.
//!
//! REST surface over the notification service. Handlers only translate
//! between HTTP and the service; the save-then-dispatch semantics live in
//! `NotificationService`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::NOTIFICATION_TAG;
use crate::api::dto::{ErrorResponse, NotificationRequest, NotificationResponse};
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates notification-related routes.
///
/// Routes:
/// - POST   /            - Create and dispatch a notification
/// - GET    /            - List notifications
/// - GET    /{id}        - Get notification by ID
/// - PUT    /{id}        - Update (and re-dispatch) a notification
/// - DELETE /{id}        - Delete notification
pub fn notification_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_notification))
        .routes(routes!(get_all_notifications))
        .routes(routes!(get_notification))
        .routes(routes!(update_notification))
        .routes(routes!(delete_notification))
}

/// POST /api/notifications - Create a new notification
///
/// Persists the record, then attempts delivery over its channel. The response
/// reflects persistence only: a 201 with the assigned id is returned whether
/// or not delivery succeeded.
#[utoipa::path(
    post,
    path = "/",
    tag = NOTIFICATION_TAG,
    request_body = NotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = NotificationResponse),
        (status = 400, description = "Invalid request or id already present", body = ErrorResponse)
    )
)]
async fn create_notification(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NotificationRequest>,
) -> AppResult<(StatusCode, Json<NotificationResponse>)> {
    if payload.id.is_some() {
        return Err(AppError::BadRequest {
            message: "A new notification cannot already have an id".to_string(),
        });
    }

    let record = state
        .services
        .notifications
        .create(payload.into_new())
        .await?;
    Ok((StatusCode::CREATED, Json(NotificationResponse::from(record))))
}

/// GET /api/notifications - List all notifications
#[utoipa::path(
    get,
    path = "/",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "All stored notifications", body = [NotificationResponse])
    )
)]
async fn get_all_notifications(
    State(state): State<AppState>,
) -> Json<Vec<NotificationResponse>> {
    let records = state.services.notifications.find_all();
    Json(records.into_iter().map(NotificationResponse::from).collect())
}

/// GET /api/notifications/{id} - Get one notification
#[utoipa::path(
    get,
    path = "/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification found", body = NotificationResponse),
        (status = 404, description = "Notification not found", body = ErrorResponse)
    )
)]
async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<NotificationResponse>> {
    let record = state.services.notifications.find_one(id)?;
    Ok(Json(NotificationResponse::from(record)))
}

/// PUT /api/notifications/{id} - Update a notification
///
/// Behaves as a save with a known id: the stored row is overwritten and
/// delivery is attempted again for the new content.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    request_body = NotificationRequest,
    responses(
        (status = 200, description = "Notification updated", body = NotificationResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
async fn update_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<NotificationRequest>,
) -> AppResult<Json<NotificationResponse>> {
    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(AppError::BadRequest {
            message: "Body id does not match path id".to_string(),
        });
    }

    let record = state
        .services
        .notifications
        .update(id, payload.into_new())
        .await?;
    Ok(Json(NotificationResponse::from(record)))
}

/// DELETE /api/notifications/{id} - Delete a notification
///
/// Idempotent: deleting an id that was never stored (or already deleted)
/// also answers 204.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification deleted")
    )
)]
async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.notifications.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
