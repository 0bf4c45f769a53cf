use utoipa::OpenApi;

pub const NOTIFICATION_TAG: &str = "Notifications";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courier",
        description = "A notification recording and dispatch service",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::models::Channel,
        )
    ),
    tags(
        (name = NOTIFICATION_TAG, description = "Notification CRUD and dispatch endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
