//! Notification DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Channel, NewNotification, Notification};

/// Request body for creating or updating a notification.
///
/// `id` may only appear on updates; the create endpoint rejects it. `from` is
/// optional on the record; providers that need a sender (SMS) enforce it at
/// send time.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "channel": "SMS",
    "to": "+15551234567",
    "from": "+15557654321",
    "message_uri": "Your appointment is confirmed."
}))]
pub struct NotificationRequest {
    /// Record id; must be absent on create
    pub id: Option<i64>,

    /// Delivery channel (SMS, EMAIL, MOBILE)
    pub channel: Channel,

    #[validate(length(min = 1, max = 255, message = "Destination must be 1-255 characters"))]
    /// Destination address or number
    pub to: String,

    #[validate(length(min = 1, max = 255, message = "Sender must be 1-255 characters"))]
    /// Sender address or number (required in practice for SMS)
    pub from: Option<String>,

    #[validate(length(min = 1, message = "Message content must not be empty"))]
    /// Payload to deliver: a URI or a literal message body
    pub message_uri: String,
}

impl NotificationRequest {
    /// Strips the id, leaving the unsaved record for the store.
    pub fn into_new(self) -> NewNotification {
        NewNotification {
            channel: self.channel,
            to: self.to,
            from: self.from,
            message_uri: self.message_uri,
        }
    }
}

/// Response for a persisted notification.
#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationResponse {
    pub id: i64,
    pub channel: Channel,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub message_uri: String,
}

impl From<Notification> for NotificationResponse {
    fn from(record: Notification) -> Self {
        Self {
            id: record.id,
            channel: record.channel,
            to: record.to,
            from: record.from,
            message_uri: record.message_uri,
        }
    }
}
