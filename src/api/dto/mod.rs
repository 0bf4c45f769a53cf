//! Data transfer objects for the HTTP API.

mod error;
mod notification;

pub use error::ErrorResponse;
pub use notification::{NotificationRequest, NotificationResponse};
