mod notification;

pub use notification::{Channel, NewNotification, Notification};
