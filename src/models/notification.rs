//! Notification domain model.
//!
//! A notification is an independent record: a delivery channel, a destination,
//! an optional sender, and the message payload reference. Records are immutable
//! values; "updating" one produces a new value carrying the same id.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Delivery channel tag on a notification.
///
/// `Sms` is routed to a live provider; `Email` and `Mobile` are reserved for
/// future providers and currently resolve to the no-op adapter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Channel {
    Sms,
    Email,
    Mobile,
}

impl Channel {
    /// Wire/display name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Sms => "SMS",
            Channel::Email => "EMAIL",
            Channel::Mobile => "MOBILE",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted notification record.
///
/// The id is assigned by the repository on first persistence and never changes.
/// Construction goes through `NotificationRepository`; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub channel: Channel,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub message_uri: String,
}

/// An unsaved notification, as supplied by a caller.
///
/// Required fields are enforced here, before the record reaches storage.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewNotification {
    pub channel: Channel,
    #[validate(length(min = 1, message = "Destination must not be empty"))]
    pub to: String,
    pub from: Option<String>,
    #[validate(length(min = 1, message = "Message content must not be empty"))]
    pub message_uri: String,
}

impl NewNotification {
    /// Materializes the persisted record once the store has assigned an id.
    pub(crate) fn into_record(self, id: i64) -> Notification {
        Notification {
            id,
            channel: self.channel,
            to: self.to,
            from: self.from,
            message_uri: self.message_uri,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn channel_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Channel::Sms).unwrap(), "\"SMS\"");
        assert_eq!(serde_json::to_string(&Channel::Email).unwrap(), "\"EMAIL\"");
        assert_eq!(
            serde_json::to_string(&Channel::Mobile).unwrap(),
            "\"MOBILE\""
        );
    }

    #[test]
    fn channel_rejects_unknown_tag() {
        assert!(serde_json::from_str::<Channel>("\"FAX\"").is_err());
    }

    #[test]
    fn absent_from_is_omitted_on_the_wire() {
        let record = Notification {
            id: 7,
            channel: Channel::Email,
            to: "someone@example.com".to_string(),
            from: None,
            message_uri: "hello".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("from").is_none());
    }

    #[test]
    fn empty_required_fields_fail_validation() {
        let new = NewNotification {
            channel: Channel::Sms,
            to: String::new(),
            from: Some("+15557654321".to_string()),
            message_uri: "hello".to_string(),
        };
        let errs = new.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("to"));
    }

    fn channel_strategy() -> impl Strategy<Value = Channel> {
        prop_oneof![
            Just(Channel::Sms),
            Just(Channel::Email),
            Just(Channel::Mobile)
        ]
    }

    proptest! {
        // Mapping a record to its transport representation and back preserves
        // every field exactly, including an absent sender.
        #[test]
        fn record_round_trips_through_json(
            id in 1i64..1_000_000,
            channel in channel_strategy(),
            to in "[+0-9a-zA-Z@.]{1,32}",
            from in proptest::option::of("[+0-9]{5,15}"),
            message_uri in "[ -~]{1,64}",
        ) {
            let record = Notification { id, channel, to, from, message_uri };
            let json = serde_json::to_string(&record).unwrap();
            let back: Notification = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(record, back);
        }
    }
}
