//! Notification dispatch with pluggable providers.
//!
//! The core trait `NotificationProvider` allows for easy extension to support
//! different delivery channels; `ChannelRouter` resolves a channel tag to its
//! adapter, and `NotificationService` runs the save-then-dispatch workflow.

mod noop_provider;
mod provider;
mod router;
mod sms_provider;

pub mod notification_service;

pub use noop_provider::NoopProvider;
pub use notification_service::{DispatchOutcome, NotificationService};
pub use provider::{NotificationProvider, OutboundMessage, ProviderReceipt};
pub use router::ChannelRouter;
pub use sms_provider::SmsProvider;
