//! Core notification provider trait and types.
//!
//! A provider wraps one concrete delivery transport behind a uniform `send`
//! operation, so the dispatch flow does not care which channel it is driving.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// The transport-level message handed to a provider: destination, optional
/// sender, and the payload taken verbatim from the persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub to: String,
    pub from: Option<String>,
    pub body: String,
}

/// Result of a successful provider call.
///
/// `message_id` is the gateway's identifier for the accepted message. It is
/// used for traceability in logs only and is never written back onto the
/// notification record. `delivered: false` marks the no-op path for channels
/// without a live provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderReceipt {
    pub delivered: bool,
    pub message_id: Option<String>,
    /// Time taken for the operation in milliseconds
    pub duration_ms: u64,
}

/// Trait for notification providers (SMS today; email, mobile push later).
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync for use in async contexts.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Attempts delivery of one message.
    ///
    /// # Returns
    /// A receipt on acceptance; a `Configuration` or `Provider` error on
    /// failure. Callers above the dispatch boundary contain both.
    async fn send(&self, message: &OutboundMessage) -> AppResult<ProviderReceipt>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;
}
