//! No-op provider for channels without a live transport.
//!
//! Resolving unimplemented channels to this adapter keeps the dispatch flow
//! uniform: the orchestrator always gets a provider back from the router and
//! always gets a receipt from `send`.

use async_trait::async_trait;

use super::provider::{NotificationProvider, OutboundMessage, ProviderReceipt};
use crate::error::AppResult;

/// Provider that accepts every message without delivering anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProvider;

#[async_trait]
impl NotificationProvider for NoopProvider {
    async fn send(&self, message: &OutboundMessage) -> AppResult<ProviderReceipt> {
        tracing::debug!(to = %message.to, "channel is not implemented yet");
        Ok(ProviderReceipt {
            delivered: false,
            message_id: None,
            duration_ms: 0,
        })
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_send_always_succeeds_without_delivering() {
        let provider = NoopProvider;
        let message = OutboundMessage {
            to: "someone@example.com".to_string(),
            from: None,
            body: "hello".to_string(),
        };

        let receipt = provider.send(&message).await.unwrap();
        assert!(!receipt.delivered);
        assert!(receipt.message_id.is_none());
    }
}
