//! Channel router: maps a channel tag to its provider adapter.
//!
//! The routing table is populated once at startup. Unregistered channels
//! resolve to the no-op adapter, so the dispatch flow is uniform regardless of
//! channel support; adding a channel means registering one new adapter here
//! and touching nothing else.

use std::collections::HashMap;
use std::sync::Arc;

use super::noop_provider::NoopProvider;
use super::provider::NotificationProvider;
use crate::models::Channel;

/// Dispatch table from channel tag to provider adapter.
pub struct ChannelRouter {
    routes: HashMap<Channel, Arc<dyn NotificationProvider>>,
    fallback: Arc<dyn NotificationProvider>,
}

impl ChannelRouter {
    /// Creates an empty router; every channel resolves to the no-op adapter
    /// until a provider is registered for it.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            fallback: Arc::new(NoopProvider),
        }
    }

    /// Registers the provider adapter for a channel, replacing any previous
    /// registration.
    pub fn register(&mut self, channel: Channel, provider: Arc<dyn NotificationProvider>) {
        self.routes.insert(channel, provider);
    }

    /// Resolves the adapter for a channel. Total: unknown channels get the
    /// no-op adapter, never an error.
    pub fn resolve(&self, channel: Channel) -> Arc<dyn NotificationProvider> {
        self.routes
            .get(&channel)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for ChannelRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppResult;
    use crate::services::notifications::provider::{OutboundMessage, ProviderReceipt};
    use async_trait::async_trait;

    struct FakeProvider;

    #[async_trait]
    impl NotificationProvider for FakeProvider {
        async fn send(&self, _message: &OutboundMessage) -> AppResult<ProviderReceipt> {
            Ok(ProviderReceipt {
                delivered: true,
                message_id: Some("fake-1".to_string()),
                duration_ms: 0,
            })
        }

        fn name(&self) -> &'static str {
            "fake"
        }
    }

    #[test]
    fn registered_channel_resolves_to_its_adapter() {
        let mut router = ChannelRouter::new();
        router.register(Channel::Sms, Arc::new(FakeProvider));

        assert_eq!(router.resolve(Channel::Sms).name(), "fake");
    }

    #[test]
    fn unregistered_channels_fall_back_to_noop() {
        let mut router = ChannelRouter::new();
        router.register(Channel::Sms, Arc::new(FakeProvider));

        assert_eq!(router.resolve(Channel::Email).name(), "noop");
        assert_eq!(router.resolve(Channel::Mobile).name(), "noop");
    }

    #[test]
    fn registering_again_replaces_the_adapter() {
        let mut router = ChannelRouter::new();
        router.register(Channel::Sms, Arc::new(NoopProvider));
        router.register(Channel::Sms, Arc::new(FakeProvider));

        assert_eq!(router.resolve(Channel::Sms).name(), "fake");
    }
}
