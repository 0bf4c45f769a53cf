//! Application state for the Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::config::Settings;
use crate::external::client::build_http_client;
use crate::models::Channel;
use crate::repositories::Repositories;
use crate::services::Services;
use crate::services::notifications::{ChannelRouter, SmsProvider};

/// Application state containing all shared services and resources.
///
/// Designed for Axum's State extractor; cloning is cheap since every member
/// is `Arc`-backed.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the repositories (health checks)
    pub repositories: Repositories,
    /// Whether SMS gateway credentials were present at startup
    pub sms_configured: bool,
}

impl AppState {
    /// Wires repositories, the channel routing table, and services from the
    /// loaded settings.
    ///
    /// The SMS provider is registered here; EMAIL and MOBILE stay on the
    /// no-op fallback until they get providers of their own.
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let repositories = Repositories::new();

        let client = build_http_client(&settings.sms)?;
        let mut router = ChannelRouter::new();
        router.register(
            Channel::Sms,
            Arc::new(SmsProvider::new(client, settings.sms.clone())),
        );

        let services = Services::new(repositories.clone(), Arc::new(router));

        Ok(Self {
            services,
            repositories,
            sms_configured: settings.sms.is_configured(),
        })
    }
}
