//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

pub mod notifications;

pub use notifications::NotificationService;

use std::sync::Arc;

use crate::repositories::Repositories;
use notifications::ChannelRouter;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap: services hold `Arc`-backed repositories and routers.
#[derive(Clone)]
pub struct Services {
    pub notifications: NotificationService,
}

impl Services {
    /// Creates a new Services instance from repositories and the channel
    /// routing table.
    pub fn new(repos: Repositories, router: Arc<ChannelRouter>) -> Self {
        Self {
            notifications: NotificationService::new(repos.notifications, router),
        }
    }
}
