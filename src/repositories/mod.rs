//! Repository layer for data access operations.

mod notification_repo;

pub use notification_repo::NotificationRepository;

/// Aggregates all repositories for convenient access.
///
/// Cloning is cheap: the underlying stores are `Arc`-backed.
#[derive(Clone, Default)]
pub struct Repositories {
    pub notifications: NotificationRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new() -> Self {
        Self {
            notifications: NotificationRepository::new(),
        }
    }
}
