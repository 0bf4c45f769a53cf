//! Notification service: the save-then-dispatch workflow.
//!
//! Persistence always comes first and is the only part whose failure is fatal
//! to the request. Delivery is attempted exactly once, synchronously, after
//! the record is stored; whatever happens to it, the persisted record and its
//! id are returned to the caller unchanged. There is no compensating delete,
//! no retry, and no queued redelivery.

use std::sync::Arc;

use super::provider::OutboundMessage;
use super::router::ChannelRouter;
use crate::error::{AppError, AppResult};
use crate::models::{NewNotification, Notification};
use crate::repositories::NotificationRepository;

/// How a dispatch attempt ended.
///
/// Observational only: outcomes are logged, never folded back into the save
/// result or the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The provider accepted the message; `message_id` is its receipt.
    Sent { message_id: Option<String> },
    /// The channel has no live provider; nothing was attempted.
    Skipped,
    /// The provider reported a configuration or transport failure.
    Failed { reason: String },
}

/// Notification service handling persistence and best-effort delivery.
#[derive(Clone)]
pub struct NotificationService {
    repo: NotificationRepository,
    router: Arc<ChannelRouter>,
}

impl NotificationService {
    /// Creates a new NotificationService.
    pub fn new(repo: NotificationRepository, router: Arc<ChannelRouter>) -> Self {
        Self { repo, router }
    }

    /// Persists a new notification, then attempts delivery.
    ///
    /// # Returns
    /// The persisted record with its assigned id, regardless of how the
    /// delivery attempt ended. Fails only if persistence itself fails, in
    /// which case delivery is never attempted.
    pub async fn create(&self, new: NewNotification) -> AppResult<Notification> {
        tracing::debug!(channel = %new.channel, "request to save notification");
        let saved = self.repo.insert(new)?;
        self.dispatch(&saved).await;
        Ok(saved)
    }

    /// Overwrites the notification stored under `id`, then attempts delivery,
    /// same as a fresh save.
    pub async fn update(&self, id: i64, new: NewNotification) -> AppResult<Notification> {
        tracing::debug!(id, channel = %new.channel, "request to update notification");
        let saved = self.repo.replace(id, new)?;
        self.dispatch(&saved).await;
        Ok(saved)
    }

    /// Lists every stored notification, sorted by id.
    pub fn find_all(&self) -> Vec<Notification> {
        tracing::debug!("request to get all notifications");
        self.repo.find_all()
    }

    /// Gets one notification by id.
    pub fn find_one(&self, id: i64) -> AppResult<Notification> {
        tracing::debug!(id, "request to get notification");
        self.repo.find_by_id(id).ok_or(AppError::NotFound {
            entity: "notification".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }

    /// Deletes the notification by id. Deleting an id that does not exist is
    /// a no-op, not an error.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        tracing::debug!(id, "request to delete notification");
        if !self.repo.delete(id) {
            tracing::debug!(id, "notification was already absent");
        }
        Ok(())
    }

    /// Attempts delivery of an already-persisted record.
    ///
    /// Resolves the channel's adapter and invokes it with exactly the
    /// persisted `to`/`from`/`message_uri`. Provider and configuration errors
    /// are contained here: they are logged and reported in the outcome, and
    /// never propagate to the save caller.
    pub async fn dispatch(&self, record: &Notification) -> DispatchOutcome {
        let provider = self.router.resolve(record.channel);
        let message = OutboundMessage {
            to: record.to.clone(),
            from: record.from.clone(),
            body: record.message_uri.clone(),
        };

        match provider.send(&message).await {
            Ok(receipt) if receipt.delivered => {
                tracing::info!(
                    id = record.id,
                    provider = provider.name(),
                    message_id = receipt.message_id.as_deref().unwrap_or("-"),
                    duration_ms = receipt.duration_ms,
                    "notification sent"
                );
                DispatchOutcome::Sent {
                    message_id: receipt.message_id,
                }
            }
            Ok(_) => {
                tracing::info!(
                    id = record.id,
                    channel = %record.channel,
                    "channel is not implemented yet; delivery skipped"
                );
                DispatchOutcome::Skipped
            }
            Err(e) => {
                tracing::warn!(
                    id = record.id,
                    provider = provider.name(),
                    error = %e,
                    "delivery failed; record remains persisted"
                );
                DispatchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
