//! End-to-end dispatch behavior of the notification service.
//!
//! Exercises the save-then-dispatch workflow against stub providers: a
//! recording provider that accepts everything, a failing provider that
//! refuses everything, and the real SMS provider with no credentials.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use courier_rs::config::SmsConfig;
use courier_rs::error::{AppError, AppResult};
use courier_rs::models::{Channel, NewNotification};
use courier_rs::repositories::NotificationRepository;
use courier_rs::services::notifications::{
    ChannelRouter, DispatchOutcome, NotificationProvider, NotificationService, OutboundMessage,
    ProviderReceipt, SmsProvider,
};

/// Provider stub that accepts every message and records what it was asked to
/// send.
#[derive(Clone, Default)]
struct RecordingProvider {
    sends: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl RecordingProvider {
    fn sent(&self) -> Vec<OutboundMessage> {
        self.sends.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationProvider for RecordingProvider {
    async fn send(&self, message: &OutboundMessage) -> AppResult<ProviderReceipt> {
        let mut sends = self.sends.lock().unwrap();
        sends.push(message.clone());
        Ok(ProviderReceipt {
            delivered: true,
            message_id: Some(format!("SM{:04}", sends.len())),
            duration_ms: 1,
        })
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Provider stub that refuses every message with a transport error.
struct FailingProvider;

#[async_trait]
impl NotificationProvider for FailingProvider {
    async fn send(&self, _message: &OutboundMessage) -> AppResult<ProviderReceipt> {
        Err(AppError::Provider {
            provider: "sms",
            message: "number rejected by gateway".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

fn service_with(
    provider: Arc<dyn NotificationProvider>,
) -> (NotificationService, NotificationRepository) {
    let repo = NotificationRepository::new();
    let mut router = ChannelRouter::new();
    router.register(Channel::Sms, provider);
    let service = NotificationService::new(repo.clone(), Arc::new(router));
    (service, repo)
}

fn sms_request() -> NewNotification {
    NewNotification {
        channel: Channel::Sms,
        to: "+15551234567".to_string(),
        from: Some("+15557654321".to_string()),
        message_uri: "hello".to_string(),
    }
}

fn email_request() -> NewNotification {
    NewNotification {
        channel: Channel::Email,
        to: "someone@example.com".to_string(),
        from: None,
        message_uri: "hello".to_string(),
    }
}

// Scenario: a well-formed SMS save with a working provider persists the
// record and hands the provider exactly the persisted to/from/content.
#[tokio::test]
async fn sms_save_persists_and_sends_exact_values() {
    let provider = RecordingProvider::default();
    let (service, _repo) = service_with(Arc::new(provider.clone()));

    let saved = service.create(sms_request()).await.unwrap();

    assert!(saved.id > 0);
    let sends = provider.sent();
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0].to, "+15551234567");
    assert_eq!(sends[0].from.as_deref(), Some("+15557654321"));
    assert_eq!(sends[0].body, "hello");
}

#[tokio::test]
async fn sms_dispatch_outcome_is_sent_with_a_receipt() {
    let provider = RecordingProvider::default();
    let (service, repo) = service_with(Arc::new(provider.clone()));

    let record = repo.insert(sms_request()).unwrap();
    let outcome = service.dispatch(&record).await;

    match outcome {
        DispatchOutcome::Sent { message_id } => assert!(message_id.is_some()),
        other => panic!("expected Sent, got {other:?}"),
    }
}

// Scenario: a channel without a live provider still persists; nothing reaches
// the SMS provider and the outcome is Skipped.
#[tokio::test]
async fn unimplemented_channel_is_skipped_but_persisted() {
    let provider = RecordingProvider::default();
    let (service, repo) = service_with(Arc::new(provider.clone()));

    let saved = service.create(email_request()).await.unwrap();

    assert!(saved.id > 0);
    assert!(provider.sent().is_empty());

    let record = repo.find_by_id(saved.id).unwrap();
    assert_eq!(service.dispatch(&record).await, DispatchOutcome::Skipped);
    assert!(provider.sent().is_empty());
}

// Scenario: a record missing required fields is rejected outright; nothing is
// stored and the provider is never invoked.
#[tokio::test]
async fn invalid_record_is_rejected_before_dispatch() {
    let provider = RecordingProvider::default();
    let (service, repo) = service_with(Arc::new(provider.clone()));

    let mut request = sms_request();
    request.to = String::new();
    let err = service.create(request).await.unwrap_err();

    assert!(matches!(err, AppError::ValidationErrors { .. }));
    assert_eq!(repo.count(), 0);
    assert!(provider.sent().is_empty());
}

// Scenario: a provider failure never undoes or fails the save. The caller
// still gets the persisted record and its id; only the outcome reports it.
#[tokio::test]
async fn provider_failure_does_not_roll_back_persistence() {
    let (service, repo) = service_with(Arc::new(FailingProvider));

    let saved = service.create(sms_request()).await.unwrap();

    assert!(saved.id > 0);
    let stored = repo.find_by_id(saved.id).unwrap();
    assert_eq!(stored, saved);

    match service.dispatch(&stored).await {
        DispatchOutcome::Failed { reason } => {
            assert!(reason.contains("number rejected"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    // Still present after the failed dispatch.
    assert!(repo.find_by_id(saved.id).is_some());
}

// An unconfigured real SMS provider behaves the same way: the configuration
// error is contained and the save succeeds.
#[tokio::test]
async fn missing_credentials_are_contained_like_any_provider_failure() {
    let provider = SmsProvider::new(reqwest::Client::new(), SmsConfig::default());
    let (service, repo) = service_with(Arc::new(provider));

    let saved = service.create(sms_request()).await.unwrap();
    assert!(saved.id > 0);

    let record = repo.find_by_id(saved.id).unwrap();
    match service.dispatch(&record).await {
        DispatchOutcome::Failed { reason } => {
            assert!(reason.contains("Configuration error"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn ids_are_unique_across_saves() {
    let (service, _repo) = service_with(Arc::new(RecordingProvider::default()));

    let mut ids = Vec::new();
    for _ in 0..10 {
        ids.push(service.create(sms_request()).await.unwrap().id);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn delete_is_idempotent_and_lookup_turns_not_found() {
    let (service, _repo) = service_with(Arc::new(RecordingProvider::default()));

    let saved = service.create(email_request()).await.unwrap();
    service.delete(saved.id).unwrap();
    service.delete(saved.id).unwrap();

    assert!(matches!(
        service.find_one(saved.id).unwrap_err(),
        AppError::NotFound { .. }
    ));
}

#[tokio::test]
async fn update_redispatches_the_new_content() {
    let provider = RecordingProvider::default();
    let (service, _repo) = service_with(Arc::new(provider.clone()));

    let saved = service.create(sms_request()).await.unwrap();

    let mut changed = sms_request();
    changed.message_uri = "changed".to_string();
    let updated = service.update(saved.id, changed).await.unwrap();

    assert_eq!(updated.id, saved.id);
    let sends = provider.sent();
    assert_eq!(sends.len(), 2);
    assert_eq!(sends[1].body, "changed");
}
