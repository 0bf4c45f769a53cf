//! Notification repository: the durable store for notification records.
//!
//! Storage is an in-process concurrent map. The repository owns identity
//! assignment: ids come from a monotonic sequence and are never reused or
//! reassigned. Concurrent independent writes are safe; concurrent writes to
//! the same id are last-write-wins.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{NewNotification, Notification};

/// Notification repository
#[derive(Clone, Default)]
pub struct NotificationRepository {
    records: Arc<DashMap<i64, Notification>>,
    sequence: Arc<AtomicI64>,
}

impl NotificationRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists an unsaved notification, assigning it a fresh id.
    ///
    /// Fails with a validation error if a required field is empty; nothing is
    /// stored in that case.
    ///
    /// # Returns
    /// The record as stored, id populated.
    pub fn insert(&self, new: NewNotification) -> AppResult<Notification> {
        new.validate().map_err(AppError::from)?;

        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let record = new.into_record(id);
        self.records.insert(id, record.clone());
        Ok(record)
    }

    /// Overwrites the record stored under `id` (upsert, last-write-wins).
    ///
    /// The stored record keeps the given id; validation rules are the same as
    /// for `insert`.
    pub fn replace(&self, id: i64, new: NewNotification) -> AppResult<Notification> {
        new.validate().map_err(AppError::from)?;

        let record = new.into_record(id);
        self.records.insert(id, record.clone());
        // Keep the sequence ahead of any caller-supplied id so a later insert
        // cannot collide with it.
        self.sequence.fetch_max(id, Ordering::Relaxed);
        Ok(record)
    }

    /// Returns every stored record, sorted by id ascending.
    ///
    /// The underlying map has no meaningful iteration order; sorting makes the
    /// listing deterministic for callers.
    pub fn find_all(&self) -> Vec<Notification> {
        let mut records: Vec<Notification> =
            self.records.iter().map(|e| e.value().clone()).collect();
        records.sort_by_key(|r| r.id);
        records
    }

    /// Looks up a record by id. Absence is `None`, never an error.
    pub fn find_by_id(&self, id: i64) -> Option<Notification> {
        self.records.get(&id).map(|e| e.value().clone())
    }

    /// Removes the record if present.
    ///
    /// # Returns
    /// `true` if a record was removed, `false` if the id was absent.
    pub fn delete(&self, id: i64) -> bool {
        self.records.remove(&id).is_some()
    }

    /// Number of stored records.
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Channel;

    fn sms_record(to: &str) -> NewNotification {
        NewNotification {
            channel: Channel::Sms,
            to: to.to_string(),
            from: Some("+15557654321".to_string()),
            message_uri: "hello".to_string(),
        }
    }

    #[test]
    fn insert_assigns_fresh_unique_ids() {
        let repo = NotificationRepository::new();
        let a = repo.insert(sms_record("+15551230001")).unwrap();
        let b = repo.insert(sms_record("+15551230002")).unwrap();

        assert!(a.id > 0);
        assert_ne!(a.id, b.id);
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn insert_rejects_missing_required_fields_without_storing() {
        let repo = NotificationRepository::new();
        let err = repo.insert(sms_record("")).unwrap_err();

        assert!(matches!(err, AppError::ValidationErrors { .. }));
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn replace_keeps_the_id_and_overwrites_fields() {
        let repo = NotificationRepository::new();
        let saved = repo.insert(sms_record("+15551230001")).unwrap();

        let updated = repo
            .replace(saved.id, sms_record("+15559990000"))
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.to, "+15559990000");
        assert_eq!(repo.count(), 1);
        assert_eq!(repo.find_by_id(saved.id).unwrap().to, "+15559990000");
    }

    #[test]
    fn replace_never_lets_the_sequence_collide() {
        let repo = NotificationRepository::new();
        repo.replace(10, sms_record("+15551230001")).unwrap();
        let next = repo.insert(sms_record("+15551230002")).unwrap();

        assert!(next.id > 10);
    }

    #[test]
    fn find_all_is_sorted_by_id() {
        let repo = NotificationRepository::new();
        for n in 0..5 {
            repo.insert(sms_record(&format!("+1555123000{n}"))).unwrap();
        }

        let ids: Vec<i64> = repo.find_all().iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn delete_is_idempotent() {
        let repo = NotificationRepository::new();
        let saved = repo.insert(sms_record("+15551230001")).unwrap();

        assert!(repo.delete(saved.id));
        assert!(!repo.delete(saved.id));
        assert!(repo.find_by_id(saved.id).is_none());
    }

    #[tokio::test]
    async fn concurrent_inserts_assign_distinct_ids() {
        let repo = NotificationRepository::new();
        let mut handles = Vec::new();
        for n in 0..32 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.insert(sms_record(&format!("+1555000{n:04}"))).unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }
}
