//! In-memory implementation of UserRepository
//!
//! Backs the test suites and the `STORE_BACKEND=memory` development mode.
//! Each mutation holds the write lock for its whole insert-or-update, which
//! gives the same per-key atomicity the MySQL statements provide.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::UserRecord;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// In-memory user repository
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
    unavailable: Arc<AtomicBool>,
    reject_writes: Arc<AtomicBool>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an unreachable store: every call fails with
    /// `StoreUnavailable` until switched back
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Simulate a store that answers reads and health checks but rejects
    /// `upsert_issued_code`
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the repository holds no records
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Insert or replace a record verbatim (test setup)
    pub async fn insert(&self, record: UserRecord) {
        self.users.write().await.insert(record.email.clone(), record);
    }

    fn ensure_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable {
                message: "in-memory store marked unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn upsert_issued_code(
        &self,
        email: &str,
        name: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.ensure_available()?;
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable {
                message: "in-memory store rejected the write".to_string(),
            });
        }
        let mut users = self.users.write().await;

        match users.get_mut(email) {
            Some(record) => record.reissue(name.to_string(), code.to_string(), now),
            None => {
                users.insert(
                    email.to_string(),
                    UserRecord::new(email.to_string(), name.to_string(), code.to_string(), now),
                );
            }
        }
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        self.ensure_available()?;
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn increment_generation_count(&self, email: &str) -> Result<bool, DomainError> {
        self.ensure_available()?;
        let mut users = self.users.write().await;

        match users.get_mut(email) {
            Some(record) => {
                record.generation_count = record.generation_count.saturating_add(1);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        self.ensure_available()
    }
}
