//! Quota service implementation

use std::sync::Arc;

use tg_shared::config::QuotaConfig;
use tg_shared::utils::email::{mask_email, normalize_email};

use crate::domain::value_objects::QuotaStatus;
use crate::repositories::UserRepository;

/// Reads and consumes generation credits
pub struct QuotaService<U: UserRepository> {
    user_repository: Arc<U>,
    config: QuotaConfig,
}

impl<U: UserRepository> QuotaService<U> {
    /// Create a new quota service
    pub fn new(user_repository: Arc<U>, config: QuotaConfig) -> Self {
        Self {
            user_repository,
            config,
        }
    }

    /// Configured lifetime credit limit
    pub fn limit(&self) -> u32 {
        self.config.limit
    }

    /// Check whether `email` may start another generation
    ///
    /// Reads the store on every call. An email with no record is allowed
    /// the full quota; access control happens upstream. When the store
    /// cannot be read the result follows `QuotaConfig::fail_open`.
    pub async fn check_quota(&self, email: &str) -> QuotaStatus {
        let email = normalize_email(email);
        let limit = self.config.limit;

        match self.user_repository.find_by_email(&email).await {
            Ok(Some(record)) => QuotaStatus::from_count(record.generation_count, limit),
            Ok(None) => QuotaStatus::full(limit),
            Err(e) if self.config.fail_open => {
                tracing::warn!(
                    email = %mask_email(&email),
                    error = %e,
                    event = "quota_check_fail_open",
                    "Identity store unavailable, allowing generation"
                );
                QuotaStatus::full(limit)
            }
            Err(e) => {
                tracing::warn!(
                    email = %mask_email(&email),
                    error = %e,
                    event = "quota_check_fail_closed",
                    "Identity store unavailable, denying generation"
                );
                QuotaStatus::denied(limit)
            }
        }
    }

    /// Consume one credit after a confirmed successful generation
    ///
    /// Fire-and-forget: a missing record or a store error is logged and
    /// otherwise ignored.
    pub async fn record_usage(&self, email: &str) {
        let email = normalize_email(email);

        match self.user_repository.increment_generation_count(&email).await {
            Ok(true) => {
                tracing::info!(
                    email = %mask_email(&email),
                    event = "generation_recorded",
                    "Recorded generation usage"
                );
            }
            Ok(false) => {
                tracing::warn!(
                    email = %mask_email(&email),
                    event = "generation_record_missing_user",
                    "Usage recorded for email without a record, ignored"
                );
            }
            Err(e) => {
                tracing::error!(
                    email = %mask_email(&email),
                    error = %e,
                    event = "generation_record_failed",
                    "Failed to record generation usage"
                );
            }
        }
    }
}
