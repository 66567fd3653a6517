//! Quota-checked generation

use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use tg_shared::config::QuotaConfig;
use tg_shared::utils::email::{mask_email, normalize_email};

use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::quota::QuotaService;

use super::traits::GenerationBackend;
use super::types::{GenerationOutcome, GenerationRequest};

/// Runs generations on behalf of verified emails, one credit each
pub struct GenerationGate<U: UserRepository, G: GenerationBackend> {
    quota: Arc<QuotaService<U>>,
    backend: Arc<G>,
    timeout: Duration,
}

impl<U: UserRepository, G: GenerationBackend> GenerationGate<U, G> {
    /// Create a new gate
    ///
    /// # Arguments
    ///
    /// * `quota` - Quota service sharing the identity store
    /// * `backend` - Generation backend
    /// * `timeout` - Upper bound for one backend call
    pub fn new(quota: Arc<QuotaService<U>>, backend: Arc<G>, timeout: Duration) -> Self {
        Self {
            quota,
            backend,
            timeout,
        }
    }

    /// Create a gate bounded by `QuotaConfig::generation_timeout`
    pub fn from_config(quota: Arc<QuotaService<U>>, backend: Arc<G>, config: &QuotaConfig) -> Self {
        Self::new(quota, backend, config.generation_timeout())
    }

    /// Check quota, generate, then consume one credit
    ///
    /// No credit is consumed when the backend fails or times out. The quota
    /// check and the final increment are not atomic; see the `quota` module.
    pub async fn run(&self, email: &str, request: &GenerationRequest) -> DomainResult<GenerationOutcome> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(DomainError::Validation {
                message: "Authentication failed. Please login again.".to_string(),
            });
        }

        let status = self.quota.check_quota(&email).await;
        if !status.allowed {
            tracing::info!(
                email = %mask_email(&email),
                event = "generation_quota_exceeded",
                "Generation refused, no credits left"
            );
            return Err(DomainError::QuotaExceeded { limit: status.limit });
        }

        if request.subject_url.trim().is_empty() || request.garment_url.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "Please provide both Subject and Garment images.".to_string(),
            });
        }

        let output = match timeout(self.timeout, self.backend.generate(request)).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                tracing::warn!(
                    email = %mask_email(&email),
                    error = %e,
                    event = "generation_failed",
                    "Generation backend failed, no credit consumed"
                );
                return Err(DomainError::GenerationFailed { message: e });
            }
            Err(_) => {
                tracing::warn!(
                    email = %mask_email(&email),
                    timeout_secs = self.timeout.as_secs(),
                    event = "generation_timeout",
                    "Generation backend timed out, no credit consumed"
                );
                return Err(DomainError::GenerationFailed {
                    message: format!("timed out after {}s", self.timeout.as_secs()),
                });
            }
        };

        self.quota.record_usage(&email).await;

        Ok(GenerationOutcome {
            output,
            remaining: status.remaining.saturating_sub(1),
        })
    }
}
