//! Main verification service implementation

use chrono::Utc;
use std::sync::Arc;
use tokio::time::timeout;

use tg_shared::utils::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::config::VerificationServiceConfig;
use super::traits::CodeDeliveryTrait;
use super::types::{RegisterResult, VerifyResult};

/// Verification service for email one-time codes
pub struct VerificationService<U: UserRepository, D: CodeDeliveryTrait> {
    /// Identity store
    user_repository: Arc<U>,
    /// Channel used to transmit codes
    delivery: Arc<D>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<U: UserRepository, D: CodeDeliveryTrait> VerificationService<U, D> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Identity store implementation
    /// * `delivery` - Code delivery channel
    /// * `config` - Service configuration
    pub fn new(user_repository: Arc<U>, delivery: Arc<D>, config: VerificationServiceConfig) -> Self {
        Self {
            user_repository,
            delivery,
            config,
        }
    }

    /// Issue a fresh code to an email address
    ///
    /// This method:
    /// 1. Normalizes and validates the email
    /// 2. Checks the identity store is reachable; nothing is sent otherwise
    /// 3. Generates a new 6-digit code
    /// 4. Delivers it, bounded by the configured timeout
    /// 5. Records code, name and timestamp only if delivery succeeded
    ///
    /// A failed or timed-out delivery leaves any previous record, and its
    /// still-valid code, untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(RegisterResult)` - Code delivered and recorded
    /// * `Err(DomainError::StoreUnavailable)` - Store unreachable, nothing was sent
    /// * `Err(DomainError::DeliveryFailed)` - Nothing was written
    /// * `Err(DomainError::PartialWriteFailure)` - Code was sent but could not be recorded
    pub async fn register(&self, email: &str, name: &str) -> DomainResult<RegisterResult> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(DomainError::Validation {
                message: "Invalid email address.".to_string(),
            });
        }
        let name = name.trim();

        self.user_repository.health_check().await.map_err(|e| {
            tracing::error!(
                email = %mask_email(&email),
                error = %e,
                event = "register_store_unavailable",
                "Identity store unreachable, no code sent"
            );
            e
        })?;

        let code = VerificationCode::generate();
        tracing::info!(
            email = %mask_email(&email),
            event = "code_generated",
            "Generated new verification code"
        );

        let message_id = match timeout(
            self.config.delivery_timeout,
            self.delivery.deliver(&email, code.as_str()),
        )
        .await
        {
            Ok(Ok(message_id)) => message_id,
            Ok(Err(e)) => {
                tracing::warn!(
                    email = %mask_email(&email),
                    error = %e,
                    event = "code_delivery_failed",
                    "Verification code delivery failed, record left unchanged"
                );
                return Err(DomainError::DeliveryFailed { message: e });
            }
            Err(_) => {
                tracing::warn!(
                    email = %mask_email(&email),
                    timeout_secs = self.config.delivery_timeout.as_secs(),
                    event = "code_delivery_timeout",
                    "Verification code delivery timed out, record left unchanged"
                );
                return Err(DomainError::DeliveryFailed {
                    message: format!(
                        "timed out after {}s",
                        self.config.delivery_timeout.as_secs()
                    ),
                });
            }
        };

        let issued_at = Utc::now();
        // The code is already in the user's inbox here; a failed write means
        // it can never be verified.
        self.user_repository
            .upsert_issued_code(&email, name, code.as_str(), issued_at)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(&email),
                    message_id = %message_id,
                    error = %e,
                    event = "code_record_failed",
                    "Verification code delivered but not recorded"
                );
                DomainError::PartialWriteFailure {
                    message: e.to_string(),
                }
            })?;

        tracing::info!(
            email = %mask_email(&email),
            message_id = %message_id,
            event = "code_issued",
            "Verification code delivered and recorded"
        );

        Ok(RegisterResult {
            email,
            message_id,
            issued_at,
        })
    }

    /// Check a submitted code against the most recently issued one
    ///
    /// There is no attempt limit and no expiry: a code stays valid until the
    /// next successful `register` for the same email replaces it.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyResult)` - Code matches
    /// * `Err(DomainError::UserNotFound)` - No record for the email
    /// * `Err(DomainError::InvalidCode)` - Code differs
    /// * `Err(DomainError::StoreUnavailable)` - Store could not be read
    pub async fn verify(&self, email: &str, submitted_code: &str) -> DomainResult<VerifyResult> {
        let email = normalize_email(email);

        let record = self
            .user_repository
            .find_by_email(&email)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(&email),
                    error = %e,
                    event = "verification_store_error",
                    "Identity store error during verification"
                );
                e
            })?
            .ok_or_else(|| {
                tracing::info!(
                    email = %mask_email(&email),
                    event = "verification_unknown_user",
                    "Verification attempted for unknown email"
                );
                DomainError::UserNotFound
            })?;

        if VerificationCode::matches(&record.verification_code, submitted_code) {
            tracing::info!(
                email = %mask_email(&email),
                event = "code_verified",
                "Verification code successfully verified"
            );
            Ok(VerifyResult {
                email: record.email,
                name: record.name,
            })
        } else {
            tracing::warn!(
                email = %mask_email(&email),
                event = "code_mismatch",
                "Verification code did not match"
            );
            Err(DomainError::InvalidCode)
        }
    }
}
