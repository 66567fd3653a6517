//! Identity store contract.
//!
//! The store is the only shared state in the system. Services never cache a
//! record between calls and never do read-modify-write on a record: the two
//! mutations below must each be a single atomic operation in the backing
//! store, so concurrent requests for the same email cannot lose updates.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::user::UserRecord;
use crate::errors::DomainError;

/// Repository trait for user record persistence
///
/// All emails passed in are already normalized by the caller.
/// An unreachable store is reported as `DomainError::StoreUnavailable`.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use chrono::{DateTime, Utc};
/// use tg_core::domain::entities::user::UserRecord;
/// use tg_core::errors::DomainError;
/// use tg_core::repositories::UserRepository;
///
/// struct NullRepository;
///
/// #[async_trait]
/// impl UserRepository for NullRepository {
///     async fn upsert_issued_code(
///         &self,
///         _email: &str,
///         _name: &str,
///         _code: &str,
///         _now: DateTime<Utc>,
///     ) -> Result<(), DomainError> {
///         Ok(())
///     }
///
///     async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, DomainError> {
///         Ok(None)
///     }
///
///     async fn increment_generation_count(&self, _email: &str) -> Result<bool, DomainError> {
///         Ok(false)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Record a freshly issued code
    ///
    /// Sets code, name and `last_login_at`. When no record exists one is
    /// inserted with `generation_count = 0`; an existing count is never
    /// touched. Concurrent first-time calls for one email must end with a
    /// single record.
    async fn upsert_issued_code(
        &self,
        email: &str,
        name: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError>;

    /// Find a record by email
    ///
    /// # Returns
    /// * `Ok(Some(UserRecord))` - Record found
    /// * `Ok(None)` - No record for this email
    /// * `Err(DomainError)` - Store error
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError>;

    /// Atomically add one to `generation_count`
    ///
    /// # Returns
    /// * `Ok(true)` - Counter incremented
    /// * `Ok(false)` - No record for this email; nothing changed
    /// * `Err(DomainError)` - Store error
    async fn increment_generation_count(&self, email: &str) -> Result<bool, DomainError>;

    /// Check that the store is reachable
    async fn health_check(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
