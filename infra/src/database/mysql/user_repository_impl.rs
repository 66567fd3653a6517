//! MySQL implementation of the UserRepository trait.
//!
//! One row per normalized email. Issuing a code and counting a generation are
//! each a single statement, so concurrent requests for the same email never
//! lose a write at the store level.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use tg_core::domain::entities::UserRecord;
use tg_core::errors::DomainError;
use tg_core::repositories::UserRepository;

/// Insert or reissue; an existing row keeps its generation_count.
/// Uses a row alias, which needs MySQL 8.0.19 or later.
pub(crate) const UPSERT_ISSUED_CODE: &str = r#"
    INSERT INTO users (email, name, verification_code, last_login_at, generation_count)
    VALUES (?, ?, ?, ?, 0) AS issued
    ON DUPLICATE KEY UPDATE
        name = issued.name,
        verification_code = issued.verification_code,
        last_login_at = issued.last_login_at
"#;

/// MySQL implementation of UserRepository
#[derive(Clone)]
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn store_error(context: &str, e: sqlx::Error) -> DomainError {
        tracing::error!(error = %e, context, "Identity store query failed");
        DomainError::StoreUnavailable {
            message: format!("{}: {}", context, e),
        }
    }

    /// Convert database row to UserRecord
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<UserRecord, DomainError> {
        let column_error = |column: &str, e: sqlx::Error| DomainError::StoreUnavailable {
            message: format!("Failed to get {}: {}", column, e),
        };

        Ok(UserRecord {
            email: row
                .try_get("email")
                .map_err(|e| column_error("email", e))?,
            name: row.try_get("name").map_err(|e| column_error("name", e))?,
            verification_code: row
                .try_get("verification_code")
                .map_err(|e| column_error("verification_code", e))?,
            last_login_at: row
                .try_get::<DateTime<Utc>, _>("last_login_at")
                .map_err(|e| column_error("last_login_at", e))?,
            generation_count: row
                .try_get::<u32, _>("generation_count")
                .map_err(|e| column_error("generation_count", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn upsert_issued_code(
        &self,
        email: &str,
        name: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        sqlx::query(UPSERT_ISSUED_CODE)
            .bind(email)
            .bind(name)
            .bind(code)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::store_error("upsert_issued_code", e))?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        let query = r#"
            SELECT email, name, verification_code, last_login_at, generation_count
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::store_error("find_by_email", e))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn increment_generation_count(&self, email: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET generation_count = generation_count + 1
            WHERE email = ?
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::store_error("increment_generation_count", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| Self::store_error("health_check", e))?;
        Ok(())
    }
}
