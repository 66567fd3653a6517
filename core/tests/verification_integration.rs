//! End-to-end flow over the in-memory store: login, verify, spend credits

use std::sync::Arc;

use tg_core::errors::DomainError;
use tg_core::repositories::{InMemoryUserRepository, UserRepository};
use tg_core::services::quota::QuotaService;
use tg_core::services::verification::mock::MockCodeDelivery;
use tg_core::services::verification::{VerificationService, VerificationServiceConfig};
use tg_core::QuotaStatus;
use tg_shared::config::QuotaConfig;

fn status(allowed: bool, remaining: u32) -> QuotaStatus {
    QuotaStatus {
        allowed,
        remaining,
        limit: 3,
    }
}

#[tokio::test]
async fn test_register_verify_and_exhaust_quota() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let delivery = Arc::new(MockCodeDelivery::new());
    let verification = VerificationService::new(
        repo.clone(),
        delivery.clone(),
        VerificationServiceConfig::default(),
    );
    let quota = QuotaService::new(repo.clone(), QuotaConfig::default());

    verification.register("a@x.com", "A").await.unwrap();
    let code = delivery.last_code("a@x.com").unwrap();

    assert!(verification.verify("a@x.com", &code).await.is_ok());
    if code != "000000" {
        let err = verification.verify("a@x.com", "000000").await.unwrap_err();
        assert_eq!(err.user_message(), "Invalid code.");
    }

    assert_eq!(quota.check_quota("a@x.com").await, status(true, 3));
    for _ in 0..3 {
        quota.record_usage("a@x.com").await;
    }
    assert_eq!(quota.check_quota("a@x.com").await, status(false, 0));

    // Logging in again issues a new code but never restores credits
    verification.register("a@x.com", "A").await.unwrap();
    assert_eq!(quota.check_quota("a@x.com").await, status(false, 0));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_logins_create_one_record() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let delivery = Arc::new(MockCodeDelivery::new());
    let verification = Arc::new(VerificationService::new(
        repo.clone(),
        delivery.clone(),
        VerificationServiceConfig::default(),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let verification = verification.clone();
            tokio::spawn(async move { verification.register("a@x.com", "A").await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.len().await, 1);
    let record = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(record.generation_count, 0);
    // Whichever write landed last holds one of the delivered codes
    assert!(delivery.codes_for("a@x.com").contains(&record.verification_code));
}

#[tokio::test]
async fn test_unreachable_store() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let delivery = Arc::new(MockCodeDelivery::new());
    let verification = VerificationService::new(
        repo.clone(),
        delivery.clone(),
        VerificationServiceConfig::default(),
    );
    let quota = QuotaService::new(repo.clone(), QuotaConfig::default());
    repo.set_unavailable(true);

    // Registration and verification fail closed, quota fails open
    assert!(matches!(
        verification.register("a@x.com", "A").await,
        Err(DomainError::StoreUnavailable { .. })
    ));
    assert_eq!(delivery.message_count(), 0);
    assert!(matches!(
        verification.verify("a@x.com", "123456").await,
        Err(DomainError::StoreUnavailable { .. })
    ));
    assert_eq!(quota.check_quota("a@x.com").await, status(true, 3));
}
