//! Unit tests for verification service

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::verification_code::CODE_LENGTH;
use crate::errors::DomainError;
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::verification::mock::MockCodeDelivery;
use crate::services::verification::{VerificationService, VerificationServiceConfig};

type Service = VerificationService<InMemoryUserRepository, MockCodeDelivery>;

fn create_service() -> (Service, Arc<InMemoryUserRepository>, Arc<MockCodeDelivery>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let delivery = Arc::new(MockCodeDelivery::new());
    let service = VerificationService::new(
        repo.clone(),
        delivery.clone(),
        VerificationServiceConfig::default(),
    );
    (service, repo, delivery)
}

#[tokio::test]
async fn test_register_delivers_and_records_code() {
    let (service, repo, delivery) = create_service();

    let result = service.register("a@x.com", "A").await.unwrap();
    assert_eq!(result.email, "a@x.com");
    assert!(result.message_id.starts_with("mock-msg-"));

    let sent = delivery.last_code("a@x.com").expect("code should be delivered");
    assert_eq!(sent.len(), CODE_LENGTH);
    assert!(sent.chars().all(|c| c.is_ascii_digit()));

    let record = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(record.verification_code, sent);
    assert_eq!(record.name, "A");
    assert_eq!(record.generation_count, 0);
    assert_eq!(record.last_login_at, result.issued_at);
}

#[tokio::test]
async fn test_register_then_verify_succeeds() {
    let (service, _repo, delivery) = create_service();

    service.register("a@x.com", "A").await.unwrap();
    let code = delivery.last_code("a@x.com").unwrap();

    let verified = service.verify("a@x.com", &code).await.unwrap();
    assert_eq!(verified.email, "a@x.com");
    assert_eq!(verified.name, "A");
}

#[tokio::test]
async fn test_verify_wrong_code_fails() {
    let (service, _repo, delivery) = create_service();

    service.register("a@x.com", "A").await.unwrap();
    let code = delivery.last_code("a@x.com").unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    let err = service.verify("a@x.com", wrong).await.unwrap_err();
    assert_eq!(err, DomainError::InvalidCode);
    assert_eq!(err.user_message(), "Invalid code.");

    // No lockout: the right code still works afterwards
    assert!(service.verify("a@x.com", &code).await.is_ok());
}

#[tokio::test]
async fn test_verify_unknown_user() {
    let (service, _repo, _delivery) = create_service();

    let err = service.verify("ghost@x.com", "123456").await.unwrap_err();
    assert_eq!(err, DomainError::UserNotFound);
}

#[tokio::test]
async fn test_second_registration_replaces_first_code() {
    let (service, repo, delivery) = create_service();

    service.register("a@x.com", "A").await.unwrap();
    let first = delivery.last_code("a@x.com").unwrap();

    // Codes are independent draws; repeat until the two differ
    let mut second = first.clone();
    while second == first {
        service.register("a@x.com", "A").await.unwrap();
        second = delivery.last_code("a@x.com").unwrap();
    }

    assert_eq!(
        service.verify("a@x.com", &first).await.unwrap_err(),
        DomainError::InvalidCode
    );
    assert!(service.verify("a@x.com", &second).await.is_ok());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_reregistration_updates_name_and_keeps_count() {
    let (service, repo, _delivery) = create_service();

    service.register("a@x.com", "A").await.unwrap();
    repo.increment_generation_count("a@x.com").await.unwrap();

    service.register("a@x.com", "Alice").await.unwrap();

    let record = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(record.name, "Alice");
    assert_eq!(record.generation_count, 1);
}

#[tokio::test]
async fn test_delivery_failure_writes_nothing() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let delivery = Arc::new(MockCodeDelivery::failing());
    let service = VerificationService::new(
        repo.clone(),
        delivery,
        VerificationServiceConfig::default(),
    );

    let err = service.register("a@x.com", "A").await.unwrap_err();
    assert!(matches!(err, DomainError::DeliveryFailed { .. }));
    assert_eq!(err.user_message(), "Email Failed: Mock delivery failure");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_delivery_failure_keeps_previous_code_valid() {
    let (service, repo, delivery) = create_service();

    service.register("a@x.com", "A").await.unwrap();
    let original = repo.find_by_email("a@x.com").await.unwrap().unwrap();

    delivery.set_should_fail(true);
    assert!(service.register("a@x.com", "Changed").await.is_err());

    let after = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(after, original);
    assert!(service.verify("a@x.com", &original.verification_code).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_delivery_timeout_is_failure() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let delivery = Arc::new(MockCodeDelivery::with_delay(Duration::from_secs(30)));
    let config = VerificationServiceConfig {
        delivery_timeout: Duration::from_secs(1),
    };
    let service = VerificationService::new(repo.clone(), delivery.clone(), config);

    let err = service.register("a@x.com", "A").await.unwrap_err();

    assert_eq!(
        err,
        DomainError::DeliveryFailed {
            message: "timed out after 1s".to_string()
        }
    );
    assert!(repo.is_empty().await);
    assert_eq!(delivery.message_count(), 0);
}

#[tokio::test]
async fn test_register_sends_nothing_when_store_unreachable() {
    let (service, repo, delivery) = create_service();
    repo.set_unavailable(true);

    let err = service.register("a@x.com", "A").await.unwrap_err();

    assert!(matches!(err, DomainError::StoreUnavailable { .. }));
    assert_eq!(err.user_message(), "Database Error");
    assert_eq!(delivery.message_count(), 0);
}

#[tokio::test]
async fn test_store_write_failure_after_delivery() {
    let (service, repo, delivery) = create_service();
    repo.set_reject_writes(true);

    let err = service.register("a@x.com", "A").await.unwrap_err();

    assert!(matches!(err, DomainError::PartialWriteFailure { .. }));
    assert_eq!(err.user_message(), "Database Write Error");
    // The code went out even though it was never recorded
    assert_eq!(delivery.message_count(), 1);
}

#[tokio::test]
async fn test_verify_fails_closed_when_store_unavailable() {
    let (service, repo, delivery) = create_service();
    service.register("a@x.com", "A").await.unwrap();
    let code = delivery.last_code("a@x.com").unwrap();

    repo.set_unavailable(true);
    let err = service.verify("a@x.com", &code).await.unwrap_err();

    assert!(matches!(err, DomainError::StoreUnavailable { .. }));
}

#[tokio::test]
async fn test_email_is_normalized() {
    let (service, repo, delivery) = create_service();

    service.register("  A@X.com ", "A").await.unwrap();
    assert!(repo.find_by_email("a@x.com").await.unwrap().is_some());

    let code = delivery.last_code("a@x.com").unwrap();
    assert!(service.verify("A@x.COM", &code).await.is_ok());
}

#[tokio::test]
async fn test_submitted_code_is_trimmed() {
    let (service, _repo, delivery) = create_service();

    service.register("a@x.com", "A").await.unwrap();
    let code = delivery.last_code("a@x.com").unwrap();

    assert!(service.verify("a@x.com", &format!(" {}\t", code)).await.is_ok());
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let (service, repo, delivery) = create_service();

    let err = service.register("not-an-email", "A").await.unwrap_err();

    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(delivery.message_count(), 0);
    assert!(repo.is_empty().await);
}
