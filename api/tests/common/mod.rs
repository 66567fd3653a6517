//! Shared setup for API integration tests
#![allow(dead_code)]

use actix_web::{test, web};
use std::sync::Arc;

use tg_api::app::AppState;
use tg_core::repositories::InMemoryUserRepository;
use tg_core::services::verification::mock::MockCodeDelivery;
use tg_core::services::verification::VerificationServiceConfig;
use tg_shared::config::QuotaConfig;

pub type TestState = AppState<InMemoryUserRepository, MockCodeDelivery>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub repo: Arc<InMemoryUserRepository>,
    pub delivery: Arc<MockCodeDelivery>,
}

pub fn context() -> TestContext {
    context_with(MockCodeDelivery::new())
}

pub fn context_with(delivery: MockCodeDelivery) -> TestContext {
    let repo = Arc::new(InMemoryUserRepository::new());
    let delivery = Arc::new(delivery);
    let state = web::Data::new(AppState::new(
        repo.clone(),
        delivery.clone(),
        VerificationServiceConfig::default(),
        QuotaConfig::default(),
    ));

    TestContext {
        state,
        repo,
        delivery,
    }
}

pub fn login_request(uri: &str, email: &str, name: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .set_json(serde_json::json!({ "email": email, "name": name }))
}

pub fn verify_request(uri: &str, email: &str, code: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .set_json(serde_json::json!({ "email": email, "code": code }))
}
