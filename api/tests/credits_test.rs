//! Integration tests for GET /credits and GET /health

mod common;

use actix_web::{http::StatusCode, test};

use tg_api::app::create_app;
use tg_api::dto::CreditsResponse;
use tg_core::repositories::UserRepository;
use tg_shared::config::CorsConfig;
use tg_shared::types::{HealthResponse, MessageResponse};

use common::{context, login_request};

fn credits_request(email: &str) -> test::TestRequest {
    test::TestRequest::get().uri(&format!("/credits?email={}", email))
}

#[actix_web::test]
async fn test_credits_count_down() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    test::call_service(&app, login_request("/login", "a@x.com", "A").to_request()).await;

    let body: CreditsResponse =
        test::call_and_read_body_json(&app, credits_request("a@x.com").to_request()).await;
    assert_eq!(
        body,
        CreditsResponse {
            success: true,
            message: "Credits: 3/3".to_string(),
            allowed: true,
            remaining: 3,
            limit: 3,
        }
    );

    for _ in 0..3 {
        ctx.state.quota.record_usage("a@x.com").await;
    }

    let body: CreditsResponse =
        test::call_and_read_body_json(&app, credits_request("a@x.com").to_request()).await;
    assert!(!body.allowed);
    assert_eq!(body.remaining, 0);
    assert_eq!(body.message, "Credits: 0/3");
}

#[actix_web::test]
async fn test_credits_unknown_email_is_full() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;

    let body: CreditsResponse =
        test::call_and_read_body_json(&app, credits_request("ghost@x.com").to_request()).await;
    assert!(body.allowed);
    assert_eq!(body.remaining, 3);
}

#[actix_web::test]
async fn test_credits_fail_open_when_store_down() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    test::call_service(&app, login_request("/login", "a@x.com", "A").to_request()).await;
    for _ in 0..3 {
        ctx.repo.increment_generation_count("a@x.com").await.unwrap();
    }
    ctx.repo.set_unavailable(true);

    let body: CreditsResponse =
        test::call_and_read_body_json(&app, credits_request("a@x.com").to_request()).await;
    assert!(body.allowed);
    assert_eq!(body.remaining, 3);
}

#[actix_web::test]
async fn test_credits_requires_email() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;

    let body: MessageResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/credits").to_request(),
    )
    .await;
    assert_eq!(body, MessageResponse::fail("Email is required."));
}

#[actix_web::test]
async fn test_health_reports_store_state() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: HealthResponse = test::read_body_json(resp).await;
    assert_eq!(body.status, "healthy");
    assert_eq!(body.store, "up");

    ctx.repo.set_unavailable(true);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: HealthResponse = test::read_body_json(resp).await;
    assert_eq!(body.status, "degraded");
    assert_eq!(body.store, "down");
}

#[actix_web::test]
async fn test_unknown_route_is_404() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
