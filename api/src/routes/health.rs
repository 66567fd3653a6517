use actix_web::{web, HttpResponse};

use tg_core::repositories::UserRepository;
use tg_core::services::verification::CodeDeliveryTrait;
use tg_shared::types::HealthResponse;

use crate::app::AppState;

/// Health check endpoint handler
///
/// Answers 503 when the identity store is unreachable.
pub async fn health<U, D>(state: web::Data<AppState<U, D>>) -> HttpResponse
where
    U: UserRepository + 'static,
    D: CodeDeliveryTrait + 'static,
{
    let store_up = match state.user_repository.health_check().await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Health check: identity store unavailable: {}", e);
            false
        }
    };

    let body = HealthResponse {
        status: if store_up { "healthy" } else { "degraded" }.to_string(),
        service: "tryon-gate-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: if store_up { "up" } else { "down" }.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if store_up {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
