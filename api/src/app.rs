//! Application state and factory
//!
//! Builds the shared services once and the Actix-web application per worker.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpResponse};
use std::sync::Arc;

use tg_core::repositories::UserRepository;
use tg_core::services::quota::QuotaService;
use tg_core::services::verification::{
    CodeDeliveryTrait, VerificationService, VerificationServiceConfig,
};
use tg_shared::config::{CorsConfig, QuotaConfig};

use crate::handlers::error::json_error_handler;
use crate::middleware::cors::create_cors;
use crate::routes::auth::{login, verify};
use crate::routes::credits::credits;
use crate::routes::health::health;

/// Application state that holds shared services
pub struct AppState<U, D>
where
    U: UserRepository,
    D: CodeDeliveryTrait,
{
    pub verification: Arc<VerificationService<U, D>>,
    pub quota: Arc<QuotaService<U>>,
    pub user_repository: Arc<U>,
}

impl<U, D> AppState<U, D>
where
    U: UserRepository,
    D: CodeDeliveryTrait,
{
    /// Wire services around one identity store handle
    pub fn new(
        user_repository: Arc<U>,
        delivery: Arc<D>,
        verification_config: VerificationServiceConfig,
        quota_config: QuotaConfig,
    ) -> Self {
        let verification = Arc::new(VerificationService::new(
            user_repository.clone(),
            delivery,
            verification_config,
        ));
        let quota = Arc::new(QuotaService::new(user_repository.clone(), quota_config));

        Self {
            verification,
            quota,
            user_repository,
        }
    }
}

/// Create and configure the application with all dependencies
///
/// `/login` and `/verify` are served both at the root and under `/api`.
pub fn create_app<U, D>(
    app_state: web::Data<AppState<U, D>>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    D: CodeDeliveryTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        .route("/health", web::get().to(health::<U, D>))
        .route("/credits", web::get().to(credits::<U, D>))
        .route("/login", web::post().to(login::<U, D>))
        .route("/verify", web::post().to(verify::<U, D>))
        .service(
            web::scope("/api")
                .route("/login", web::post().to(login::<U, D>))
                .route("/verify", web::post().to(verify::<U, D>))
                .route("/credits", web::get().to(credits::<U, D>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "message": "The requested resource was not found"
    }))
}
