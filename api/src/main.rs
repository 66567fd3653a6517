use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use tg_api::app::{create_app, AppState};
use tg_api::config::{Config, StoreBackend};
use tg_core::repositories::{InMemoryUserRepository, UserRepository};
use tg_core::services::verification::{CodeDeliveryTrait, VerificationServiceConfig};
use tg_infra::database::{DatabasePool, MySqlUserRepository};
use tg_infra::email::{create_email_service, EmailDeliveryAdapter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // The subscriber also collects `log` records from the handlers
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter())),
        )
        .init();

    log::info!("Starting TryOn Gate API Server ({})", config.environment);

    let email_service = create_email_service(&config.email, config.environment)
        .context("failed to initialize email service")?;
    log::info!("Email provider: {}", email_service.provider_name());
    let delivery = Arc::new(EmailDeliveryAdapter::new(email_service));

    match config.store_backend {
        StoreBackend::MySql => {
            let pool = DatabasePool::new(config.database.clone())
                .await
                .context("failed to connect to the identity store")?;
            pool.run_migrations().await?;
            log::info!("{}", pool.get_statistics());
            let repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
            let result = serve(config, repository, delivery).await;
            pool.close().await;
            result
        }
        StoreBackend::Memory => {
            log::warn!("Using in-memory identity store; records are lost on restart");
            serve(config, Arc::new(InMemoryUserRepository::new()), delivery).await
        }
    }
}

async fn serve<U, D>(config: Config, repository: Arc<U>, delivery: Arc<D>) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    D: CodeDeliveryTrait + 'static,
{
    let app_state = web::Data::new(AppState::new(
        repository,
        delivery,
        VerificationServiceConfig::from(&config.email),
        config.quota.clone(),
    ));
    let cors = config.server.cors.clone();
    let bind_address = config.server.bind_address();
    log::info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
