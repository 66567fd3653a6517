//! Email Service Module
//!
//! Email providers for sending verification codes, plus the adapter that
//! plugs them into the core verification service.
//!
//! ## Features
//!
//! - **Email Service Trait**: common interface for all providers
//! - **Resend Support**: production delivery via the Resend HTTP API
//! - **Mock Implementation**: console output for development

pub mod delivery_adapter;
pub mod email_service;
pub mod mock_email;
pub mod resend;

pub use delivery_adapter::EmailDeliveryAdapter;
pub use email_service::{verification_body, EmailService, VERIFICATION_SUBJECT};
pub use mock_email::{MockEmailService, SentEmail};
pub use resend::{ResendConfig, ResendEmailService};

use tg_shared::config::{EmailConfig, EmailProvider, Environment};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create an email service based on configuration
///
/// Resend without an API key falls back to the mock sender outside
/// production and is a configuration error in production.
///
/// # Arguments
///
/// * `config` - Email configuration containing provider settings
/// * `environment` - Deployment environment
pub fn create_email_service(
    config: &EmailConfig,
    environment: Environment,
) -> Result<Box<dyn EmailService>, InfrastructureError> {
    match config.provider {
        EmailProvider::Mock => {
            if environment.is_production() {
                tracing::warn!("Mock email service selected in production; codes will not be sent");
            }
            Ok(Box::new(MockEmailService::new()))
        }
        EmailProvider::Resend => match ResendEmailService::from_email_config(config) {
            Ok(service) => Ok(Box::new(service)),
            Err(e) if environment.is_production() => {
                tracing::error!(error = %e, "Failed to initialize Resend email service");
                Err(e)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Resend unavailable, falling back to mock email service");
                Ok(Box::new(MockEmailService::new()))
            }
        },
    }
}
