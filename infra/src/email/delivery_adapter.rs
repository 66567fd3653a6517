//! Email Delivery Trait Adapter
//!
//! Bridges any infrastructure `EmailService` to the core
//! `CodeDeliveryTrait` used by the verification service.

use async_trait::async_trait;
use tg_core::services::verification::CodeDeliveryTrait;

use super::email_service::EmailService;

/// Adapter that implements the core CodeDeliveryTrait over an email provider
pub struct EmailDeliveryAdapter {
    inner: Box<dyn EmailService>,
}

impl EmailDeliveryAdapter {
    /// Wrap an email service
    pub fn new(inner: Box<dyn EmailService>) -> Self {
        Self { inner }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl CodeDeliveryTrait for EmailDeliveryAdapter {
    async fn deliver(&self, destination: &str, code: &str) -> Result<String, String> {
        self.inner
            .send_verification_code(destination, code)
            .await
            .map_err(|e| e.to_string())
    }
}
