//! Email Service Interface
//!
//! Defines the trait for email providers that transmit verification codes.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Subject line of verification code emails
pub const VERIFICATION_SUBJECT: &str = "Your Verification Code";

/// Render the HTML body of a verification code email
pub fn verification_body(code: &str) -> String {
    format!("<p>Your Verification Code is: <strong>{}</strong></p>", code)
}

/// Email service trait for sending messages
///
/// Implementations include:
/// - Resend HTTP API
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an HTML email
    ///
    /// # Arguments
    ///
    /// * `to` - Recipient address
    /// * `subject` - Subject line
    /// * `html_body` - HTML content
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Send a verification code using the standard subject and body
    async fn send_verification_code(
        &self,
        to: &str,
        code: &str,
    ) -> Result<String, InfrastructureError> {
        self.send_email(to, VERIFICATION_SUBJECT, &verification_body(code))
            .await
    }

    /// Name of the provider (e.g. "Resend", "Mock")
    fn provider_name(&self) -> &str;
}
