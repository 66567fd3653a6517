//! Resend Email Service Implementation
//!
//! Sends email through the Resend HTTP API.
//!
//! ## Features
//!
//! - Bearer-token authentication
//! - Retry with exponential backoff on rate limiting (429), server errors,
//!   request timeouts and refused connections
//! - No retry on other client errors
//! - Recipient masking in logs

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use tg_shared::config::EmailConfig;
use tg_shared::utils::email::mask_email;

use super::email_service::EmailService;
use crate::InfrastructureError;

/// Default Resend API endpoint
pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Resend service configuration
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// Resend API key
    pub api_key: String,
    /// Sender address
    pub from_address: String,
    /// Maximum attempts for retryable failures
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for one API request in seconds
    pub request_timeout_secs: u64,
    /// Endpoint the messages are posted to
    pub api_url: String,
}

impl ResendConfig {
    /// Build from the shared email configuration
    pub fn from_email_config(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| InfrastructureError::Config("RESEND_API_KEY not set".to_string()))?;

        Ok(Self {
            api_key,
            from_address: config.from_address.clone(),
            max_retries: config.max_retries.max(1),
            retry_delay_ms: config.retry_delay_ms,
            request_timeout_secs: config.request_timeout_secs.max(1),
            api_url: RESEND_API_URL.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct SendEmailPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Outcome of one HTTP attempt
enum Attempt {
    Sent(String),
    Retryable(String),
    Fatal(InfrastructureError),
}

/// Resend email service implementation
pub struct ResendEmailService {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendEmailService {
    /// Create a new Resend email service
    pub fn new(config: ResendConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            from = %config.from_address,
            "Resend email service initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from the shared email configuration
    pub fn from_email_config(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        Self::new(ResendConfig::from_email_config(config)?)
    }

    async fn attempt(&self, payload: &SendEmailPayload<'_>) -> Attempt {
        let response = match self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() || e.is_connect() => return Attempt::Retryable(e.to_string()),
            Err(e) => return Attempt::Fatal(InfrastructureError::Http(e)),
        };

        let status = response.status();
        if status.is_success() {
            return match response.json::<SendEmailResponse>().await {
                Ok(body) => Attempt::Sent(body.id),
                Err(e) => Attempt::Fatal(InfrastructureError::Email(format!(
                    "Unexpected Resend response: {}",
                    e
                ))),
            };
        }

        let body = response.text().await.unwrap_or_default();
        let reason = format!("Resend returned {}: {}", status, body);
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            Attempt::Retryable(reason)
        } else {
            Attempt::Fatal(InfrastructureError::Email(reason))
        }
    }
}

#[async_trait]
impl EmailService for ResendEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, InfrastructureError> {
        let payload = SendEmailPayload {
            from: &self.config.from_address,
            to: [to],
            subject,
            html: html_body,
        };
        let masked = mask_email(to);
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);
        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!(
                to = %masked,
                attempt = attempts,
                max_retries = self.config.max_retries,
                "Sending email via Resend"
            );

            match self.attempt(&payload).await {
                Attempt::Sent(message_id) => {
                    info!(
                        target: "email_service",
                        provider = "resend",
                        to = %masked,
                        message_id = %message_id,
                        "Email sent"
                    );
                    return Ok(message_id);
                }
                Attempt::Fatal(e) => {
                    error!(to = %masked, error = %e, "Email rejected by Resend");
                    return Err(e);
                }
                Attempt::Retryable(reason) if attempts >= self.config.max_retries => {
                    error!(to = %masked, attempts, reason = %reason, "Email delivery failed");
                    return Err(InfrastructureError::Email(format!(
                        "Failed to send email after {} attempts: {}",
                        attempts, reason
                    )));
                }
                Attempt::Retryable(reason) => {
                    warn!(
                        to = %masked,
                        reason = %reason,
                        "Retryable email failure, retrying after {:?}",
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Resend"
    }
}
