//! Conversion of failures into the `{success, message}` envelope
//!
//! Every outcome of the auth endpoints is answered with HTTP 200; the
//! `success` flag carries the result.

use actix_web::{error::InternalError, error::JsonPayloadError, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use tg_core::errors::DomainError;
use tg_shared::types::MessageResponse;

/// Message for bodies that are not valid JSON for the endpoint
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";

/// Convert a domain error into the failure envelope
pub fn to_auth_response(error: &DomainError) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::fail(error.user_message()))
}

/// Convert DTO validation errors into the failure envelope
pub fn validation_response(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request data.".to_string());

    HttpResponse::Ok().json(MessageResponse::fail(message))
}

/// `JsonConfig` error handler answering malformed bodies with the envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body on {}: {}", req.path(), err);

    let response = HttpResponse::Ok().json(MessageResponse::fail(INVALID_BODY_MESSAGE));
    InternalError::from_response(err, response).into()
}
