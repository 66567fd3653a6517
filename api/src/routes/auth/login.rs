use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use tg_core::repositories::UserRepository;
use tg_core::services::verification::CodeDeliveryTrait;
use tg_shared::types::MessageResponse;
use tg_shared::utils::email::mask_email;

use crate::app::AppState;
use crate::dto::auth::LoginRequest;
use crate::handlers::error::{to_auth_response, validation_response};
use crate::handlers::request_id;

/// Handler for POST /login
///
/// Emails a fresh 6-digit code and records it for the address.
///
/// # Request Body
///
/// ```json
/// { "email": "a@x.com", "name": "A" }
/// ```
///
/// # Response (always 200 OK)
///
/// ```json
/// { "success": true, "message": "Code sent!" }
/// ```
pub async fn login<U, D>(
    req: HttpRequest,
    state: web::Data<AppState<U, D>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    D: CodeDeliveryTrait + 'static,
{
    let request_id = request_id(&req);
    log::info!(
        "[{}] Processing login request for email: {}",
        request_id,
        mask_email(&request.email)
    );

    if let Err(errors) = request.validate() {
        log::warn!("[{}] Validation failed for login request: {}", request_id, errors);
        return validation_response(&errors);
    }

    match state.verification.register(&request.email, &request.name).await {
        Ok(result) => {
            log::info!(
                "[{}] Verification code sent to: {}, message_id: {}",
                request_id,
                mask_email(&result.email),
                result.message_id
            );
            HttpResponse::Ok().json(MessageResponse::ok("Code sent!"))
        }
        Err(error) => {
            log::error!(
                "[{}] Login failed for: {}, error: {}",
                request_id,
                mask_email(&request.email),
                error
            );
            to_auth_response(&error)
        }
    }
}
