use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use tg_core::repositories::UserRepository;
use tg_core::services::verification::CodeDeliveryTrait;
use tg_shared::types::MessageResponse;
use tg_shared::utils::email::mask_email;

use crate::app::AppState;
use crate::dto::auth::VerifyRequest;
use crate::handlers::error::{to_auth_response, validation_response};
use crate::handlers::request_id;

/// Handler for POST /verify
///
/// Checks a submitted code against the one most recently sent to the email.
/// Failures such as `"Invalid code."` or `"User not found."` are reported in
/// the body with HTTP 200.
pub async fn verify<U, D>(
    req: HttpRequest,
    state: web::Data<AppState<U, D>>,
    request: web::Json<VerifyRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    D: CodeDeliveryTrait + 'static,
{
    let request_id = request_id(&req);

    if let Err(errors) = request.validate() {
        log::warn!("[{}] Validation failed for verify request: {}", request_id, errors);
        return validation_response(&errors);
    }

    match state.verification.verify(&request.email, &request.code).await {
        Ok(result) => {
            log::info!("[{}] Email verified: {}", request_id, mask_email(&result.email));
            HttpResponse::Ok().json(MessageResponse::ok("Verified!"))
        }
        Err(error) => {
            log::warn!(
                "[{}] Verification failed for: {}, error: {}",
                request_id,
                mask_email(&request.email),
                error
            );
            to_auth_response(&error)
        }
    }
}
