use actix_web::{web, HttpResponse};

use tg_core::repositories::UserRepository;
use tg_core::services::verification::CodeDeliveryTrait;
use tg_shared::types::MessageResponse;

use crate::app::AppState;
use crate::dto::credits::{CreditsQuery, CreditsResponse};

/// Handler for GET /credits?email=
///
/// Reports the remaining lifetime generation credits of an email.
pub async fn credits<U, D>(
    state: web::Data<AppState<U, D>>,
    query: web::Query<CreditsQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    D: CodeDeliveryTrait + 'static,
{
    if query.email.trim().is_empty() {
        return HttpResponse::Ok().json(MessageResponse::fail("Email is required."));
    }

    let status = state.quota.check_quota(&query.email).await;
    HttpResponse::Ok().json(CreditsResponse::from(status))
}
