pub mod error;

use actix_web::HttpRequest;
use uuid::Uuid;

/// Request id from `X-Request-Id`, or a fresh one
pub fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get("X-Request-Id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
