use actix_web::{HttpRequest, HttpResponse, http::StatusCode};
use tracing::trace;

use crate::api::middleware::RequestId;

/// Default service for passed-through paths that match no route.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    trace!(
        "No route for {} (request_id={})",
        req.path(),
        RequestId::of(&req).as_deref().unwrap_or("-")
    );
    HttpResponse::build(StatusCode::NOT_FOUND)
        .insert_header(("Content-Type", "text/plain; charset=utf-8"))
        .body("Not Found")
}
