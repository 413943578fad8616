mod auth;
mod transactions;

use actix_web::{
    HttpRequest, HttpResponse,
    http::{Method, header},
    middleware::DefaultHeaders,
    web,
};
pub use auth::*;
pub use transactions::*;

use crate::errors::ApiError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_transactions)
        .service(get_transaction)
        .service(create_transaction)
        .service(update_transaction)
        .service(delete_transaction);
}

/// Permissive cross-origin headers, added to every response.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((
            header::ACCESS_CONTROL_ALLOW_METHODS,
            "GET, POST, PUT, DELETE, OPTIONS",
        ))
        .add((
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "Content-Type, Authorization",
        ))
}

/// Answers pre-flight requests on any path; everything else has no route.
pub async fn fallback(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    if req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }
    log::warn!("No route for {} {}", req.method(), req.path());
    Err(ApiError::RouteNotFound)
}
