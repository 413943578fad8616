use actix_web::{
    HttpResponse, ResponseError,
    dev::ServiceResponse,
    http::{StatusCode, header},
    middleware::{ErrorHandlerResponse, ErrorHandlers},
};
use common::{StoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Every failure a request can end in. Rendered as
/// `{"error": <message>, "status_code": <code>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("Endpoint not found")]
    RouteNotFound,

    #[error("Transaction with ID {0} not found")]
    RecordNotFound(String),

    #[error("Internal server error")]
    Internal,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub status_code: u16,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound | ApiError::RecordNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut response = HttpResponse::build(status);
        if let ApiError::Unauthorized = self {
            response.insert_header((
                header::WWW_AUTHENTICATE,
                r#"Basic realm="Transaction API""#,
            ));
        }
        response.json(ErrorBody {
            error: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ApiError::RecordNotFound(id.to_string()),
            other => {
                log::error!("Store operation failed: {}", other);
                ApiError::Internal
            }
        }
    }
}

fn is_json(headers: &header::HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

/// Rewrites error responses produced by actix itself (extractor and payload
/// failures) into the same JSON body as `ApiError`.
fn json_error_body<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    if is_json(res.headers()) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let status = res.status();
    let message = match res.response().error() {
        Some(err) => err.to_string(),
        None => status.canonical_reason().unwrap_or("Error").to_string(),
    };
    log::warn!("Request failed with {}: {}", status, message);

    let (req, original) = res.into_parts();
    let mut response = HttpResponse::build(status).json(ErrorBody {
        error: message,
        status_code: status.as_u16(),
    });
    for (name, value) in original.headers() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            response.headers_mut().insert(name.clone(), value.clone());
        }
    }

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}

pub fn json_errors<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(json_error_body)
}
