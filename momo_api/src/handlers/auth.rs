use actix_web::{
    Error,
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, header},
    middleware::Next,
    web,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::errors::ApiError;
use crate::state::AppState;

/// Splits an `Authorization: Basic <base64(user:password)>` value.
pub fn decode_basic_auth(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Rejects every request without valid Basic credentials before it is
/// routed. CORS pre-flight (`OPTIONS`) passes through unauthenticated.
pub async fn require_basic_auth<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    if req.method() == Method::OPTIONS {
        return next.call(req).await.map(ServiceResponse::map_into_left_body);
    }

    let Some(app_state) = req.app_data::<web::Data<AppState>>() else {
        log::error!("AppState is missing from application data");
        return Ok(req.error_response(ApiError::Internal).map_into_right_body());
    };

    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(decode_basic_auth)
        .is_some_and(|(username, password)| {
            app_state.authorizer.is_authorized(&username, &password)
        });

    if !authorized {
        log::warn!(
            "Rejected unauthenticated request: {} {}",
            req.method(),
            req.path()
        );
        return Ok(req.error_response(ApiError::Unauthorized).map_into_right_body());
    }

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_username_and_password() {
        let value = format!("Basic {}", STANDARD.encode("admin:password123"));
        assert_eq!(
            decode_basic_auth(&value),
            Some(("admin".to_string(), "password123".to_string()))
        );
    }

    #[test]
    fn password_may_contain_colons() {
        let value = format!("Basic {}", STANDARD.encode("admin:pa:ss"));
        assert_eq!(
            decode_basic_auth(&value),
            Some(("admin".to_string(), "pa:ss".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(decode_basic_auth("Bearer abc"), None);
        assert_eq!(decode_basic_auth("Basic invalid_credentials"), None);
        assert_eq!(
            decode_basic_auth(&format!("Basic {}", STANDARD.encode("no-colon"))),
            None
        );
        assert_eq!(decode_basic_auth(""), None);
    }
}
