//! Request body extractor accepting form or JSON encoding.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;

/// Decodes the body as JSON when the content type says so, otherwise as an
/// `application/x-www-form-urlencoded` form.
///
/// Any decoding failure is reported as [`AppError::InvalidUrl`], the same
/// outcome as a body without a `url` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOrJson<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                debug!("Rejected JSON body: {}", e);
                AppError::InvalidUrl
            })?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
                debug!("Rejected form body: {}", e);
                AppError::InvalidUrl
            })?;
            Ok(Self(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with(content_type: &str) -> Request {
        Request::builder()
            .header(CONTENT_TYPE, content_type)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(&request_with("application/json")));
        assert!(is_json(&request_with("Application/JSON; charset=utf-8")));
    }

    #[test]
    fn test_structured_suffix_is_not_json() {
        assert!(!is_json(&request_with("application/vnd.api+json")));
        assert!(!is_json(&request_with("application/x-www-form-urlencoded")));
        assert!(!is_json(&Request::new(Body::empty())));
    }
}
