//! Handler for the shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::FormOrJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short identifier for a URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// `url=https://www.freecodecamp.com` as a form, or
///
/// ```json
/// { "url": "https://www.freecodecamp.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.com", "short_url": 1 }
/// ```
///
/// # Errors
///
/// Returns `{"error": "invalid url"}` if `url` is missing or empty, or if
/// validation fails for any reason.
pub async fn shorten_handler(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let Some(url) = payload.url else {
        return Err(AppError::InvalidUrl);
    };

    let entry = state.link_service.shorten(&url).await?;

    Ok(Json(ShortenResponse {
        original_url: entry.original_url,
        short_url: entry.id,
    }))
}
