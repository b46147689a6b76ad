//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::AppError;
use crate::state::AppState;

/// Bytes escaped before a stored URL is placed in a `Location` header.
const LOCATION: &AsciiSet = &CONTROLS.add(b' ');

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL.
///
/// # Errors
///
/// Returns `{"error": "Wrong format"}` if the segment is not all digits.
/// Returns `{"error": "No short URL found for the given input"}` if no entry
/// has that identifier.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let entry = state.link_service.resolve_segment(&short_url).await?;

    let location = HeaderValue::from_str(&encode_location(&entry.original_url))
        .map_err(|e| AppError::internal(format!("Unusable redirect target: {e}")))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Percent-encodes bytes that cannot appear in a `Location` header.
///
/// Printable ASCII passes through untouched, including existing `%` escapes.
fn encode_location(url: &str) -> String {
    utf8_percent_encode(url, LOCATION).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_location_keeps_printable_ascii() {
        let url = "https://example.com/a/b?x=1&y=%20#frag";
        assert_eq!(encode_location(url), url);
    }

    #[test]
    fn test_encode_location_escapes_space_and_unicode() {
        assert_eq!(
            encode_location("https://example.com/a b"),
            "https://example.com/a%20b"
        );
        assert_eq!(
            encode_location("https://example.com/é"),
            "https://example.com/%C3%A9"
        );
    }
}
