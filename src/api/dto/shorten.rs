//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL, form- or JSON-encoded.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Missing and empty are both rejected.
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub url: Option<String>,
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_url_fails_validation() {
        let req: ShortenRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_url_fails_validation() {
        let req: ShortenRequest = serde_json::from_value(json!({ "url": "" })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_present_url_passes_validation() {
        let req: ShortenRequest =
            serde_json::from_value(json!({ "url": "https://example.com" })).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_response_shape() {
        let body = serde_json::to_value(ShortenResponse {
            original_url: "https://www.freecodecamp.com".to_string(),
            short_url: 1,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({ "original_url": "https://www.freecodecamp.com", "short_url": 1 })
        );
    }
}
