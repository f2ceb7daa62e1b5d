//! status + body -> typed result
//!
//! the api client reads every response as text first so that non-2xx bodies
//! (plain text error messages) reach the user unchanged.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// decode a 2xx json body, or turn any other status into `ApiError::Http`
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Http {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappingPage;
    use crate::shorten::ShortenResult;

    #[test]
    fn test_success_body_is_decoded() {
        let result: ShortenResult =
            decode_response(200, r#"{"short_url":"https://short.ly/abc"}"#).unwrap();
        assert_eq!(result.short_url, "https://short.ly/abc");
    }

    #[test]
    fn test_error_status_keeps_raw_body() {
        let err = decode_response::<ShortenResult>(400, "Invalid URL").unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                body: "Invalid URL".into()
            }
        );
    }

    #[test]
    fn test_malformed_success_body() {
        let err = decode_response::<MappingPage>(200, "<html>login</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_status_ranges() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(!is_success(301));
        assert!(!is_success(500));
    }
}
