//! ==============================================================================
//! shorten.rs - shorten form request / response
//! ==============================================================================
//!
//! ```text
//! POST <form action>
//!     content-type: application/x-www-form-urlencoded
//!     body: url=<percent-encoded url>
//!
//!     2xx  -> {"short_url": "https://short.ly/abc"}
//!     else -> plain text error message
//! ```
//!
//! the url is opaque here; the backend validates it.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// name of the form field carrying the url
pub const URL_FIELD: &str = "url";

// ==============================================================================
// types
// ==============================================================================

/// the shorten form as submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenForm {
    pub url: String,
}

/// successful shorten response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResult {
    pub short_url: String,
}

impl ShortenForm {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// urlencoded request body
    pub fn encode(&self) -> String {
        format!("{}={}", URL_FIELD, urlencoding::encode(&self.url))
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_plain_url() {
        let form = ShortenForm::new("https://example.com");
        assert_eq!(form.encode(), "url=https%3A%2F%2Fexample.com");
    }

    #[test]
    fn test_encode_escapes_query_separators() {
        let form = ShortenForm::new("https://example.com/search?q=a b&page=2");
        let body = form.encode();

        assert!(body.starts_with("url="));
        // a raw '&' or '=' would split the form into several fields
        assert_eq!(body.matches('&').count(), 0);
        assert_eq!(body.matches('=').count(), 1);
        assert!(body.contains("%20"));
    }

    #[test]
    fn test_encode_is_opaque() {
        assert_eq!(ShortenForm::new("not a url").encode(), "url=not%20a%20url");
        assert_eq!(ShortenForm::new("").encode(), "url=");
    }
}
