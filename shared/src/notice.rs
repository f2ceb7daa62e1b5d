//! texts of the blocking notifications shown to the user

use std::fmt;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// shorten request answered with an error status; carries the raw body
    ShortenRejected(String),
    /// shorten request got no usable response
    ShortenFailed,
    Copied,
    CopyFailed,
}

impl Notice {
    pub fn for_shorten_error(err: &ApiError) -> Self {
        match err {
            ApiError::Http { body, .. } => Notice::ShortenRejected(body.clone()),
            ApiError::Network(_) | ApiError::Decode(_) => Notice::ShortenFailed,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ShortenRejected(body) => write!(f, "Error: {body}"),
            Notice::ShortenFailed => f.write_str("An error occurred while shortening the URL."),
            Notice::Copied => f.write_str("Copied to clipboard!"),
            Notice::CopyFailed => f.write_str("Failed to copy URL."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shorten::ShortenForm;

    #[test]
    fn test_rejected_shows_raw_body() {
        let err = ApiError::Http {
            status: 400,
            body: "Invalid URL".into(),
        };
        assert_eq!(Notice::for_shorten_error(&err).to_string(), "Error: Invalid URL");
    }

    #[test]
    fn test_empty_url_is_left_to_the_backend() {
        assert_eq!(ShortenForm::new("").encode(), "url=");

        let err = ApiError::Http {
            status: 400,
            body: "URL is required".into(),
        };
        assert_eq!(Notice::for_shorten_error(&err).to_string(), "Error: URL is required");
    }

    #[test]
    fn test_transport_failure_is_generic() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(Notice::for_shorten_error(&err), Notice::ShortenFailed);
        assert_eq!(
            Notice::ShortenFailed.to_string(),
            "An error occurred while shortening the URL."
        );
    }
}
