//! error types
//!
//! every failure is handled where it happens and shown to the user; nothing
//! here is fatal to the page.

use thiserror::Error;

/// failure of a request to the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// no response at all (offline, dns, cors, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// response with a non-2xx status; `body` is the raw response text
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },

    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// 401 / 403: the admin session is missing or expired
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }
}

/// failure writing to the system clipboard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// no clipboard api (insecure context or old browser)
    #[error("clipboard api not available")]
    Unavailable,

    /// the write was refused, usually a denied permission
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// invalid configuration override
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid page size {0:?}, expected a positive integer")]
    PageSize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_statuses() {
        let unauthorized = ApiError::Http { status: 401, body: String::new() };
        let forbidden = ApiError::Http { status: 403, body: String::new() };
        let server = ApiError::Http { status: 500, body: String::new() };

        assert!(unauthorized.is_unauthorized());
        assert!(forbidden.is_unauthorized());
        assert!(!server.is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Http { status: 400, body: "Invalid URL".into() };
        assert_eq!(err.to_string(), "http error 400: Invalid URL");
        assert_eq!(ClipboardError::Unavailable.to_string(), "clipboard api not available");
    }
}
