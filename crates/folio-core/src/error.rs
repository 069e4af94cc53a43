//! Closed error taxonomy for everything that crosses the wire.
//!
//! The client normalizes every failed exchange into one of these four
//! kinds; callers branch on the variant and never on raw status codes.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401/403 — the token is missing, expired or rejected. Always forces
    /// session invalidation and a redirect to the login screen.
    #[error("{0}")]
    Auth(String),

    /// Any other 4xx — carries the server's message verbatim.
    #[error("{0}")]
    Validation(String),

    /// The request never completed (connect/timeout/body failure).
    #[error("network error: {0}")]
    Network(String),

    /// 5xx — not attributed to user input.
    #[error("server error (HTTP {0})")]
    Server(u16),
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_server_message_verbatim() {
        let err = ApiError::Validation("Missing or empty required field: title".into());
        assert_eq!(
            err.to_string(),
            "Missing or empty required field: title"
        );
    }

    #[test]
    fn test_is_auth() {
        assert!(ApiError::Auth("Invalid credentials".into()).is_auth());
        assert!(!ApiError::Server(500).is_auth());
        assert!(!ApiError::Network("connection refused".into()).is_auth());
    }
}
