use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered 429. Callers are expected to stop and resume later.
    #[error("Rate limit exceeded (resets at {})", .reset.as_deref().unwrap_or("unknown"))]
    RateLimited { reset: Option<String> },

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ClientError::RateLimited { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_display() {
        let err = ClientError::RateLimited {
            reset: Some("2024-01-01T00:05:00.000Z".to_string()),
        };
        assert!(err.is_rate_limited());
        assert_eq!(
            err.to_string(),
            "Rate limit exceeded (resets at 2024-01-01T00:05:00.000Z)"
        );

        let err = ClientError::RateLimited { reset: None };
        assert_eq!(err.to_string(), "Rate limit exceeded (resets at unknown)");
    }

    #[test]
    fn test_api_error_is_not_rate_limit() {
        let err = ClientError::Api {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert!(!err.is_rate_limited());
        assert_eq!(err.to_string(), "API error (503): maintenance");
    }

    #[test]
    fn test_decode_error_leaves_cause_to_source() {
        use std::error::Error as _;

        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cause_text = cause.to_string();
        let err = ClientError::from(cause);

        assert_eq!(err.to_string(), "Failed to decode response");
        assert_eq!(err.source().unwrap().to_string(), cause_text);
    }
}
