//! Error types for cumulo-assist

/// Result type alias for assistant operations
pub type AssistResult<T> = std::result::Result<T, AssistError>;

/// Errors that can occur while talking to the text endpoint.
///
/// These never escape the [`crate::Assistant`] facade; they exist so the
/// transport layer can log precisely before the facade degrades to its
/// fallback string.
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    /// Client configuration error (bad base URL, missing key)
    #[error("configuration error: {0}")]
    Config(String),

    /// Authentication failure (invalid or expired credential)
    #[error("authentication error: {0}")]
    Auth(String),

    /// Rate limited by the provider
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Provider returned a non-success status
    #[error("provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// Network / transport error
    #[error("connection error: {0}")]
    Connection(String),

    /// Response could not be parsed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl AssistError {
    /// Map an HTTP status plus body excerpt to the matching variant
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => AssistError::Auth(message),
            429 => AssistError::RateLimited(message),
            _ => AssistError::Provider { status, message },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, AssistError::Auth(_))
    }
}

impl From<gloo_net::Error> for AssistError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AssistError::Serialization(e.to_string()),
            other => AssistError::Connection(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(AssistError::from_status(401, "bad key".into()).is_auth());
        assert!(AssistError::from_status(403, "forbidden".into()).is_auth());
        assert!(matches!(
            AssistError::from_status(429, "slow down".into()),
            AssistError::RateLimited(_)
        ));
        assert!(matches!(
            AssistError::from_status(500, "boom".into()),
            AssistError::Provider { status: 500, .. }
        ));
    }

    #[test]
    fn display_includes_status() {
        let err = AssistError::Provider {
            status: 503,
            message: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "provider error (503): unavailable");
    }
}
