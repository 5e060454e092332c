use thiserror::Error;

/// Failures raised while talking to the upstream weather provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request did not complete within the configured timeout.
    #[error("weather provider timed out")]
    Timeout,

    /// Provider answered with a non-success HTTP status.
    #[error("weather provider returned HTTP {0}")]
    Status(u16),

    /// Body was not JSON or lacked a required field.
    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// Connection, TLS or client setup failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Provider settings cannot produce a working client.
    #[error("invalid provider configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::Malformed(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

/// User-facing error category of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    UpstreamTimeout,
    Internal,
}

/// Outcome of a failed lookup. `Display` yields the message shown to clients;
/// the provider cause stays reachable through `source()` for logging only.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("City name is required.")]
    InvalidInput,

    #[error("City not found or weather service unavailable.")]
    NotFound(#[source] ProviderError),

    #[error("Weather service timed out. Try again.")]
    UpstreamTimeout(#[source] ProviderError),

    #[error("An unexpected error occurred. Please try again.")]
    Internal(String),
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::InvalidInput => ErrorKind::InvalidInput,
            LookupError::NotFound(_) => ErrorKind::NotFound,
            LookupError::UpstreamTimeout(_) => ErrorKind::UpstreamTimeout,
            LookupError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<ProviderError> for LookupError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Timeout => LookupError::UpstreamTimeout(err),
            ProviderError::Status(_) | ProviderError::Malformed(_) => LookupError::NotFound(err),
            ProviderError::Transport(detail) | ProviderError::Config(detail) => {
                LookupError::Internal(detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn provider_errors_map_to_kinds() {
        let cases = [
            (ProviderError::Timeout, ErrorKind::UpstreamTimeout),
            (ProviderError::Status(404), ErrorKind::NotFound),
            (ProviderError::Status(500), ErrorKind::NotFound),
            (ProviderError::Malformed("missing temp_C".into()), ErrorKind::NotFound),
            (ProviderError::Transport("connection refused".into()), ErrorKind::Internal),
            (ProviderError::Config("zero timeout".into()), ErrorKind::Internal),
        ];

        for (provider_err, kind) in cases {
            assert_eq!(LookupError::from(provider_err).kind(), kind);
        }
    }

    #[test]
    fn messages_hide_the_cause() {
        let err = LookupError::from(ProviderError::Malformed("missing current_condition".into()));
        assert_eq!(err.to_string(), "City not found or weather service unavailable.");

        let source = err.source().expect("cause kept for diagnostics");
        assert!(source.to_string().contains("missing current_condition"));
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(LookupError::InvalidInput.to_string(), "City name is required.");
        assert_eq!(
            LookupError::from(ProviderError::Timeout).to_string(),
            "Weather service timed out. Try again."
        );
        assert_eq!(
            LookupError::Internal("boom".into()).to_string(),
            "An unexpected error occurred. Please try again."
        );
    }
}
