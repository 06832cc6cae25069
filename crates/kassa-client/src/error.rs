//! Client error types.

/// Status code reported for failures where no HTTP response was received.
pub const TRANSPORT_ERROR_STATUS: u16 = 500;

/// Errors that can occur when using the Kassa client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never reached the server or no response came back.
    #[error("HTTP error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-200 status and an error envelope.
    #[error("API error: {status} {code} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// API error code, e.g. `"invalid_request"`.
        code: String,
        /// Human-readable description.
        message: String,
        /// Error ID assigned by the API, useful for support requests.
        id: Option<String>,
        /// Request parameter the error refers to.
        parameter: Option<String>,
    },

    /// A response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request record could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Invalid configuration or missing credentials.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status associated with the error.
    ///
    /// Transport failures report `500`; local errors report `None`.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(_) => Some(TRANSPORT_ERROR_STATUS),
            Self::Api { status, .. } => Some(*status),
            Self::Decode(_) | Self::Encode(_) | Self::Configuration(_) => None,
        }
    }

    /// API error code, for errors reported by the server.
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Whether the server rejected the request (as opposed to a local or transport failure).
    #[must_use]
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
