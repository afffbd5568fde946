use thiserror::Error;

/// Result type alias for request operations.
pub type RequestResult<T> = Result<T, RequestError>;

/// Failures reported by a [`Transport`](super::Transport) itself.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport was cancelled before the response completed.
    #[error("transport aborted")]
    Aborted,

    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// Connection, TLS or protocol failure.
    #[error("network error: {0}")]
    Network(String),
}

/// Errors surfaced by [`ajax`](super::ajax).
#[derive(Debug, Error)]
pub enum RequestError {
    /// Completed with a status outside 200..=299.
    #[error("{status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Cancelled through the request handle or by the transport.
    #[error("request aborted")]
    Aborted,

    /// The success body was not valid JSON.
    #[error("invalid JSON from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Transport(TransportError),
}

impl RequestError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, RequestError::Aborted)
    }

    /// Status code of a status failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            RequestError::Status { url, .. } | RequestError::Parse { url, .. } => {
                Some(url.as_str())
            }
            _ => None,
        }
    }
}

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Aborted => RequestError::Aborted,
            other => RequestError::Transport(other),
        }
    }
}
