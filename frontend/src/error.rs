use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemoteError {
    /// The request never produced an HTTP reply (DNS, CORS, timeout, offline).
    #[error("Network error: {0}")]
    NetworkFailure(String),

    #[error("Gateway returned HTTP {status}: {message}")]
    RemoteFailure { status: u16, message: String },

    #[error("Failed to encode request: {0}")]
    InvalidRequest(String),

    #[error("Failed to parse gateway response: {0}")]
    InvalidResponse(String),

    /// Every enrichment facet failed for this video.
    #[error("No captions available for video {0}")]
    NoContentAvailable(String),
}

impl RemoteError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::RemoteFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for an error notice in the UI.
    pub fn user_message(&self) -> String {
        match self {
            RemoteError::NetworkFailure(_) => {
                "Could not reach the gateway. Check your connection and try again.".to_string()
            }
            RemoteError::RemoteFailure { message, .. } => message.clone(),
            RemoteError::InvalidRequest(_) | RemoteError::InvalidResponse(_) => {
                "The gateway request could not be completed.".to_string()
            }
            RemoteError::NoContentAvailable(_) => {
                "Could not load a transcript. This video may not have captions.".to_string()
            }
        }
    }
}

pub type RemoteResult<T> = Result<T, RemoteError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid gateway URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Gateway URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
}
