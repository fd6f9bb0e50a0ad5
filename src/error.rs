// Error types for the entry client. Every failure of a call surfaces here
// unchanged; the client never retries or recovers locally.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS,
    /// transport timeout) or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The HTTP client or a request could not be assembled; nothing was sent.
    #[error("could not build request: {0}")]
    Build(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status. Headers and body are kept
    /// verbatim.
    #[error("request failed: {status} - {body}")]
    Status {
        status: StatusCode,
        headers: HeaderMap,
        body: String,
    },

    #[error("invalid base url `{url}`")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base url `{0}` cannot carry a path")]
    UnsupportedBaseUrl(String),

    #[error("page and limit must be at least 1 (got page={page}, limit={limit})")]
    InvalidPage { page: u32, limit: u32 },

    #[error("response body is not json: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Status code of an application-level failure, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Headers of an application-level failure, if this is one.
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            ApiError::Status { headers, .. } => Some(headers),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
