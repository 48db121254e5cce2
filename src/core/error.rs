use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum DashError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The configured base URL cannot have path segments appended (e.g. `mailto:`).
    #[error("base URL cannot carry a category path: {0}")]
    InvalidBase(String),

    /// The server answered with a status outside the 2xx range.
    #[error("HTTP error! status: {status}{}", detail_suffix(.detail))]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The `error` field of the response body, when the server sent one.
        detail: Option<String>,
    },

    /// The response body was not JSON or not shaped as an article array.
    #[error("unexpected response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The background task running a fetch died before producing a result.
    #[error("fetch aborted: {0}")]
    Task(String),
}

/// Coarse classification of a [`DashError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network unreachable or request construction failure.
    Transport,
    /// Non-2xx response status.
    HttpStatus,
    /// Response body could not be decoded.
    Parse,
    /// The fetch never finished.
    Aborted,
}

impl DashError {
    /// Which failure class this error belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Url(_) | Self::InvalidBase(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::HttpStatus,
            Self::Json(_) => ErrorKind::Parse,
            Self::Task(_) => ErrorKind::Aborted,
        }
    }

    /// The HTTP status code, if this is a status error.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
}
