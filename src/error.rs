/// Error types shared by the write flows, the remote client and the views
use thiserror::Error;

/// Problems caught locally, before anything is sent to the remote table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Pick or type at least one tag")]
    NoTags,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Not a valid URL: {0}")]
    InvalidUrl(String),

    #[error("No valid URLs found. Paste URLs starting with http:// or https://, one per line")]
    NoImportUrls,

    #[error("Set your {0} in Preferences first")]
    MissingPreference(&'static str),
}

/// Failures reported by (or on the way to) the remote table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("remote table is only reachable from the browser")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}
