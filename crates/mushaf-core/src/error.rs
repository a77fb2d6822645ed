use thiserror::Error;

/// Errors that can occur during Mushaf operations.
#[derive(Debug, Error)]
pub enum MushafError {
    /// An argument was rejected before any lookup or network activity.
    #[error("invalid argument '{name}' = {value}: {reason}")]
    InvalidArgument {
        /// Parameter name as it appears in the public API.
        name: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// No chapter matched the query.
    #[error("no chapter with {what} {query:?}{}", suggestion_suffix(.suggestion))]
    NotFound {
        /// What was being matched (e.g. "name", "translated name").
        what: &'static str,
        /// The query that did not match.
        query: String,
        /// The closest known value, when one is close enough to be useful.
        suggestion: Option<String>,
    },

    /// The remote endpoint answered with a non-200 status.
    #[error("remote API unavailable: {url} returned status {status}")]
    RemoteUnavailable {
        /// HTTP status code of the failed fetch.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// The HTTP client failed before a status was received.
    #[error("request to {url} failed: {message}")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// Underlying client error message.
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The decoded chapter list violates the 114-chapter invariants.
    #[error("invalid chapter payload: {0}")]
    InvalidPayload(String),

    /// Client configuration is malformed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean {s:?}?)"),
        None => String::new(),
    }
}

impl MushafError {
    /// Returns `true` for errors caused by the remote side rather than the caller.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::RemoteUnavailable { .. } | Self::Transport { .. } | Self::Decode(_)
        )
    }
}

/// Result type alias for Mushaf operations.
pub type Result<T> = std::result::Result<T, MushafError>;
