use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced to the operator. Every variant renders to a single
/// human-readable message; no structured codes cross into the shell.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. `message` is the
    /// `message` field of the JSON error body when the server sent one,
    /// else a per-operation fallback.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The request never produced a server answer.
    #[error("An unexpected error occurred")]
    Network(#[from] reqwest::Error),

    /// Local misuse of a component, e.g. submitting a form that never loaded.
    #[error("{0}")]
    State(String),
}

impl ApiError {
    pub fn state(message: impl Into<String>) -> Self {
        ApiError::State(message.into())
    }

    /// The operator-facing message for this error.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
