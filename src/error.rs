use thiserror::Error;

/// Failures surfaced by services and route thunks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected HTTP status {status}")]
    Http { status: u16 },

    #[error("could not decode response: {0}")]
    Decode(String),
}
