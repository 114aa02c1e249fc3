use std::fmt;

/// Errors from the trip cache and the planner.
#[derive(Debug)]
pub enum StoreError {
    /// Network or transport failure.
    Transport(String),
    /// The cache answered with a non-success status (after any fallback).
    Http { status: u16, body: String },
    /// A response payload could not be decoded.
    Decode(String),
    /// No stay with this id.
    NotFound(i64),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Transport(msg) => write!(f, "transport error: {msg}"),
            StoreError::Http { status, body } if body.is_empty() => {
                write!(f, "cache http error status={status}")
            }
            StoreError::Http { status, body } => {
                write!(f, "cache http error status={status}: {body}")
            }
            StoreError::Decode(msg) => write!(f, "decode error: {msg}"),
            StoreError::NotFound(id) => write!(f, "no stay with id={id}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        StoreError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Decode(e.to_string())
    }
}
