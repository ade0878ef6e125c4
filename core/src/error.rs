//! Error types for the board API client.
//!
//! # Design
//! The synchronizer deliberately swallows most of these (a failed poll is
//! retried by the next tick, a failed write is logged and dropped), but the
//! client and transport layers still report precisely what went wrong so
//! callers holding a `BoardClient` directly can react.

use std::fmt;

/// Errors produced while building, executing, or parsing a board API call.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    Http { status: u16, body: String },

    /// The request could not be executed (connection refused, timeout, ...).
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
