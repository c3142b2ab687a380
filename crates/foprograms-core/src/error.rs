// SPDX-License-Identifier: Apache-2.0

//! Error types for foprograms.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during foprograms operations.
#[derive(Error, Debug)]
pub enum FoprogramsError {
    /// Network/HTTP error from reqwest while sending or reading a request.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be decoded as the expected JSON.
    #[error("Invalid JSON response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The server answered, but with a failure status.
    #[error("GitHub API returned HTTP {status}{}", message_suffix(.message))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Human-readable `message` field from the response body, if decodable.
        message: Option<String>,
    },

    /// Input to a merge was not a mapping of repository name to language.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Shape that was expected.
        expected: &'static str,
        /// Shape that was found.
        found: &'static str,
    },

    /// A favourite language was requested from an empty tally.
    #[error("No repositories recorded for {username}")]
    EmptyCollection {
        /// Account whose tally is empty.
        username: String,
    },

    /// Configuration file or environment error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl From<config::ConfigError> for FoprogramsError {
    fn from(err: config::ConfigError) -> Self {
        FoprogramsError::Config {
            message: err.to_string(),
        }
    }
}
