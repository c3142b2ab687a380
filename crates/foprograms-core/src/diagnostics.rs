// SPDX-License-Identifier: Apache-2.0

//! Diagnostics emitted while fetching.
//!
//! Fetch failures never propagate to the caller; they are reported to a
//! [`DiagnosticSink`] instead. The default sink forwards to `tracing`, so the
//! CLI's subscriber decides where they end up. Tests swap in a recording sink.

use std::fmt;

use tracing::warn;

/// A single failed attempt, as reported by the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Sending the request or decoding its body failed. The attempt is retried.
    LoadFailed {
        /// Requested URL.
        url: String,
        /// Rendered error.
        error: String,
    },
    /// The server answered with a failure status. No further attempts follow.
    RequestRejected {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// `message` field of the response body, when it could be decoded.
        message: Option<String>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::LoadFailed { url, error } => {
                write!(f, "Loading {url} (JSON or URL) returned an error, {error}")
            }
            Diagnostic::RequestRejected { url, message, .. } => {
                write!(f, "Request to {url} didn't work.")?;
                if let Some(message) = message {
                    write!(f, " {message}")?;
                }
                Ok(())
            }
        }
    }
}

/// Receives fetch diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Records one diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Sink that emits every diagnostic as a `warn!` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::LoadFailed { url, .. } => {
                warn!(url = %url, "{diagnostic}");
            }
            Diagnostic::RequestRejected { url, status, .. } => {
                warn!(url = %url, status = status, "{diagnostic}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failed_message() {
        let d = Diagnostic::LoadFailed {
            url: "https://api.github.com/users/x/repos".to_string(),
            error: "connection refused".to_string(),
        };
        assert_eq!(
            d.to_string(),
            "Loading https://api.github.com/users/x/repos (JSON or URL) returned an error, connection refused"
        );
    }

    #[test]
    fn rejected_message_includes_server_message() {
        let d = Diagnostic::RequestRejected {
            url: "https://api.github.com/subdomain/folder/path".to_string(),
            status: 404,
            message: Some("Not Found".to_string()),
        };
        assert_eq!(
            d.to_string(),
            "Request to https://api.github.com/subdomain/folder/path didn't work. Not Found"
        );
    }

    #[test]
    fn rejected_message_without_body() {
        let d = Diagnostic::RequestRejected {
            url: "u".to_string(),
            status: 500,
            message: None,
        };
        assert_eq!(d.to_string(), "Request to u didn't work.");
    }
}
