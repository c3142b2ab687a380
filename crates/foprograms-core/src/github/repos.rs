// SPDX-License-Identifier: Apache-2.0

//! Repository listing with bounded retry.
//!
//! A fetch makes up to `tolerance` GET requests against one [`RequestTarget`].
//! Transport and decode failures are retried immediately; a failure status from
//! the server ends the fetch after one attempt. Failures are reported to the
//! fetcher's [`DiagnosticSink`] and surface to the caller only as `None`.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use backon::Retryable;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::RequestTarget;
use crate::config::GitHubConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::FoprogramsError;
use crate::retry::{immediate_retry, is_retryable};

/// One element of the repository listing.
///
/// Only the two consumed fields are decoded; the rest of the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Repository name.
    pub name: String,
    /// Primary language detected by GitHub, `None` when undetected.
    pub language: Option<String>,
}

/// Error body returned by the GitHub API alongside a failure status.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// Terminal state of a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// An attempt decoded a repository list.
    Succeeded,
    /// Attempts ran out, or the server rejected the request.
    Exhausted,
}

/// Outcome of [`Fetcher::fetch_report`].
#[derive(Debug)]
pub struct FetchReport {
    /// Terminal state.
    pub state: FetchState,
    /// Number of requests sent.
    pub attempts: u32,
    /// Decoded repositories, present only when `state` is `Succeeded`.
    pub repositories: Option<Vec<RepositoryRecord>>,
}

/// HTTP client for GitHub repository listings.
pub struct Fetcher {
    /// HTTP client with configured timeout and headers.
    http: Client,
    /// Maximum number of attempts per fetch.
    tolerance: u32,
    /// Where failed attempts are reported.
    sink: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

impl Fetcher {
    /// Creates a fetcher from GitHub settings, reporting to [`TracingSink`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. the configured
    /// user agent is not a valid header value).
    pub fn new(config: &GitHubConfig) -> crate::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            tolerance: config.tolerance,
            sink: Arc::new(TracingSink),
        })
    }

    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Maximum number of attempts per fetch.
    #[must_use]
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// Fetches the repository list at `target`.
    ///
    /// Returns `None` when no attempt succeeded. An account without
    /// repositories yields `Some(vec![])`.
    pub async fn fetch(&self, target: &RequestTarget) -> Option<Vec<RepositoryRecord>> {
        self.fetch_report(target).await.repositories
    }

    /// Fetches the repository list at `target` and reports how it went.
    ///
    /// A tolerance of zero sends nothing and reports `Exhausted`.
    #[instrument(skip(self, target), fields(url = %target.url(), tolerance = self.tolerance))]
    pub async fn fetch_report(&self, target: &RequestTarget) -> FetchReport {
        if self.tolerance == 0 {
            debug!("Tolerance is zero, not sending any request");
            return FetchReport {
                state: FetchState::Exhausted,
                attempts: 0,
                repositories: None,
            };
        }

        let attempts = AtomicU32::new(0);

        let result = (|| async {
            attempts.fetch_add(1, Ordering::Relaxed);
            self.attempt(target).await
        })
        .retry(immediate_retry(self.tolerance))
        .when(is_retryable)
        .notify(|err, _| debug!(error = %err, "Retrying repository fetch"))
        .await;

        let attempts = attempts.load(Ordering::Relaxed);
        match result {
            Ok(repositories) => {
                debug!(
                    count = repositories.len(),
                    attempts, "Fetched repositories"
                );
                FetchReport {
                    state: FetchState::Succeeded,
                    attempts,
                    repositories: Some(repositories),
                }
            }
            Err(err) => {
                debug!(error = %err, attempts, "Giving up on repository fetch");
                FetchReport {
                    state: FetchState::Exhausted,
                    attempts,
                    repositories: None,
                }
            }
        }
    }

    /// One request, with its failure reported to the sink.
    async fn attempt(&self, target: &RequestTarget) -> crate::Result<Vec<RepositoryRecord>> {
        let result = self.request(target.url()).await;
        if let Err(err) = &result {
            self.sink.report(&diagnostic_for(target.url(), err));
        }
        result
    }

    async fn request(&self, url: &str) -> crate::Result<Vec<RepositoryRecord>> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            // The body is only read for its message; an undecodable body is not an error here
            let message = response.json::<ApiMessage>().await.ok().map(|m| m.message);
            return Err(FoprogramsError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(FoprogramsError::Decode)
    }
}

fn diagnostic_for(url: &str, err: &FoprogramsError) -> Diagnostic {
    match err {
        FoprogramsError::Status { status, message } => Diagnostic::RequestRejected {
            url: url.to_string(),
            status: *status,
            message: message.clone(),
        },
        other => Diagnostic::LoadFailed {
            url: url.to_string(),
            error: other.to_string(),
        },
    }
}
