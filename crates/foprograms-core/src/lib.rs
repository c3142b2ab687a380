// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # foprograms Core
//!
//! Core library for foprograms: find a GitHub user's favourite programming
//! language from the primary languages of their repositories.
//!
//! This crate provides:
//! - REST resource URL construction for the GitHub API
//! - Repository listing with bounded, immediate retry
//! - A per-account language tally
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use foprograms_core::{Account, Fetcher, LanguageTally, RequestTarget, load_config};
//!
//! # async fn example() -> foprograms_core::Result<()> {
//! let config = load_config()?;
//! let fetcher = Fetcher::new(&config.github)?;
//!
//! let target = RequestTarget::user_repos(&config.github.api_base_url, "octocat");
//! let mut account = Account::new("octocat", target.clone(), LanguageTally::new());
//!
//! if let Some(repos) = fetcher.fetch(&target).await {
//!     for repo in repos {
//!         account.add_record(repo);
//!     }
//!     println!("{:?}", account.favourite_language()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and paths
//! - [`diagnostics`] - Sink for fetch failures
//! - [`error`] - Error types
//! - [`github`] - URL construction and repository fetching
//! - [`retry`] - Retry classification
//! - [`tally`] - Language tally and account

// ============================================================================
// Error Handling
// ============================================================================

pub use error::FoprogramsError;

/// Convenience Result type for foprograms operations.
///
/// This is equivalent to `std::result::Result<T, FoprogramsError>`.
pub type Result<T> = std::result::Result<T, FoprogramsError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, GitHubConfig, config_dir, config_file_path, load_config};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::{
    FetchReport, FetchState, Fetcher, GITHUB_API_DOMAIN, RepositoryRecord, RequestTarget,
    TOLERANCE,
};

// ============================================================================
// Diagnostics
// ============================================================================

pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};

// ============================================================================
// Language Tally
// ============================================================================

pub use tally::{Account, LanguageTally};

// ============================================================================
// Retry Logic
// ============================================================================

pub use retry::{immediate_retry, is_retryable};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod github;
pub mod retry;
pub mod tally;
