// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Builds REST resource URLs and fetches a user's repository list.

pub mod repos;
pub mod target;

pub use repos::{FetchReport, FetchState, Fetcher, RepositoryRecord};
pub use target::RequestTarget;

/// Base of every GitHub REST API URL.
pub const GITHUB_API_DOMAIN: &str = "https://api.github.com";

/// Maximum number of request attempts before giving up.
pub const TOLERANCE: u32 = 3;

/// Subdomain segment for user resources.
pub const USERS_SUBDOMAIN: &str = "users";

/// Path segment for a user's repository listing.
pub const REPOS_RESOURCE: &str = "repos";
