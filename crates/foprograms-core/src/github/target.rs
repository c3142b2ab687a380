// SPDX-License-Identifier: Apache-2.0

//! REST resource URL construction.

use std::fmt;

use serde::Serialize;

use super::{GITHUB_API_DOMAIN, REPOS_RESOURCE, USERS_SUBDOMAIN};

/// A GitHub API resource addressed as `<domain>/<subdomain>/<folder>/<path>`.
///
/// The URL is composed once at construction. Segments are inserted verbatim:
/// nothing is escaped and empty segments are kept, so `path = ""` yields a
/// trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestTarget {
    base_domain: String,
    subdomain: String,
    folder: String,
    path: String,
    url: String,
}

impl RequestTarget {
    /// Creates a target under the public GitHub API domain.
    #[must_use]
    pub fn new(
        subdomain: impl Into<String>,
        folder: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::with_base(GITHUB_API_DOMAIN, subdomain, folder, path)
    }

    /// Creates a target under an arbitrary base (GitHub Enterprise, test servers).
    #[must_use]
    pub fn with_base(
        base_domain: impl Into<String>,
        subdomain: impl Into<String>,
        folder: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        let base_domain = base_domain.into();
        let subdomain = subdomain.into();
        let folder = folder.into();
        let path = path.into();
        let url = format!("{base_domain}/{subdomain}/{folder}/{path}");
        Self {
            base_domain,
            subdomain,
            folder,
            path,
            url,
        }
    }

    /// Target listing the public repositories of `username`.
    #[must_use]
    pub fn user_repos(base_domain: impl Into<String>, username: impl Into<String>) -> Self {
        Self::with_base(base_domain, USERS_SUBDOMAIN, username, REPOS_RESOURCE)
    }

    /// The composed URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Base domain the URL starts with.
    #[must_use]
    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    /// First path segment (e.g. `users`).
    #[must_use]
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    /// Second path segment (e.g. a username).
    #[must_use]
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Last path segment (e.g. `repos`).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
