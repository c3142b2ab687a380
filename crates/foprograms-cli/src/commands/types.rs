// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! Handlers return data instead of printing the result directly, which keeps
//! rendering in one place.

use std::collections::BTreeMap;

use foprograms_core::LanguageTally;
use serde::Serialize;

/// Result from the favourite-language command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FavouriteResult {
    /// Account that was inspected.
    pub username: String,
    /// URL the repositories were fetched from.
    pub url: String,
    /// Favourite language, `None` when no repository has a detected language.
    pub favourite_language: Option<String>,
    /// Sentence explaining the result.
    pub detail: String,
    /// Repository name to primary language.
    pub repositories: LanguageTally,
    /// Distinct detected languages.
    pub unique_languages: Vec<String>,
    /// Number of repositories per detected language.
    pub language_counts: BTreeMap<String, usize>,
}
