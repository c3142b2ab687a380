// SPDX-License-Identifier: Apache-2.0

//! Per-account language tally.
//!
//! An [`Account`] accumulates a [`LanguageTally`] (repository name to primary
//! language) and picks the favourite language from it.
//!
//! The favourite is the greatest language under `Option<String>` ordering:
//! lexicographic among names, with `None` below every name. It is not the most
//! frequent language; [`LanguageTally::language_counts`] gives frequencies.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::FoprogramsError;
use crate::github::{RepositoryRecord, RequestTarget};

/// Repository name to primary language. Later entries overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageTally {
    entries: BTreeMap<String, Option<String>>,
}

impl LanguageTally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `entries` in; same-named repositories are overwritten.
    pub fn merge<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        self.entries.extend(entries);
    }

    /// Merges an untyped JSON mapping of repository name to language.
    ///
    /// The whole value is validated before anything is inserted, so a
    /// rejected value leaves the tally untouched.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if `value` is not an object, or if any of its
    /// values is neither a string nor `null`.
    pub fn merge_value(&mut self, value: &Value) -> crate::Result<()> {
        let Value::Object(map) = value else {
            return Err(FoprogramsError::TypeMismatch {
                expected: "object",
                found: json_kind(value),
            });
        };

        let mut validated = Vec::with_capacity(map.len());
        for (name, language) in map {
            let language = match language {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => {
                    return Err(FoprogramsError::TypeMismatch {
                        expected: "string or null",
                        found: json_kind(other),
                    });
                }
            };
            validated.push((name.clone(), language));
        }

        self.merge(validated);
        Ok(())
    }

    /// Inserts one decoded record.
    pub fn insert(&mut self, record: RepositoryRecord) {
        self.entries.insert(record.name, record.language);
    }

    /// Repository names, in tally order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Languages, in the same order as [`names`](Self::names).
    pub fn languages(&self) -> impl Iterator<Item = Option<&str>> {
        self.entries.values().map(Option::as_deref)
    }

    /// Distinct detected languages.
    #[must_use]
    pub fn unique_languages(&self) -> BTreeSet<&str> {
        self.languages().flatten().collect()
    }

    /// Greatest language, `Ok(None)` when no repository has one.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if the tally holds no repositories.
    pub fn max_language(&self, username: &str) -> crate::Result<Option<&str>> {
        self.languages()
            .max()
            .ok_or_else(|| FoprogramsError::EmptyCollection {
                username: username.to_string(),
            })
    }

    /// Number of repositories per detected language.
    #[must_use]
    pub fn language_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for language in self.languages().flatten() {
            *counts.entry(language).or_insert(0) += 1;
        }
        counts
    }

    /// Number of repositories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no repository has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Language recorded for `name`. The outer `None` means the name is unknown.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries.get(name).map(Option::as_deref)
    }
}

impl<K, V> FromIterator<(K, V)> for LanguageTally
where
    K: Into<String>,
    V: Into<Option<String>>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A GitHub account and the languages of its repositories.
#[derive(Debug, Clone)]
pub struct Account {
    username: String,
    target: RequestTarget,
    repositories: LanguageTally,
}

impl Account {
    /// Creates an account with the target its repositories are fetched from.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        target: RequestTarget,
        repositories: LanguageTally,
    ) -> Self {
        Self {
            username: username.into(),
            target,
            repositories,
        }
    }

    /// Account name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Target the repositories were requested from.
    #[must_use]
    pub fn target(&self) -> &RequestTarget {
        &self.target
    }

    /// The accumulated tally.
    #[must_use]
    pub fn repositories(&self) -> &LanguageTally {
        &self.repositories
    }

    /// Merges typed entries into the tally.
    pub fn merge_repositories<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        self.repositories.merge(entries);
    }

    /// Merges an untyped JSON mapping into the tally.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for anything but an object of string/null values.
    pub fn merge_value(&mut self, value: &Value) -> crate::Result<()> {
        self.repositories.merge_value(value)
    }

    /// Folds one fetched record into the tally.
    pub fn add_record(&mut self, record: RepositoryRecord) {
        debug!(repo = %record.name, language = ?record.language, "Adding repository");
        self.repositories.insert(record);
    }

    /// Repository names.
    #[must_use]
    pub fn repository_names(&self) -> Vec<&str> {
        self.repositories.names().collect()
    }

    /// Languages, paired positionally with [`repository_names`](Self::repository_names).
    #[must_use]
    pub fn languages(&self) -> Vec<Option<&str>> {
        self.repositories.languages().collect()
    }

    /// Distinct detected languages.
    #[must_use]
    pub fn unique_languages(&self) -> BTreeSet<&str> {
        self.repositories.unique_languages()
    }

    /// The favourite language: the greatest value among [`languages`](Self::languages).
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` when no repository has been recorded.
    pub fn favourite_language(&self) -> crate::Result<Option<&str>> {
        self.repositories.max_language(&self.username)
    }

    /// The favourite language as a sentence naming the account.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` when no repository has been recorded.
    pub fn favourite_language_detail(&self) -> crate::Result<String> {
        let detail = match self.favourite_language()? {
            Some(language) if !language.is_empty() => format!(
                "In the {} account, {language} is used in most repositories, implying that it is the favourite language",
                self.username
            ),
            _ => format!(
                "The favourite language for the {} account cannot be determined at this time",
                self.username
            ),
        };
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account() -> Account {
        let target = RequestTarget::new("subdomain", "folder", "path");
        let tally = [
            ("repo1", Some("Python".to_string())),
            ("repo4", Some("Python".to_string())),
        ]
        .into_iter()
        .collect();
        Account::new("username", target, tally)
    }

    fn entry(name: &str, language: &str) -> (String, Option<String>) {
        (name.to_string(), Some(language.to_string()))
    }

    #[test]
    fn merge_yields_union() {
        let mut account = account();
        account.merge_repositories([entry("repo2", "Haskell"), entry("repo3", "Java")]);

        let expected: LanguageTally = [
            entry("repo1", "Python"),
            entry("repo2", "Haskell"),
            entry("repo3", "Java"),
            entry("repo4", "Python"),
        ]
        .into_iter()
        .collect();
        assert_eq!(account.repositories(), &expected);
        assert_eq!(account.repositories().len(), 4);
    }

    #[test]
    fn merge_overwrites_same_name() {
        let mut account = account();
        account.merge_repositories([entry("repo1", "Rust")]);

        assert_eq!(account.repositories().len(), 2);
        assert_eq!(account.repositories().get("repo1"), Some(Some("Rust")));
        assert_eq!(account.repositories().get("repo4"), Some(Some("Python")));
    }

    #[test]
    fn merge_value_accepts_object() {
        let mut account = account();
        account
            .merge_value(&json!({"repo2": "Haskell", "repo5": null}))
            .unwrap();

        assert_eq!(account.repositories().len(), 4);
        assert_eq!(account.repositories().get("repo5"), Some(None));
    }

    #[test]
    fn merge_value_rejects_sequence() {
        let mut account = account();
        let before = account.repositories().clone();

        let err = account.merge_value(&json!(["repo1", "Haskell"])).unwrap_err();

        assert!(matches!(
            err,
            FoprogramsError::TypeMismatch {
                expected: "object",
                found: "array"
            }
        ));
        assert_eq!(account.repositories(), &before);
    }

    #[test]
    fn merge_value_rejects_non_string_language_without_mutation() {
        let mut account = account();
        let before = account.repositories().clone();

        let err = account
            .merge_value(&json!({"repo2": "Haskell", "repo3": 42}))
            .unwrap_err();

        assert!(matches!(
            err,
            FoprogramsError::TypeMismatch { found: "number", .. }
        ));
        assert_eq!(account.repositories(), &before);
    }

    #[test]
    fn names_and_languages_pair_up() {
        let mut account = account();
        account.merge_repositories([entry("repo2", "Haskell"), ("repo3".to_string(), None)]);

        let names = account.repository_names();
        let languages = account.languages();
        assert_eq!(names.len(), languages.len());
        for (name, language) in names.iter().zip(&languages) {
            assert_eq!(account.repositories().get(name), Some(*language));
        }
    }

    #[test]
    fn unique_languages_skip_none() {
        let mut account = account();
        account.merge_repositories([entry("repo2", "Haskell"), ("repo3".to_string(), None)]);

        let unique: Vec<&str> = account.unique_languages().into_iter().collect();
        assert_eq!(unique, vec!["Haskell", "Python"]);
    }

    #[test]
    fn favourite_language_single_value() {
        assert_eq!(account().favourite_language().unwrap(), Some("Python"));
    }

    #[test]
    fn favourite_language_is_lexicographic_max() {
        let mut account = account();
        account.merge_repositories([entry("repo2", "Haskell"), entry("repo3", "TypeScript")]);

        // One TypeScript repository beats two Python ones
        assert_eq!(account.favourite_language().unwrap(), Some("TypeScript"));
        assert_eq!(account.repositories().language_counts()["Python"], 2);
    }

    #[test]
    fn favourite_language_ignores_none_when_any_detected() {
        let tally = [("a", None), ("b", Some("C".to_string()))].into_iter().collect();
        let account = Account::new("u", RequestTarget::new("users", "u", "repos"), tally);
        assert_eq!(account.favourite_language().unwrap(), Some("C"));
    }

    #[test]
    fn favourite_language_all_none() {
        let tally = [("a", None::<String>)].into_iter().collect();
        let account = Account::new("u", RequestTarget::new("users", "u", "repos"), tally);
        assert_eq!(account.favourite_language().unwrap(), None);
    }

    #[test]
    fn favourite_language_empty_is_error() {
        let account = Account::new(
            "nobody",
            RequestTarget::new("users", "nobody", "repos"),
            LanguageTally::new(),
        );
        assert!(matches!(
            account.favourite_language(),
            Err(FoprogramsError::EmptyCollection { .. })
        ));
        assert!(account.favourite_language_detail().is_err());
    }

    #[test]
    fn detail_names_account_and_language() {
        assert_eq!(
            account().favourite_language_detail().unwrap(),
            "In the username account, Python is used in most repositories, implying that it is the favourite language"
        );
    }

    #[test]
    fn detail_without_language() {
        let tally = [("a", None::<String>)].into_iter().collect();
        let account = Account::new("ghost", RequestTarget::new("users", "ghost", "repos"), tally);
        assert_eq!(
            account.favourite_language_detail().unwrap(),
            "The favourite language for the ghost account cannot be determined at this time"
        );
    }

    #[test]
    fn add_record_folds_into_tally() {
        let mut account = account();
        account.add_record(RepositoryRecord {
            name: "repo9".to_string(),
            language: Some("Go".to_string()),
        });
        assert_eq!(account.repositories().get("repo9"), Some(Some("Go")));
        assert_eq!(account.target().url(), "https://api.github.com/subdomain/folder/path");
    }
}
