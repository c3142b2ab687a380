// SPDX-License-Identifier: Apache-2.0

//! Favourite-language command.
//!
//! Builds the repository listing URL for the user, fetches it, folds every
//! repository into an [`Account`] and reports the favourite language.

use anyhow::Result;
use foprograms_core::{Account, AppConfig, Fetcher, LanguageTally, RequestTarget};
use tracing::debug;

use super::types::FavouriteResult;
use crate::cli::OutputContext;
use crate::output::common::narrate;

/// Finds the favourite language of `username`.
///
/// Returns `Ok(None)` when nothing could be fetched. In verbose mode an
/// account without repositories is treated the same way; otherwise it fails
/// with `EmptyCollection`.
pub async fn run(
    username: &str,
    ctx: &OutputContext,
    config: &AppConfig,
) -> Result<Option<FavouriteResult>> {
    narrate(ctx, "Constructing URL to repository...");
    let target = RequestTarget::user_repos(&config.github.api_base_url, username);
    let mut account = Account::new(username, target, LanguageTally::new());

    narrate(ctx, &format!("Making request to {}", account.target().url()));
    let fetcher = Fetcher::new(&config.github)?;
    let repos = match fetcher.fetch(account.target()).await {
        Some(repos) if !(ctx.verbose && repos.is_empty()) => repos,
        _ => {
            narrate(ctx, "That could be an empty repository");
            return Ok(None);
        }
    };
    narrate(ctx, "Calculating favourite language ...\n");

    for repo in repos {
        let name = repo.name.clone();
        account.add_record(repo);
        narrate(ctx, &format!("Added repository: {name}"));
    }
    debug!(
        repositories = account.repositories().len(),
        "Tally complete"
    );

    let favourite_language = account.favourite_language()?.map(str::to_string);
    let detail = account.favourite_language_detail()?;
    let tally = account.repositories();

    Ok(Some(FavouriteResult {
        username: account.username().to_string(),
        url: account.target().url().to_string(),
        favourite_language,
        detail,
        repositories: tally.clone(),
        unique_languages: tally
            .unique_languages()
            .into_iter()
            .map(str::to_string)
            .collect(),
        language_counts: tally
            .language_counts()
            .into_iter()
            .map(|(language, count)| (language.to_string(), count))
            .collect(),
    }))
}
