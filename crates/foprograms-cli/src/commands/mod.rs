// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the foprograms CLI.

pub mod favourite;
pub mod types;

use anyhow::Result;
use foprograms_core::AppConfig;

use crate::cli::OutputContext;
use crate::output;

/// Run the favourite-language lookup and render its result.
pub async fn run(username: &str, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    if let Some(result) = favourite::run(username, &ctx, config).await? {
        output::render(&result, &ctx)?;
    }
    Ok(())
}
