// SPDX-License-Identifier: Apache-2.0

//! foprograms - print a GitHub user's favourite programming language.
//!
//! Lists the user's public repositories through the GitHub REST API and picks
//! a favourite from the primary language of each.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use foprograms_core::config;
use tracing::debug;

use crate::cli::{Cli, MISSING_USERNAME_HINT, OutputContext};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    let output_ctx = OutputContext::from_cli(cli.output, cli.verbose);

    let Some(username) = cli.username else {
        println!("{MISSING_USERNAME_HINT}");
        return Ok(());
    };

    let config = config::load_config().context("Failed to load configuration")?;
    debug!(
        api_base_url = %config.github.api_base_url,
        tolerance = config.github.tolerance,
        "Configuration loaded successfully"
    );

    match commands::run(&username, output_ctx, &config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            Err(e)
        }
    }
}
