// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the foprograms CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to stderr.
//! Fetch diagnostics are `warn` events and are shown by default. The `-v` flag
//! controls user-facing narration on stdout and is handled by `OutputContext`.
//!
//! # Examples
//!
//! ```bash
//! # Default: warn for foprograms, error for dependencies
//! foprograms octocat
//!
//! # Debug output, including each retry
//! RUST_LOG=foprograms=debug foprograms octocat
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter: fetch diagnostics from both crates, nothing from dependencies
/// below `error`.
const DEFAULT_FILTER: &str = "foprograms=warn,foprograms_core=warn,reqwest=error";

/// Initialize the logging subsystem.
///
/// The `RUST_LOG` environment variable replaces the default filter.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
