// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for foprograms.
//!
//! Uses clap's derive API. The username is optional at the parser level so
//! that a missing username prints a hint instead of a usage error.

use clap::{Parser, ValueEnum};

/// Printed when no username is given.
pub const MISSING_USERNAME_HINT: &str =
    "Please enter a username as your 1st argument, or -h or --help";

/// Shown after `--help`.
const UNDETERMINED_NOTE: &str = "When no repository has a detected language, the text output is an \
empty line (use --verbose for an explanation, or -o json for a null favourite_language).";

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml)
    pub format: OutputFormat,
    /// Narrate each step and print the full sentence
    pub verbose: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Returns true if step-by-step narration should be printed.
    pub fn narrates(&self) -> bool {
        self.verbose && matches!(self.format, OutputFormat::Text)
    }
}

/// foprograms - print a GitHub user's favourite programming language.
///
/// The favourite is derived from the primary language GitHub detects for
/// each of the user's public repositories.
#[derive(Parser)]
#[command(name = "foprograms")]
#[command(version, about, long_about = None)]
#[command(after_help = UNDETERMINED_NOTE)]
pub struct Cli {
    /// GitHub username to inspect
    pub username: Option<String>,

    /// Narrate each step and explain the result
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Output format (text, json, yaml)
    #[arg(long, short = 'o', default_value = "text", value_enum)]
    pub output: OutputFormat,
}
