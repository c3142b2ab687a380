// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `FoprogramsError` and appends a hint where one
//! helps. Other errors are shown with their context chain.

use anyhow::Error;
use foprograms_core::error::FoprogramsError;

/// Formats an error for CLI display with helpful hints.
pub fn format_error(error: &Error) -> String {
    match error.downcast_ref::<FoprogramsError>() {
        Some(err @ FoprogramsError::EmptyCollection { .. }) => {
            format!("{err}\n\nTip: Run with -v to see what the GitHub API returned.")
        }
        Some(err @ FoprogramsError::Config { .. }) => {
            format!(
                "{err}\n\nTip: Check your config file at {}",
                foprograms_core::config::config_file_path().display()
            )
        }
        Some(err @ FoprogramsError::Transport(_)) => {
            format!("{err}\n\nTip: Check your internet connection and try again.")
        }
        Some(err) => err.to_string(),
        None => format!("{error:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_collection_error() {
        let error = anyhow::Error::new(FoprogramsError::EmptyCollection {
            username: "nobody".to_string(),
        });
        let formatted = format_error(&error);

        assert!(formatted.contains("No repositories recorded for nobody"));
        assert!(formatted.contains("-v"));
    }

    #[test]
    fn test_format_config_error() {
        let error = anyhow::Error::new(FoprogramsError::Config {
            message: "invalid type".to_string(),
        });
        let formatted = format_error(&error);

        assert!(formatted.contains("Configuration error: invalid type"));
        assert!(formatted.contains("config.toml"));
    }

    #[test]
    fn test_format_type_mismatch_has_no_tip() {
        let error = anyhow::Error::new(FoprogramsError::TypeMismatch {
            expected: "object",
            found: "array",
        });
        let formatted = format_error(&error);

        assert_eq!(formatted, "Type mismatch: expected object, found array");
    }

    #[test]
    fn test_format_non_foprograms_error() {
        let error = anyhow::anyhow!("Some generic error");
        let formatted = format_error(&error);

        assert_eq!(formatted, "Some generic error");
    }
}
