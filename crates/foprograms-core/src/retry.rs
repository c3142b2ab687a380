// SPDX-License-Identifier: Apache-2.0

//! Retry policy for repository fetches.
//!
//! Transport and decode failures are retried immediately, up to the configured
//! tolerance. A failure status from the server is final.

use std::time::Duration;

use backon::ConstantBuilder;

use crate::error::FoprogramsError;

/// Determines if a fetch error should trigger another attempt.
///
/// Retryable:
/// - `Transport` (connection refused, timeout, truncated body)
/// - `Decode` (body is not the expected JSON)
///
/// Everything else, including a failure `Status`, stops the fetch.
#[must_use]
pub fn is_retryable(e: &FoprogramsError) -> bool {
    matches!(
        e,
        FoprogramsError::Transport(_) | FoprogramsError::Decode(_)
    )
}

/// Creates a backoff that retries without delay.
///
/// `tolerance` is the total number of attempts, so the builder allows
/// `tolerance - 1` retries. Backon always makes a first attempt, so a
/// tolerance of zero has to be handled before retrying.
#[must_use]
pub fn immediate_retry(tolerance: u32) -> ConstantBuilder {
    let retries = usize::try_from(tolerance.saturating_sub(1)).unwrap_or(usize::MAX);
    ConstantBuilder::default()
        .with_delay(Duration::ZERO)
        .with_max_times(retries)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use backon::Retryable;

    use super::*;

    fn decode_error() -> FoprogramsError {
        let err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        FoprogramsError::Decode(err)
    }

    #[test]
    fn test_decode_error_is_retryable() {
        assert!(is_retryable(&decode_error()));
    }

    #[test]
    fn test_status_error_is_not_retryable() {
        let err = FoprogramsError::Status {
            status: 404,
            message: Some("Not Found".to_string()),
        };
        assert!(!is_retryable(&err));
    }

    #[test]
    fn test_server_error_status_is_not_retryable() {
        let err = FoprogramsError::Status {
            status: 503,
            message: None,
        };
        assert!(!is_retryable(&err));
    }

    #[test]
    fn test_merge_errors_are_not_retryable() {
        let err = FoprogramsError::TypeMismatch {
            expected: "object",
            found: "array",
        };
        assert!(!is_retryable(&err));
    }

    async fn attempts_until_given_up(tolerance: u32) -> u32 {
        let attempts = AtomicU32::new(0);
        let result: Result<(), FoprogramsError> = (|| async {
            attempts.fetch_add(1, Ordering::Relaxed);
            Err(decode_error())
        })
        .retry(immediate_retry(tolerance))
        .when(is_retryable)
        .await;
        assert!(result.is_err());
        attempts.load(Ordering::Relaxed)
    }

    #[tokio::test]
    async fn test_immediate_retry_makes_tolerance_attempts() {
        assert_eq!(attempts_until_given_up(3).await, 3);
        assert_eq!(attempts_until_given_up(1).await, 1);
    }

    #[tokio::test]
    async fn test_non_retryable_error_stops_after_first_attempt() {
        let attempts = AtomicU32::new(0);
        let result: Result<(), FoprogramsError> = (|| async {
            attempts.fetch_add(1, Ordering::Relaxed);
            Err(FoprogramsError::Status {
                status: 404,
                message: None,
            })
        })
        .retry(immediate_retry(3))
        .when(is_retryable)
        .await;
        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::Relaxed), 1);
    }
}
