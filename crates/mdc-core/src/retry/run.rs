//! Retry loop: run a closure until success or the policy says stop.

use super::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::error::TaskError;

/// Runs a closure until it succeeds or the retry policy says to stop.
///
/// Invokes `f` at most `policy.max_attempts` times. Intermediate retryable
/// failures are logged and swallowed; the final failure (or any
/// non-retryable one) is returned unchanged.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, mut f: F) -> Result<T, TaskError>
where
    F: FnMut() -> Result<T, TaskError>,
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::Retry => {
                        tracing::warn!(
                            attempt,
                            max_attempts = policy.max_attempts,
                            error = %e,
                            "attempt failed, retrying"
                        );
                        attempt += 1;
                    }
                }
            }
        }
    }
}
