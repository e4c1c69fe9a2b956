//! Bounded retry around fallible per-item operations.
//!
//! Encapsulates error classification and the attempt budget so the task
//! runners (download, convert) share one policy. Attempts are sequential
//! with no delay between them; a run makes exactly `max_attempts` total
//! invocations in the worst case and the final failure propagates unwrapped.

mod classify;
mod policy;
mod run;

pub use classify::classify;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
