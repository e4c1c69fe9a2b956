//! Error taxonomy for per-item task failures.
//!
//! Task runners return `TaskError` so the retry layer can classify before
//! the orchestrator folds the final error into an `Outcome`.

use thiserror::Error;

/// Error produced while processing one work item.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Input line is not a well-formed HTTP(S) URL. Fatal for that line only.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP response had a non-2xx status. Retryable.
    #[error("HTTP {0}")]
    Http(u32),

    /// Transport-level failure (DNS, connect, reset, timeout). Retryable.
    #[error("network: {0}")]
    Network(#[from] curl::Error),

    /// Audio extraction failed. Retryable.
    #[error("codec: {0}")]
    Codec(String),

    /// Filesystem access failed. Not retried.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Cooperative cancellation, not a true error. Never retried and never
    /// counted as a failure in the tally.
    #[error("interrupted by user")]
    Interrupted,
}
