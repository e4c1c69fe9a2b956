/// High-level classification of a task error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input URL; the item can never succeed.
    InvalidUrl,
    /// HTTP non-2xx status.
    Http,
    /// Transport-level failure.
    Network,
    /// Audio extraction failure.
    Codec,
    /// Filesystem failure.
    Io,
    /// User cancellation; must wind down immediately.
    Interrupted,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry; propagate the error as-is.
    NoRetry,
    /// Invoke the operation again immediately.
    Retry,
}

/// Attempt budget plus the set of error kinds worth retrying.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of invocations (including the first).
    pub max_attempts: u32,
    /// Error kinds that qualify for another attempt.
    pub retryable: Vec<ErrorKind>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3)
    }
}

impl RetryPolicy {
    /// Policy retrying transient kinds (HTTP status, transport, codec).
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            retryable: vec![ErrorKind::Http, ErrorKind::Network, ErrorKind::Codec],
        }
    }

    /// Decide whether `attempt` (1-based) may be followed by another one.
    ///
    /// The last allowed attempt always returns `NoRetry` so its failure
    /// propagates unwrapped; non-retryable kinds stop on the spot.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }
        if self.retryable.contains(&kind) {
            RetryDecision::Retry
        } else {
            RetryDecision::NoRetry
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_kinds_retry_until_budget_spent() {
        let p = RetryPolicy::new(3);
        assert_eq!(p.decide(1, ErrorKind::Network), RetryDecision::Retry);
        assert_eq!(p.decide(2, ErrorKind::Http), RetryDecision::Retry);
        assert_eq!(p.decide(3, ErrorKind::Http), RetryDecision::NoRetry);
    }

    #[test]
    fn no_retry_for_io_or_invalid_url() {
        let p = RetryPolicy::new(3);
        assert_eq!(p.decide(1, ErrorKind::Io), RetryDecision::NoRetry);
        assert_eq!(p.decide(1, ErrorKind::InvalidUrl), RetryDecision::NoRetry);
    }

    #[test]
    fn interrupt_never_retried() {
        let p = RetryPolicy::new(5);
        assert_eq!(p.decide(1, ErrorKind::Interrupted), RetryDecision::NoRetry);
    }

    #[test]
    fn at_least_one_attempt() {
        let p = RetryPolicy::new(0);
        assert_eq!(p.max_attempts, 1);
    }
}
