//! Cooperative cancellation for batch runs.
//!
//! A single shared token is set by the Ctrl-C handler. The orchestrator
//! checks it before submitting new items; the download write callback checks
//! it per chunk so in-flight transfers can be abandoned promptly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared abort flag. Cloning is cheap; all clones observe the same trigger.
#[derive(Debug, Clone, Default)]
pub struct AbortToken(Arc<AtomicBool>);

impl AbortToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request wind-down. Idempotent.
    pub fn trigger(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Spawns a task that trips `token` on the first Ctrl-C.
pub fn listen_for_ctrl_c(token: AbortToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, winding down");
            eprintln!("Interrupted, finishing in-flight work...");
            token.trigger();
        }
    });
}
