//! Bounded worker pool for per-item download/convert tasks.
//!
//! Keeps up to `limit` tasks in flight; when one finishes, the next queued
//! item is submitted until the queue is empty or an abort is requested.
//! Tasks run on the blocking pool since both curl transfers and ffmpeg
//! child processes block. Results are folded into the tally as they
//! complete; completion order is irrelevant to the counts. A completed/total
//! indicator is printed per completion, which is why pooled tasks never draw
//! their own per-item progress.

use std::io::Write;
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::control::AbortToken;
use crate::error::TaskError;
use crate::work::{Outcome, RunTally, WorkItem};

/// Runs every item through `task` with at most `limit` running at once.
///
/// Failures are isolated per item: a failing task never aborts its
/// siblings, and every submitted item contributes exactly one outcome to
/// the tally. The exception is cooperative cancellation: once the abort
/// token trips, no further items are submitted, and in-flight items that
/// wind down with `TaskError::Interrupted` (having already cleaned up their
/// partial artifact) are left out of the tally, which then reflects only
/// work finished before the signal.
pub async fn run_all<F>(items: Vec<WorkItem>, task: F, limit: usize, abort: AbortToken) -> RunTally
where
    F: Fn(&WorkItem) -> Result<Outcome, TaskError> + Send + Sync + 'static,
{
    let limit = limit.max(1);
    let task = Arc::new(task);
    let total = items.len();
    let mut queue = items.into_iter();
    let mut join_set = JoinSet::new();
    let mut tally = RunTally::default();
    let mut completed = 0usize;

    loop {
        while join_set.len() < limit && !abort.is_set() {
            let Some(item) = queue.next() else { break };
            let task = Arc::clone(&task);
            join_set.spawn_blocking(move || task(&item));
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        completed += 1;
        print!("\r{}", progress_line(completed, total));
        let _ = std::io::stdout().flush();
        match res {
            Ok(Ok(outcome)) => tally.record(&outcome),
            Ok(Err(TaskError::Interrupted)) => {
                tracing::debug!("item abandoned after interrupt");
            }
            // Task boundaries convert errors to outcomes; anything else
            // still counts as a failure so no item is silently dropped.
            Ok(Err(e)) => tally.record(&Outcome::Failed(e.to_string())),
            Err(join_err) => tally.record(&Outcome::Failed(format!("task panicked: {join_err}"))),
        }
    }

    if completed > 0 {
        println!();
    }
    if abort.is_set() {
        tracing::info!(
            completed = tally.total(),
            dispatched = total,
            "run interrupted, returning partial tally"
        );
    }
    tally
}

/// Batch progress indicator, one update per completed item. Per-item
/// runners stay silent inside the pool; this is the only progress surface
/// during a concurrent run.
fn progress_line(completed: usize, total: usize) -> String {
    format!("  {completed}/{total} items")
}
