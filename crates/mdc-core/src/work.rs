//! Work items, outcomes, and the per-run tally.

use std::collections::BTreeSet;
use std::path::PathBuf;
use url::Url;

/// One unit of work. Immutable once created; the target name is
/// deterministic from the source, which is what makes re-runs idempotent.
#[derive(Debug, Clone)]
pub enum WorkItem {
    /// Fetch a remote video into the download directory.
    Download { url: Url, target_name: String },
    /// Extract the audio track of a downloaded video.
    Convert {
        source: PathBuf,
        target: PathBuf,
        target_name: String,
    },
}

impl WorkItem {
    /// File name of the artifact this item produces.
    pub fn target_name(&self) -> &str {
        match self {
            WorkItem::Download { target_name, .. } => target_name,
            WorkItem::Convert { target_name, .. } => target_name,
        }
    }
}

/// Terminal classification of processing one work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Target artifact was already present; skipped, not an error.
    AlreadyExists,
    Failed(String),
}

/// Outcome counts for one batch run. Owned by the orchestrator's single
/// aggregation loop, so plain integers suffice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTally {
    pub success: u32,
    pub already_exists: u32,
    pub failed: u32,
}

impl RunTally {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Success => self.success += 1,
            Outcome::AlreadyExists => self.already_exists += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.success + self.already_exists + self.failed
    }
}

/// Drops items whose target artifact is already in the inventory.
///
/// Stable: input order is preserved, so submission order and per-item log
/// records follow the original list.
pub fn filter_pending(items: Vec<WorkItem>, inventory: &BTreeSet<String>) -> Vec<WorkItem> {
    items
        .into_iter()
        .filter(|item| !inventory.contains(item.target_name()))
        .collect()
}
