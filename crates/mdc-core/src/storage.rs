//! Local artifact storage helpers.
//!
//! Each work item's target path is unique by construction, so concurrent
//! writers never collide and no locking is needed here.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Removes a partial artifact if present. Best-effort: a leftover partial
/// file would contaminate future "already processed" checks, so failures to
/// remove are logged loudly but not propagated.
pub fn delete_if_exists(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::warn!(path = %path.display(), "removed partial artifact");
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not remove partial artifact");
        }
    }
}
