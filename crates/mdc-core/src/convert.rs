//! Convert task runner: extract the audio track of a downloaded video.
//!
//! Invokes the external `ffmpeg` binary as a child process. The batch
//! pre-filter runs once at batch start, so a concurrent peer may have
//! produced the target in the meantime; the runner re-checks the target
//! path itself to keep the operation idempotent under that race.

use std::path::Path;
use std::process::Command;

use crate::error::TaskError;
use crate::storage;
use crate::work::Outcome;

/// Longest codec stderr excerpt carried into the error detail.
const MAX_DETAIL_BYTES: usize = 500;

#[derive(Debug, Clone)]
pub struct Converter {
    program: String,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self {
            program: "ffmpeg".to_string(),
        }
    }

    /// Use a different codec binary (custom ffmpeg build, test stand-in).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Extracts audio from `source` into `target`, overwriting whatever is
    /// there. With `overwrite` unset, an existing target short-circuits to
    /// `AlreadyExists` without touching the codec. `quiet` suppresses codec
    /// diagnostics and has no effect on control flow. Codec failures are
    /// retryable; the partial output is deleted before the error propagates.
    pub fn run(
        &self,
        source: &Path,
        target: &Path,
        overwrite: bool,
        quiet: bool,
    ) -> Result<Outcome, TaskError> {
        if !overwrite && target.exists() {
            return Ok(Outcome::AlreadyExists);
        }

        let loglevel = if quiet { "quiet" } else { "error" };
        let output = Command::new(&self.program)
            .arg("-hide_banner")
            .args(["-loglevel", loglevel])
            .arg("-y")
            .arg("-i")
            .arg(source)
            .arg("-vn")
            .arg(target)
            .output()?;

        if !output.status.success() {
            storage::delete_if_exists(target);
            return Err(TaskError::Codec(codec_detail(&output)));
        }

        tracing::debug!(file = %source.display(), "converted successfully");
        Ok(Outcome::Success)
    }
}

fn codec_detail(output: &std::process::Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        return format!("ffmpeg exited with {}", output.status);
    }
    // Keep the tail; ffmpeg puts the actual error last.
    let start = trimmed
        .len()
        .saturating_sub(MAX_DETAIL_BYTES)
        .min(trimmed.len());
    let mut cut = start;
    while cut < trimmed.len() && !trimmed.is_char_boundary(cut) {
        cut += 1;
    }
    trimmed[cut..].to_string()
}
