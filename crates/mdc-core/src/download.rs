//! Download task runner: streaming HTTP GET into the download directory.
//!
//! One curl `Easy` transfer per item, writing the body sequentially in
//! fixed-size chunks. Any failure after a partial write removes the file at
//! the target path before the error is classified, so future "already
//! downloaded" checks stay trustworthy.

use std::cell::Cell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::config::MdcConfig;
use crate::control::AbortToken;
use crate::error::TaskError;
use crate::storage;

/// Per-run downloader. Cheap to construct; holds only the target directory
/// and chunk size.
#[derive(Debug, Clone)]
pub struct Downloader {
    download_dir: PathBuf,
    chunk_size: usize,
}

impl Downloader {
    pub fn new(cfg: &MdcConfig) -> Self {
        Self {
            download_dir: cfg.download_dir.clone(),
            chunk_size: cfg.chunk_size.max(1),
        }
    }

    /// Local path the video for `target_name` lands at.
    pub fn target_path(&self, target_name: &str) -> PathBuf {
        self.download_dir.join(target_name)
    }

    /// Fetches `url` into the download directory.
    ///
    /// Non-2xx responses fail with `Http`, transport problems with
    /// `Network`; both are retryable. A triggered abort token stops the
    /// transfer at the next chunk and yields `Interrupted`. On any failure
    /// the partial file is deleted before the error is returned.
    ///
    /// `show_progress` prints a byte counter and is only meant for
    /// standalone (non-concurrent) use; inside the pool, progress is
    /// aggregated at the orchestrator level instead.
    pub fn run(
        &self,
        url: &Url,
        target_name: &str,
        abort: &AbortToken,
        show_progress: bool,
    ) -> Result<(), TaskError> {
        if abort.is_set() {
            return Err(TaskError::Interrupted);
        }
        let path = self.target_path(target_name);
        match self.stream_to_file(url, &path, abort, show_progress) {
            Ok(()) => {
                tracing::debug!(file = target_name, "downloaded successfully");
                Ok(())
            }
            Err(e) => {
                storage::delete_if_exists(&path);
                Err(e)
            }
        }
    }

    fn stream_to_file(
        &self,
        url: &Url,
        path: &Path,
        abort: &AbortToken,
        show_progress: bool,
    ) -> Result<(), TaskError> {
        let mut out = fs::File::create(path)?;

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.fail_on_error(true)?;
        easy.buffer_size(self.chunk_size)?;
        easy.connect_timeout(Duration::from_secs(30))?;
        easy.low_speed_limit(1024)?;
        easy.low_speed_time(Duration::from_secs(60))?;

        let mut write_err: Option<io::Error> = None;
        let received = Cell::new(0u64);
        let total = Cell::new(0u64);

        let perform_result = {
            let mut transfer = easy.transfer();
            transfer.header_function(|line| {
                if let Ok(s) = std::str::from_utf8(line) {
                    let lower = s.to_ascii_lowercase();
                    if let Some(rest) = lower.strip_prefix("content-length:") {
                        total.set(rest.trim().parse().unwrap_or(0));
                    }
                }
                true
            })?;
            transfer.write_function(|data| {
                if abort.is_set() {
                    return Ok(0); // aborts the transfer
                }
                if let Err(e) = out.write_all(data) {
                    write_err = Some(e);
                    return Ok(0);
                }
                received.set(received.get() + data.len() as u64);
                if show_progress {
                    print_progress(received.get(), total.get());
                }
                Ok(data.len())
            })?;
            transfer.perform()
        };

        match perform_result {
            Ok(()) => {
                out.flush()?;
                if show_progress {
                    println!();
                }
                Ok(())
            }
            Err(e) => {
                if abort.is_set() {
                    return Err(TaskError::Interrupted);
                }
                if let Some(io_err) = write_err {
                    return Err(TaskError::Io(io_err));
                }
                if e.is_http_returned_error() {
                    let code = easy.response_code()?;
                    return Err(TaskError::Http(code));
                }
                Err(TaskError::Network(e))
            }
        }
    }
}

fn print_progress(received: u64, total: u64) {
    const MIB: f64 = 1_048_576.0;
    if total > 0 {
        print!(
            "\r  {:.1} / {:.1} MiB",
            received as f64 / MIB,
            total as f64 / MIB
        );
    } else {
        print!("\r  {:.1} MiB", received as f64 / MIB);
    }
    let _ = io::stdout().flush();
}
