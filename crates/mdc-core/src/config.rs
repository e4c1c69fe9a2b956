use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::retry::RetryPolicy;

/// Global configuration loaded from `~/.config/mdc/config.toml`, with
/// environment overrides applied on top. Built once at process start and
/// threaded through; no ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MdcConfig {
    /// Directory where downloaded videos land.
    pub download_dir: PathBuf,
    /// Directory where extracted audio files land.
    pub converted_dir: PathBuf,
    /// Text file with one video URL per line.
    pub videos_file: PathBuf,
    /// Streaming chunk size in bytes for downloads.
    pub chunk_size: usize,
    /// Number of concurrent workers in a batch run.
    pub concurrency: usize,
    /// Maximum attempts per item (including the first).
    pub max_attempts: u32,
}

impl Default for MdcConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("download"),
            converted_dir: PathBuf::from("converted"),
            videos_file: PathBuf::from("videos.txt"),
            chunk_size: 10_000,
            concurrency: 3,
            max_attempts: 3,
        }
    }
}

impl MdcConfig {
    /// Retry policy derived from the configured attempt budget.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts)
    }

    /// Applies environment overrides. `get` abstracts `std::env::var` so the
    /// override logic is testable without touching process state.
    pub fn apply_overrides(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(v) = get("MDC_DOWNLOAD_DIR") {
            self.download_dir = PathBuf::from(v);
        }
        if let Some(v) = get("MDC_CONVERTED_DIR") {
            self.converted_dir = PathBuf::from(v);
        }
        if let Some(v) = get("MDC_VIDEOS_FILE") {
            self.videos_file = PathBuf::from(v);
        }
        if let Some(v) = get("MDC_MAX_ATTEMPTS") {
            match v.parse() {
                Ok(n) => self.max_attempts = n,
                Err(_) => tracing::warn!(value = %v, "ignoring bad MDC_MAX_ATTEMPTS"),
            }
        }
        if let Some(v) = get("MDC_JOBS") {
            match v.parse() {
                Ok(n) => self.concurrency = n,
                Err(_) => tracing::warn!(value = %v, "ignoring bad MDC_JOBS"),
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mdc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists,
/// then apply environment overrides.
pub fn load_or_init() -> Result<MdcConfig> {
    let path = config_path()?;
    let mut cfg = if path.exists() {
        let data = fs::read_to_string(&path)?;
        toml::from_str(&data)?
    } else {
        let default_cfg = MdcConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        default_cfg
    };

    cfg.apply_overrides(|key| std::env::var(key).ok());
    Ok(cfg)
}
