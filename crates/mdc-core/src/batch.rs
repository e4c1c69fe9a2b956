//! High-level batch operations: build the work list, narrow it against the
//! inventory, and hand it to the orchestrator.

use anyhow::{Context, Result};
use std::fs;
use std::sync::Arc;

use crate::config::MdcConfig;
use crate::control::AbortToken;
use crate::convert::Converter;
use crate::download::Downloader;
use crate::error::TaskError;
use crate::inventory;
use crate::orchestrator;
use crate::retry::{run_with_retry, RetryPolicy};
use crate::source;
use crate::url_model;
use crate::work::{filter_pending, Outcome, RunTally, WorkItem};

/// Download/convert engine for one process run. Owns the configuration and
/// the shared abort token.
pub struct Engine {
    cfg: MdcConfig,
    abort: AbortToken,
}

/// Everything one pooled task needs. Shared across workers behind an `Arc`;
/// all fields are read-only during a run.
struct TaskContext {
    downloader: Downloader,
    converter: Converter,
    policy: RetryPolicy,
    abort: AbortToken,
    overwrite: bool,
    quiet: bool,
}

impl TaskContext {
    /// Task boundary: retries transient failures, then converts whatever is
    /// left into an `Outcome`. Only an interrupt escapes as an error, so the
    /// orchestrator can keep it out of the tally.
    fn run(&self, item: &WorkItem) -> Result<Outcome, TaskError> {
        if self.abort.is_set() {
            return Err(TaskError::Interrupted);
        }
        let result = match item {
            WorkItem::Download { url, target_name } => run_with_retry(&self.policy, || {
                self.downloader
                    .run(url, target_name, &self.abort, false)
                    .map(|()| Outcome::Success)
            }),
            WorkItem::Convert { source, target, .. } => run_with_retry(&self.policy, || {
                self.converter.run(source, target, self.overwrite, self.quiet)
            }),
        };
        match result {
            Ok(outcome) => Ok(outcome),
            Err(TaskError::Interrupted) => Err(TaskError::Interrupted),
            Err(e) => {
                tracing::error!(item = item.target_name(), error = %e, "item failed");
                Ok(Outcome::Failed(e.to_string()))
            }
        }
    }
}

impl Engine {
    pub fn new(cfg: MdcConfig, abort: AbortToken) -> Self {
        Self { cfg, abort }
    }

    /// Downloads every pending URL from the videos list file.
    pub async fn download_batch(&self, overwrite: bool) -> Result<RunTally> {
        fs::create_dir_all(&self.cfg.download_dir)
            .with_context(|| format!("create {}", self.cfg.download_dir.display()))?;

        let urls = source::read_video_urls(&self.cfg.videos_file)?;
        let mut items = Vec::with_capacity(urls.len());
        for url in urls {
            match url_model::target_video_name(&url) {
                Ok(target_name) => items.push(WorkItem::Download { url, target_name }),
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "skipping URL without a usable file name")
                }
            }
        }

        let items = self.narrow(items, overwrite, &self.cfg.download_dir, "mp4")?;
        tracing::info!(pending = items.len(), "starting download batch");
        self.run_items(items, overwrite, true).await
    }

    /// Converts every pending downloaded video to an audio file.
    pub async fn convert_batch(&self, overwrite: bool, quiet: bool) -> Result<RunTally> {
        fs::create_dir_all(&self.cfg.download_dir)
            .with_context(|| format!("create {}", self.cfg.download_dir.display()))?;
        fs::create_dir_all(&self.cfg.converted_dir)
            .with_context(|| format!("create {}", self.cfg.converted_dir.display()))?;

        let videos = inventory::scan(&self.cfg.download_dir, "mp4")
            .with_context(|| format!("scan {}", self.cfg.download_dir.display()))?;
        let mut items = Vec::with_capacity(videos.len());
        for name in &videos {
            let target_name = url_model::target_audio_name(name);
            items.push(WorkItem::Convert {
                source: self.cfg.download_dir.join(name),
                target: self.cfg.converted_dir.join(&target_name),
                target_name,
            });
        }

        let items = self.narrow(items, overwrite, &self.cfg.converted_dir, "mp3")?;
        tracing::info!(pending = items.len(), "starting convert batch");
        self.run_items(items, overwrite, quiet).await
    }

    /// Single-item path: download one URL with a progress display, then
    /// convert it, sequentially and outside the pool.
    pub async fn one(&self, raw_url: &str, overwrite: bool, quiet: bool) -> Result<()> {
        let url = url_model::normalize_url(raw_url)?;
        let target_name = url_model::target_video_name(&url)?;
        fs::create_dir_all(&self.cfg.download_dir)?;
        fs::create_dir_all(&self.cfg.converted_dir)?;

        let ctx = self.task_context(overwrite, quiet);
        let video_path = ctx.downloader.target_path(&target_name);
        let audio_name = url_model::target_audio_name(&target_name);
        let audio_path = self.cfg.converted_dir.join(&audio_name);

        println!("Proceeding {url} ...");
        tokio::task::spawn_blocking(move || -> Result<(), TaskError> {
            if overwrite || !video_path.exists() {
                run_with_retry(&ctx.policy, || {
                    ctx.downloader.run(&url, &target_name, &ctx.abort, true)
                })?;
            } else {
                tracing::info!(file = %target_name, "already downloaded, skipping fetch");
            }
            run_with_retry(&ctx.policy, || {
                ctx.converter
                    .run(&video_path, &audio_path, overwrite, quiet)
                    .map(|_| ())
            })?;
            Ok(())
        })
        .await
        .context("single-item task join")??;

        println!("All done!");
        Ok(())
    }

    fn task_context(&self, overwrite: bool, quiet: bool) -> TaskContext {
        TaskContext {
            downloader: Downloader::new(&self.cfg),
            converter: Converter::new(),
            policy: self.cfg.retry_policy(),
            abort: self.abort.clone(),
            overwrite,
            quiet,
        }
    }

    /// Inventory-based pre-filter; skipped entirely when overwriting.
    fn narrow(
        &self,
        items: Vec<WorkItem>,
        overwrite: bool,
        dir: &std::path::Path,
        extension: &str,
    ) -> Result<Vec<WorkItem>> {
        if overwrite {
            return Ok(items);
        }
        let existing = inventory::scan(dir, extension)
            .with_context(|| format!("scan {}", dir.display()))?;
        Ok(filter_pending(items, &existing))
    }

    async fn run_items(
        &self,
        items: Vec<WorkItem>,
        overwrite: bool,
        quiet: bool,
    ) -> Result<RunTally> {
        let ctx = Arc::new(self.task_context(overwrite, quiet));
        let task = move |item: &WorkItem| ctx.run(item);
        Ok(orchestrator::run_all(items, task, self.cfg.concurrency, self.abort.clone()).await)
    }
}
