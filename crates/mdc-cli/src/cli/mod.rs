//! CLI for the mdc batch downloader/converter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mdc_core::config;

use commands::{run_config, run_convert, run_download, run_one, run_together};

/// Top-level CLI for mdc.
#[derive(Debug, Parser)]
#[command(name = "mdc")]
#[command(about = "mdc: batch video downloader and mp3 converter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every URL in the videos list file.
    Download {
        /// Re-download items whose video file already exists.
        #[arg(long)]
        overwrite: bool,
        /// Run up to N items concurrently (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Convert every downloaded video to an mp3.
    Convert {
        /// Re-convert items whose audio file already exists.
        #[arg(long)]
        overwrite: bool,
        /// Suppress ffmpeg diagnostics.
        #[arg(long)]
        quiet: bool,
        /// Run up to N items concurrently (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Download all URLs, then convert the downloads.
    Together {
        /// Re-process items whose target artifact already exists.
        #[arg(long)]
        overwrite: bool,
        /// Suppress ffmpeg diagnostics.
        #[arg(long)]
        quiet: bool,
        /// Run up to N items concurrently (default from config).
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// Download a single URL and convert it.
    One {
        /// Video URL (scheme optional; https is assumed).
        #[arg(long)]
        url: String,
        /// Re-process even if the artifacts already exist.
        #[arg(long)]
        overwrite: bool,
        /// Suppress ffmpeg diagnostics.
        #[arg(long)]
        quiet: bool,
    },

    /// Print the resolved configuration.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Download { overwrite, jobs } => {
                apply_jobs(&mut cfg, jobs);
                run_download(cfg, overwrite).await?;
            }
            CliCommand::Convert {
                overwrite,
                quiet,
                jobs,
            } => {
                apply_jobs(&mut cfg, jobs);
                run_convert(cfg, overwrite, quiet).await?;
            }
            CliCommand::Together {
                overwrite,
                quiet,
                jobs,
            } => {
                apply_jobs(&mut cfg, jobs);
                run_together(cfg, overwrite, quiet).await?;
            }
            CliCommand::One {
                url,
                overwrite,
                quiet,
            } => run_one(cfg, &url, overwrite, quiet).await?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

fn apply_jobs(cfg: &mut mdc_core::config::MdcConfig, jobs: Option<usize>) {
    if let Some(n) = jobs {
        cfg.concurrency = n.max(1);
    }
}

#[cfg(test)]
mod tests;
