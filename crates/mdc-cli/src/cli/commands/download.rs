//! `mdc download` – batch-download the URL list.

use anyhow::Result;
use mdc_core::config::MdcConfig;
use mdc_core::report;

use super::engine_with_interrupts;

pub async fn run_download(cfg: MdcConfig, overwrite: bool) -> Result<()> {
    let engine = engine_with_interrupts(cfg);
    let tally = engine.download_batch(overwrite).await?;
    println!("{}", report::summary("download", &tally));
    Ok(())
}
