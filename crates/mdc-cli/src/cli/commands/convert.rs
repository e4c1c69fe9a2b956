//! `mdc convert` – batch-convert downloaded videos.

use anyhow::Result;
use mdc_core::config::MdcConfig;
use mdc_core::report;

use super::engine_with_interrupts;

pub async fn run_convert(cfg: MdcConfig, overwrite: bool, quiet: bool) -> Result<()> {
    let engine = engine_with_interrupts(cfg);
    let tally = engine.convert_batch(overwrite, quiet).await?;
    println!("{}", report::summary("convert", &tally));
    Ok(())
}
