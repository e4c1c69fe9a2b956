//! `mdc together` – download the URL list, then convert the downloads.

use anyhow::Result;
use mdc_core::config::MdcConfig;
use mdc_core::report;

use super::engine_with_interrupts;

pub async fn run_together(cfg: MdcConfig, overwrite: bool, quiet: bool) -> Result<()> {
    let engine = engine_with_interrupts(cfg);

    let downloads = engine.download_batch(overwrite).await?;
    println!("{}", report::summary("download", &downloads));

    let conversions = engine.convert_batch(overwrite, quiet).await?;
    println!("{}", report::summary("convert", &conversions));

    Ok(())
}
