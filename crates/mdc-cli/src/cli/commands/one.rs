//! `mdc one --url <URL>` – single-item download + convert.

use anyhow::Result;
use mdc_core::config::MdcConfig;
use mdc_core::error::TaskError;

use super::engine_with_interrupts;

pub async fn run_one(cfg: MdcConfig, url: &str, overwrite: bool, quiet: bool) -> Result<()> {
    let engine = engine_with_interrupts(cfg);
    match engine.one(url, overwrite, quiet).await {
        Ok(()) => Ok(()),
        // Ctrl-C during the single item: cleanup already ran, exit quietly.
        Err(e) if matches!(e.downcast_ref::<TaskError>(), Some(TaskError::Interrupted)) => {
            println!("Interrupted.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
