//! `mdc config` – print the resolved configuration.

use anyhow::Result;
use mdc_core::config::MdcConfig;

pub fn run_config(cfg: &MdcConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
