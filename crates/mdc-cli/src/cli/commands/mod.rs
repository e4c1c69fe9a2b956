mod config;
mod convert;
mod download;
mod one;
mod together;

pub use config::run_config;
pub use convert::run_convert;
pub use download::run_download;
pub use one::run_one;
pub use together::run_together;

use mdc_core::batch::Engine;
use mdc_core::config::MdcConfig;
use mdc_core::control::{self, AbortToken};

/// Builds the engine for one command run with Ctrl-C wired to its abort
/// token.
pub(super) fn engine_with_interrupts(cfg: MdcConfig) -> Engine {
    let abort = AbortToken::new();
    control::listen_for_ctrl_c(abort.clone());
    Engine::new(cfg, abort)
}
