pub mod config;
pub mod logging;

pub mod batch;
pub mod control;
pub mod convert;
pub mod download;
pub mod error;
pub mod inventory;
pub mod orchestrator;
pub mod report;
pub mod retry;
pub mod source;
pub mod storage;
pub mod url_model;
pub mod work;
