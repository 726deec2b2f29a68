mod logging;
mod run;

pub use logging::init_run_logging;
pub use run::{RunContext, RunPaths, start_run, write_summary};

use thiserror::Error;

/// Errors from run-registry bookkeeping.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging init failed: {0}")]
    Logging(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
