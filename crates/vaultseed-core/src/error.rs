use thiserror::Error;

/// Error type shared across Vaultseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied configuration or density profile is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A step ran before its dependencies populated the context.
    #[error("ordering error: {0}")]
    Ordering(String),
    /// The commit collaborator rejected the accumulated batches.
    #[error("commit failed: {0}")]
    Commit(String),
}

/// Convenience alias for results returned by Vaultseed crates.
pub type Result<T> = std::result::Result<T, Error>;
