use thiserror::Error;

/// Errors raised while preparing a sweep, strictly before any worker spawns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The worker pool cannot be empty.
    #[error("worker count must be at least 1, got {0}")]
    WorkerCount(usize),
}
