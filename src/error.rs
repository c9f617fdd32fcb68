use std::collections::TryReserveError;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, LoopPerfError>;

#[derive(Error, Debug)]
pub enum LoopPerfError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot allocate a dataset of {requested} elements: {source}")]
    ResourceExhaustion {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("CPU clock error: {0}")]
    Clock(String),

    #[error("Logging setup error: {0}")]
    LoggingSetup(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl LoopPerfError {
    /// Whether the error came from user input rather than from running the benchmark.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LoopPerfError::InvalidArgument(_))
    }
}
