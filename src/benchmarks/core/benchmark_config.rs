use crate::error::{LoopPerfError, Result};

/// Number of elements in the measured dataset when none is given.
pub const DEFAULT_SIZE: usize = 10_000_000;

/// Number of measured rounds per loop variant when none is given.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Number of elements in the warm-up dataset. Not configurable.
pub const SIZE_WARM: usize = 5_000_000;

/// Configuration for benchmark execution.
///
/// Built once at startup and only read afterwards. Construction goes through
/// [`BenchmarkConfig::new`], so a config with zero rounds cannot exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    size: usize,
    rounds: u32,
    warm_size: usize,
}

impl BenchmarkConfig {
    pub fn new(size: usize, rounds: u32) -> Result<Self> {
        Self::with_warm_size(size, rounds, SIZE_WARM)
    }

    /// Like [`BenchmarkConfig::new`] but with a custom warm-up dataset size.
    pub fn with_warm_size(size: usize, rounds: u32, warm_size: usize) -> Result<Self> {
        // Mean and standard deviation divide by the round count
        if rounds == 0 {
            return Err(LoopPerfError::InvalidArgument(
                "ROUNDS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            size,
            rounds,
            warm_size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn warm_size(&self) -> usize {
        self.warm_size
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            rounds: DEFAULT_ROUNDS,
            warm_size: SIZE_WARM,
        }
    }
}
