use std::time::{Duration, Instant};

use super::dataset::Dataset;
use super::loop_variants::LoopVariant;
use crate::error::{LoopPerfError, Result};

/// Source of CPU time consumed by the calling thread.
pub trait CpuClock {
    /// CPU time consumed by the current thread so far.
    fn now(&self) -> Result<Duration>;
}

/// Per-thread CPU clock backed by `CLOCK_THREAD_CPUTIME_ID`.
#[derive(Debug, Clone, Copy)]
pub struct ThreadCpuClock {
    _private: (),
}

impl ThreadCpuClock {
    /// Returns the clock only if it can be read on this platform.
    pub fn detect() -> Option<Self> {
        match read_thread_cpu_time() {
            Ok(_) => Some(Self { _private: () }),
            Err(e) => {
                tracing::warn!("CPU time unavailable, reporting wall clock only: {}", e);
                None
            }
        }
    }
}

impl CpuClock for ThreadCpuClock {
    fn now(&self) -> Result<Duration> {
        read_thread_cpu_time()
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn read_thread_cpu_time() -> Result<Duration> {
    use nix::time::{ClockId, clock_gettime};

    clock_gettime(ClockId::CLOCK_THREAD_CPUTIME_ID)
        .map(Duration::from)
        .map_err(|e| LoopPerfError::Clock(e.to_string()))
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn read_thread_cpu_time() -> Result<Duration> {
    Err(LoopPerfError::Clock(
        "no per-thread CPU clock on this platform".to_string(),
    ))
}

/// Timing of one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundMeasurement {
    pub wall_clock: Duration,
    /// `None` when the run has no CPU clock.
    pub cpu_time: Option<Duration>,
}

/// Times single traversals against a monotonic wall clock and, when available, the
/// thread CPU clock.
pub struct Timer {
    cpu_clock: Option<Box<dyn CpuClock>>,
}

impl Timer {
    /// Timer using the thread CPU clock if this platform has one.
    pub fn new() -> Self {
        let cpu_clock =
            ThreadCpuClock::detect().map(|clock| Box::new(clock) as Box<dyn CpuClock>);
        Self { cpu_clock }
    }

    pub fn with_cpu_clock(cpu_clock: Option<Box<dyn CpuClock>>) -> Self {
        Self { cpu_clock }
    }

    pub fn cpu_time_available(&self) -> bool {
        self.cpu_clock.is_some()
    }

    /// Runs one traversal of `dataset` and returns how long it took.
    ///
    /// The CPU clock is sampled outside the wall-clock window so its own cost does not
    /// show up in the wall-clock figure.
    pub fn measure(&self, variant: LoopVariant, dataset: &Dataset) -> Result<RoundMeasurement> {
        let cpu_start = self.read_cpu_clock()?;
        let wall_start = Instant::now();

        variant.traverse(dataset);

        let wall_clock = wall_start.elapsed();
        let cpu_end = self.read_cpu_clock()?;

        let cpu_time = match (cpu_start, cpu_end) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        };

        Ok(RoundMeasurement {
            wall_clock,
            cpu_time,
        })
    }

    fn read_cpu_clock(&self) -> Result<Option<Duration>> {
        self.cpu_clock.as_ref().map(|clock| clock.now()).transpose()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
