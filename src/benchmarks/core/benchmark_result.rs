use std::time::Duration;

use crate::benchmarks::loop_variants::LoopVariant;
use crate::benchmarks::stats;
use crate::benchmarks::timer::RoundMeasurement;

/// Mean and population standard deviation of one timing series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStats {
    pub mean: Duration,
    pub std_dev: Duration,
}

impl SeriesStats {
    pub fn from_timings(timings: &[Duration]) -> Self {
        let mean = stats::calculate_mean(timings);
        let std_dev = stats::calculate_std_dev(timings, mean);
        Self { mean, std_dev }
    }

    pub fn mean_ms(&self) -> f64 {
        stats::as_millis_f64(self.mean)
    }

    pub fn std_dev_ms(&self) -> f64 {
        stats::as_millis_f64(self.std_dev)
    }
}

/// Results from measuring one loop variant over all rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyResult {
    pub variant: LoopVariant,
    pub rounds: u32,
    pub wall_clock: SeriesStats,
    /// `None` when CPU time was unavailable for any round.
    pub cpu_time: Option<SeriesStats>,
}

impl StrategyResult {
    /// Aggregates the per-round measurements of `variant`.
    ///
    /// Each series is summarised on its own, so the wall-clock mean is always paired with
    /// the wall-clock deviation and the CPU mean with the CPU deviation.
    pub fn from_measurements(variant: LoopVariant, measurements: &[RoundMeasurement]) -> Self {
        let wall_timings: Vec<Duration> = measurements.iter().map(|m| m.wall_clock).collect();
        let cpu_timings: Option<Vec<Duration>> =
            measurements.iter().map(|m| m.cpu_time).collect();

        Self {
            variant,
            rounds: u32::try_from(measurements.len()).unwrap_or(u32::MAX),
            wall_clock: SeriesStats::from_timings(&wall_timings),
            cpu_time: cpu_timings.map(|timings| SeriesStats::from_timings(&timings)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.variant.name()
    }
}
