use std::time::Instant;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

use super::core::{BenchmarkConfig, StrategyResult};
use super::dataset::Dataset;
use super::loop_variants::LoopVariant;
use super::report::ReportFormatter;
use super::timer::Timer;
use crate::error::Result;

/// Runs every [`LoopVariant`] through a warm-up round and then the measured rounds,
/// logging the report as it goes.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    timer: Timer,
    formatter: ReportFormatter,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self::with_timer(config, Timer::new())
    }

    pub fn with_timer(config: BenchmarkConfig, timer: Timer) -> Self {
        Self {
            config,
            timer,
            formatter: ReportFormatter::new(),
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Generates both datasets, warms up, measures all variants and logs the report.
    ///
    /// Results come back in declaration order. The first error aborts the run.
    pub fn run(&self) -> Result<Vec<StrategyResult>> {
        let warm_data = Dataset::generate(self.config.warm_size())?;
        let data = Dataset::generate(self.config.size())?;

        for line in self.formatter.config_lines(&self.config) {
            tracing::info!("{}", line);
        }
        tracing::info!("");

        self.warm_up(warm_data)?;
        tracing::info!("");

        let overall_start = Instant::now();
        let results = self.measure_all(&data)?;

        tracing::info!("");
        tracing::info!("Overall Duration: {:?}", overall_start.elapsed());

        Ok(results)
    }

    /// Runs each variant once over `dataset` and discards the timings.
    ///
    /// Takes the dataset by value so its memory is released before measuring starts.
    pub fn warm_up(&self, dataset: Dataset) -> Result<()> {
        tracing::info!("Warming up...");

        for variant in LoopVariant::ALL {
            if let Err(e) = self.timer.measure(variant, &dataset) {
                tracing::error!("Warm-up of {} failed: {}", variant, e);
                return Err(e);
            }
        }

        tracing::info!("Warm-up completed");
        Ok(())
    }

    /// Measures every variant over `dataset`, logging one result line per variant.
    pub fn measure_all(&self, dataset: &Dataset) -> Result<Vec<StrategyResult>> {
        tracing::info!("{}", self.formatter.header_line());

        let mut results = Vec::with_capacity(LoopVariant::ALL.len());
        for variant in LoopVariant::ALL {
            let result = match self.measure_variant(variant, dataset) {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("Benchmark of {} failed: {}", variant, e);
                    return Err(e);
                }
            };
            tracing::info!("{}", self.formatter.result_line(&result));
            results.push(result);
        }

        Ok(results)
    }

    /// Measures `variant` over `dataset` for the configured number of rounds.
    pub fn measure_variant(
        &self,
        variant: LoopVariant,
        dataset: &Dataset,
    ) -> Result<StrategyResult> {
        let rounds = self.config.rounds();
        let mut measurements = Vec::with_capacity(rounds as usize);

        #[cfg(feature = "progress")]
        let pb = progress_bar(u64::from(rounds), variant.name());

        for _ in 0..rounds {
            measurements.push(self.timer.measure(variant, dataset)?);
            #[cfg(feature = "progress")]
            pb.inc(1);
        }

        #[cfg(feature = "progress")]
        pb.finish_and_clear();

        Ok(StrategyResult::from_measurements(variant, &measurements))
    }
}

#[cfg(feature = "progress")]
fn progress_bar(len: u64, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("{msg} [{bar:40.green/blue}] {pos}/{len} ({percent}%)")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
    pb.set_style(style);
    pb.set_message(message);
    pb
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::LoopPerfError;
    use crate::benchmarks::CpuClock;
    use crate::benchmarks::timer::tests::SteppingClock;

    fn stepping_runner(size: usize, rounds: u32, step: Duration) -> BenchmarkRunner {
        let config = BenchmarkConfig::with_warm_size(size, rounds, 1_000).unwrap();
        let timer = Timer::with_cpu_clock(Some(Box::new(SteppingClock::new(step))));
        BenchmarkRunner::with_timer(config, timer)
    }

    #[test]
    fn test_run_reports_every_variant_in_order() {
        let runner = stepping_runner(10_000, 3, Duration::from_millis(2));
        assert_eq!(runner.config().rounds(), 3);
        let results = runner.run().unwrap();

        let variants: Vec<LoopVariant> = results.iter().map(|r| r.variant).collect();
        assert_eq!(variants, LoopVariant::ALL.to_vec());

        for result in &results {
            assert_eq!(result.rounds, 3);
            // Every round reads the clock twice, one step apart
            let cpu = result.cpu_time.unwrap();
            assert_eq!(cpu.mean, Duration::from_millis(2));
            assert_eq!(cpu.std_dev, Duration::ZERO);
        }
    }

    #[test]
    fn test_single_round_has_zero_std_dev() {
        let runner = stepping_runner(1_000, 1, Duration::from_millis(1));
        let results = runner.run().unwrap();

        for result in results {
            assert_eq!(result.wall_clock.std_dev, Duration::ZERO);
            assert_eq!(result.cpu_time.unwrap().std_dev, Duration::ZERO);
        }
    }

    #[test]
    fn test_empty_dataset_completes() {
        let config = BenchmarkConfig::with_warm_size(0, 5, 0).unwrap();
        let runner = BenchmarkRunner::with_timer(config, Timer::with_cpu_clock(None));
        let results = runner.run().unwrap();

        assert_eq!(results.len(), LoopVariant::ALL.len());
        for result in results {
            assert_eq!(result.cpu_time, None);
            assert!(result.wall_clock.mean < Duration::from_millis(100));
        }
    }

    struct FailingAfter {
        reads_left: std::cell::Cell<u32>,
    }

    impl CpuClock for FailingAfter {
        fn now(&self) -> crate::Result<Duration> {
            let left = self.reads_left.get();
            if left == 0 {
                return Err(LoopPerfError::Clock("exhausted".to_string()));
            }
            self.reads_left.set(left - 1);
            Ok(Duration::from_millis(u64::from(left)))
        }
    }

    #[test]
    fn test_warm_up_failure_aborts() {
        let config = BenchmarkConfig::with_warm_size(100, 2, 100).unwrap();
        // Enough for the first two warm-up rounds only
        let timer = Timer::with_cpu_clock(Some(Box::new(FailingAfter {
            reads_left: std::cell::Cell::new(4),
        })));
        let runner = BenchmarkRunner::with_timer(config, timer);

        let res = runner.run();
        assert!(matches!(res, Err(LoopPerfError::Clock(_))));
    }

    #[test]
    fn test_resource_exhaustion_before_measuring() {
        let config = BenchmarkConfig::with_warm_size(usize::MAX, 1, 0).unwrap();
        let runner = BenchmarkRunner::with_timer(config, Timer::with_cpu_clock(None));

        let res = runner.run();
        assert!(matches!(
            res,
            Err(LoopPerfError::ResourceExhaustion { .. })
        ));
    }
}
