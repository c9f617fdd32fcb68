pub use crate::benchmarks::{
    BenchmarkConfig, BenchmarkRunner, Dataset, LoopVariant, ReportFormatter, StrategyResult,
};
pub use crate::error::{LoopPerfError, Result};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::EnvFilter, fmt::Layer, prelude::*, registry::Registry};

pub mod benchmarks;
mod error;

/// Installs the global tracing subscriber that writes the report to stdout.
///
/// Lines are handed to a background writer thread so console I/O never runs on the
/// measuring thread. The returned guard flushes that writer when dropped, so the caller
/// must keep it alive until the last line has been logged.
pub fn init_tracing() -> Result<WorkerGuard> {
    let (non_blocking_stdout, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());

    let stdout_layer = Layer::new()
        .with_writer(non_blocking_stdout)
        .with_ansi(false)
        .with_target(false)
        .without_time();

    Registry::default()
        .with(EnvFilter::new("info"))
        .with(stdout_layer)
        .try_init()
        .map_err(|e| LoopPerfError::LoggingSetup(e.to_string()))?;

    Ok(stdout_guard)
}
