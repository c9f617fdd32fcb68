pub mod core;
pub mod dataset;
pub mod loop_variants;
pub mod report;
pub mod runner;
pub mod stats;
pub mod timer;

// Re-export commonly used items for convenience
pub use self::core::{BenchmarkConfig, SeriesStats, StrategyResult};
pub use dataset::Dataset;
pub use loop_variants::LoopVariant;
pub use report::ReportFormatter;
pub use runner::BenchmarkRunner;
pub use timer::{CpuClock, RoundMeasurement, ThreadCpuClock, Timer};
