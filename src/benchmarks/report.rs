use super::core::{BenchmarkConfig, SeriesStats, StrategyResult};

const LABEL_WIDTH: usize = 22;
const COLUMN_WIDTH: usize = 28;

/// Renders the configuration block and per-variant results as aligned text lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Identifies the build and the machine the numbers came from.
    pub fn platform() -> String {
        format!(
            "{} {} ({} {})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    }

    pub fn config_lines(&self, config: &BenchmarkConfig) -> Vec<String> {
        vec![
            Self::labelled("Platform", &Self::platform()),
            Self::labelled("ROUNDS", &Self::format_number(u64::from(config.rounds()))),
            Self::labelled("SIZE", &Self::format_number(config.size() as u64)),
            Self::labelled("SIZE (warm)", &Self::format_number(config.warm_size() as u64)),
        ]
    }

    pub fn header_line(&self) -> String {
        format!(
            "{:<LABEL_WIDTH$}{:<COLUMN_WIDTH$}{}",
            "LOOP VARIANT", "WALL CLOCK TIME", "CPU TIME"
        )
    }

    pub fn result_line(&self, result: &StrategyResult) -> String {
        let wall_clock = Self::format_series(&result.wall_clock);
        let cpu_time = result
            .cpu_time
            .as_ref()
            .map(Self::format_series)
            .unwrap_or_else(|| "n/a".to_string());

        format!(
            "{:<LABEL_WIDTH$}{:<COLUMN_WIDTH$}{}",
            result.name(),
            wall_clock,
            cpu_time
        )
    }

    /// Abbreviates large counts: `1500` becomes `1.5 k`, `2_500_000` becomes `2.5 M`.
    pub fn format_number(num: u64) -> String {
        if num > 1_000_000_000 {
            format!("{} G", Self::format_decimal(num as f64 / 1_000_000_000.0))
        } else if num > 1_000_000 {
            format!("{} M", Self::format_decimal(num as f64 / 1_000_000.0))
        } else if num > 1_000 {
            format!("{} k", Self::format_decimal(num as f64 / 1_000.0))
        } else {
            num.to_string()
        }
    }

    /// One or two fraction digits: `3.0`, `1.5`, `1.23`.
    pub fn format_decimal(value: f64) -> String {
        let mut text = format!("{value:.2}");
        if text.ends_with('0') && !text.ends_with(".0") {
            text.pop();
        }
        text
    }

    fn format_series(series: &SeriesStats) -> String {
        format!(
            "{} (±{}) ms",
            Self::format_decimal(series.mean_ms()),
            Self::format_decimal(series.std_dev_ms())
        )
    }

    fn labelled(label: &str, value: &str) -> String {
        format!("{label:<LABEL_WIDTH$}{value}")
    }
}
