use std::time::Duration;

/// Calculate the mean (average) duration from a collection of durations
pub fn calculate_mean(durations: &[Duration]) -> Duration {
    if durations.is_empty() {
        return Duration::ZERO;
    }

    let total_nanos: u128 = durations.iter().map(Duration::as_nanos).sum();
    duration_from_nanos(total_nanos / durations.len() as u128)
}

/// Calculate the population standard deviation of durations.
///
/// The divisor is the number of samples, not `n - 1`: every measured round is part of
/// the population being described.
pub fn calculate_std_dev(durations: &[Duration], mean: Duration) -> Duration {
    if durations.len() <= 1 {
        return Duration::ZERO;
    }

    let mean_nanos = mean.as_nanos() as f64;

    let variance: f64 = durations
        .iter()
        .map(|d| {
            let diff = d.as_nanos() as f64 - mean_nanos;
            diff * diff
        })
        .sum::<f64>()
        / durations.len() as f64;

    Duration::from_nanos(variance.sqrt().round() as u64)
}

/// Express a duration as fractional milliseconds
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

fn duration_from_nanos(nanos: u128) -> Duration {
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_mean() {
        let durations = vec![
            Duration::from_millis(10),
            Duration::from_millis(20),
            Duration::from_millis(30),
        ];
        assert_eq!(calculate_mean(&durations), Duration::from_millis(20));
    }

    #[test]
    fn test_calculate_mean_empty() {
        let durations: Vec<Duration> = vec![];
        assert_eq!(calculate_mean(&durations), Duration::ZERO);
    }

    #[test]
    fn test_calculate_mean_keeps_fraction() {
        // Integer division of the millisecond total would give 1ms here
        let durations = vec![Duration::from_millis(1), Duration::from_millis(2)];
        assert_eq!(calculate_mean(&durations), Duration::from_micros(1_500));
    }

    #[test]
    fn test_calculate_std_dev_population() {
        let durations = vec![
            Duration::from_millis(10),
            Duration::from_millis(20),
            Duration::from_millis(30),
        ];
        let mean = calculate_mean(&durations);
        let std_dev = calculate_std_dev(&durations, mean);

        // sqrt(200 / 3) ms; sample std dev would be 10ms
        let std_dev_ms = as_millis_f64(std_dev);
        assert!((std_dev_ms - 8.165).abs() < 0.001, "got {std_dev_ms}");
    }

    #[test]
    fn test_calculate_std_dev_single_round() {
        let durations = vec![Duration::from_millis(42)];
        let mean = calculate_mean(&durations);
        assert_eq!(calculate_std_dev(&durations, mean), Duration::ZERO);
    }

    #[test]
    fn test_calculate_std_dev_constant_series() {
        let durations = vec![Duration::from_millis(5); 4];
        let mean = calculate_mean(&durations);
        assert_eq!(calculate_std_dev(&durations, mean), Duration::ZERO);
    }

    #[test]
    fn test_calculate_std_dev_empty() {
        let durations: Vec<Duration> = vec![];
        assert_eq!(calculate_std_dev(&durations, Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_as_millis_f64() {
        assert!((as_millis_f64(Duration::from_micros(2_500)) - 2.5).abs() < 1e-9);
        assert_eq!(as_millis_f64(Duration::ZERO), 0.0);
    }
}
