//! Utility functions for the fleet sizing tool
//!
//! Unit normalization helpers for the CLI boundary: the command line speaks
//! jobs per hour and minutes, the solver wants both rates in the same unit.

/// Convert an hourly arrival rate to a per-minute rate
pub fn hourly_rate_to_per_minute(jobs_per_hour: f64) -> f64 {
    jobs_per_hour / 60.0
}

/// Convert an average service time in minutes to a per-minute service rate
///
/// The reciprocal of the service time; zero or negative times yield a
/// non-positive or infinite rate that request validation rejects downstream.
pub fn service_minutes_to_rate(service_time_minutes: f64) -> f64 {
    1.0 / service_time_minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_rate_conversion() {
        assert!((hourly_rate_to_per_minute(60.0) - 1.0).abs() < 1e-12);
        assert!((hourly_rate_to_per_minute(10.0) - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(hourly_rate_to_per_minute(0.0), 0.0);
    }

    #[test]
    fn test_service_rate_conversion() {
        assert!((service_minutes_to_rate(7.0) - 1.0 / 7.0).abs() < 1e-12);
        assert!((service_minutes_to_rate(0.5) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rates_agree_across_units() {
        // 10 jobs/hour against 7-minute services keeps the same ratio in
        // either unit system.
        let per_minute = hourly_rate_to_per_minute(10.0) / service_minutes_to_rate(7.0);
        let per_hour = 10.0 / (60.0 / 7.0);
        assert!((per_minute - per_hour).abs() < 1e-12);
    }
}
