//! Common types used throughout the fleet sizing tool

use crate::cost::CostBreakdown;
use crate::queue::metrics::QueueMetrics;
use serde::{Deserialize, Serialize};

/// Number of parallel, statistically identical servers
pub type ServerCount = u32;

/// A sizing problem to solve
///
/// All three values must be expressed in one consistent time unit: if the
/// rates are jobs per minute, the wait bound is in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingRequest {
    /// Average jobs arriving per unit time (lambda)
    pub arrival_rate: f64,
    /// Average jobs one server completes per unit time (mu)
    pub service_rate: f64,
    /// Upper bound on the expected time a job waits in queue
    pub max_wait: f64,
}

impl SizingRequest {
    pub fn new(arrival_rate: f64, service_rate: f64, max_wait: f64) -> Self {
        Self {
            arrival_rate,
            service_rate,
            max_wait,
        }
    }

    /// Validate request values
    ///
    /// Every field must be positive and finite. A zero wait bound has no
    /// finite solution in this model and is rejected here rather than
    /// searched for forever.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.arrival_rate.is_finite() || self.arrival_rate <= 0.0 {
            return Err(crate::error::SizingError::InvalidParameter {
                message: format!(
                    "arrival_rate must be positive and finite, got {}",
                    self.arrival_rate
                ),
            }
            .into());
        }

        if !self.service_rate.is_finite() || self.service_rate <= 0.0 {
            return Err(crate::error::SizingError::InvalidParameter {
                message: format!(
                    "service_rate must be positive and finite, got {}",
                    self.service_rate
                ),
            }
            .into());
        }

        if !self.max_wait.is_finite() || self.max_wait <= 0.0 {
            return Err(crate::error::SizingError::InvalidParameter {
                message: format!(
                    "max_wait must be positive and finite, got {}",
                    self.max_wait
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Traffic intensity lambda/mu: average number of busy servers if
    /// capacity were unlimited
    pub fn traffic_intensity(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }
}

/// Outcome of a sizing run
///
/// The minimal feasible server count together with the steady-state metrics
/// the queue settles into at that count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sizing {
    pub servers: ServerCount,
    pub metrics: QueueMetrics,
}

/// Complete report for presentation: inputs, sizing outcome and monthly cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingReport {
    pub request: SizingRequest,
    pub sizing: Sizing,
    pub cost: CostBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = SizingRequest::new(10.0, 8.0, 0.5);
        assert!(request.validate().is_ok());
        assert!((request.traffic_intensity() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(SizingRequest::new(0.0, 8.0, 0.5).validate().is_err());
        assert!(SizingRequest::new(-1.0, 8.0, 0.5).validate().is_err());
        assert!(SizingRequest::new(10.0, 0.0, 0.5).validate().is_err());
        assert!(SizingRequest::new(10.0, -2.0, 0.5).validate().is_err());
        assert!(SizingRequest::new(10.0, 8.0, 0.0).validate().is_err());
        assert!(SizingRequest::new(10.0, 8.0, -0.1).validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(SizingRequest::new(f64::NAN, 8.0, 0.5).validate().is_err());
        assert!(SizingRequest::new(10.0, f64::INFINITY, 0.5)
            .validate()
            .is_err());
        assert!(SizingRequest::new(10.0, 8.0, f64::NEG_INFINITY)
            .validate()
            .is_err());
    }
}
