//! Steady-state metrics for an M/M/c queue
//!
//! Derives the expected waits and queue lengths from the Erlang-C waiting
//! probability via Little's law.

use crate::queue::erlang::wait_probability;
use crate::types::ServerCount;
use serde::{Deserialize, Serialize};

/// Steady-state performance metrics of an M/M/c queue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueMetrics {
    /// Fraction of total service capacity in use (rho)
    pub utilization: f64,
    /// Probability an arriving job must queue (Erlang C)
    pub wait_probability: f64,
    /// Expected time a job waits before service starts (Wq)
    pub queue_wait: f64,
    /// Expected total time in the system, waiting plus service (W)
    pub sojourn_time: f64,
    /// Expected number of jobs waiting in queue (Lq)
    pub queue_length: f64,
    /// Expected number of jobs in the system (L)
    pub jobs_in_system: f64,
}

impl QueueMetrics {
    /// Compute the steady-state metrics for the given rates and server count
    ///
    /// `service_rate` must be positive and `servers` at least 1; the arrival
    /// rate may be zero (an idle system). An unstable configuration
    /// (utilization >= 1) yields infinite wait and length metrics rather
    /// than an error: the queue grows without bound.
    pub fn compute(
        arrival_rate: f64,
        service_rate: f64,
        servers: ServerCount,
    ) -> crate::error::Result<Self> {
        if servers == 0 {
            return Err(crate::error::SizingError::InvalidParameter {
                message: "servers must be at least 1".to_string(),
            }
            .into());
        }

        if !service_rate.is_finite() || service_rate <= 0.0 {
            return Err(crate::error::SizingError::InvalidParameter {
                message: format!(
                    "service_rate must be positive and finite, got {}",
                    service_rate
                ),
            }
            .into());
        }

        if !arrival_rate.is_finite() || arrival_rate < 0.0 {
            return Err(crate::error::SizingError::InvalidParameter {
                message: format!(
                    "arrival_rate must be non-negative and finite, got {}",
                    arrival_rate
                ),
            }
            .into());
        }

        let service_time = 1.0 / service_rate;
        let utilization = arrival_rate / (service_rate * servers as f64);

        if arrival_rate == 0.0 {
            return Ok(Self {
                utilization: 0.0,
                wait_probability: 0.0,
                queue_wait: 0.0,
                sojourn_time: service_time,
                queue_length: 0.0,
                jobs_in_system: 0.0,
            });
        }

        if utilization >= 1.0 {
            return Ok(Self {
                utilization,
                wait_probability: 1.0,
                queue_wait: f64::INFINITY,
                sojourn_time: f64::INFINITY,
                queue_length: f64::INFINITY,
                jobs_in_system: f64::INFINITY,
            });
        }

        let traffic_intensity = arrival_rate / service_rate;
        let wait_probability = wait_probability(servers, traffic_intensity);

        // Little's law: Wq = Pwait / (c*mu - lambda), and the denominator is
        // positive here because utilization < 1.
        let queue_wait = wait_probability / (servers as f64 * service_rate - arrival_rate);
        let sojourn_time = queue_wait + service_time;
        let queue_length = arrival_rate * queue_wait;
        let jobs_in_system = arrival_rate * sojourn_time;

        Ok(Self {
            utilization,
            wait_probability,
            queue_wait,
            sojourn_time,
            queue_length,
            jobs_in_system,
        })
    }

    /// Whether the configuration is stable (utilization strictly below 1)
    pub fn is_stable(&self) -> bool {
        self.utilization < 1.0
    }
}
