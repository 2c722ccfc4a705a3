//! Minimum server count search
//!
//! Finds the smallest number of servers for which an M/M/c queue is stable
//! and keeps the expected queue wait under a caller-supplied bound. The
//! search walks up from the minimum stable count; adding a server never
//! increases the expected wait, so the first satisfying count is minimal.

use crate::queue::metrics::QueueMetrics;
use crate::types::{ServerCount, Sizing, SizingRequest};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Configuration for the feasibility search bound
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SizerConfig {
    /// Search ceiling as a multiple of the minimum stable server count
    pub max_search_multiplier: u32,
    /// Absolute floor for the ceiling, so light loads still search widely
    pub min_search_ceiling: u32,
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            max_search_multiplier: 64,
            min_search_ceiling: 1024,
        }
    }
}

impl SizerConfig {
    /// Create configuration with a much wider ceiling, for very tight wait
    /// bounds that need far more capacity than the load alone suggests
    pub fn wide_search() -> Self {
        Self {
            max_search_multiplier: 1024,
            min_search_ceiling: 65536,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.max_search_multiplier == 0 {
            return Err(crate::error::SizingError::ConfigurationError {
                message: "max_search_multiplier must be greater than 0".to_string(),
            }
            .into());
        }

        if self.min_search_ceiling == 0 {
            return Err(crate::error::SizingError::ConfigurationError {
                message: "min_search_ceiling must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Solver for the minimum server count meeting a wait bound
#[derive(Debug, Clone)]
pub struct QueueSizer {
    config: SizerConfig,
}

impl Default for QueueSizer {
    fn default() -> Self {
        Self {
            config: SizerConfig::default(),
        }
    }
}

impl QueueSizer {
    /// Create a new sizer with the given search configuration
    pub fn new(config: SizerConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &SizerConfig {
        &self.config
    }

    /// Solve for the minimum feasible server count
    ///
    /// Returns the smallest count for which the queue is stable
    /// (utilization < 1) and the expected queue wait is within the bound;
    /// a wait exactly equal to the bound satisfies it. Fails with
    /// `InvalidParameter` for non-positive inputs and `NoFeasibleSolution`
    /// when the bounded search is exhausted.
    pub fn solve(&self, request: &SizingRequest) -> crate::error::Result<Sizing> {
        request.validate()?;

        let traffic_intensity = request.traffic_intensity();

        // Stability needs servers strictly above lambda/mu; a count that far
        // out of range is not worth walking towards.
        if traffic_intensity >= ServerCount::MAX as f64 {
            warn!(
                "Offered load {} exceeds any representable server count",
                traffic_intensity
            );
            return Err(crate::error::SizingError::NoFeasibleSolution {
                searched_up_to: ServerCount::MAX,
            }
            .into());
        }

        let min_stable = traffic_intensity.floor() as ServerCount + 1;
        let ceiling = min_stable
            .saturating_mul(self.config.max_search_multiplier)
            .max(self.config.min_search_ceiling);

        for servers in min_stable..=ceiling {
            let metrics =
                QueueMetrics::compute(request.arrival_rate, request.service_rate, servers)?;

            if metrics.queue_wait <= request.max_wait {
                debug!(
                    "Wait bound {} satisfied with {} servers (queue wait {}, utilization {:.3})",
                    request.max_wait, servers, metrics.queue_wait, metrics.utilization
                );
                return Ok(Sizing { servers, metrics });
            }
        }

        warn!(
            "No server count in {}..={} keeps the queue wait within {}",
            min_stable, ceiling, request.max_wait
        );
        Err(crate::error::SizingError::NoFeasibleSolution {
            searched_up_to: ceiling,
        }
        .into())
    }
}

/// Solve with the default search configuration
pub fn solve(arrival_rate: f64, service_rate: f64, max_wait: f64) -> crate::error::Result<Sizing> {
    QueueSizer::default().solve(&SizingRequest::new(arrival_rate, service_rate, max_wait))
}
