//! Fleet Sizer - Server fleet sizing from M/M/c queueing theory
//!
//! This crate estimates the minimum number of identical servers required to
//! keep the expected time a job waits in queue under a caller-supplied
//! bound, using the Erlang-C waiting probability, and prices the resulting
//! fleet with a linear monthly cost model.

pub mod config;
pub mod cost;
pub mod error;
pub mod queue;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{Result, SizingError};
pub use types::*;

// Re-export key components
pub use cost::{CostBreakdown, CostModel};
pub use queue::{solve, QueueMetrics, QueueSizer, SizerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
