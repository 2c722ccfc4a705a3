//! M/M/c queueing computations
//!
//! This module holds the Erlang-C waiting probability, steady-state queue
//! metrics derived from it, and the search for the minimum server count
//! that keeps the expected queue wait under a bound.

pub mod erlang;
pub mod metrics;
pub mod sizer;

// Re-export commonly used types
pub use erlang::wait_probability;
pub use metrics::QueueMetrics;
pub use sizer::{solve, QueueSizer, SizerConfig};
