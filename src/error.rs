//! Error types for the fleet sizing tool
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific sizing scenarios
#[derive(Debug, thiserror::Error)]
pub enum SizingError {
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("No feasible server count up to {searched_up_to} satisfies the wait bound")]
    NoFeasibleSolution { searched_up_to: u32 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
