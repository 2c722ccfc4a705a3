//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! fleet-sizer tool, including environment variable loading, TOML file
//! loading and validation.

use crate::cost::CostModel;
use crate::queue::sizer::SizerConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub sizing: SizingSettings,
    #[serde(default)]
    pub cost: CostSettings,
    #[serde(default)]
    pub solver: SolverSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Default problem parameters, overridable per run from the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingSettings {
    /// Average jobs arriving per hour
    pub arrival_rate_per_hour: f64,
    /// Average minutes to serve a single job
    pub service_time_minutes: f64,
    /// Maximum tolerable expected queue wait in minutes
    pub max_wait_minutes: f64,
}

/// Monthly cost settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSettings {
    /// Fixed monthly cost of the architecture
    pub fixed_monthly: u64,
    /// Monthly cost per back-end server
    pub per_server_monthly: u64,
}

/// Search bound settings for the solver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Search ceiling as a multiple of the minimum stable server count
    pub max_search_multiplier: u32,
    /// Absolute floor for the search ceiling
    pub min_search_ceiling: u32,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "fleet-sizer".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Default for SizingSettings {
    fn default() -> Self {
        Self {
            arrival_rate_per_hour: 10.0,
            service_time_minutes: 7.0,
            max_wait_minutes: 10.0,
        }
    }
}

impl Default for CostSettings {
    fn default() -> Self {
        Self {
            fixed_monthly: 70,
            per_server_monthly: 41,
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        let config = SizerConfig::default();
        Self {
            max_search_multiplier: config.max_search_multiplier,
            min_search_ceiling: config.min_search_ceiling,
        }
    }
}

impl CostSettings {
    /// Build the cost model these settings describe
    pub fn to_model(&self) -> CostModel {
        CostModel::new(self.fixed_monthly, self.per_server_monthly)
    }
}

impl SolverSettings {
    /// Build the sizer configuration these settings describe
    pub fn to_sizer_config(&self) -> SizerConfig {
        SizerConfig {
            max_search_multiplier: self.max_search_multiplier,
            min_search_ceiling: self.min_search_ceiling,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Sizing defaults
        if let Ok(rate) = env::var("ARRIVAL_RATE_PER_HOUR") {
            config.sizing.arrival_rate_per_hour = rate
                .parse()
                .map_err(|_| anyhow!("Invalid ARRIVAL_RATE_PER_HOUR value: {}", rate))?;
        }
        if let Ok(service_time) = env::var("SERVICE_TIME_MINUTES") {
            config.sizing.service_time_minutes = service_time
                .parse()
                .map_err(|_| anyhow!("Invalid SERVICE_TIME_MINUTES value: {}", service_time))?;
        }
        if let Ok(max_wait) = env::var("MAX_WAIT_MINUTES") {
            config.sizing.max_wait_minutes = max_wait
                .parse()
                .map_err(|_| anyhow!("Invalid MAX_WAIT_MINUTES value: {}", max_wait))?;
        }

        // Cost settings
        if let Ok(fixed) = env::var("FIXED_COST_MONTHLY") {
            config.cost.fixed_monthly = fixed
                .parse()
                .map_err(|_| anyhow!("Invalid FIXED_COST_MONTHLY value: {}", fixed))?;
        }
        if let Ok(per_server) = env::var("SERVER_COST_MONTHLY") {
            config.cost.per_server_monthly = per_server
                .parse()
                .map_err(|_| anyhow!("Invalid SERVER_COST_MONTHLY value: {}", per_server))?;
        }

        // Solver settings
        if let Ok(multiplier) = env::var("MAX_SEARCH_MULTIPLIER") {
            config.solver.max_search_multiplier = multiplier
                .parse()
                .map_err(|_| anyhow!("Invalid MAX_SEARCH_MULTIPLIER value: {}", multiplier))?;
        }
        if let Ok(ceiling) = env::var("MIN_SEARCH_CEILING") {
            config.solver.min_search_ceiling = ceiling
                .parse()
                .map_err(|_| anyhow!("Invalid MIN_SEARCH_CEILING value: {}", ceiling))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    ///
    /// Missing sections fall back to their defaults, so partial files work.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate sizing defaults
    if !config.sizing.arrival_rate_per_hour.is_finite()
        || config.sizing.arrival_rate_per_hour <= 0.0
    {
        return Err(anyhow!("Arrival rate must be positive"));
    }
    if !config.sizing.service_time_minutes.is_finite() || config.sizing.service_time_minutes <= 0.0
    {
        return Err(anyhow!("Service time must be positive"));
    }
    if !config.sizing.max_wait_minutes.is_finite() || config.sizing.max_wait_minutes <= 0.0 {
        return Err(anyhow!("Max wait time must be positive"));
    }

    // Validate solver settings
    if config.solver.max_search_multiplier == 0 {
        return Err(anyhow!("Max search multiplier must be greater than 0"));
    }
    if config.solver.min_search_ceiling == 0 {
        return Err(anyhow!("Min search ceiling must be greater than 0"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.sizing.arrival_rate_per_hour, 10.0);
        assert_eq!(config.sizing.service_time_minutes, 7.0);
        assert_eq!(config.sizing.max_wait_minutes, 10.0);
        assert_eq!(config.cost.fixed_monthly, 70);
        assert_eq!(config.cost.per_server_monthly, 41);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = AppConfig::default();
        config.service.log_level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_non_positive_sizing_values_rejected() {
        let mut config = AppConfig::default();
        config.sizing.arrival_rate_per_hour = 0.0;
        assert!(validate_config(&config).is_err());

        config = AppConfig::default();
        config.sizing.service_time_minutes = -1.0;
        assert!(validate_config(&config).is_err());

        config = AppConfig::default();
        config.sizing.max_wait_minutes = 0.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_solver_bounds_rejected() {
        let mut config = AppConfig::default();
        config.solver.max_search_multiplier = 0;
        assert!(validate_config(&config).is_err());

        config = AppConfig::default();
        config.solver.min_search_ceiling = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_partial_toml_file_uses_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [sizing]
            arrival_rate_per_hour = 120.0
            service_time_minutes = 2.5
            max_wait_minutes = 1.0
            "#,
        )
        .unwrap();

        assert_eq!(parsed.sizing.arrival_rate_per_hour, 120.0);
        assert_eq!(parsed.sizing.service_time_minutes, 2.5);
        // Omitted sections keep their defaults.
        assert_eq!(parsed.cost.fixed_monthly, 70);
        assert_eq!(parsed.service.log_level, "warn");
        assert!(validate_config(&parsed).is_ok());
    }

    #[test]
    fn test_settings_convert_to_domain_configs() {
        let config = AppConfig::default();
        let model = config.cost.to_model();
        assert_eq!(model.monthly_total(2), 70 + 2 * 41);

        let sizer_config = config.solver.to_sizer_config();
        assert!(sizer_config.validate().is_ok());
    }
}
