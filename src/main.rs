//! Main entry point for the fleet-sizer tool
//!
//! Parses the problem parameters from the command line, configuration file
//! or environment, solves for the minimum feasible server count and prints
//! the sizing together with the estimated monthly cost.

use anyhow::Result;
use clap::Parser;
use fleet_sizer::config::{validate_config, AppConfig};
use fleet_sizer::error::SizingError;
use fleet_sizer::types::{SizingReport, SizingRequest};
use fleet_sizer::{utils, QueueSizer};
use std::path::PathBuf;
use tracing::debug;

/// Fleet Sizer - minimum server count and monthly cost for a wait-time target
#[derive(Parser)]
#[command(
    name = "fleet-sizer",
    version,
    about = "Estimate how many servers keep the expected queue wait under a bound",
    long_about = "Fleet Sizer models the back end as an M/M/c queue: Poisson arrivals, \
                 exponentially distributed service times and c identical servers. It searches \
                 for the smallest stable server count whose expected queue wait stays within \
                 the given bound, then applies a linear monthly cost model to the result."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Arrival rate override
    #[arg(
        short = 'l',
        long,
        value_name = "JOBS_PER_HOUR",
        help = "Average number of jobs arriving per hour"
    )]
    arrival_rate: Option<f64>,

    /// Service time override
    #[arg(
        short = 's',
        long,
        value_name = "MINUTES",
        help = "Average number of minutes for serving a single job"
    )]
    service_time: Option<f64>,

    /// Wait bound override
    #[arg(
        short = 't',
        long,
        value_name = "MINUTES",
        help = "Maximum tolerable expected wait in queue, in minutes"
    )]
    max_wait_time: Option<f64>,

    /// Fixed cost override
    #[arg(
        short = 'f',
        long,
        value_name = "DOLLARS",
        help = "Approximate monthly fixed cost for the architecture"
    )]
    fixed_cost: Option<u64>,

    /// Per-server cost override
    #[arg(
        short = 'v',
        long,
        value_name = "DOLLARS",
        help = "Variable monthly cost for each back-end server"
    )]
    var_cost: Option<u64>,

    /// Log level override
    #[arg(
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Emit the report as JSON
    #[arg(long, help = "Print the sizing report as JSON instead of text")]
    json: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without solving")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file/environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(arrival_rate) = args.arrival_rate {
        config.sizing.arrival_rate_per_hour = arrival_rate;
    }

    if let Some(service_time) = args.service_time {
        config.sizing.service_time_minutes = service_time;
    }

    if let Some(max_wait) = args.max_wait_time {
        config.sizing.max_wait_minutes = max_wait;
    }

    if let Some(fixed_cost) = args.fixed_cost {
        config.cost.fixed_monthly = fixed_cost;
    }

    if let Some(var_cost) = args.var_cost {
        config.cost.per_server_monthly = var_cost;
    }

    // Overrides can invalidate a previously valid configuration
    validate_config(&config)?;

    Ok(config)
}

/// Build the solver request, normalizing the CLI units to per-minute rates
fn build_request(config: &AppConfig) -> SizingRequest {
    SizingRequest::new(
        utils::hourly_rate_to_per_minute(config.sizing.arrival_rate_per_hour),
        utils::service_minutes_to_rate(config.sizing.service_time_minutes),
        config.sizing.max_wait_minutes,
    )
}

/// Print the human-readable report
fn print_report(report: &SizingReport) {
    let metrics = &report.sizing.metrics;

    println!("Number of servers: {}", report.sizing.servers);
    println!("Utilization: {:.1}%", metrics.utilization * 100.0);
    println!(
        "Probability of queueing: {:.1}%",
        metrics.wait_probability * 100.0
    );
    println!("Average wait in queue: {:.3} minutes", metrics.queue_wait);
    println!("Average time in system: {:.3} minutes", metrics.sojourn_time);
    println!("Average jobs waiting: {:.3}", metrics.queue_length);
    println!("Total cost: {}$ per month", report.cost.total);
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        println!("Configuration validation successful");
        return Ok(());
    }

    debug!(
        "Sizing for {} jobs/hour, {} minute services, {} minute wait bound",
        config.sizing.arrival_rate_per_hour,
        config.sizing.service_time_minutes,
        config.sizing.max_wait_minutes
    );

    let request = build_request(&config);
    let sizer = QueueSizer::new(config.solver.to_sizer_config())?;

    let sizing = match sizer.solve(&request) {
        Ok(sizing) => sizing,
        Err(e) => {
            if let Some(SizingError::NoFeasibleSolution { searched_up_to }) =
                e.downcast_ref::<SizingError>()
            {
                eprintln!("Reached max number of servers ({}).", searched_up_to);
                eprintln!("Please reduce the arrival rate or the service time.");
                std::process::exit(1);
            }
            return Err(e);
        }
    };

    let report = SizingReport {
        request,
        sizing,
        cost: config.cost.to_model().breakdown(sizing.servers),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
