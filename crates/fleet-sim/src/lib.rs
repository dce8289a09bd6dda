//! Fleet Simulation Driver
//!
//! Loads a scenario, then advances a unicycle model one tick at a time:
//! read headings from the fleet, integrate, push the new state through
//! `update_state`, and report collisions and proximity.

mod config;
mod simulation;

pub use config::{load_config, ScenarioConfig, VehicleConfig};
pub use simulation::{RunSummary, Simulation, TickReport};

use fleet::FleetError;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Simulation error types
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error("Scenario has no vehicles")]
    EmptyScenario,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Failed to install logger: {0}")]
    Logging(String),
}

/// Initialize logging at the given level ("info", "debug", ...)
pub fn init_logging(level: &str) -> Result<(), SimError> {
    let level: Level = level
        .parse()
        .map_err(|_| SimError::InvalidLogLevel(level.to_string()))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| SimError::Logging(e.to_string()))
}
