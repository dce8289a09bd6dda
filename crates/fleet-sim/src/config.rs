//! Scenario configuration

use ::config::{Config, Environment, File};
use fleet::{FleetParams, Point, SensorConfig, DEFAULT_DIMENSIONS};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::SimError;

/// One vehicle of the scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Label used in logs
    pub name: String,

    /// Start position (meters)
    pub position: Point,

    /// Start heading (radians)
    pub orientation: f64,

    /// Goal position (meters)
    pub destination: Point,

    /// Goal heading (radians)
    #[serde(default)]
    pub dest_orientation: f64,

    /// Footprint (length, width) in meters
    #[serde(default = "default_dimensions")]
    pub dimensions: Point,

    /// Cruise speed (m/s)
    #[serde(default)]
    pub speed: f64,
}

fn default_dimensions() -> Point {
    DEFAULT_DIMENSIONS
}

/// Scenario configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Simulated time per tick (seconds)
    pub tick_seconds: f64,

    /// Number of ticks to run
    pub ticks: u32,

    /// Steering limit (radians per second)
    pub max_turn_rate: f64,

    /// Distance at which a vehicle counts as arrived (meters)
    pub arrival_radius: f64,

    /// Log level passed to the subscriber
    pub log_level: String,

    /// Sensing ranges for the fleet
    pub sensors: SensorConfig,

    /// Vehicles, in fleet order
    pub vehicles: Vec<VehicleConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 0.1,
            ticks: 300,
            max_turn_rate: 0.8,
            arrival_radius: 1.0,
            log_level: "info".to_string(),
            sensors: SensorConfig::default(),
            // Two cars crossing a four-way intersection
            vehicles: vec![
                VehicleConfig {
                    name: "east".to_string(),
                    position: [-30.0, 0.0],
                    orientation: 0.0,
                    destination: [30.0, 0.0],
                    dest_orientation: 0.0,
                    dimensions: DEFAULT_DIMENSIONS,
                    speed: 6.0,
                },
                VehicleConfig {
                    name: "north".to_string(),
                    position: [0.0, -30.0],
                    orientation: std::f64::consts::FRAC_PI_2,
                    destination: [0.0, 30.0],
                    dest_orientation: std::f64::consts::FRAC_PI_2,
                    dimensions: DEFAULT_DIMENSIONS,
                    speed: 4.0,
                },
            ],
        }
    }
}

impl ScenarioConfig {
    /// Fleet construction inputs for the configured vehicles
    pub fn fleet_params(&self) -> Result<FleetParams, SimError> {
        let n = self.vehicles.len();
        if n == 0 {
            return Err(SimError::EmptyScenario);
        }
        let v = &self.vehicles;

        Ok(FleetParams::new(
            Array2::from_shape_fn((n, 2), |(i, c)| v[i].position[c]),
            v.iter().map(|v| v.orientation).collect::<Array1<f64>>(),
            Array2::from_shape_fn((n, 2), |(i, c)| v[i].destination[c]),
            v.iter().map(|v| v.dest_orientation).collect::<Array1<f64>>(),
        )
        .with_dimensions(Array2::from_shape_fn((n, 2), |(i, c)| v[i].dimensions[c]))
        .with_speed(v.iter().map(|v| v.speed).collect::<Array1<f64>>())
        .with_names(v.iter().map(|v| v.name.clone()).collect()))
    }
}

/// Load the scenario from an optional file, then apply `FLEET_SIM__*`
/// environment overrides (e.g. `FLEET_SIM__TICKS=50`)
pub fn load_config(path: Option<&str>) -> Result<ScenarioConfig, SimError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        info!("Loading scenario from {}", path);
        builder = builder.add_source(File::with_name(path));
    }
    builder = builder.add_source(
        Environment::with_prefix("FLEET_SIM")
            .separator("__")
            .try_parsing(true),
    );

    Ok(builder.build()?.try_deserialize()?)
}
