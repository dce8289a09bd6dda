//! Fleet sensor configuration

use serde::{Deserialize, Serialize};

use crate::FleetError;

/// Sensing ranges carried by a fleet for external sensing logic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Minimum lidar range (meters)
    pub min_lidar_range: f64,

    /// Maximum lidar range (meters)
    pub max_lidar_range: f64,

    /// Vision range (meters)
    pub vision_range: f64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            min_lidar_range: 2.5,
            max_lidar_range: 50.0,
            vision_range: 50.0,
        }
    }
}

impl SensorConfig {
    /// Preset for a stand-alone single vehicle (shorter blind zone)
    pub fn single_vehicle() -> Self {
        Self {
            min_lidar_range: 1.0,
            ..Default::default()
        }
    }

    /// Check `max_lidar_range >= min_lidar_range >= 0` and `vision_range >= 0`
    pub fn validate(&self) -> Result<(), FleetError> {
        check_range("min_lidar_range", self.min_lidar_range, (0.0, self.max_lidar_range))?;
        check_range(
            "max_lidar_range",
            self.max_lidar_range,
            (self.min_lidar_range.max(0.0), f64::INFINITY),
        )?;
        check_range("vision_range", self.vision_range, (0.0, f64::INFINITY))
    }
}

fn check_range(field: &'static str, value: f64, range: (f64, f64)) -> Result<(), FleetError> {
    // Written so NaN fails too
    if value >= range.0 && value <= range.1 {
        Ok(())
    } else {
        Err(FleetError::InvalidRange {
            field,
            value,
            min: range.0,
            max: range.1,
        })
    }
}
