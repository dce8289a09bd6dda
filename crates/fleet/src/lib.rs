//! Vehicle Fleet
//!
//! A fixed-size batch of rectangular vehicles on a plane, for use inside a
//! multi-agent simulation:
//! - Pose, speed and destination state, updated once per tick
//! - Cached world-space footprints and edges
//! - In-fleet collision check over all edge pairs
//! - Distance and heading to targets
//! - Cross-fleet safety-circle overlap
//!
//! `update_state` is the only mutation and takes the fleet exclusively.
//! Every query borrows it shared, so a driver that updates and reads in
//! separate phases of a tick never observes a half-applied state.

mod cache;
mod config;
mod error;
mod fleet;
mod proximity;

pub use cache::{CacheState, CoordinateCache};
pub use config::SensorConfig;
pub use error::FleetError;
pub use fleet::{FleetParams, Target, VehicleFleet, DEFAULT_DIMENSIONS, SAFETY_FACTOR, STATE_COLUMNS};
pub use proximity::safety_circle_overlap;

pub use geometry::Point;
