//! Tick loop over a vehicle fleet

use fleet::{safety_circle_overlap, VehicleFleet, STATE_COLUMNS};
use ndarray::Array2;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{ScenarioConfig, SimError};

/// What happened during one tick
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub tick: u32,
    /// Names of vehicles whose footprints touch another vehicle
    pub colliding: Vec<String>,
    /// Distance of each vehicle to its destination after the tick
    pub distances: Vec<f64>,
    /// Number of vehicles within the arrival radius
    pub arrived: usize,
    /// Sum of safety-circle overlap between distinct vehicles (m²)
    pub overlap_area: f64,
}

/// Outcome of a full run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub ticks: u32,
    /// Ticks with at least one collision
    pub collision_ticks: u32,
    /// Vehicles that reached their destination
    pub arrived: usize,
    pub final_distances: Vec<f64>,
}

/// Drives a fleet through the configured scenario
pub struct Simulation {
    fleet: VehicleFleet,
    config: ScenarioConfig,
    tick: u32,
}

impl Simulation {
    pub fn new(config: ScenarioConfig) -> Result<Self, SimError> {
        let fleet = VehicleFleet::new(config.fleet_params()?, config.sensors)?;
        info!(
            "Simulation ready: vehicles={}, ticks={}, dt={}s",
            fleet.len(),
            config.ticks,
            config.tick_seconds
        );
        Ok(Self {
            fleet,
            config,
            tick: 0,
        })
    }

    pub fn fleet(&self) -> &VehicleFleet {
        &self.fleet
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Advance one tick: read, integrate, write once, then report
    pub fn step(&mut self) -> Result<TickReport, SimError> {
        let dt = self.config.tick_seconds;
        let max_turn = self.config.max_turn_rate * dt;

        // Read phase
        let turns = self.fleet.optimal_heading();
        let distances = self.fleet.distance_from_destination();
        let state = self.fleet.state();

        let mut next = Array2::zeros((self.fleet.len(), STATE_COLUMNS));
        for (i, row) in state.outer_iter().enumerate() {
            let (x, y, mut speed, theta) = (row[0], row[1], row[2], row[3]);
            if distances[i] <= self.config.arrival_radius {
                speed = 0.0;
            }
            let heading = theta + turns[i].clamp(-max_turn, max_turn);
            // Do not overshoot the destination
            let travel = (speed * dt).min(distances[i]);
            next[[i, 0]] = x + travel * heading.cos();
            next[[i, 1]] = y + travel * heading.sin();
            next[[i, 2]] = speed;
            next[[i, 3]] = heading;
        }

        // Write phase
        self.fleet.update_state(next.view())?;
        self.tick += 1;

        let collisions = self.fleet.collision_check()?;
        let overlap = safety_circle_overlap(&self.fleet, &self.fleet)?;
        let self_overlap: f64 = self.fleet.safety_area().sum();
        let distances = self.fleet.distance_from_destination();

        let colliding: Vec<String> = self
            .fleet
            .names()
            .iter()
            .zip(collisions.iter())
            .filter(|(_, hit)| **hit)
            .map(|(name, _)| name.clone())
            .collect();

        if !colliding.is_empty() {
            warn!("Tick {}: collision between {:?}", self.tick, colliding);
        }

        let report = TickReport {
            tick: self.tick,
            colliding,
            arrived: distances
                .iter()
                .filter(|&&d| d <= self.config.arrival_radius)
                .count(),
            distances: distances.to_vec(),
            // Diagonal is each circle with itself
            overlap_area: (overlap.sum() - self_overlap).max(0.0),
        };
        debug!(
            "Tick {}: arrived={}, overlap={:.2}m²",
            report.tick, report.arrived, report.overlap_area
        );
        Ok(report)
    }

    /// Run every configured tick, stopping early once all vehicles arrive
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        let mut summary = RunSummary::default();

        while self.tick < self.config.ticks {
            let report = self.step()?;
            summary.ticks = report.tick;
            if !report.colliding.is_empty() {
                summary.collision_ticks += 1;
            }
            summary.arrived = report.arrived;
            summary.final_distances = report.distances;

            if summary.arrived == self.fleet.len() {
                info!("All vehicles arrived after {} ticks", self.tick);
                break;
            }
        }
        Ok(summary)
    }
}
