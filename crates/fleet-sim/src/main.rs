//! Fleet Simulation - Main Entry Point

use fleet_sim::{init_logging, load_config, Simulation};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1);
    let config = load_config(path.as_deref())?;
    init_logging(&config.log_level)?;

    info!("=== Fleet Simulation v{} ===", env!("CARGO_PKG_VERSION"));

    let mut simulation = Simulation::new(config)?;
    let summary = simulation.run()?;

    info!(
        "Finished after {} ticks: arrived={}/{}, collision ticks={}",
        summary.ticks,
        summary.arrived,
        simulation.fleet().len(),
        summary.collision_ticks
    );
    for (name, distance) in simulation.fleet().names().iter().zip(&summary.final_distances) {
        info!("  {}: {:.2}m from destination", name, distance);
    }

    Ok(())
}
