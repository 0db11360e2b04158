use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::control_system::controller::IntersectionController;
use crate::monitoring::SimulationSummary;
use crate::simulation_engine::vehicles::spawn_vehicle;

/// Knobs for a driver run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// How many vehicle threads to spawn.
    pub vehicle_count: usize,
    /// How long a vehicle stays inside the intersection once admitted.
    pub crossing_time: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            vehicle_count: 30,
            crossing_time: Duration::from_millis(10),
        }
    }
}

/// Spawns one thread per vehicle, each picking a random movement, entering
/// the intersection, crossing, and exiting. Returns the aggregated summary
/// once every vehicle has finished.
pub fn run_simulation(config: &SimulationConfig) -> SimulationSummary {
    let controller = Arc::new(IntersectionController::new());
    info!("starting simulation with {} vehicles", config.vehicle_count);

    let mut handles = Vec::with_capacity(config.vehicle_count);
    for id in 0..config.vehicle_count as u64 {
        let controller = Arc::clone(&controller);
        let crossing_time = config.crossing_time;
        handles.push(thread::spawn(move || {
            let vehicle = spawn_vehicle(id);
            let movement = vehicle.movement;
            debug!("vehicle {} approaching, movement {}", vehicle.id, movement);
            controller.enter(movement.origin, movement.destination);
            thread::sleep(crossing_time);
            controller.exit(movement.origin, movement.destination);
            debug!("vehicle {} cleared the intersection", vehicle.id);
            movement
        }));
    }

    let mut summary = SimulationSummary::new();
    for handle in handles {
        let movement = handle.join().expect("vehicle thread panicked");
        summary.record_crossing(movement);
    }
    info!(
        "simulation complete, {} vehicles crossed",
        summary.total_crossings
    );
    summary
}
