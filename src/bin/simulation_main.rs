use intersection_control::simulation_engine::simulation::{run_simulation, SimulationConfig};

fn main() {
    env_logger::init();

    let config = SimulationConfig::default();
    let summary = run_simulation(&config);
    println!("{}", summary.to_json());
}
