pub mod control_system;
pub mod monitoring;
pub mod simulation_engine;
