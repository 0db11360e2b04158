pub mod simulation;
pub mod vehicles;
