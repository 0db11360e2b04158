use rand::Rng;

use crate::control_system::movement::Movement;

/// A single crossing attempt produced by the driver.
#[derive(Debug, Clone, Copy)]
pub struct Vehicle {
    pub id: u64,
    pub movement: Movement,
}

/// Picks one of the 12 valid movements uniformly at random.
pub fn random_movement() -> Movement {
    let mut rng = rand::rng();
    Movement::ALL[rng.random_range(0..Movement::ALL.len())]
}

pub fn spawn_vehicle(id: u64) -> Vehicle {
    Vehicle {
        id,
        movement: random_movement(),
    }
}
