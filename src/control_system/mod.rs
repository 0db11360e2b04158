pub mod controller;
pub mod movement;
pub mod occupancy;
pub mod wait_queue;
