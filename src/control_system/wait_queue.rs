use std::collections::VecDeque;

use super::movement::Movement;

/// One blocked caller. Owned by value by the queue for as long as the
/// caller waits; the blocked thread keeps no handle to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitingVehicle {
    pub movement: Movement,
}

/// Blocked vehicles in arrival order. Only the front entry is ever
/// consulted for wakeup eligibility.
#[derive(Debug, Default)]
pub struct WaitQueue {
    entries: VecDeque<WaitingVehicle>,
}

impl WaitQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn push_back(&mut self, vehicle: WaitingVehicle) {
        self.entries.push_back(vehicle);
    }

    /// Movement of the longest-waiting vehicle, if any.
    pub fn front_movement(&self) -> Option<Movement> {
        self.entries.front().map(|v| v.movement)
    }

    /// Drops every queued entry with the given movement, front included,
    /// and returns how many were removed. Called once the movement has been
    /// signalled; the woken threads re-verify compatibility themselves.
    pub fn remove_movement(&mut self, movement: Movement) -> usize {
        let before = self.entries.len();
        self.entries.retain(|v| v.movement != movement);
        before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::super::movement::Direction::*;
    use super::*;

    #[test]
    fn front_is_arrival_order() {
        let mut queue = WaitQueue::new();
        assert_eq!(queue.front_movement(), None);

        queue.push_back(WaitingVehicle { movement: Movement::new(North, South) });
        queue.push_back(WaitingVehicle { movement: Movement::new(East, West) });
        assert_eq!(queue.front_movement(), Some(Movement::new(North, South)));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn remove_movement_takes_every_matching_entry() {
        let mut queue = WaitQueue::new();
        let ns = Movement::new(North, South);
        let ew = Movement::new(East, West);

        queue.push_back(WaitingVehicle { movement: ns });
        queue.push_back(WaitingVehicle { movement: ew });
        queue.push_back(WaitingVehicle { movement: ns });
        queue.push_back(WaitingVehicle { movement: ns });

        assert_eq!(queue.remove_movement(ns), 3);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.front_movement(), Some(ew));
    }
}
