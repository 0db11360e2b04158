use std::sync::{Condvar, Mutex};

use log::{debug, trace};

use super::movement::{Direction, Movement, MOVEMENT_COUNT};
use super::occupancy::OccupancyTable;
use super::wait_queue::{WaitQueue, WaitingVehicle};

/// Shared state guarded by the controller's single lock.
#[derive(Debug, Default)]
struct ControllerState {
    occupancy: OccupancyTable,
    waiting: WaitQueue,
}

/// Admission control for a four-way intersection shared by concurrently
/// running vehicle threads.
///
/// A vehicle calls [`enter`](Self::enter) before crossing and
/// [`exit`](Self::exit) once it is through. `enter` blocks until the
/// vehicle's movement is compatible with everything currently inside the
/// intersection; `exit` never blocks. One mutex guards the occupancy
/// counters and the wait queue; each of the 12 valid movements has its own
/// condition variable so that admitting one movement never wakes threads
/// waiting on an unrelated one.
pub struct IntersectionController {
    state: Mutex<ControllerState>,
    /// Wakeup channels indexed by [`Movement::slot`]. Pure signals: a woken
    /// thread re-derives everything it needs from the occupancy table.
    wakeups: [Condvar; MOVEMENT_COUNT],
}

impl IntersectionController {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ControllerState::default()),
            wakeups: std::array::from_fn(|_| Condvar::new()),
        }
    }

    /// Blocks the calling vehicle thread until its movement can cross
    /// safely, then records it inside the intersection.
    ///
    /// While any occupied movement conflicts, the caller is queued at the
    /// back of the wait queue and suspends on its movement's own wakeup
    /// channel. A wakeup is only a hint: occupancy may have changed again
    /// before this thread reacquires the lock, so the conflict scan runs
    /// again from scratch after every resume.
    pub fn enter(&self, origin: Direction, destination: Direction) {
        let movement = Movement::new(origin, destination);
        let mut state = self.state.lock().unwrap();
        while let Some(blocker) = state.occupancy.conflict_with(movement) {
            trace!("vehicle {} waiting behind {}", movement, blocker);
            state.waiting.push_back(WaitingVehicle { movement });
            state = self.wakeups[movement.slot()].wait(state).unwrap();
        }
        state.occupancy.record_entry(movement);
        trace!(
            "vehicle {} entered, {} inside",
            movement,
            state.occupancy.total()
        );
    }

    /// Releases one unit of occupancy for the movement and, when the
    /// longest-waiting movement has become fully compatible with what is
    /// left, admits every queued vehicle sharing that movement at once.
    ///
    /// Only the front of the wait queue is ever checked. If the front
    /// movement still conflicts with a remaining occupant, nobody is woken
    /// this call, even when a later-queued movement could already go; that
    /// movement stays queued until a future `exit`. Panics if no matching
    /// `enter` preceded this call.
    pub fn exit(&self, origin: Direction, destination: Direction) {
        let movement = Movement::new(origin, destination);
        let mut state = self.state.lock().unwrap();
        state.occupancy.record_exit(movement);

        let front = match state.waiting.front_movement() {
            Some(front) => front,
            None => return,
        };
        if let Some(blocker) = state.occupancy.conflict_with(front) {
            trace!("front waiter {} still blocked by {}", front, blocker);
            return;
        }
        self.wakeups[front.slot()].notify_all();
        let released = state.waiting.remove_movement(front);
        debug!("released {} waiter(s) for {}", released, front);
    }

    /// Number of vehicles currently crossing with the given movement.
    pub fn occupancy_count(&self, origin: Direction, destination: Direction) -> u32 {
        let state = self.state.lock().unwrap();
        state.occupancy.count(Movement::new(origin, destination))
    }

    /// Snapshot of every movement currently inside the intersection.
    pub fn occupied_movements(&self) -> Vec<Movement> {
        let state = self.state.lock().unwrap();
        state.occupancy.occupied().collect()
    }

    /// Number of vehicles currently blocked in `enter`.
    pub fn waiting_count(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.waiting.len()
    }
}

impl Default for IntersectionController {
    fn default() -> Self {
        Self::new()
    }
}
