use super::movement::{Movement, MOVEMENT_COUNT};

/// Per-movement counts of vehicles currently inside the intersection,
/// indexed by [`Movement::slot`]. Only touched while the controller's
/// lock is held.
#[derive(Debug, Default)]
pub struct OccupancyTable {
    counts: [u32; MOVEMENT_COUNT],
}

impl OccupancyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Movements with at least one vehicle currently crossing.
    pub fn occupied(&self) -> impl Iterator<Item = Movement> + '_ {
        Movement::ALL
            .iter()
            .copied()
            .filter(|m| self.counts[m.slot()] > 0)
    }

    /// First occupied movement that cannot share the intersection with
    /// `movement`, or `None` if the movement is clear to proceed.
    pub fn conflict_with(&self, movement: Movement) -> Option<Movement> {
        self.occupied().find(|&m| !movement.compatible_with(m))
    }

    pub fn record_entry(&mut self, movement: Movement) {
        self.counts[movement.slot()] += 1;
    }

    /// Panics if the movement has no vehicle inside: an exit without a
    /// matching enter is a defect in the caller, not a runtime condition.
    pub fn record_exit(&mut self, movement: Movement) {
        let count = &mut self.counts[movement.slot()];
        assert!(*count > 0, "exit without a matching enter for {}", movement);
        *count -= 1;
    }

    pub fn count(&self, movement: Movement) -> u32 {
        self.counts[movement.slot()]
    }

    /// Total number of vehicles currently inside the intersection.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::super::movement::Direction::*;
    use super::*;

    #[test]
    fn counts_track_entries_and_exits() {
        let mut table = OccupancyTable::new();
        let ns = Movement::new(North, South);
        let ew = Movement::new(East, West);

        table.record_entry(ns);
        table.record_entry(ns);
        table.record_entry(ew);
        assert_eq!(table.count(ns), 2);
        assert_eq!(table.count(ew), 1);
        assert_eq!(table.total(), 3);

        table.record_exit(ns);
        assert_eq!(table.count(ns), 1);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn conflict_scan_sees_only_occupied_movements() {
        let mut table = OccupancyTable::new();
        let ns = Movement::new(North, South);
        let ew = Movement::new(East, West);

        assert_eq!(table.conflict_with(ns), None);
        table.record_entry(ew);
        assert_eq!(table.conflict_with(ns), Some(ew));
        table.record_exit(ew);
        assert_eq!(table.conflict_with(ns), None);
    }

    #[test]
    #[should_panic(expected = "exit without a matching enter")]
    fn exit_below_zero_panics() {
        let mut table = OccupancyTable::new();
        table.record_exit(Movement::new(North, South));
    }
}
