use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::control_system::movement::Movement;

/// End-of-run report for a simulation, serialized to JSON by the driver
/// binary. Movements are keyed by their display form ("North -> South").
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub total_crossings: u64,
    pub crossings_per_movement: BTreeMap<String, u64>,
}

impl SimulationSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_crossing(&mut self, movement: Movement) {
        self.total_crossings += 1;
        *self
            .crossings_per_movement
            .entry(movement.to_string())
            .or_insert(0) += 1;
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("summary serializes to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control_system::movement::Direction::*;

    #[test]
    fn summary_counts_per_movement() {
        let mut summary = SimulationSummary::new();
        summary.record_crossing(Movement::new(North, South));
        summary.record_crossing(Movement::new(North, South));
        summary.record_crossing(Movement::new(East, North));

        assert_eq!(summary.total_crossings, 3);
        assert_eq!(summary.crossings_per_movement["North -> South"], 2);
        assert_eq!(summary.crossings_per_movement["East -> North"], 1);
    }

    #[test]
    fn summary_round_trips_through_json() {
        let mut summary = SimulationSummary::new();
        summary.record_crossing(Movement::new(West, South));

        let json = summary.to_json();
        let parsed: SimulationSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_crossings, 1);
        assert_eq!(parsed.crossings_per_movement["West -> South"], 1);
    }
}
