use outfitter_core::{StatPriority, TemperatureRange};
use serde::{Deserialize, Serialize};

/// Persisted preferences of one pawn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PawnRecord {
    #[serde(default)]
    pub stat_priorities: Vec<StatPriority>,
    #[serde(default)]
    pub temperature_override: Option<TemperatureRange>,
}

impl PawnRecord {
    pub fn is_empty(&self) -> bool {
        self.stat_priorities.is_empty() && self.temperature_override.is_none()
    }

    /// Keeps only user-owned entries; derived kinds are never persisted.
    pub(crate) fn set_priorities(&mut self, entries: &[StatPriority]) {
        self.stat_priorities = entries
            .iter()
            .filter(|entry| !entry.assignment.is_derived())
            .cloned()
            .collect();
    }

    pub(crate) fn user_priorities(&self) -> Vec<StatPriority> {
        self.stat_priorities
            .iter()
            .filter(|entry| !entry.assignment.is_derived())
            .cloned()
            .collect()
    }
}
