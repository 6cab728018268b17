//! Stat priorities: how much a pawn values each stat when judging apparel.
//!
//! # Sources
//!
//! ```text
//! [ Work assignments ] --table × rank--> Automatic  ┐
//! [ Individual prefs ] -----------------> Individual ├─> StatPriorityCache
//! [ User edits       ] -----------------> Manual     ┘        │
//!                                                            └─ Override when a
//!                                                               user entry meets a
//!                                                               derived source
//! ```
//!
//! Automatic and Individual entries are derived and recomputed on every
//! refresh; Manual and Override entries belong to the user and are persisted.

mod cache;

use std::collections::BTreeMap;

pub use cache::StatPriorityCache;

use crate::stats::StatId;
use crate::work::{WorkAssignment, contributions_for};

/// Provenance of a stat priority.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatAssignment {
    /// Added by the user.
    Manual,
    /// User-adjusted weight for a stat that also has a derived source.
    Override,
    /// From the pawn's individual preferences.
    Individual,
    /// From the pawn's work assignments.
    Automatic,
}

impl StatAssignment {
    /// Whether the entry is recomputed from its source on every refresh.
    pub const fn is_derived(self) -> bool {
        matches!(self, Self::Automatic | Self::Individual)
    }
}

/// Weight a pawn gives to one stat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatPriority {
    pub stat: StatId,
    pub weight: f32,
    pub assignment: StatAssignment,
}

impl StatPriority {
    /// Range of weights a user may assign.
    pub const WEIGHT_MIN: f32 = -2.5;
    pub const WEIGHT_MAX: f32 = 2.5;

    pub fn new(stat: StatId, weight: f32, assignment: StatAssignment) -> Self {
        Self {
            stat,
            weight,
            assignment,
        }
    }
}

/// Stat weights implied by a pawn's active work.
///
/// Each work type's contributions are scaled by its priority multiplier and
/// summed per stat, then normalized so the largest magnitude is exactly 1.
pub fn automatic_weights(assignments: &[WorkAssignment]) -> BTreeMap<StatId, f32> {
    let mut weights = BTreeMap::new();
    for assignment in assignments {
        let scale = assignment.priority.multiplier();
        for (stat, weight) in contributions_for(&assignment.work) {
            *weights.entry(stat.clone()).or_insert(0.0) += weight * scale;
        }
    }
    normalize(&mut weights);
    weights
}

/// Divides every weight by the largest absolute weight.
///
/// A map whose weights are all zero is left untouched.
pub(crate) fn normalize(weights: &mut BTreeMap<StatId, f32>) {
    let max = weights.values().fold(0.0_f32, |max, weight| max.max(weight.abs()));
    if max <= 0.0 || !max.is_finite() {
        return;
    }
    for weight in weights.values_mut() {
        *weight /= max;
    }
}
