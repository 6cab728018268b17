use std::collections::BTreeMap;

use crate::ids::PawnId;
use crate::stats::StatId;
use crate::work::WorkAssignment;

/// Source of a pawn's work assignments and individual stat preferences.
pub trait WorkOracle: Send + Sync {
    /// Work types the pawn currently performs, with their priority ranks.
    fn active_work(&self, pawn: PawnId) -> Vec<WorkAssignment>;

    /// Per-stat weights sourced outside the work system (e.g. from a pawn's
    /// backstory or role). Empty when the pawn has none.
    fn individual_stat_weights(&self, _pawn: PawnId) -> BTreeMap<StatId, f32> {
        BTreeMap::new()
    }
}
