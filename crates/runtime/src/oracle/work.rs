//! [`WorkOracle`] backed by per-pawn work tables.
use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};

use outfitter_core::{PawnId, StatId, WorkAssignment, WorkOracle, WorkType};

#[derive(Clone, Debug, Default)]
struct PawnWork {
    assignments: Vec<WorkAssignment>,
    individual: BTreeMap<StatId, f32>,
}

/// WorkOracle implementation with host-updated work assignments
#[derive(Default)]
pub struct WorkOracleImpl {
    pawns: RwLock<HashMap<PawnId, PawnWork>>,
}

impl WorkOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pawn's active work.
    pub fn set_work(&self, pawn: PawnId, assignments: Vec<WorkAssignment>) {
        self.write(pawn, |work| work.assignments = assignments);
    }

    /// Sets the work by def name and priority rank; unknown names become
    /// [`WorkType::Other`].
    pub fn set_work_by_name<'n>(
        &self,
        pawn: PawnId,
        work: impl IntoIterator<Item = (&'n str, u8)>,
    ) {
        let assignments = work
            .into_iter()
            .map(|(name, rank)| WorkAssignment::new(WorkType::from_def_name(name), rank))
            .collect();
        self.set_work(pawn, assignments);
    }

    pub fn set_individual_weights(&self, pawn: PawnId, weights: BTreeMap<StatId, f32>) {
        self.write(pawn, |work| work.individual = weights);
    }

    fn write(&self, pawn: PawnId, update: impl FnOnce(&mut PawnWork)) {
        let mut pawns = self.pawns.write().unwrap_or_else(PoisonError::into_inner);
        update(pawns.entry(pawn).or_default());
    }

    fn read<T>(&self, pawn: PawnId, view: impl FnOnce(&PawnWork) -> T) -> Option<T> {
        let pawns = self.pawns.read().unwrap_or_else(PoisonError::into_inner);
        pawns.get(&pawn).map(view)
    }
}

impl WorkOracle for WorkOracleImpl {
    fn active_work(&self, pawn: PawnId) -> Vec<WorkAssignment> {
        self.read(pawn, |work| work.assignments.clone())
            .unwrap_or_default()
    }

    fn individual_stat_weights(&self, pawn: PawnId) -> BTreeMap<StatId, f32> {
        self.read(pawn, |work| work.individual.clone())
            .unwrap_or_default()
    }
}
