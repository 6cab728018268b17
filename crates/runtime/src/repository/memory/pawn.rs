//! In-memory PawnStore implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use outfitter_core::{PawnId, PawnStore, StatPriority, StoreError, TemperatureRange};

use crate::repository::PawnRecord;

/// In-memory implementation of PawnStore.
#[derive(Default)]
pub struct InMemoryPawnStore {
    records: RwLock<HashMap<PawnId, PawnRecord>>,
}

impl InMemoryPawnStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a pawn's persisted record.
    pub fn record(&self, pawn: PawnId) -> Result<Option<PawnRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(&pawn).cloned())
    }

    fn update(
        &self,
        pawn: PawnId,
        update: impl FnOnce(&mut PawnRecord),
    ) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let record = records.entry(pawn).or_default();
        update(&mut *record);
        if record.is_empty() {
            records.remove(&pawn);
        }
        Ok(())
    }
}

impl PawnStore for InMemoryPawnStore {
    fn load_stat_priorities(&self, pawn: PawnId) -> Result<Vec<StatPriority>, StoreError> {
        Ok(self
            .record(pawn)?
            .map(|record| record.user_priorities())
            .unwrap_or_default())
    }

    fn save_stat_priorities(
        &self,
        pawn: PawnId,
        entries: &[StatPriority],
    ) -> Result<(), StoreError> {
        self.update(pawn, |record| record.set_priorities(entries))
    }

    fn load_temperature_override(
        &self,
        pawn: PawnId,
    ) -> Result<Option<TemperatureRange>, StoreError> {
        Ok(self
            .record(pawn)?
            .and_then(|record| record.temperature_override))
    }

    fn save_temperature_override(
        &self,
        pawn: PawnId,
        target: Option<TemperatureRange>,
    ) -> Result<(), StoreError> {
        self.update(pawn, |record| record.temperature_override = target)
    }
}
