use thiserror::Error;

use crate::ids::PawnId;
use crate::priority::StatPriority;
use crate::temperature::TemperatureRange;

/// Errors surfaced by pawn store implementations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("pawn store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted record for {pawn}: {reason}")]
    Corrupted { pawn: PawnId, reason: String },
}

/// Persistence of per-pawn preferences.
///
/// Only user-owned state is persisted: Manual and Override stat priorities and
/// the manual target temperature range. Automatic and Individual priorities are
/// always recomputed from their sources.
pub trait PawnStore: Send + Sync {
    fn load_stat_priorities(&self, pawn: PawnId) -> Result<Vec<StatPriority>, StoreError>;

    /// Replaces every persisted priority of the pawn with `entries`.
    fn save_stat_priorities(
        &self,
        pawn: PawnId,
        entries: &[StatPriority],
    ) -> Result<(), StoreError>;

    fn load_temperature_override(
        &self,
        pawn: PawnId,
    ) -> Result<Option<TemperatureRange>, StoreError>;

    /// Stores the manual target range, or clears it with `None`.
    fn save_temperature_override(
        &self,
        pawn: PawnId,
        target: Option<TemperatureRange>,
    ) -> Result<(), StoreError>;
}
