//! File-based PawnStore implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use outfitter_core::{PawnId, PawnStore, StatPriority, StoreError, TemperatureRange};

use crate::repository::PawnRecord;

/// File-based implementation of PawnStore.
///
/// Stores each pawn's preferences as `pawn_{id}.ron`. Writes go to a temporary
/// file that is renamed over the record, and a pawn whose record becomes empty
/// has its file removed.
pub struct FilePawnStore {
    base_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePawnStore {
    /// Create a new file-based pawn store, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(io_error)?;
        Ok(Self {
            base_dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn record_path(&self, pawn: PawnId) -> PathBuf {
        self.base_dir.join(format!("pawn_{}.ron", pawn.0))
    }

    /// Reads a pawn's record; a missing file is an empty record.
    pub fn load(&self, pawn: PawnId) -> Result<PawnRecord, StoreError> {
        let path = self.record_path(pawn);
        if !path.exists() {
            return Ok(PawnRecord::default());
        }

        let content = fs::read_to_string(&path).map_err(io_error)?;
        let record = ron::from_str(&content).map_err(|e| StoreError::Corrupted {
            pawn,
            reason: e.to_string(),
        })?;

        tracing::trace!(%pawn, path = %path.display(), "loaded pawn record");
        Ok(record)
    }

    fn save(&self, pawn: PawnId, record: &PawnRecord) -> Result<(), StoreError> {
        let path = self.record_path(pawn);

        if record.is_empty() {
            if path.exists() {
                fs::remove_file(&path).map_err(io_error)?;
                tracing::debug!(%pawn, "removed empty pawn record");
            }
            return Ok(());
        }

        let content = ron::ser::to_string_pretty(record, ron::ser::PrettyConfig::default())
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let temp_path = path.with_extension("ron.tmp");
        fs::write(&temp_path, content).map_err(io_error)?;
        fs::rename(&temp_path, &path).map_err(io_error)?;

        tracing::debug!(%pawn, path = %path.display(), "saved pawn record");
        Ok(())
    }

    fn update(
        &self,
        pawn: PawnId,
        update: impl FnOnce(&mut PawnRecord),
    ) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;
        let mut record = self.load(pawn)?;
        update(&mut record);
        self.save(pawn, &record)
    }
}

fn io_error(err: std::io::Error) -> StoreError {
    StoreError::Io(err.to_string())
}

impl PawnStore for FilePawnStore {
    fn load_stat_priorities(&self, pawn: PawnId) -> Result<Vec<StatPriority>, StoreError> {
        Ok(self.load(pawn)?.user_priorities())
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
        Ok(self.load(pawn)?.temperature_override)
    }

    fn save_temperature_override(
        &self,
        pawn: PawnId,
        target: Option<TemperatureRange>,
    ) -> Result<(), StoreError> {
        self.update(pawn, |record| record.temperature_override = target)
    }
}
