//! Error infrastructure for outfitter-core.
//!
//! Scoring itself never fails: missing stats read as zero and vetoes are
//! ordinary verdicts. Errors only arise from the persistence collaborator and
//! from invalid user input (manual temperature targets, unknown stats).

use thiserror::Error;

use crate::env::StoreError;
use crate::stats::StatId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; retrying later may succeed.
    Recoverable,

    /// Invalid input that should be rejected without retry.
    Validation,

    /// Unexpected state inconsistency that requires investigation.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Errors raised by the stat-priority cache, the temperature model and the
/// per-pawn record.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum OutfitError {
    #[error("pawn store failed: {0}")]
    Store(#[from] StoreError),

    #[error("invalid target temperature range [{min}, {max}]")]
    InvalidTemperatureRange { min: f32, max: f32 },

    #[error("stat {0} has no priority entry")]
    UnknownStat(StatId),
}

impl OutfitError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OutfitError::Store(StoreError::Corrupted { .. }) => ErrorSeverity::Internal,
            OutfitError::Store(_) => ErrorSeverity::Recoverable,
            OutfitError::InvalidTemperatureRange { .. } | OutfitError::UnknownStat(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            OutfitError::Store(StoreError::LockPoisoned) => "STORE_LOCK_POISONED",
            OutfitError::Store(StoreError::Io(_)) => "STORE_IO",
            OutfitError::Store(StoreError::Serialization(_)) => "STORE_SERIALIZATION",
            OutfitError::Store(StoreError::Corrupted { .. }) => "STORE_CORRUPTED",
            OutfitError::InvalidTemperatureRange { .. } => "INVALID_TEMPERATURE_RANGE",
            OutfitError::UnknownStat(_) => "UNKNOWN_STAT",
        }
    }
}

pub type Result<T> = std::result::Result<T, OutfitError>;
