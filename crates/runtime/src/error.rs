//! Error types surfaced by the outfitter runtime.
//!
//! Wraps failures from the scoring core, the pawn stores and content loading
//! so hosts can bubble them up with consistent context.
use thiserror::Error;

use outfitter_core::{ErrorSeverity, OutfitError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Outfit(#[from] OutfitError),

    #[error("outfitter requires oracles to be configured before building")]
    MissingOracles,

    #[error("outfitter requires a pawn store to be configured before building")]
    MissingStore,

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Outfit(err) => err.severity(),
            RuntimeError::MissingOracles
            | RuntimeError::MissingStore
            | RuntimeError::Content(_) => ErrorSeverity::Validation,
        }
    }
}

impl From<outfitter_core::StoreError> for RuntimeError {
    fn from(err: outfitter_core::StoreError) -> Self {
        RuntimeError::Outfit(OutfitError::Store(err))
    }
}
