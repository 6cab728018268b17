//! Runtime adapters for the outfitter scoring core.
//!
//! This crate supplies lock-backed implementations of the outfitter-core
//! collaborator traits and wires them to an [`Outfitter`] that owns every
//! pawn's record. Hosts update the oracles as the world changes and call the
//! outfitter to score candidates.
//!
//! Modules are organized by responsibility:
//! - [`outfitter`] hosts the orchestrator and builder
//! - [`oracle`] provides host-updated oracle implementations
//! - [`repository`] persists per-pawn preferences in memory or on disk
pub mod error;
pub mod oracle;
pub mod outfitter;
pub mod repository;

pub use error::{Result, RuntimeError};
pub use oracle::{ApparelOracleImpl, ClimateOracleImpl, OracleManager, WorkOracleImpl};
pub use outfitter::{Outfitter, OutfitterBuilder};
pub use repository::{FilePawnStore, InMemoryPawnStore, PawnRecord};
