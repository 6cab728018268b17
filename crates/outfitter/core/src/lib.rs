//! Deterministic apparel scoring for automatically dressed pawns.
//!
//! `outfitter-core` decides how much a pawn wants a piece of apparel. Per-pawn
//! state ([`PawnOutfit`]) combines a [`StatPriorityCache`] derived from work
//! assignments and user edits with a [`TemperatureState`] derived from the
//! climate; a [`ScoringSession`] turns both into scores and replacement
//! verdicts. The host game is reached only through the traits in [`env`].
pub mod apparel;
pub mod config;
pub mod decision;
pub mod env;
pub mod error;
pub mod ids;
pub mod priority;
pub mod record;
pub mod scoring;
pub mod stats;
pub mod temperature;
pub mod work;

#[cfg(test)]
pub(crate) mod testing;

pub use apparel::{
    Apparel, ApparelClass, ApparelDefinition, ApparelLayer, BodyGroup, HitPoints, WeaponRange,
};
pub use config::OutfitConfig;
pub use decision::{ADDITIVE_BONUS, GainVerdict, ScoringSession, WornScoreSnapshot};
pub use env::{
    ApparelOracle, ClimateOracle, InfusionProvider, NoInfusions, OutfitEnv, PawnStore, StoreError,
    WorkOracle,
};
pub use error::{ErrorSeverity, OutfitError, Result};
pub use ids::{ItemId, PawnId, Tick};
pub use priority::{StatAssignment, StatPriority, StatPriorityCache, automatic_weights};
pub use record::PawnOutfit;
pub use scoring::{
    HIT_POINTS_CURVE, ScoreCurve, ScoringContext, apply_durability, equipped_stat_value,
    score_apparel, temperature_score,
};
pub use stats::{StatId, StatTable, defs};
pub use temperature::{ForceRefresh, TemperatureRange, TemperatureState};
pub use work::{WorkAssignment, WorkPriority, WorkType, contributions_for};
