//! Data-driven content for the outfitter.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Apparel catalogs (data-driven via RON)
//! - Refresh cadence configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in pawn records.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ApparelCatalog, ApparelLoader, ConfigLoader, ContentFactory, LoadResult};
