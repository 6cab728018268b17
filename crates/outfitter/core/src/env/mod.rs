//! Traits describing the host game as seen by the scoring engine.
//!
//! Oracles expose read-only facts (work assignments, climate, worn apparel,
//! infusion bonuses); the [`PawnStore`] persists per-pawn preferences. The
//! [`OutfitEnv`] aggregate bundles them so the core can reach everything it
//! needs without coupling to concrete implementations.
mod apparel;
mod climate;
mod infusion;
mod store;
mod work;

pub use apparel::ApparelOracle;
pub use climate::ClimateOracle;
pub use infusion::{InfusionProvider, NoInfusions};
pub use store::{PawnStore, StoreError};
pub use work::WorkOracle;

static NO_INFUSIONS: NoInfusions = NoInfusions;

/// Aggregates the collaborators required by refresh, scoring and decisions.
#[derive(Clone, Copy)]
pub struct OutfitEnv<'a> {
    work: &'a dyn WorkOracle,
    climate: &'a dyn ClimateOracle,
    apparel: &'a dyn ApparelOracle,
    store: &'a dyn PawnStore,
    infusions: &'a dyn InfusionProvider,
}

impl<'a> OutfitEnv<'a> {
    /// Bundles the required collaborators; infusions default to [`NoInfusions`].
    pub fn new(
        work: &'a dyn WorkOracle,
        climate: &'a dyn ClimateOracle,
        apparel: &'a dyn ApparelOracle,
        store: &'a dyn PawnStore,
    ) -> Self {
        Self {
            work,
            climate,
            apparel,
            store,
            infusions: &NO_INFUSIONS,
        }
    }

    #[must_use]
    pub fn with_infusions(mut self, infusions: &'a dyn InfusionProvider) -> Self {
        self.infusions = infusions;
        self
    }

    pub fn work(&self) -> &'a dyn WorkOracle {
        self.work
    }

    pub fn climate(&self) -> &'a dyn ClimateOracle {
        self.climate
    }

    pub fn apparel(&self) -> &'a dyn ApparelOracle {
        self.apparel
    }

    pub fn store(&self) -> &'a dyn PawnStore {
        self.store
    }

    pub fn infusions(&self) -> &'a dyn InfusionProvider {
        self.infusions
    }
}
