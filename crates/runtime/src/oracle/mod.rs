//! Runtime implementations of the outfitter-core oracle traits.
//!
//! Each oracle keeps its facts behind a lock so the host can update them
//! (work assignments, worn apparel, weather) while the [`OracleManager`]
//! hands out [`OutfitEnv`] snapshots on demand.
mod apparel;
mod climate;
mod work;

use std::sync::Arc;

use outfitter_core::{InfusionProvider, OutfitEnv, PawnStore};

pub use apparel::ApparelOracleImpl;
pub use climate::ClimateOracleImpl;
pub use work::WorkOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) work: Arc<WorkOracleImpl>,
    pub(crate) climate: Arc<ClimateOracleImpl>,
    pub(crate) apparel: Arc<ApparelOracleImpl>,
    pub(crate) infusions: Option<Arc<dyn InfusionProvider>>,
}

impl OracleManager {
    pub fn new(
        work: Arc<WorkOracleImpl>,
        climate: Arc<ClimateOracleImpl>,
        apparel: Arc<ApparelOracleImpl>,
    ) -> Self {
        Self {
            work,
            climate,
            apparel,
            infusions: None,
        }
    }

    #[must_use]
    pub fn with_infusions(mut self, infusions: Arc<dyn InfusionProvider>) -> Self {
        self.climate.set_infusions(Some(Arc::clone(&infusions)));
        self.infusions = Some(infusions);
        self
    }

    /// Bundles the oracles and `store` into an [`OutfitEnv`] for outfitter-core.
    pub fn as_env<'a>(&'a self, store: &'a dyn PawnStore) -> OutfitEnv<'a> {
        let env = OutfitEnv::new(
            self.work.as_ref(),
            self.climate.as_ref(),
            self.apparel.as_ref(),
            store,
        );
        match &self.infusions {
            Some(infusions) => env.with_infusions(infusions.as_ref()),
            None => env,
        }
    }

    pub fn work(&self) -> &WorkOracleImpl {
        &self.work
    }

    pub fn climate(&self) -> &ClimateOracleImpl {
        &self.climate
    }

    pub fn apparel(&self) -> &ApparelOracleImpl {
        &self.apparel
    }
}
