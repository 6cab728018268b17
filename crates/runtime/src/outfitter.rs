//! Outfitter orchestrator and builder.
//!
//! [`Outfitter`] owns one [`PawnOutfit`] per pawn and wires each of them to the
//! runtime oracles and the configured [`PawnStore`]. Records are created the
//! first time a pawn is touched, restoring persisted preferences from the store.
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use outfitter_content::ContentFactory;
use outfitter_core::{
    Apparel, ForceRefresh, GainVerdict, OutfitConfig, OutfitEnv, PawnId, PawnOutfit, PawnStore,
    StatId, TemperatureRange, Tick,
};

use crate::error::{Result, RuntimeError};
use crate::oracle::{ApparelOracleImpl, ClimateOracleImpl, OracleManager, WorkOracleImpl};

/// Per-pawn outfit records plus the collaborators they are evaluated against.
pub struct Outfitter {
    oracles: OracleManager,
    store: Arc<dyn PawnStore>,
    config: OutfitConfig,
    records: HashMap<PawnId, PawnOutfit>,
}

impl Outfitter {
    pub fn builder() -> OutfitterBuilder {
        OutfitterBuilder::new()
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn store(&self) -> &dyn PawnStore {
        self.store.as_ref()
    }

    pub fn config(&self) -> &OutfitConfig {
        &self.config
    }

    /// Environment view over the oracles and the store.
    pub fn env(&self) -> OutfitEnv<'_> {
        self.oracles.as_env(self.store.as_ref())
    }

    /// The pawn's record, if it has been touched.
    pub fn record(&self, pawn: PawnId) -> Option<&PawnOutfit> {
        self.records.get(&pawn)
    }

    /// Drops the in-memory record; persisted preferences stay in the store.
    pub fn forget(&mut self, pawn: PawnId) -> Option<PawnOutfit> {
        self.records.remove(&pawn)
    }

    /// Brings the pawn's priorities and temperature state up to date.
    ///
    /// Returns whether the stat priorities were recomputed.
    pub fn refresh(&mut self, pawn: PawnId, now: Tick) -> Result<bool> {
        let (record, env, config) = self.parts(pawn)?;
        Ok(record.sync(&env, now, config)?)
    }

    /// Forces the next refresh to recompute the pawn's stat priorities.
    pub fn request_refresh(&mut self, pawn: PawnId) -> Result<()> {
        let (record, _, _) = self.parts(pawn)?;
        record.request_refresh();
        Ok(())
    }

    /// Sets a manual weight for `stat`.
    pub fn assign(&mut self, pawn: PawnId, stat: StatId, weight: f32) -> Result<()> {
        let (record, env, _) = self.parts(pawn)?;
        record.assign(env.store(), stat, weight)?;
        Ok(())
    }

    pub fn delete(&mut self, pawn: PawnId, stat: &StatId) -> Result<()> {
        let (record, env, _) = self.parts(pawn)?;
        record.delete(env.store(), stat)?;
        Ok(())
    }

    pub fn reset(&mut self, pawn: PawnId, stat: &StatId) -> Result<()> {
        let (record, env, _) = self.parts(pawn)?;
        record.reset(&env, stat)?;
        Ok(())
    }

    /// Stats the user could still add for the pawn.
    pub fn not_yet_assigned(&mut self, pawn: PawnId) -> Result<Vec<StatId>> {
        let (record, env, _) = self.parts(pawn)?;
        Ok(record.not_yet_assigned(&env))
    }

    /// Raw score of `apparel` for the pawn, refreshing stale state first.
    pub fn score(&mut self, pawn: PawnId, apparel: &Apparel, now: Tick) -> Result<f32> {
        let (record, env, config) = self.parts(pawn)?;
        record.sync(&env, now, config)?;
        Ok(record.session(env).score(apparel))
    }

    /// Net gain of the pawn putting on `candidate`, refreshing stale state first.
    pub fn evaluate_gain(
        &mut self,
        pawn: PawnId,
        candidate: &Apparel,
        now: Tick,
    ) -> Result<GainVerdict> {
        let (record, env, config) = self.parts(pawn)?;
        record.sync(&env, now, config)?;
        Ok(record.session(env).evaluate_gain(candidate))
    }

    /// The candidate with the best positive gain, scored in one session.
    pub fn best_candidate<'c>(
        &mut self,
        pawn: PawnId,
        candidates: &'c [Apparel],
        now: Tick,
    ) -> Result<Option<(&'c Apparel, GainVerdict)>> {
        let (record, env, config) = self.parts(pawn)?;
        record.sync(&env, now, config)?;
        Ok(record.session(env).best_candidate(candidates))
    }

    pub fn set_target_temperatures(
        &mut self,
        pawn: PawnId,
        target: TemperatureRange,
    ) -> Result<()> {
        let (record, env, _) = self.parts(pawn)?;
        record.set_target_temperatures(env.store(), target)?;
        Ok(())
    }

    pub fn clear_target_override(&mut self, pawn: PawnId) -> Result<()> {
        let (record, env, _) = self.parts(pawn)?;
        record.clear_target_override(env.store())?;
        Ok(())
    }

    /// Updates only the temperature state, honoring `force`.
    pub fn update_temperature(
        &mut self,
        pawn: PawnId,
        now: Tick,
        force: ForceRefresh,
    ) -> Result<()> {
        let (record, env, config) = self.parts(pawn)?;
        record.update_temperature(env.climate(), now, config, force);
        Ok(())
    }

    /// Drops the cached real comfort range, e.g. after a trait or race change.
    pub fn invalidate_real_comfort(&mut self, pawn: PawnId) -> Result<()> {
        let (record, _, _) = self.parts(pawn)?;
        record.invalidate_real_comfort();
        Ok(())
    }

    fn parts(
        &mut self,
        pawn: PawnId,
    ) -> Result<(&mut PawnOutfit, OutfitEnv<'_>, &OutfitConfig)> {
        let record = match self.records.entry(pawn) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let record = PawnOutfit::load(pawn, self.store.as_ref())?;
                tracing::info!(
                    %pawn,
                    manual_target = record.temperature().has_override(),
                    "pawn outfit record created"
                );
                entry.insert(record)
            }
        };
        let env = self.oracles.as_env(self.store.as_ref());
        Ok((record, env, &self.config))
    }
}

/// Builder for [`Outfitter`].
pub struct OutfitterBuilder {
    oracles: Option<OracleManager>,
    store: Option<Arc<dyn PawnStore>>,
    config: OutfitConfig,
}

impl OutfitterBuilder {
    fn new() -> Self {
        Self {
            oracles: None,
            store: None,
            config: OutfitConfig::default(),
        }
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set required pawn store
    pub fn store(mut self, store: impl PawnStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Share a pawn store with other owners.
    pub fn shared_store(mut self, store: Arc<dyn PawnStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override refresh configuration
    pub fn config(mut self, config: OutfitConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration and the apparel catalog from `factory` and
    /// builds fresh oracles around the catalog.
    pub fn content(mut self, factory: &ContentFactory, outdoor_temperature: f32) -> Result<Self> {
        self.config = factory.load_config()?;
        let apparel = Arc::new(ApparelOracleImpl::new(factory.load_apparel()?));
        let climate = Arc::new(ClimateOracleImpl::new(outdoor_temperature, apparel.clone()));
        self.oracles = Some(OracleManager::new(
            Arc::new(WorkOracleImpl::new()),
            climate,
            apparel,
        ));
        Ok(self)
    }

    pub fn build(self) -> Result<Outfitter> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let store = self.store.ok_or(RuntimeError::MissingStore)?;
        Ok(Outfitter {
            oracles,
            store,
            config: self.config,
            records: HashMap::new(),
        })
    }
}
