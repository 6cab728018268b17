//! Per-pawn persistent record: stat priorities plus temperature state.

use crate::config::OutfitConfig;
use crate::decision::ScoringSession;
use crate::env::{ClimateOracle, OutfitEnv, PawnStore};
use crate::error::Result;
use crate::ids::{PawnId, Tick};
use crate::priority::StatPriorityCache;
use crate::scoring::ScoringContext;
use crate::stats::StatId;
use crate::temperature::{ForceRefresh, TemperatureRange, TemperatureState};

/// Everything the outfitter keeps about one pawn between evaluation passes.
#[derive(Clone, Debug, PartialEq)]
pub struct PawnOutfit {
    pawn: PawnId,
    priorities: StatPriorityCache,
    temperature: TemperatureState,
}

impl PawnOutfit {
    pub fn new(pawn: PawnId) -> Self {
        Self {
            pawn,
            priorities: StatPriorityCache::new(),
            temperature: TemperatureState::new(),
        }
    }

    /// Creates a record holding the pawn's persisted stat priorities and
    /// manual target range.
    pub fn load(pawn: PawnId, store: &dyn PawnStore) -> Result<Self> {
        let priorities = StatPriorityCache::load(pawn, store)?;
        let target = store.load_temperature_override(pawn)?;
        Ok(Self {
            pawn,
            priorities,
            temperature: TemperatureState::with_override(target),
        })
    }

    pub fn pawn(&self) -> PawnId {
        self.pawn
    }

    pub fn priorities(&self) -> &StatPriorityCache {
        &self.priorities
    }

    pub fn temperature(&self) -> &TemperatureState {
        &self.temperature
    }

    /// Brings priorities and temperature up to date; both are tick-gated.
    ///
    /// Returns whether the stat priorities were recomputed.
    pub fn sync(&mut self, env: &OutfitEnv<'_>, now: Tick, config: &OutfitConfig) -> Result<bool> {
        let refreshed = self
            .priorities
            .refresh(self.pawn, env.work(), env.store(), now, config)?;
        self.temperature
            .update_if_stale(self.pawn, env.climate(), now, config, ForceRefresh::NONE);
        Ok(refreshed)
    }

    pub fn update_temperature(
        &mut self,
        climate: &dyn ClimateOracle,
        now: Tick,
        config: &OutfitConfig,
        force: ForceRefresh,
    ) {
        self.temperature.update_if_stale(self.pawn, climate, now, config, force);
    }

    /// Scoring session over the record's current state.
    pub fn session<'a>(&'a self, env: OutfitEnv<'a>) -> ScoringSession<'a> {
        ScoringSession::new(ScoringContext::new(
            self.pawn,
            env,
            self.priorities.entries(),
            &self.temperature,
        ))
    }

    pub fn request_refresh(&mut self) {
        self.priorities.request_refresh();
    }

    pub fn assign(&mut self, store: &dyn PawnStore, stat: StatId, weight: f32) -> Result<()> {
        self.priorities.assign(self.pawn, store, stat, weight)
    }

    pub fn delete(&mut self, store: &dyn PawnStore, stat: &StatId) -> Result<()> {
        self.priorities.delete(self.pawn, store, stat)
    }

    pub fn reset(&mut self, env: &OutfitEnv<'_>, stat: &StatId) -> Result<()> {
        self.priorities.reset(self.pawn, env.work(), env.store(), stat)
    }

    pub fn not_yet_assigned(&self, env: &OutfitEnv<'_>) -> Vec<StatId> {
        self.priorities.not_yet_assigned(env.apparel(), env.infusions())
    }

    /// Sets and persists a manual target range.
    pub fn set_target_temperatures(
        &mut self,
        store: &dyn PawnStore,
        target: TemperatureRange,
    ) -> Result<()> {
        self.temperature.set_target(target)?;
        store.save_temperature_override(self.pawn, Some(self.temperature.target()))?;
        Ok(())
    }

    /// Returns to automatic targets and drops the persisted override.
    pub fn clear_target_override(&mut self, store: &dyn PawnStore) -> Result<()> {
        self.temperature.clear_override();
        store.save_temperature_override(self.pawn, None)?;
        Ok(())
    }

    pub fn invalidate_real_comfort(&mut self) {
        self.temperature.invalidate_real_comfort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apparel::{Apparel, ApparelDefinition};
    use crate::ids::ItemId;
    use crate::priority::StatAssignment;
    use crate::stats::defs;
    use crate::testing::{PAWN, World};
    use crate::work::{WorkAssignment, WorkType};

    #[test]
    fn load_restores_manual_target() {
        let world = World::default();
        let target = TemperatureRange::new(-5.0, 35.0);
        PawnOutfit::new(PAWN)
            .set_target_temperatures(&world.store, target)
            .unwrap();

        let record = PawnOutfit::load(PAWN, &world.store).unwrap();

        assert!(record.temperature().has_override());
        assert_eq!(record.temperature().target(), target);
    }

    #[test]
    fn load_restores_user_priorities() {
        let world = World::default();
        PawnOutfit::new(PAWN)
            .assign(&world.store, defs::SOCIAL_IMPACT, -1.0)
            .unwrap();

        let mut record = PawnOutfit::load(PAWN, &world.store).unwrap();

        let social = record.priorities().get(&defs::SOCIAL_IMPACT).unwrap();
        assert_eq!(social.assignment, StatAssignment::Manual);
        record.delete(&world.store, &defs::SOCIAL_IMPACT).unwrap();
        assert!(world.store.saved(PAWN).is_empty());
    }

    #[test]
    fn clearing_override_removes_persisted_target() {
        let world = World::default();
        let mut record = PawnOutfit::new(PAWN);
        record
            .set_target_temperatures(&world.store, TemperatureRange::new(0.0, 30.0))
            .unwrap();

        record.clear_target_override(&world.store).unwrap();

        let reloaded = PawnOutfit::load(PAWN, &world.store).unwrap();
        assert!(!reloaded.temperature().has_override());
    }

    #[test]
    fn sync_refreshes_priorities_and_temperature() {
        let mut world = World::default();
        world.work.assignments = vec![WorkAssignment::new(WorkType::Hunting, 1)];
        world.climate.outdoor = -10.0;
        let config = OutfitConfig::default();
        let mut record = PawnOutfit::new(PAWN);

        assert!(record.sync(&world.env(), Tick(0), &config).unwrap());
        assert!(!record.sync(&world.env(), Tick(10), &config).unwrap());

        let accuracy = record.priorities().get(&defs::SHOOTING_ACCURACY).unwrap();
        assert_eq!(accuracy.assignment, StatAssignment::Automatic);
        assert_eq!(record.temperature().target(), TemperatureRange::new(-17.5, 20.0));
        assert!(record.temperature().weight().min < 0.0);
    }

    #[test]
    fn session_scores_with_current_priorities() {
        let world = World::default();
        let mut record = PawnOutfit::new(PAWN);
        let goggles = Apparel::new(
            ItemId(3),
            ApparelDefinition::new("Goggles").with_stat_base(defs::SHOOTING_ACCURACY, 0.5),
        );
        let before = record.session(world.env()).score(&goggles);

        record.assign(&world.store, defs::SHOOTING_ACCURACY, 2.0).unwrap();

        let after = record.session(world.env()).score(&goggles);
        assert!((after - before - 1.0).abs() < 1e-4);
    }

    #[test]
    fn reset_and_delete_go_through_the_record() {
        let mut world = World::default();
        world.work.assignments = vec![WorkAssignment::new(WorkType::Research, 1)];
        let config = OutfitConfig::default();
        let mut record = PawnOutfit::new(PAWN);
        record.sync(&world.env(), Tick(0), &config).unwrap();

        record.assign(&world.store, defs::RESEARCH_SPEED, -2.0).unwrap();
        record.reset(&world.env(), &defs::RESEARCH_SPEED).unwrap();
        assert_eq!(record.priorities().get(&defs::RESEARCH_SPEED).unwrap().weight, 1.0);

        record.delete(&world.store, &defs::RESEARCH_SPEED).unwrap();
        assert!(record.priorities().entries().is_empty());
    }
}
