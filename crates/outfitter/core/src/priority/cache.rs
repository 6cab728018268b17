use std::collections::{BTreeMap, BTreeSet};

use super::{StatAssignment, StatPriority, automatic_weights};
use crate::config::OutfitConfig;
use crate::env::{ApparelOracle, InfusionProvider, PawnStore, WorkOracle};
use crate::error::{OutfitError, Result};
use crate::ids::{PawnId, Tick};
use crate::stats::StatId;

/// Per-pawn ordered collection of stat priorities.
///
/// # Invariants
///
/// - At most one entry per stat.
/// - A refresh recomputes every Automatic and Individual entry from its source
///   and never drops a Manual or Override entry.
/// - After every mutation the Manual and Override entries are written to the
///   [`PawnStore`], which therefore always mirrors the user-owned entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatPriorityCache {
    entries: Vec<StatPriority>,
    last_refresh: Option<Tick>,
    force_refresh: bool,
    restored: bool,
}

impl StatPriorityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache holding the pawn's persisted user entries.
    pub fn load(pawn: PawnId, store: &dyn PawnStore) -> Result<Self> {
        let mut cache = Self::new();
        cache.ensure_restored(pawn, store)?;
        Ok(cache)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[StatPriority] {
        &self.entries
    }

    pub fn get(&self, stat: &StatId) -> Option<&StatPriority> {
        self.entries.iter().find(|entry| &entry.stat == stat)
    }

    pub fn last_refresh(&self) -> Option<Tick> {
        self.last_refresh
    }

    /// Makes the next [`refresh`](Self::refresh) run regardless of the tick budget.
    pub fn request_refresh(&mut self) {
        self.force_refresh = true;
    }

    pub fn needs_refresh(&self, now: Tick, config: &OutfitConfig) -> bool {
        self.force_refresh || now.is_past_interval(self.last_refresh, config.stat_refresh_interval)
    }

    /// Recomputes the derived entries if the tick budget has passed or a
    /// refresh was requested.
    ///
    /// Returns `Ok(false)` without touching anything when the cache is fresh.
    /// The refresh only counts once the store has accepted the result, so a
    /// failed save is retried by the next call.
    pub fn refresh(
        &mut self,
        pawn: PawnId,
        work: &dyn WorkOracle,
        store: &dyn PawnStore,
        now: Tick,
        config: &OutfitConfig,
    ) -> Result<bool> {
        if !self.needs_refresh(now, config) {
            return Ok(false);
        }

        self.ensure_restored(pawn, store)?;

        let automatic = automatic_weights(&work.active_work(pawn));
        let individual = work.individual_stat_weights(pawn);

        self.entries.retain(|entry| !entry.assignment.is_derived());
        self.merge(individual, StatAssignment::Individual);
        self.merge(automatic, StatAssignment::Automatic);
        self.persist(pawn, store)?;

        self.last_refresh = Some(now);
        self.force_refresh = false;

        tracing::debug!(
            %pawn,
            %now,
            entries = self.entries.len(),
            "stat priorities refreshed"
        );
        Ok(true)
    }

    /// Sets a user-chosen weight for a stat.
    ///
    /// Unknown stats are added as Manual; derived entries become Override.
    /// The weight is clamped to the assignable range.
    pub fn assign(
        &mut self,
        pawn: PawnId,
        store: &dyn PawnStore,
        stat: StatId,
        weight: f32,
    ) -> Result<()> {
        self.ensure_restored(pawn, store)?;
        let weight = weight.clamp(StatPriority::WEIGHT_MIN, StatPriority::WEIGHT_MAX);
        match self.entries.iter_mut().find(|entry| entry.stat == stat) {
            Some(entry) => {
                entry.weight = weight;
                if entry.assignment.is_derived() {
                    entry.assignment = StatAssignment::Override;
                }
            }
            None => self
                .entries
                .push(StatPriority::new(stat, weight, StatAssignment::Manual)),
        }
        self.persist(pawn, store)
    }

    /// Removes a stat's entry from the cache and from the store.
    pub fn delete(&mut self, pawn: PawnId, store: &dyn PawnStore, stat: &StatId) -> Result<()> {
        self.ensure_restored(pawn, store)?;
        let index = self.index_of(stat)?;
        self.entries.remove(index);
        self.persist(pawn, store)
    }

    /// Recomputes one stat from its automatic and individual sources.
    ///
    /// The entry returns to Automatic (or Individual, which wins when both
    /// sources mention the stat) and its user record is dropped. A stat
    /// neither source mentions is removed.
    pub fn reset(
        &mut self,
        pawn: PawnId,
        work: &dyn WorkOracle,
        store: &dyn PawnStore,
        stat: &StatId,
    ) -> Result<()> {
        self.ensure_restored(pawn, store)?;
        let index = self.index_of(stat)?;

        let automatic = automatic_weights(&work.active_work(pawn));
        let individual = work.individual_stat_weights(pawn);
        let source = individual
            .get(stat)
            .map(|weight| (*weight, StatAssignment::Individual))
            .or_else(|| {
                automatic
                    .get(stat)
                    .map(|weight| (*weight, StatAssignment::Automatic))
            });

        match source {
            Some((weight, assignment)) => {
                let entry = &mut self.entries[index];
                entry.weight = weight;
                entry.assignment = assignment;
            }
            None => {
                self.entries.remove(index);
            }
        }
        self.persist(pawn, store)
    }

    /// Stats some apparel can affect that have no entry yet, sorted by name.
    pub fn not_yet_assigned(
        &self,
        apparel: &dyn ApparelOracle,
        infusions: &dyn InfusionProvider,
    ) -> Vec<StatId> {
        let mut stats: BTreeSet<StatId> = apparel
            .definitions()
            .into_iter()
            .flat_map(|def| def.equipped_offsets.stats().cloned().collect::<Vec<_>>())
            .collect();
        stats.extend(infusions.additional_stats());
        for entry in &self.entries {
            stats.remove(&entry.stat);
        }
        stats.into_iter().collect()
    }

    fn index_of(&self, stat: &StatId) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.stat == stat)
            .ok_or_else(|| OutfitError::UnknownStat(stat.clone()))
    }

    /// Merges the persisted user entries in once, before the first mutation.
    fn ensure_restored(&mut self, pawn: PawnId, store: &dyn PawnStore) -> Result<()> {
        if !self.restored {
            self.restore(store.load_stat_priorities(pawn)?);
            self.restored = true;
        }
        Ok(())
    }

    /// Loads persisted user entries, keeping the first entry per stat.
    fn restore(&mut self, persisted: Vec<StatPriority>) {
        for entry in persisted {
            if entry.assignment.is_derived() || self.get(&entry.stat).is_some() {
                continue;
            }
            self.entries.push(entry);
        }
    }

    /// Inserts derived weights; a stat that already has an entry keeps its
    /// weight and becomes Override.
    fn merge(&mut self, weights: BTreeMap<StatId, f32>, assignment: StatAssignment) {
        for (stat, weight) in weights {
            match self.entries.iter_mut().find(|entry| entry.stat == stat) {
                Some(existing) => existing.assignment = StatAssignment::Override,
                None => self
                    .entries
                    .push(StatPriority::new(stat, weight, assignment)),
            }
        }
    }

    /// Normalizes user-owned kinds and writes them to the store.
    fn persist(&mut self, pawn: PawnId, store: &dyn PawnStore) -> Result<()> {
        let mut owned = Vec::new();
        for entry in &mut self.entries {
            if entry.assignment.is_derived() {
                continue;
            }
            if entry.assignment != StatAssignment::Override {
                entry.assignment = StatAssignment::Manual;
            }
            owned.push(entry.clone());
        }
        store.save_stat_priorities(pawn, &owned)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apparel::ApparelDefinition;
    use crate::env::NoInfusions;
    use crate::stats::defs;
    use crate::testing::{PAWN, Store, Wardrobe, Work};
    use crate::work::{WorkAssignment, WorkType};

    fn miner() -> Work {
        Work {
            assignments: vec![WorkAssignment::new(WorkType::Mining, 1)],
            individual: BTreeMap::new(),
        }
    }

    fn refreshed(work: &Work, store: &Store) -> StatPriorityCache {
        let mut cache = StatPriorityCache::new();
        assert!(cache.refresh(PAWN, work, store, Tick(0), &OutfitConfig::default()).unwrap());
        cache
    }

    fn assert_unique(cache: &StatPriorityCache) {
        let stats: BTreeSet<_> = cache.entries().iter().map(|e| e.stat.clone()).collect();
        assert_eq!(stats.len(), cache.entries().len());
    }

    #[test]
    fn refresh_inserts_automatic_entries() {
        let store = Store::default();
        let cache = refreshed(&miner(), &store);

        let mining = cache.get(&defs::MINING_SPEED).unwrap();
        assert_eq!(mining.assignment, StatAssignment::Automatic);
        assert_eq!(mining.weight, 1.0);
        assert_eq!(cache.entries().len(), 4);
        assert!(store.saved(PAWN).is_empty());
    }

    #[test]
    fn refresh_is_idempotent_within_budget() {
        let work = miner();
        let store = Store::default();
        let config = OutfitConfig::default();
        let mut cache = refreshed(&work, &store);
        let before = cache.clone();

        assert!(!cache.refresh(PAWN, &work, &store, Tick(1900), &config).unwrap());
        assert_eq!(cache, before);

        assert!(cache.refresh(PAWN, &work, &store, Tick(1901), &config).unwrap());
        assert_eq!(cache.entries(), before.entries());
    }

    #[test]
    fn forced_refresh_ignores_budget_once() {
        let mut work = miner();
        let store = Store::default();
        let config = OutfitConfig::default();
        let mut cache = refreshed(&work, &store);

        work.assignments = vec![WorkAssignment::new(WorkType::Research, 1)];
        cache.request_refresh();
        assert!(cache.refresh(PAWN, &work, &store, Tick(10), &config).unwrap());
        assert!(cache.get(&defs::MINING_SPEED).is_none());
        assert!(cache.get(&defs::RESEARCH_SPEED).is_some());

        assert!(!cache.refresh(PAWN, &work, &store, Tick(20), &config).unwrap());
    }

    #[test]
    fn manual_entry_meeting_a_source_becomes_override() {
        let work = miner();
        let store = Store::default();
        let config = OutfitConfig::default();
        let mut cache = StatPriorityCache::new();
        cache.assign(PAWN, &store, defs::MINING_SPEED, 2.0).unwrap();

        cache.refresh(PAWN, &work, &store, Tick(0), &config).unwrap();

        let mining = cache.get(&defs::MINING_SPEED).unwrap();
        assert_eq!(mining.assignment, StatAssignment::Override);
        assert_eq!(mining.weight, 2.0);
        assert_eq!(store.saved(PAWN), vec![mining.clone()]);
        assert_unique(&cache);
    }

    #[test]
    fn manual_entries_survive_refresh() {
        let work = miner();
        let store = Store::default();
        let config = OutfitConfig::default();
        let mut cache = refreshed(&work, &store);
        cache.assign(PAWN, &store, defs::COOK_SPEED, 0.5).unwrap();

        cache.request_refresh();
        cache.refresh(PAWN, &Work::default(), &store, Tick(5), &config).unwrap();

        assert_eq!(cache.entries().len(), 1);
        assert_eq!(cache.entries()[0].assignment, StatAssignment::Manual);
    }

    #[test]
    fn individual_and_automatic_sources_merge_into_one_entry() {
        let mut work = miner();
        work.individual.insert(defs::MOVE_SPEED, 0.8);
        work.individual.insert(defs::SOCIAL_IMPACT, 0.3);
        let store = Store::default();
        let cache = refreshed(&work, &store);

        assert_unique(&cache);
        let social = cache.get(&defs::SOCIAL_IMPACT).unwrap();
        assert_eq!(social.assignment, StatAssignment::Individual);
        // move speed comes from both sources: the individual entry is promoted
        let speed = cache.get(&defs::MOVE_SPEED).unwrap();
        assert_eq!(speed.assignment, StatAssignment::Override);
        assert_eq!(speed.weight, 0.8);
    }

    #[test]
    fn assigning_a_derived_stat_overrides_it() {
        let store = Store::default();
        let mut cache = refreshed(&miner(), &store);

        cache.assign(PAWN, &store, defs::MOVE_SPEED, 9.0).unwrap();

        let speed = cache.get(&defs::MOVE_SPEED).unwrap();
        assert_eq!(speed.assignment, StatAssignment::Override);
        assert_eq!(speed.weight, StatPriority::WEIGHT_MAX);
        assert_eq!(store.saved(PAWN).len(), 1);
    }

    #[test]
    fn delete_removes_entry_and_record() {
        let store = Store::default();
        let mut cache = StatPriorityCache::new();
        cache.assign(PAWN, &store, defs::COOK_SPEED, 1.0).unwrap();

        cache.delete(PAWN, &store, &defs::COOK_SPEED).unwrap();

        assert!(cache.get(&defs::COOK_SPEED).is_none());
        assert!(store.saved(PAWN).is_empty());
        assert!(matches!(
            cache.delete(PAWN, &store, &defs::COOK_SPEED),
            Err(OutfitError::UnknownStat(_))
        ));
    }

    #[test]
    fn reset_returns_to_derived_weight() {
        let work = miner();
        let store = Store::default();
        let mut cache = refreshed(&work, &store);
        cache.assign(PAWN, &store, defs::MINING_SPEED, -1.0).unwrap();

        cache.reset(PAWN, &work, &store, &defs::MINING_SPEED).unwrap();

        let mining = cache.get(&defs::MINING_SPEED).unwrap();
        assert_eq!(mining.assignment, StatAssignment::Automatic);
        assert_eq!(mining.weight, 1.0);
        assert!(store.saved(PAWN).is_empty());
    }

    #[test]
    fn reset_without_source_removes_entry() {
        let store = Store::default();
        let mut cache = StatPriorityCache::new();
        cache.assign(PAWN, &store, defs::GIFT_IMPACT, 1.0).unwrap();

        cache.reset(PAWN, &Work::default(), &store, &defs::GIFT_IMPACT).unwrap();

        assert!(cache.entries().is_empty());
    }

    #[test]
    fn empty_cache_restores_user_entries() {
        let store = Store::default();
        store
            .save_stat_priorities(
                PAWN,
                &[
                    StatPriority::new(defs::COOK_SPEED, 0.7, StatAssignment::Manual),
                    StatPriority::new(defs::COOK_SPEED, 0.1, StatAssignment::Manual),
                    StatPriority::new(defs::MOVE_SPEED, 1.5, StatAssignment::Override),
                ],
            )
            .unwrap();

        let cache = refreshed(&miner(), &store);

        assert_unique(&cache);
        assert_eq!(cache.get(&defs::COOK_SPEED).unwrap().weight, 0.7);
        let speed = cache.get(&defs::MOVE_SPEED).unwrap();
        assert_eq!(speed.weight, 1.5);
        assert_eq!(speed.assignment, StatAssignment::Override);
    }

    fn store_with_social_preference() -> Store {
        let store = Store::default();
        store
            .save_stat_priorities(
                PAWN,
                &[StatPriority::new(defs::SOCIAL_IMPACT, -1.0, StatAssignment::Manual)],
            )
            .unwrap();
        store
    }

    #[test]
    fn assign_before_refresh_keeps_saved_entries() {
        let store = store_with_social_preference();
        let mut cache = StatPriorityCache::new();

        cache.assign(PAWN, &store, defs::COOK_SPEED, 1.0).unwrap();

        let saved: Vec<_> = store.saved(PAWN).into_iter().map(|e| e.stat).collect();
        assert_eq!(saved, vec![defs::SOCIAL_IMPACT, defs::COOK_SPEED]);

        cache
            .refresh(PAWN, &miner(), &store, Tick(0), &OutfitConfig::default())
            .unwrap();
        assert_eq!(cache.get(&defs::SOCIAL_IMPACT).unwrap().weight, -1.0);
        assert_unique(&cache);
    }

    #[test]
    fn delete_and_reset_see_saved_entries() {
        let store = store_with_social_preference();
        let mut cache = StatPriorityCache::new();
        cache.reset(PAWN, &miner(), &store, &defs::SOCIAL_IMPACT).unwrap();
        assert!(cache.get(&defs::SOCIAL_IMPACT).is_none());

        let store = store_with_social_preference();
        let mut cache = StatPriorityCache::new();
        cache.delete(PAWN, &store, &defs::SOCIAL_IMPACT).unwrap();
        assert!(store.saved(PAWN).is_empty());
    }

    #[test]
    fn loaded_cache_holds_saved_entries() {
        let store = store_with_social_preference();
        let cache = StatPriorityCache::load(PAWN, &store).unwrap();
        let catalog = Wardrobe {
            definitions: vec![
                ApparelDefinition::new("Hat").with_equipped_offset(defs::SOCIAL_IMPACT, 0.1),
            ],
            ..Wardrobe::default()
        };

        assert_eq!(cache.get(&defs::SOCIAL_IMPACT).unwrap().weight, -1.0);
        assert!(cache.not_yet_assigned(&catalog, &NoInfusions).is_empty());
        assert_eq!(cache.last_refresh(), None);
    }

    #[test]
    fn failed_save_leaves_refresh_pending() {
        let store = Store::default();
        let config = OutfitConfig::default();
        let mut cache = StatPriorityCache::new();
        cache.assign(PAWN, &store, defs::MINING_SPEED, 2.0).unwrap();

        store.fail_saves(true);
        assert!(cache.refresh(PAWN, &miner(), &store, Tick(0), &config).is_err());
        assert_eq!(cache.last_refresh(), None);
        assert!(cache.needs_refresh(Tick(1), &config));

        store.fail_saves(false);
        assert!(cache.refresh(PAWN, &miner(), &store, Tick(1), &config).unwrap());
        assert_eq!(store.saved(PAWN)[0].assignment, StatAssignment::Override);
    }

    #[test]
    fn unassigned_stats_exclude_cached_ones() {
        let store = Store::default();
        let cache = refreshed(&miner(), &store);
        let catalog = Wardrobe {
            definitions: vec![
                ApparelDefinition::new("Goggles")
                    .with_equipped_offset(defs::SHOOTING_ACCURACY, 0.1),
                ApparelDefinition::new("Belt").with_equipped_offset(defs::MOVE_SPEED, 0.2),
            ],
            ..Wardrobe::default()
        };

        let unassigned = cache.not_yet_assigned(&catalog, &NoInfusions);

        assert_eq!(unassigned, vec![defs::SHOOTING_ACCURACY]);
    }
}
