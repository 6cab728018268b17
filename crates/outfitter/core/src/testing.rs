//! Fixed collaborators for unit tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::apparel::{
    Apparel, ApparelClass, ApparelDefinition, ApparelLayer, BodyGroup, WeaponRange,
};
use crate::env::{
    ApparelOracle, ClimateOracle, InfusionProvider, OutfitEnv, PawnStore, StoreError, WorkOracle,
};
use crate::ids::{ItemId, PawnId};
use crate::priority::StatPriority;
use crate::stats::{StatId, defs};
use crate::temperature::TemperatureRange;
use crate::work::WorkAssignment;

pub const PAWN: PawnId = PawnId(1);

#[derive(Default)]
pub struct Work {
    pub assignments: Vec<WorkAssignment>,
    pub individual: BTreeMap<StatId, f32>,
}

impl WorkOracle for Work {
    fn active_work(&self, _pawn: PawnId) -> Vec<WorkAssignment> {
        self.assignments.clone()
    }

    fn individual_stat_weights(&self, _pawn: PawnId) -> BTreeMap<StatId, f32> {
        self.individual.clone()
    }
}

pub struct Climate {
    pub outdoor: f32,
    pub base: TemperatureRange,
    pub current: TemperatureRange,
}

impl Default for Climate {
    fn default() -> Self {
        Self {
            outdoor: 15.0,
            base: TemperatureRange::new(16.0, 26.0),
            current: TemperatureRange::new(16.0, 26.0),
        }
    }
}

impl ClimateOracle for Climate {
    fn outdoor_temperature(&self) -> f32 {
        self.outdoor
    }

    fn base_comfort_range(&self, _pawn: PawnId) -> TemperatureRange {
        self.base
    }

    fn comfortable_range(&self, _pawn: PawnId) -> TemperatureRange {
        self.current
    }
}

#[derive(Default)]
pub struct Wardrobe {
    pub worn: Vec<Apparel>,
    pub forced: BTreeSet<ItemId>,
    pub weapon: Option<WeaponRange>,
    pub definitions: Vec<ApparelDefinition>,
}

impl ApparelOracle for Wardrobe {
    fn worn(&self, _pawn: PawnId) -> Vec<Apparel> {
        self.worn.clone()
    }

    fn is_forced(&self, _pawn: PawnId, apparel: &Apparel) -> bool {
        self.forced.contains(&apparel.id)
    }

    fn primary_weapon(&self, _pawn: PawnId) -> Option<WeaponRange> {
        self.weapon
    }

    fn definitions(&self) -> Vec<ApparelDefinition> {
        self.definitions.clone()
    }
}

#[derive(Default)]
pub struct Store {
    priorities: Mutex<HashMap<PawnId, Vec<StatPriority>>>,
    overrides: Mutex<HashMap<PawnId, TemperatureRange>>,
    failing: AtomicBool,
}

impl Store {
    /// Makes every following priority save fail with an I/O error.
    pub fn fail_saves(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn saved(&self, pawn: PawnId) -> Vec<StatPriority> {
        self.priorities
            .lock()
            .unwrap()
            .get(&pawn)
            .cloned()
            .unwrap_or_default()
    }
}

impl PawnStore for Store {
    fn load_stat_priorities(&self, pawn: PawnId) -> Result<Vec<StatPriority>, StoreError> {
        Ok(self.saved(pawn))
    }

    fn save_stat_priorities(
        &self,
        pawn: PawnId,
        entries: &[StatPriority],
    ) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Io("disk full".into()));
        }
        self.priorities.lock().unwrap().insert(pawn, entries.to_vec());
        Ok(())
    }

    fn load_temperature_override(
        &self,
        pawn: PawnId,
    ) -> Result<Option<TemperatureRange>, StoreError> {
        Ok(self.overrides.lock().unwrap().get(&pawn).copied())
    }

    fn save_temperature_override(
        &self,
        pawn: PawnId,
        target: Option<TemperatureRange>,
    ) -> Result<(), StoreError> {
        let mut overrides = self.overrides.lock().unwrap();
        match target {
            Some(target) => overrides.insert(pawn, target),
            None => overrides.remove(&pawn),
        };
        Ok(())
    }
}

/// Infusion provider with fixed per-stat deltas for every item.
#[derive(Default)]
pub struct Infusions(pub BTreeMap<StatId, f32>);

impl InfusionProvider for Infusions {
    fn is_infused(&self, _pawn: PawnId, _apparel: &Apparel, stat: &StatId) -> bool {
        self.0.contains_key(stat)
    }

    fn infusion_delta(&self, _pawn: PawnId, _apparel: &Apparel, stat: &StatId) -> f32 {
        self.0.get(stat).copied().unwrap_or(0.0)
    }
}

/// Every collaborator of one test scenario.
#[derive(Default)]
pub struct World {
    pub work: Work,
    pub climate: Climate,
    pub wardrobe: Wardrobe,
    pub store: Store,
}

impl World {
    pub fn env(&self) -> OutfitEnv<'_> {
        OutfitEnv::new(&self.work, &self.climate, &self.wardrobe, &self.store)
    }
}

pub fn shirt() -> ApparelDefinition {
    ApparelDefinition::new("Apparel_BasicShirt")
        .with_layers([ApparelLayer::OnSkin])
        .with_body_groups([BodyGroup::Torso, BodyGroup::Arms])
}

pub fn parka() -> ApparelDefinition {
    ApparelDefinition::new("Apparel_Parka")
        .with_layers([ApparelLayer::Shell])
        .with_body_groups([BodyGroup::Torso, BodyGroup::Arms])
        .with_stat_base(defs::INSULATION_COLD, -30.0)
        .with_stat_base(defs::INSULATION_HEAT, 3.0)
}

pub fn duster() -> ApparelDefinition {
    ApparelDefinition::new("Apparel_Duster")
        .with_layers([ApparelLayer::Shell])
        .with_body_groups([BodyGroup::Torso, BodyGroup::Legs])
        .with_stat_base(defs::INSULATION_COLD, -6.0)
        .with_stat_base(defs::INSULATION_HEAT, 12.0)
}

pub fn shield_belt() -> ApparelDefinition {
    ApparelDefinition::new("Apparel_ShieldBelt")
        .with_class(ApparelClass::Shield)
        .with_layers([ApparelLayer::Belt])
        .with_body_groups([BodyGroup::Waist])
}
