//! [`ApparelOracle`] over a static definition catalog and per-pawn wardrobes.
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

use outfitter_core::{Apparel, ApparelDefinition, ApparelOracle, ItemId, PawnId, WeaponRange};

#[derive(Clone, Debug, Default)]
struct Wardrobe {
    worn: Vec<Apparel>,
    forced: HashSet<ItemId>,
    weapon: Option<WeaponRange>,
}

/// ApparelOracle implementation with static definitions and host-updated wardrobes
#[derive(Default)]
pub struct ApparelOracleImpl {
    definitions: BTreeMap<String, ApparelDefinition>,
    wardrobes: RwLock<HashMap<PawnId, Wardrobe>>,
}

impl ApparelOracleImpl {
    pub fn new(definitions: impl IntoIterator<Item = ApparelDefinition>) -> Self {
        let mut oracle = Self::default();
        for def in definitions {
            oracle.add_definition(def);
        }
        oracle
    }

    /// Add an apparel definition
    pub fn add_definition(&mut self, def: ApparelDefinition) {
        self.definitions.insert(def.def_name.clone(), def);
    }

    pub fn definition(&self, def_name: &str) -> Option<&ApparelDefinition> {
        self.definitions.get(def_name)
    }

    /// Creates an intact item of a known definition.
    pub fn make(&self, id: ItemId, def_name: &str) -> Option<Apparel> {
        self.definition(def_name).map(|def| Apparel::new(id, def.clone()))
    }

    /// Puts `apparel` on the pawn, taking off every worn item it conflicts with.
    ///
    /// Returns the removed items.
    pub fn wear(&self, pawn: PawnId, apparel: Apparel) -> Vec<Apparel> {
        self.write(pawn, |wardrobe| {
            let (removed, kept): (Vec<Apparel>, Vec<Apparel>) = wardrobe
                .worn
                .drain(..)
                .partition(|worn| worn.conflicts_with(&apparel));
            wardrobe.worn = kept;
            for item in &removed {
                wardrobe.forced.remove(&item.id);
            }
            wardrobe.worn.push(apparel);
            removed
        })
    }

    pub fn take_off(&self, pawn: PawnId, id: ItemId) -> Option<Apparel> {
        self.write(pawn, |wardrobe| {
            let index = wardrobe.worn.iter().position(|worn| worn.id == id)?;
            wardrobe.forced.remove(&id);
            Some(wardrobe.worn.remove(index))
        })
    }

    /// Marks a worn item as forced (or releases it).
    pub fn set_forced(&self, pawn: PawnId, id: ItemId, forced: bool) {
        self.write(pawn, |wardrobe| {
            if forced {
                wardrobe.forced.insert(id);
            } else {
                wardrobe.forced.remove(&id);
            }
        });
    }

    pub fn set_primary_weapon(&self, pawn: PawnId, weapon: Option<WeaponRange>) {
        self.write(pawn, |wardrobe| wardrobe.weapon = weapon);
    }

    fn write<T>(&self, pawn: PawnId, update: impl FnOnce(&mut Wardrobe) -> T) -> T {
        let mut wardrobes = self
            .wardrobes
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        update(wardrobes.entry(pawn).or_default())
    }

    fn read<T: Default>(&self, pawn: PawnId, view: impl FnOnce(&Wardrobe) -> T) -> T {
        let wardrobes = self
            .wardrobes
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        wardrobes.get(&pawn).map(view).unwrap_or_default()
    }
}

impl ApparelOracle for ApparelOracleImpl {
    fn worn(&self, pawn: PawnId) -> Vec<Apparel> {
        self.read(pawn, |wardrobe| wardrobe.worn.clone())
    }

    fn is_forced(&self, pawn: PawnId, apparel: &Apparel) -> bool {
        self.read(pawn, |wardrobe| wardrobe.forced.contains(&apparel.id))
    }

    fn primary_weapon(&self, pawn: PawnId) -> Option<WeaponRange> {
        self.read(pawn, |wardrobe| wardrobe.weapon)
    }

    fn definitions(&self) -> Vec<ApparelDefinition> {
        self.definitions.values().cloned().collect()
    }
}
