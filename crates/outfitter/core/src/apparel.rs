//! Apparel definitions and worn/candidate apparel items.
//!
//! # Design: Definition + Instance
//!
//! - [`ApparelDefinition`] holds what every copy of an item shares: layers,
//!   covered body groups, stat bases and equipped offsets.
//! - [`Apparel`] is one concrete item: its id, its definition and its current
//!   durability.

use crate::ids::ItemId;
use crate::stats::{StatId, StatTable, defs};

/// Clothing layer an apparel occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ApparelLayer {
    OnSkin,
    Middle,
    Shell,
    Belt,
    Overhead,
}

/// Body part group an apparel covers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum BodyGroup {
    Torso,
    Shoulders,
    Arms,
    Hands,
    Waist,
    Legs,
    Feet,
    FullHead,
    UpperHead,
    Eyes,
}

/// Apparel classes with special equip rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApparelClass {
    #[default]
    Clothing,
    /// Personal shield belt; only useful alongside a melee primary weapon.
    Shield,
}

/// Shared definition of an apparel item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApparelDefinition {
    pub def_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class: ApparelClass,
    #[cfg_attr(feature = "serde", serde(default))]
    pub layers: Vec<ApparelLayer>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub body_groups: Vec<BodyGroup>,
    /// Stats the item itself has (armor, insulation, ...).
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_bases: StatTable,
    /// Offsets applied to the wearer's stats while equipped (move speed, ...).
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped_offsets: StatTable,
    /// Whether the item wears down; worn-down items are scored lower.
    #[cfg_attr(feature = "serde", serde(default = "uses_hit_points_default"))]
    pub uses_hit_points: bool,
}

#[cfg(feature = "serde")]
fn uses_hit_points_default() -> bool {
    true
}

impl ApparelDefinition {
    pub fn new(def_name: impl Into<String>) -> Self {
        Self {
            def_name: def_name.into(),
            class: ApparelClass::Clothing,
            layers: Vec::new(),
            body_groups: Vec::new(),
            stat_bases: StatTable::new(),
            equipped_offsets: StatTable::new(),
            uses_hit_points: true,
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: ApparelClass) -> Self {
        self.class = class;
        self
    }

    #[must_use]
    pub fn with_layers(mut self, layers: impl IntoIterator<Item = ApparelLayer>) -> Self {
        self.layers = layers.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_body_groups(mut self, groups: impl IntoIterator<Item = BodyGroup>) -> Self {
        self.body_groups = groups.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_stat_base(mut self, stat: StatId, value: f32) -> Self {
        self.stat_bases.insert(stat, value);
        self
    }

    #[must_use]
    pub fn with_equipped_offset(mut self, stat: StatId, value: f32) -> Self {
        self.equipped_offsets.insert(stat, value);
        self
    }

    #[must_use]
    pub fn without_hit_points(mut self) -> Self {
        self.uses_hit_points = false;
        self
    }

    pub fn is_shield(&self) -> bool {
        self.class == ApparelClass::Shield
    }

    /// Two definitions cannot be worn together when they share a layer and
    /// cover at least one common body group.
    pub fn can_wear_with(&self, other: &ApparelDefinition) -> bool {
        let shares_layer = self.layers.iter().any(|layer| other.layers.contains(layer));
        let shares_group = self
            .body_groups
            .iter()
            .any(|group| other.body_groups.contains(group));
        !(shares_layer && shares_group)
    }

    /// Baseline protection value: `1 + 1.25 × (sharp + 0.75 × blunt)`.
    pub fn protection_base(&self) -> f32 {
        let sharp = self.stat_bases.value(&defs::ARMOR_RATING_SHARP);
        let blunt = self.stat_bases.value(&defs::ARMOR_RATING_BLUNT);
        1.0 + 1.25 * (sharp + 0.75 * blunt)
    }
}

/// Current and maximum hit points of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitPoints {
    pub current: u32,
    pub max: u32,
}

impl HitPoints {
    pub fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    /// Fraction of durability left in `[0, 1]`; an item without a maximum counts as intact.
    pub fn ratio(self) -> f32 {
        if self.max == 0 {
            return 1.0;
        }
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }
}

/// One concrete apparel item, either worn or considered for wearing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Apparel {
    pub id: ItemId,
    pub def: ApparelDefinition,
    pub hit_points: HitPoints,
}

impl Apparel {
    /// Creates an item at full durability (100 hit points).
    pub fn new(id: ItemId, def: ApparelDefinition) -> Self {
        Self {
            id,
            def,
            hit_points: HitPoints::new(100, 100),
        }
    }

    #[must_use]
    pub fn with_hit_points(mut self, current: u32, max: u32) -> Self {
        self.hit_points = HitPoints::new(current, max);
        self
    }

    /// Value of a stat on the item itself; zero when the definition lacks it.
    pub fn stat_value(&self, stat: &StatId) -> f32 {
        self.def.stat_bases.value(stat)
    }

    /// Durability ratio, or `None` when the definition does not wear down.
    pub fn durability(&self) -> Option<f32> {
        self.def.uses_hit_points.then(|| self.hit_points.ratio())
    }

    /// Whether the two items cannot be worn at the same time.
    pub fn conflicts_with(&self, other: &Apparel) -> bool {
        self.id == other.id || !self.def.can_wear_with(&other.def)
    }
}

/// Reach of a wielded primary weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponRange {
    Melee,
    Ranged,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parka() -> ApparelDefinition {
        ApparelDefinition::new("Parka")
            .with_layers([ApparelLayer::Shell])
            .with_body_groups([BodyGroup::Torso, BodyGroup::Arms])
    }

    #[test]
    fn same_layer_and_group_conflict() {
        let duster = ApparelDefinition::new("Duster")
            .with_layers([ApparelLayer::Shell])
            .with_body_groups([BodyGroup::Torso, BodyGroup::Legs]);
        assert!(!parka().can_wear_with(&duster));
    }

    #[test]
    fn different_layers_stack() {
        let shirt = ApparelDefinition::new("Shirt")
            .with_layers([ApparelLayer::OnSkin])
            .with_body_groups([BodyGroup::Torso, BodyGroup::Arms]);
        assert!(parka().can_wear_with(&shirt));
    }

    #[test]
    fn same_layer_different_groups_stack() {
        let helmet = ApparelDefinition::new("Helmet")
            .with_layers([ApparelLayer::Overhead, ApparelLayer::Shell])
            .with_body_groups([BodyGroup::UpperHead]);
        assert!(parka().can_wear_with(&helmet));
    }

    #[test]
    fn protection_base_formula() {
        let vest = ApparelDefinition::new("FlakVest")
            .with_stat_base(defs::ARMOR_RATING_SHARP, 0.4)
            .with_stat_base(defs::ARMOR_RATING_BLUNT, 0.2);
        // 1 + 1.25 * (0.4 + 0.15)
        assert!((vest.protection_base() - 1.6875).abs() < 1e-6);
        assert_eq!(ApparelDefinition::new("Tuque").protection_base(), 1.0);
    }

    #[test]
    fn durability_only_for_wearing_items() {
        let worn = Apparel::new(ItemId(1), parka()).with_hit_points(25, 100);
        assert_eq!(worn.durability(), Some(0.25));

        let ring = Apparel::new(ItemId(2), parka().without_hit_points());
        assert_eq!(ring.durability(), None);

        assert_eq!(HitPoints::new(5, 0).ratio(), 1.0);
    }

    #[test]
    fn an_item_conflicts_with_itself() {
        let shirt = ApparelDefinition::new("Shirt");
        let item = Apparel::new(ItemId(7), shirt);
        assert!(item.conflicts_with(&item.clone()));
    }
}
