//! Stat identifiers and per-item stat tables.
//!
//! A stat is a named numeric attribute of a pawn or an item ("MoveSpeed",
//! "ArmorRating_Sharp"). Stats are identified by value, never by reference:
//! two [`StatId`]s naming the same stat compare and hash equal no matter where
//! they were created, so they can key maps that outlive any definition database.

pub mod defs;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Immutable, comparable identifier of a stat.
///
/// Well-known stats are `const` values in [`defs`]; names coming from content
/// files or a persisted store are owned.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StatId(Cow<'static, str>);

impl StatId {
    /// Creates an identifier from a static def name (usable in `const` context).
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates an identifier from an owned def name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Stat values declared by an apparel definition, keyed by stat.
///
/// Used for both the static stat bases (armor, insulation) and the equipped
/// offsets (move speed, work speeds). Stats absent from the table contribute
/// nothing; callers never need to distinguish "absent" from an error.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StatTable(BTreeMap<StatId, f32>);

impl StatTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, stat: StatId, value: f32) -> Self {
        self.0.insert(stat, value);
        self
    }

    pub fn insert(&mut self, stat: StatId, value: f32) {
        self.0.insert(stat, value);
    }

    /// Declared value, if the table mentions the stat at all.
    pub fn get(&self, stat: &StatId) -> Option<f32> {
        self.0.get(stat).copied()
    }

    /// Declared value, or zero for stats the table does not mention.
    pub fn value(&self, stat: &StatId) -> f32 {
        self.get(stat).unwrap_or(0.0)
    }

    pub fn contains(&self, stat: &StatId) -> bool {
        self.0.contains_key(stat)
    }

    pub fn stats(&self) -> impl Iterator<Item = &StatId> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StatId, f32)> {
        self.0.iter().map(|(stat, value)| (stat, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StatId, f32)> for StatTable {
    fn from_iter<I: IntoIterator<Item = (StatId, f32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_ids_are_interchangeable() {
        let owned = StatId::new("MoveSpeed");
        assert_eq!(owned, defs::MOVE_SPEED);

        let mut table = StatTable::new();
        table.insert(owned, 0.5);
        assert_eq!(table.get(&defs::MOVE_SPEED), Some(0.5));
    }

    #[test]
    fn missing_stats_read_as_zero() {
        let table = StatTable::new().with(defs::ARMOR_RATING_SHARP, 0.4);
        assert_eq!(table.value(&defs::ARMOR_RATING_BLUNT), 0.0);
        assert_eq!(table.get(&defs::ARMOR_RATING_BLUNT), None);
        assert!(table.contains(&defs::ARMOR_RATING_SHARP));
    }
}
