//! Work types and the priorities a pawn assigns to them.
//!
//! Active work drives the automatic stat priorities: every work type maps to a
//! fixed list of stat weights ([`contributions_for`]) that is scaled by how
//! urgently the pawn performs that work ([`WorkPriority::multiplier`]).

mod table;

use std::fmt;

pub use table::{contributions_for, report_unhandled};

/// Work type a pawn can be assigned to, named after the host's work type defs.
///
/// Parsing is case-insensitive. Names outside the known set parse to
/// [`WorkType::Other`]; such work contributes no stat weights.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum WorkType {
    Research,
    Cleaning,
    Hauling,
    Crafting,
    Art,
    Tailoring,
    Smithing,
    PlantCutting,
    Growing,
    Mining,
    Repair,
    Construction,
    Hunting,
    Cooking,
    Handling,
    Warden,
    Flicker,
    Patient,
    Firefighter,
    Doctor,
    /// A work type this table does not know about (e.g. added by another mod).
    #[strum(default)]
    Other(String),
}

impl WorkType {
    /// Def name of the work type.
    pub fn name(&self) -> &str {
        match self {
            WorkType::Other(name) => name,
            known => known.as_ref(),
        }
    }

    /// Parses a def name, falling back to [`WorkType::Other`].
    pub fn from_def_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| WorkType::Other(name.to_owned()))
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Priority rank a pawn gives to an active work type (1 = most urgent).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkPriority(pub u8);

impl WorkPriority {
    pub const HIGHEST: Self = Self(1);
    pub const LOWEST: Self = Self(4);

    /// Scale applied to a work type's stat weights.
    ///
    /// Rank 1 → 1.0, 2 → 0.5, 3 → 0.25; rank 4 and any unmapped rank → 0.1.
    pub const fn multiplier(self) -> f32 {
        match self.0 {
            1 => 1.0,
            2 => 0.5,
            3 => 0.25,
            _ => 0.1,
        }
    }
}

/// One active work assignment of a pawn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkAssignment {
    pub work: WorkType,
    pub priority: WorkPriority,
}

impl WorkAssignment {
    pub fn new(work: WorkType, priority: u8) -> Self {
        Self {
            work,
            priority: WorkPriority(priority),
        }
    }
}
