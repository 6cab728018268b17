use crate::apparel::{Apparel, ApparelDefinition, WeaponRange};
use crate::ids::PawnId;

/// Worn equipment, equip policy and the apparel def database.
pub trait ApparelOracle: Send + Sync {
    /// Apparel the pawn currently wears.
    fn worn(&self, pawn: PawnId) -> Vec<Apparel>;

    /// Whether the two items cannot be worn simultaneously.
    fn mutually_exclusive(&self, a: &Apparel, b: &Apparel) -> bool {
        a.conflicts_with(b)
    }

    /// Whether the item was forced onto the pawn and must not be dropped automatically.
    fn is_forced(&self, pawn: PawnId, apparel: &Apparel) -> bool;

    /// Range of the pawn's primary weapon, if one is equipped.
    fn primary_weapon(&self, pawn: PawnId) -> Option<WeaponRange>;

    /// Every apparel definition the game knows about.
    fn definitions(&self) -> Vec<ApparelDefinition>;
}
