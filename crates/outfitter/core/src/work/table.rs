//! Hand-curated stat weights per work type.
//!
//! Each list names the apparel-affected stats that make a pawn better at the
//! work, with a relative importance. The pairs are balance data: the scoring
//! model was tuned against these exact values.

use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

use super::WorkType;
use crate::stats::{StatId, defs};

const RESEARCH: &[(StatId, f32)] = &[(defs::RESEARCH_SPEED, 1.0)];

const HAULING: &[(StatId, f32)] = &[(defs::MOVE_SPEED, 0.25), (defs::CARRYING_CAPACITY, 0.25)];

const CRAFTING: &[(StatId, f32)] = &[
    (defs::WORK_SPEED_GLOBAL, 0.125),
    (defs::STONECUTTING_SPEED, 0.5),
    (defs::SMELTING_SPEED, 0.5),
];

const ART: &[(StatId, f32)] = &[(defs::WORK_SPEED_GLOBAL, 0.125), (defs::SCULPTING_SPEED, 1.0)];

const TAILORING: &[(StatId, f32)] =
    &[(defs::WORK_SPEED_GLOBAL, 0.125), (defs::TAILORING_SPEED, 1.0)];

const SMITHING: &[(StatId, f32)] = &[(defs::WORK_SPEED_GLOBAL, 0.125), (defs::SMITHING_SPEED, 1.0)];

const PLANT_CUTTING: &[(StatId, f32)] = &[(defs::HARVEST_FAIL_CHANCE, -0.25)];

const GROWING: &[(StatId, f32)] = &[
    (defs::WORK_SPEED_GLOBAL, 0.125),
    (defs::MOVE_SPEED, 0.125),
    (defs::PLANT_WORK_SPEED, 1.0),
    (defs::HARVEST_FAIL_CHANCE, -0.75),
];

const MINING: &[(StatId, f32)] = &[
    (defs::WORK_SPEED_GLOBAL, 0.125),
    (defs::MOVE_SPEED, 0.0625),
    (defs::MINING_SPEED, 1.0),
    (defs::CARRYING_CAPACITY, 0.25),
];

const REPAIR: &[(StatId, f32)] = &[
    (defs::FIX_BROKEN_DOWN_BUILDING_FAIL_CHANCE, -1.0),
    (defs::WORK_SPEED_GLOBAL, 0.1),
    (defs::MOVE_SPEED, 0.0625),
];

const CONSTRUCTION: &[(StatId, f32)] = &[
    (defs::WORK_SPEED_GLOBAL, 0.1),
    (defs::MOVE_SPEED, 0.0625),
    (defs::CONSTRUCTION_SPEED, 1.0),
    (defs::SMOOTHING_SPEED, 0.5),
    (defs::CARRYING_CAPACITY, 0.25),
];

const HUNTING: &[(StatId, f32)] = &[
    (defs::MOVE_SPEED, 0.5),
    (defs::AIMING_DELAY_FACTOR, -0.75),
    (defs::SHOOTING_ACCURACY, 1.0),
];

const COOKING: &[(StatId, f32)] = &[
    (defs::MOVE_SPEED, 0.0625),
    (defs::WORK_SPEED_GLOBAL, 0.1),
    (defs::COOK_SPEED, 1.0),
    (defs::FOOD_POISON_CHANCE, -0.5),
    (defs::BREWING_SPEED, 0.75),
    (defs::BUTCHERY_FLESH_SPEED, 0.75),
    (defs::BUTCHERY_FLESH_EFFICIENCY, 0.5),
];

const HANDLING: &[(StatId, f32)] = &[
    (defs::MOVE_SPEED, 0.25),
    (defs::CARRYING_CAPACITY, 0.125),
    (defs::TAME_ANIMAL_CHANCE, 1.0),
    (defs::TRAIN_ANIMAL_CHANCE, 1.0),
];

const WARDEN: &[(StatId, f32)] = &[
    (defs::SOCIAL_IMPACT, 0.5),
    (defs::RECRUIT_PRISONER_CHANCE, 1.0),
    (defs::GIFT_IMPACT, 0.25),
    (defs::TRADE_PRICE_IMPROVEMENT, 0.5),
];

const DOCTOR: &[(StatId, f32)] = &[
    (defs::MEDICAL_OPERATION_SPEED, 0.75),
    (defs::SURGERY_SUCCESS_CHANCE, 0.75),
    (defs::BASE_HEALING_QUALITY, 1.0),
    (defs::HEALING_SPEED, 0.5),
];

/// Work type names already reported as unhandled during this process.
static UNHANDLED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

/// Returns the `(stat, weight)` contributions of a work type.
///
/// Cleaning, Flicker, Patient and Firefighter are known but contribute
/// nothing. [`WorkType::Other`] also contributes nothing and is reported once
/// per process through [`report_unhandled`].
pub fn contributions_for(work: &WorkType) -> &'static [(StatId, f32)] {
    match work {
        WorkType::Research => RESEARCH,
        WorkType::Hauling => HAULING,
        WorkType::Crafting => CRAFTING,
        WorkType::Art => ART,
        WorkType::Tailoring => TAILORING,
        WorkType::Smithing => SMITHING,
        WorkType::PlantCutting => PLANT_CUTTING,
        WorkType::Growing => GROWING,
        WorkType::Mining => MINING,
        WorkType::Repair => REPAIR,
        WorkType::Construction => CONSTRUCTION,
        WorkType::Hunting => HUNTING,
        WorkType::Cooking => COOKING,
        WorkType::Handling => HANDLING,
        WorkType::Warden => WARDEN,
        WorkType::Doctor => DOCTOR,
        WorkType::Cleaning | WorkType::Flicker | WorkType::Patient | WorkType::Firefighter => &[],
        WorkType::Other(name) => {
            report_unhandled(name);
            &[]
        }
    }
}

/// Emits the "work type not handled" warning the first time `name` is seen.
///
/// Returns true if this call emitted the warning.
pub fn report_unhandled(name: &str) -> bool {
    let mut seen = UNHANDLED.lock().unwrap_or_else(PoisonError::into_inner);
    if seen.contains(name) {
        return false;
    }
    seen.insert(name.to_owned());
    tracing::warn!(work_type = name, "work type not handled; it adds no stat priorities");
    true
}
