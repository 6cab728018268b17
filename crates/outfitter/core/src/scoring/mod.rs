//! Raw desirability score of one apparel item for one pawn.
//!
//! ```text
//! score = 1
//!       + Σ priority weight × (base value | offset ratio − 1 | infusion delta)
//!       + temperature_score / 10
//!       + 0.05 × protection_base
//! score = score × 0.15 + score × 0.85 × HIT_POINTS_CURVE(hp ratio)   (worn-down items)
//! ```
//!
//! Scoring is pure over its [`ScoringContext`]; nothing is cached between calls.

mod curve;

use std::collections::BTreeSet;

pub use curve::{HIT_POINTS_CURVE, ScoreCurve};

use crate::apparel::Apparel;
use crate::env::OutfitEnv;
use crate::ids::PawnId;
use crate::priority::StatPriority;
use crate::stats::{StatId, defs};
use crate::temperature::TemperatureState;

/// Share of the score that survives regardless of durability.
const DURABILITY_FLOOR: f32 = 0.15;
/// Weight of the protection baseline in the raw score.
const PROTECTION_FACTOR: f32 = 0.05;
/// Temperature contributions are divided by this.
const TEMPERATURE_DIVISOR: f32 = 10.0;

/// Everything a score depends on, borrowed for the duration of one evaluation.
#[derive(Clone, Copy)]
pub struct ScoringContext<'a> {
    pawn: PawnId,
    env: OutfitEnv<'a>,
    priorities: &'a [StatPriority],
    temperature: &'a TemperatureState,
}

impl<'a> ScoringContext<'a> {
    pub fn new(
        pawn: PawnId,
        env: OutfitEnv<'a>,
        priorities: &'a [StatPriority],
        temperature: &'a TemperatureState,
    ) -> Self {
        Self {
            pawn,
            env,
            priorities,
            temperature,
        }
    }

    pub fn pawn(&self) -> PawnId {
        self.pawn
    }

    pub fn env(&self) -> OutfitEnv<'a> {
        self.env
    }

    pub fn priorities(&self) -> &'a [StatPriority] {
        self.priorities
    }

    pub fn temperature(&self) -> &'a TemperatureState {
        self.temperature
    }
}

/// Raw score of `apparel` for the context's pawn.
pub fn score_apparel(ctx: &ScoringContext<'_>, apparel: &Apparel) -> f32 {
    let infusions = ctx.env.infusions();
    let infused: BTreeSet<&StatId> = ctx
        .priorities
        .iter()
        .map(|priority| &priority.stat)
        .filter(|stat| infusions.is_infused(ctx.pawn, apparel, stat))
        .collect();

    let def = &apparel.def;
    let mut score = 1.0;

    for priority in ctx.priorities {
        let stat = &priority.stat;
        if def.stat_bases.contains(stat) {
            score += apparel.stat_value(stat) * priority.weight;
        }
        if def.equipped_offsets.contains(stat) {
            score += (equipped_stat_value(apparel, stat) - 1.0) * priority.weight;
        }
        if infused.contains(stat) {
            score += infusions.infusion_delta(ctx.pawn, apparel, stat) * priority.weight;
        }
    }

    score += temperature_score(ctx, apparel);
    score += PROTECTION_FACTOR * def.protection_base();

    match apparel.durability() {
        Some(ratio) => apply_durability(score, ratio),
        None => score,
    }
}

/// Value of a stat while the item is worn, relative to the item's own base.
///
/// `(base + offset) / base`, or `base + offset` when the item has no base value.
pub fn equipped_stat_value(apparel: &Apparel, stat: &StatId) -> f32 {
    let base = apparel.stat_value(stat);
    let equipped = base + apparel.def.equipped_offsets.value(stat);
    if base != 0.0 { equipped / base } else { equipped }
}

/// Blends a score with the durability curve; full durability leaves it unchanged.
pub fn apply_durability(score: f32, ratio: f32) -> f32 {
    score * DURABILITY_FLOOR + score * (1.0 - DURABILITY_FLOOR) * HIT_POINTS_CURVE.evaluate(ratio)
}

/// Temperature contribution of `apparel`.
///
/// The pawn's current comfortable range is first stripped of the insulation of
/// every worn item the candidate would replace. A remaining gap to the target
/// rewards insulation towards it; insulation beyond an already closed gap is
/// penalized. Gaps are weighted by the pawn's temperature weights.
pub fn temperature_score(ctx: &ScoringContext<'_>, apparel: &Apparel) -> f32 {
    let oracle = ctx.env.apparel();
    let mut comfort = ctx.env.climate().comfortable_range(ctx.pawn);
    for worn in oracle.worn(ctx.pawn) {
        if oracle.mutually_exclusive(&worn, apparel) {
            let (cold, heat) = insulation(ctx, &worn);
            comfort.min -= cold;
            comfort.max -= heat;
        }
    }

    let target = ctx.temperature.target();
    let weight = ctx.temperature.weight();
    let (cold, heat) = insulation(ctx, apparel);

    let needed_cold = target.min - comfort.min;
    let needed_warmth = target.max - comfort.max;
    let mut offset = 0.0;

    if needed_cold < 0.0 {
        offset += -cold * weight.min.abs();
    } else if cold > needed_cold {
        offset += (needed_cold - cold) * weight.min.abs();
    }

    if needed_warmth > 0.0 {
        offset += heat * weight.max.abs();
    } else if heat < needed_warmth {
        offset += -(needed_warmth - heat) * weight.max.abs();
    }

    offset / TEMPERATURE_DIVISOR
}

/// Cold and heat insulation of an item, including infusion bonuses to the
/// comfortable temperature bounds.
fn insulation(ctx: &ScoringContext<'_>, apparel: &Apparel) -> (f32, f32) {
    let infusions = ctx.env.infusions();
    let cold = apparel.stat_value(&defs::INSULATION_COLD)
        + infusions.infusion_delta(ctx.pawn, apparel, &defs::COMFY_TEMPERATURE_MIN);
    let heat = apparel.stat_value(&defs::INSULATION_HEAT)
        + infusions.infusion_delta(ctx.pawn, apparel, &defs::COMFY_TEMPERATURE_MAX);
    (cold, heat)
}
