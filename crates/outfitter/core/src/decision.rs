//! Replacement decisions: is a candidate worth more than what it displaces?
//!
//! A [`ScoringSession`] scores candidates against a snapshot of the pawn's
//! worn apparel. The snapshot is taken on first use and reused for every
//! candidate of the session, so worn items are scored once per pass.

use std::cell::OnceCell;

use crate::apparel::{Apparel, WeaponRange};
use crate::ids::ItemId;
use crate::scoring::{ScoringContext, score_apparel};

/// Multiplier for candidates that can be worn without removing anything.
pub const ADDITIVE_BONUS: f32 = 10.0;

/// Worn apparel and its raw scores at the time of the snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WornScoreSnapshot {
    items: Vec<(Apparel, f32)>,
}

impl WornScoreSnapshot {
    pub fn capture(ctx: &ScoringContext<'_>) -> Self {
        let items = ctx
            .env()
            .apparel()
            .worn(ctx.pawn())
            .into_iter()
            .map(|apparel| {
                let score = score_apparel(ctx, &apparel);
                (apparel, score)
            })
            .collect();
        Self { items }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Apparel, f32)> {
        self.items.iter().map(|(apparel, score)| (apparel, *score))
    }

    pub fn score_of(&self, id: ItemId) -> Option<f32> {
        self.iter()
            .find(|(apparel, _)| apparel.id == id)
            .map(|(_, score)| score)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Outcome of [`ScoringSession::evaluate_gain`].
#[derive(Clone, Debug, PartialEq)]
pub struct GainVerdict {
    pub accepted: bool,
    /// Net gain; [`GainVerdict::REJECTED_SCORE`] when rejected.
    pub score: f32,
    /// Worn items the candidate would replace.
    pub displaced: Vec<ItemId>,
}

impl GainVerdict {
    pub const REJECTED_SCORE: f32 = -1000.0;

    pub fn rejected() -> Self {
        Self {
            accepted: false,
            score: Self::REJECTED_SCORE,
            displaced: Vec::new(),
        }
    }

    /// Accepted with a positive net gain.
    pub fn is_improvement(&self) -> bool {
        self.accepted && self.score > 0.0
    }
}

/// One evaluation pass for one pawn.
pub struct ScoringSession<'a> {
    ctx: ScoringContext<'a>,
    worn: OnceCell<WornScoreSnapshot>,
}

impl<'a> ScoringSession<'a> {
    pub fn new(ctx: ScoringContext<'a>) -> Self {
        Self {
            ctx,
            worn: OnceCell::new(),
        }
    }

    pub fn context(&self) -> &ScoringContext<'a> {
        &self.ctx
    }

    /// Raw score of one item.
    pub fn score(&self, apparel: &Apparel) -> f32 {
        score_apparel(&self.ctx, apparel)
    }

    /// Worn apparel scores, captured on first call.
    pub fn worn_scores(&self) -> &WornScoreSnapshot {
        self.worn.get_or_init(|| WornScoreSnapshot::capture(&self.ctx))
    }

    /// Net gain of putting on `candidate`.
    ///
    /// - A shield is only eligible with a melee primary weapon.
    /// - A forced worn item in the way vetoes the candidate.
    /// - Replaced items' snapshot scores are subtracted; a candidate that
    ///   replaces nothing gets [`ADDITIVE_BONUS`].
    pub fn evaluate_gain(&self, candidate: &Apparel) -> GainVerdict {
        let pawn = self.ctx.pawn();
        let oracle = self.ctx.env().apparel();

        if candidate.def.is_shield() && oracle.primary_weapon(pawn) != Some(WeaponRange::Melee) {
            tracing::trace!(%pawn, item = %candidate.id, "shield without melee weapon rejected");
            return GainVerdict::rejected();
        }

        let mut score = self.score(candidate);
        let mut displaced = Vec::new();

        for (worn, worn_score) in self.worn_scores().iter() {
            if !oracle.mutually_exclusive(worn, candidate) {
                continue;
            }
            if oracle.is_forced(pawn, worn) {
                tracing::trace!(
                    %pawn,
                    item = %candidate.id,
                    forced = %worn.id,
                    "candidate blocked by forced apparel"
                );
                return GainVerdict::rejected();
            }
            score -= worn_score;
            displaced.push(worn.id);
        }

        if displaced.is_empty() {
            score *= ADDITIVE_BONUS;
        }

        tracing::debug!(
            %pawn,
            item = %candidate.id,
            score,
            displaced = ?displaced,
            "apparel gain evaluated"
        );

        GainVerdict {
            accepted: true,
            score,
            displaced,
        }
    }

    /// The candidate with the highest positive accepted gain.
    pub fn best_candidate<'c>(
        &self,
        candidates: &'c [Apparel],
    ) -> Option<(&'c Apparel, GainVerdict)> {
        let mut best: Option<(&'c Apparel, GainVerdict)> = None;
        for candidate in candidates {
            let verdict = self.evaluate_gain(candidate);
            if !verdict.is_improvement() {
                continue;
            }
            if best
                .as_ref()
                .is_none_or(|(_, current)| verdict.score > current.score)
            {
                best = Some((candidate, verdict));
            }
        }

        if let Some((apparel, verdict)) = &best {
            tracing::debug!(
                pawn = %self.ctx.pawn(),
                item = %apparel.id,
                def = %apparel.def.def_name,
                gain = verdict.score,
                "best apparel candidate"
            );
        }
        best
    }
}
