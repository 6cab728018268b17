use crate::apparel::Apparel;
use crate::ids::PawnId;
use crate::stats::StatId;

/// Extension point for externally sourced per-item stat bonuses ("infusions").
///
/// Every method has a neutral default, so a provider only overrides what it
/// contributes. Scoring asks [`is_infused`](Self::is_infused) once per stat and
/// call, then uses [`infusion_delta`](Self::infusion_delta) for flagged stats.
/// Deltas for `ComfyTemperatureMin`/`ComfyTemperatureMax` are added to an item's
/// cold/heat insulation regardless of the flag.
pub trait InfusionProvider: Send + Sync {
    fn is_infused(&self, _pawn: PawnId, _apparel: &Apparel, _stat: &StatId) -> bool {
        false
    }

    fn infusion_delta(&self, _pawn: PawnId, _apparel: &Apparel, _stat: &StatId) -> f32 {
        0.0
    }

    /// Stats that can be prioritized even though no apparel definition offsets them.
    fn additional_stats(&self) -> Vec<StatId> {
        Vec::new()
    }
}

/// Provider that contributes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInfusions;

impl InfusionProvider for NoInfusions {}
