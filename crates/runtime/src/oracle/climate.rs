//! [`ClimateOracle`] combining map weather, pawn tolerances and worn insulation.
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use outfitter_core::{
    ApparelOracle, ClimateOracle, InfusionProvider, PawnId, TemperatureRange, defs,
};

use super::ApparelOracleImpl;

#[derive(Clone, Copy, Debug)]
struct Tolerance {
    base: TemperatureRange,
    trait_offsets: TemperatureRange,
}

/// ClimateOracle implementation for a single map.
///
/// A pawn's current comfortable range is its base range plus trait offsets
/// plus the insulation of everything it wears (cold insulation lowers the
/// minimum, heat insulation raises the maximum). Infusion comfy-temperature
/// deltas count as insulation of the item that carries them.
pub struct ClimateOracleImpl {
    outdoor: RwLock<f32>,
    default_base: TemperatureRange,
    pawns: RwLock<HashMap<PawnId, Tolerance>>,
    apparel: Arc<ApparelOracleImpl>,
    infusions: RwLock<Option<Arc<dyn InfusionProvider>>>,
}

impl ClimateOracleImpl {
    /// Base comfortable range of an unmodified human.
    pub const HUMAN_COMFORT: TemperatureRange = TemperatureRange::new(16.0, 26.0);

    pub fn new(outdoor: f32, apparel: Arc<ApparelOracleImpl>) -> Self {
        Self {
            outdoor: RwLock::new(outdoor),
            default_base: Self::HUMAN_COMFORT,
            pawns: RwLock::new(HashMap::new()),
            apparel,
            infusions: RwLock::new(None),
        }
    }

    pub fn set_infusions(&self, infusions: Option<Arc<dyn InfusionProvider>>) {
        *self.infusions.write().unwrap_or_else(PoisonError::into_inner) = infusions;
    }

    pub fn set_outdoor_temperature(&self, temperature: f32) {
        *self.outdoor.write().unwrap_or_else(PoisonError::into_inner) = temperature;
    }

    pub fn set_base_comfort(&self, pawn: PawnId, base: TemperatureRange) {
        self.write(pawn, |tolerance| tolerance.base = base);
    }

    pub fn set_trait_offsets(&self, pawn: PawnId, offsets: TemperatureRange) {
        self.write(pawn, |tolerance| tolerance.trait_offsets = offsets);
    }

    fn write(&self, pawn: PawnId, update: impl FnOnce(&mut Tolerance)) {
        let default = self.tolerance(pawn);
        let mut pawns = self.pawns.write().unwrap_or_else(PoisonError::into_inner);
        update(pawns.entry(pawn).or_insert(default));
    }

    fn tolerance(&self, pawn: PawnId) -> Tolerance {
        let pawns = self.pawns.read().unwrap_or_else(PoisonError::into_inner);
        pawns.get(&pawn).copied().unwrap_or(Tolerance {
            base: self.default_base,
            trait_offsets: TemperatureRange::new(0.0, 0.0),
        })
    }
}

impl ClimateOracle for ClimateOracleImpl {
    fn outdoor_temperature(&self) -> f32 {
        *self.outdoor.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn base_comfort_range(&self, pawn: PawnId) -> TemperatureRange {
        self.tolerance(pawn).base
    }

    fn trait_temperature_offsets(&self, pawn: PawnId) -> TemperatureRange {
        self.tolerance(pawn).trait_offsets
    }

    fn comfortable_range(&self, pawn: PawnId) -> TemperatureRange {
        let tolerance = self.tolerance(pawn);
        let infusions = self.infusions.read().unwrap_or_else(PoisonError::into_inner);
        let mut range = tolerance.base.offset_by(tolerance.trait_offsets);
        for worn in self.apparel.worn(pawn) {
            range.min += worn.stat_value(&defs::INSULATION_COLD);
            range.max += worn.stat_value(&defs::INSULATION_HEAT);
            if let Some(infusions) = infusions.as_ref() {
                range.min += infusions.infusion_delta(pawn, &worn, &defs::COMFY_TEMPERATURE_MIN);
                range.max += infusions.infusion_delta(pawn, &worn, &defs::COMFY_TEMPERATURE_MAX);
            }
        }
        range
    }
}
