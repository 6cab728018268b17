//! Temperature model: what a pawn should be able to endure, and how much it cares.
//!
//! The model keeps three ranges per pawn:
//!
//! - **target**: the comfort band the pawn should reach with its apparel,
//!   derived from the outdoor temperature (or set manually);
//! - **real comfort**: the pawn's own tolerance without apparel, including
//!   trait offsets, computed once;
//! - **weight**: how strongly cold (`min`, ≤ 0) and heat (`max`, ≥ 0) gaps
//!   between the two influence apparel scores.

use crate::config::OutfitConfig;
use crate::env::ClimateOracle;
use crate::error::{OutfitError, Result};
use crate::ids::{PawnId, Tick};

/// Closed temperature interval in degrees Celsius.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureRange {
    pub min: f32,
    pub max: f32,
}

impl TemperatureRange {
    /// Absolute bound every computed range is clamped to.
    pub const BOUNDS: Self = Self {
        min: -100.0,
        max: 100.0,
    };

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamps both ends into [`Self::BOUNDS`].
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            min: self.min.clamp(Self::BOUNDS.min, Self::BOUNDS.max),
            max: self.max.clamp(Self::BOUNDS.min, Self::BOUNDS.max),
        }
    }

    /// Component-wise sum, used to apply offsets.
    #[must_use]
    pub fn offset_by(self, offset: TemperatureRange) -> Self {
        Self {
            min: self.min + offset.min,
            max: self.max + offset.max,
        }
    }
}

/// Which parts of [`TemperatureState::update_if_stale`] ignore the tick budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForceRefresh {
    pub target: bool,
    pub weight: bool,
}

impl ForceRefresh {
    pub const NONE: Self = Self {
        target: false,
        weight: false,
    };
    pub const WEIGHT: Self = Self {
        target: false,
        weight: true,
    };
    pub const ALL: Self = Self {
        target: true,
        weight: true,
    };
}

/// Per-pawn temperature state.
#[derive(Clone, Debug, PartialEq)]
pub struct TemperatureState {
    target: TemperatureRange,
    target_override: bool,
    real_comfort: Option<TemperatureRange>,
    weight: TemperatureRange,
    last_target_update: Option<Tick>,
    last_weight_update: Option<Tick>,
}

impl TemperatureState {
    /// Half width of the automatic target band around the outdoor temperature.
    pub const TARGET_HALF_BAND: f32 = 7.5;
    /// The target minimum never sits above this.
    pub const TARGET_MIN_CEILING: f32 = 10.0;
    /// The target maximum never sits below this.
    pub const TARGET_MAX_FLOOR: f32 = 20.0;
    /// Degrees of gap that make one unit of weight.
    pub const WEIGHT_DIVISOR: f32 = 25.0;

    pub fn new() -> Self {
        Self {
            target: TemperatureRange::new(Self::TARGET_MIN_CEILING, Self::TARGET_MAX_FLOOR),
            target_override: false,
            real_comfort: None,
            weight: TemperatureRange::new(0.0, 0.0),
            last_target_update: None,
            last_weight_update: None,
        }
    }

    /// Restores a state whose target was set manually in an earlier session.
    pub fn with_override(target: Option<TemperatureRange>) -> Self {
        let mut state = Self::new();
        if let Some(target) = target {
            state.target = target.clamped();
            state.target_override = true;
        }
        state
    }

    pub fn target(&self) -> TemperatureRange {
        self.target
    }

    pub fn weight(&self) -> TemperatureRange {
        self.weight
    }

    pub fn real_comfort(&self) -> Option<TemperatureRange> {
        self.real_comfort
    }

    pub fn has_override(&self) -> bool {
        self.target_override
    }

    /// Automatic target band for an outdoor temperature.
    ///
    /// `[t - 7.5, t + 7.5]` clamped to [`TemperatureRange::BOUNDS`]; a minimum
    /// at or above 10 becomes 10 and a maximum at or below 20 becomes 20, so
    /// the band always covers the usual indoor range.
    pub fn compute_target(outdoor: f32) -> TemperatureRange {
        let mut target = TemperatureRange::new(
            outdoor - Self::TARGET_HALF_BAND,
            outdoor + Self::TARGET_HALF_BAND,
        )
        .clamped();

        if target.min >= Self::TARGET_MIN_CEILING {
            target.min = Self::TARGET_MIN_CEILING;
        }
        if target.max <= Self::TARGET_MAX_FLOOR {
            target.max = Self::TARGET_MAX_FLOOR;
        }
        target
    }

    /// Weight range for a target and the pawn's real comfort.
    ///
    /// `min` is `-|target.min - real.min| / 25` when the target reaches below
    /// the pawn's tolerance, otherwise 0; `max` is the mirrored positive value
    /// for heat.
    pub fn compute_weight(target: TemperatureRange, real: TemperatureRange) -> TemperatureRange {
        let mut weight = TemperatureRange::new(0.0, 0.0);
        if target.min < real.min {
            weight.min = -((target.min - real.min) / Self::WEIGHT_DIVISOR).abs();
        }
        if target.max > real.max {
            weight.max = ((target.max - real.max) / Self::WEIGHT_DIVISOR).abs();
        }
        weight
    }

    /// Refreshes whatever is stale.
    ///
    /// - The target is recomputed once its tick budget passed (or when forced),
    ///   unless a manual override is set.
    /// - The real comfort range is computed on first use only.
    /// - The weight is recomputed once its tick budget passed (or when forced).
    pub fn update_if_stale(
        &mut self,
        pawn: PawnId,
        climate: &dyn ClimateOracle,
        now: Tick,
        config: &OutfitConfig,
        force: ForceRefresh,
    ) {
        let target_stale = now.is_past_interval(
            self.last_target_update,
            config.temperature_refresh_interval,
        );
        if (target_stale || force.target) && !self.target_override {
            let target = Self::compute_target(climate.outdoor_temperature());
            if target != self.target {
                tracing::debug!(
                    %pawn,
                    min = target.min,
                    max = target.max,
                    "target temperatures changed"
                );
            }
            self.target = target;
            self.last_target_update = Some(now);
        }

        let real = match self.real_comfort {
            Some(real) => real,
            None => {
                let real = climate
                    .base_comfort_range(pawn)
                    .offset_by(climate.trait_temperature_offsets(pawn));
                self.real_comfort = Some(real);
                real
            }
        };

        let weight_stale =
            now.is_past_interval(self.last_weight_update, config.weight_refresh_interval);
        if weight_stale || force.weight {
            self.weight = Self::compute_weight(self.target, real);
            self.last_weight_update = Some(now);
        }
    }

    /// Sets a manual target, which suppresses automatic target refreshes.
    ///
    /// The weight is recomputed on the next update.
    pub fn set_target(&mut self, target: TemperatureRange) -> Result<()> {
        if !target.min.is_finite() || !target.max.is_finite() || target.min > target.max {
            return Err(OutfitError::InvalidTemperatureRange {
                min: target.min,
                max: target.max,
            });
        }
        self.target = target.clamped();
        self.target_override = true;
        self.last_weight_update = None;
        Ok(())
    }

    /// Returns to automatic targets; both target and weight refresh on the next update.
    pub fn clear_override(&mut self) {
        self.target_override = false;
        self.last_target_update = None;
        self.last_weight_update = None;
    }

    /// Forgets the real comfort snapshot (e.g. after the pawn gained a trait).
    pub fn invalidate_real_comfort(&mut self) {
        self.real_comfort = None;
        self.last_weight_update = None;
    }
}

impl Default for TemperatureState {
    fn default() -> Self {
        Self::new()
    }
}
