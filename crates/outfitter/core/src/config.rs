/// Refresh cadence of the per-pawn caches.
///
/// The fixed constants of the scoring model live next to the code that uses
/// them; only the tick budgets are tunable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutfitConfig {
    /// Minimum ticks between two automatic stat-priority refreshes.
    pub stat_refresh_interval: u64,
    /// Minimum ticks between two target-temperature refreshes.
    pub temperature_refresh_interval: u64,
    /// Minimum ticks between two temperature-weight refreshes.
    pub weight_refresh_interval: u64,
}

impl OutfitConfig {
    /// Roughly one vanilla gear-check cycle.
    pub const DEFAULT_REFRESH_INTERVAL: u64 = 1900;

    pub fn new() -> Self {
        Self {
            stat_refresh_interval: Self::DEFAULT_REFRESH_INTERVAL,
            temperature_refresh_interval: Self::DEFAULT_REFRESH_INTERVAL,
            weight_refresh_interval: Self::DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Uses the same interval for every refresh.
    pub fn with_refresh_interval(interval: u64) -> Self {
        Self {
            stat_refresh_interval: interval,
            temperature_refresh_interval: interval,
            weight_refresh_interval: interval,
        }
    }
}

impl Default for OutfitConfig {
    fn default() -> Self {
        Self::new()
    }
}
