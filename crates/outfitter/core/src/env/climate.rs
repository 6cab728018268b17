use crate::ids::PawnId;
use crate::temperature::TemperatureRange;

/// Environment and body-temperature queries.
pub trait ClimateOracle: Send + Sync {
    /// Current outdoor temperature of the pawn's map.
    fn outdoor_temperature(&self) -> f32;

    /// Comfortable range of the pawn's race, without apparel or traits.
    fn base_comfort_range(&self, pawn: PawnId) -> TemperatureRange;

    /// Sum of trait offsets to the comfortable minimum and maximum.
    fn trait_temperature_offsets(&self, _pawn: PawnId) -> TemperatureRange {
        TemperatureRange::new(0.0, 0.0)
    }

    /// Comfortable range the pawn has right now, including worn apparel.
    fn comfortable_range(&self, pawn: PawnId) -> TemperatureRange;
}
