//! Seasonal energy efficiency ratio (SEER).

use super::{
    BinResult, CoolingConditions, InvalidParameters, Mode, RatingError, SeasonalPerformance,
    SpeedProfile, performance::SpeedLines,
};

/// Outdoor temperatures of the low and high cooling rating points, °F.
const RATING_TEMPERATURES: [f64; 2] = [82.0, 95.0];

/// Outdoor temperature at which the intermediate speed is evaluated, °F.
const INTERMEDIATE_TEMPERATURE: f64 = 87.0;

/// Outdoor temperature below which the building needs no cooling, °F.
const BALANCE_POINT: f64 = 65.0;

/// Outdoor design temperature, °F.
const DESIGN_TEMPERATURE: f64 = 95.0;

/// Computes the seasonal cooling performance of a speed profile.
///
/// The building load in each bin rises linearly from zero at 65 °F to the
/// 95 °F high-speed capacity divided by the sizing factor. Unmet load above
/// full capacity is not credited.
///
/// # Errors
///
/// Returns an error if the profile was not expanded for cooling, if the sizing
/// factor is not positive, or if a curve or the seasonal metric is not finite.
pub fn seasonal_cooling(
    profile: &SpeedProfile,
    conditions: &CoolingConditions,
) -> Result<SeasonalPerformance, RatingError> {
    if profile.mode() != Mode::Cooling {
        return Err(InvalidParameters::ProfileMode {
            expected: Mode::Cooling,
            found: profile.mode(),
        }
        .into());
    }

    let sizing_factor = conditions.sizing_factor;
    if !(sizing_factor.is_finite() && sizing_factor > 0.0) {
        return Err(InvalidParameters::SizingFactor(sizing_factor).into());
    }

    let lines = SpeedLines::new(profile, RATING_TEMPERATURES, INTERMEDIATE_TEMPERATURE)?;
    let design_load = lines.high(DESIGN_TEMPERATURE).capacity / sizing_factor;

    let bins = conditions
        .bins
        .bins()
        .iter()
        .map(|bin| {
            let load = ((bin.outdoor - BALANCE_POINT) / (DESIGN_TEMPERATURE - BALANCE_POINT)
                * design_load)
                .max(0.0);
            let staged = lines.meet(load, bin.outdoor)?;

            Ok(BinResult {
                outdoor: bin.outdoor,
                fraction: bin.fraction,
                load,
                delivered: staged.delivered,
                compressor_energy: staged.energy,
                backup_energy: 0.0,
                availability: 1.0,
                operation: staged.operation,
            })
        })
        .collect::<Result<Vec<_>, RatingError>>()?;

    SeasonalPerformance::from_bins(Mode::Cooling, bins)
}
