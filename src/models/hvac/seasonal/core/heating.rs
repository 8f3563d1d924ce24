//! Heating seasonal performance factor (HSPF).

use super::{
    BTU_PER_WATT_HOUR, BinResult, HeatingConditions, InvalidParameters, Mode, Operation,
    RatingError, SeasonalPerformance, SpeedProfile, performance::SpeedLines,
};

/// Outdoor temperatures of the low and high heating rating points, °F.
const RATING_TEMPERATURES: [f64; 2] = [17.0, 47.0];

/// Outdoor temperature at which the intermediate speed is evaluated, °F.
const INTERMEDIATE_TEMPERATURE: f64 = 35.0;

/// Outdoor temperature above which the building needs no heating, °F.
const BALANCE_POINT: f64 = 65.0;

/// Outdoor design temperature of the climate region, °F.
const DESIGN_TEMPERATURE: f64 = 5.0;

/// Computes the seasonal heating performance of a speed profile.
///
/// The design heating requirement scales the 47 °F high-speed capacity to the
/// region's design temperature difference. The building load in each bin
/// falls linearly from its design value at 5 °F to zero at 65 °F.
///
/// Where the compressor is locked out, or the high speed cannot beat
/// resistance heat, resistance backup covers the load. Backup energy counts
/// against the HSPF.
///
/// # Errors
///
/// Returns an error if the profile was not expanded for heating, if the load
/// factor is not positive, if a curve or the seasonal metric is not finite, or
/// if the compressor would run where its low speed has no positive capacity.
pub fn seasonal_heating(
    profile: &SpeedProfile,
    conditions: &HeatingConditions,
) -> Result<SeasonalPerformance, RatingError> {
    if profile.mode() != Mode::Heating {
        return Err(InvalidParameters::ProfileMode {
            expected: Mode::Heating,
            found: profile.mode(),
        }
        .into());
    }

    let load_factor = conditions.load_factor;
    if !(load_factor.is_finite() && load_factor > 0.0) {
        return Err(InvalidParameters::LoadFactor(load_factor).into());
    }

    let lines = SpeedLines::new(profile, RATING_TEMPERATURES, INTERMEDIATE_TEMPERATURE)?;

    let [_, rated] = RATING_TEMPERATURES;
    let design_heating_requirement =
        lines.high(rated).capacity * (BALANCE_POINT - DESIGN_TEMPERATURE) / 60.0;

    let bins = conditions
        .bins
        .bins()
        .iter()
        .map(|bin| {
            let t = bin.outdoor;
            let load = ((BALANCE_POINT - t) / (BALANCE_POINT - DESIGN_TEMPERATURE)
                * load_factor
                * design_heating_requirement)
                .max(0.0);

            let availability = if lines.high(t).cop() < 1.0 {
                0.0
            } else {
                conditions.lockout.availability(t)
            };

            if availability <= 0.0 {
                return Ok(BinResult {
                    outdoor: t,
                    fraction: bin.fraction,
                    load,
                    delivered: 0.0,
                    compressor_energy: 0.0,
                    backup_energy: load / BTU_PER_WATT_HOUR,
                    availability,
                    operation: Operation::LockedOut,
                });
            }

            let staged = lines.meet(load, t)?;
            let delivered = staged.delivered * availability;

            Ok(BinResult {
                outdoor: t,
                fraction: bin.fraction,
                load,
                delivered,
                compressor_energy: staged.energy * availability,
                backup_energy: (load - delivered) / BTU_PER_WATT_HOUR,
                availability,
                operation: staged.operation,
            })
        })
        .collect::<Result<Vec<_>, RatingError>>()?;

    SeasonalPerformance::from_bins(Mode::Heating, bins)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

    use crate::models::hvac::seasonal::core::{
        Bin, BinDistribution, Degradation, Equipment, Lockout, SpeedProfile, Staging,
        test_support,
    };

    static EXTREME_BINS: [Bin; 3] = [
        Bin::new(47.0, 0.4),
        Bin::new(0.0, 0.4),
        Bin::new(-60.0, 0.2),
    ];

    fn extreme_conditions() -> HeatingConditions {
        HeatingConditions {
            bins: BinDistribution::new(&EXTREME_BINS),
            ..HeatingConditions::default()
        }
    }

    fn profile(equipment: &Equipment, cop: f64, cd: f64) -> SpeedProfile {
        let table = equipment.speed_table(Mode::Heating).unwrap();
        SpeedProfile::expand(
            &table,
            Mode::Heating,
            cop,
            test_support::psc_fan(),
            Degradation::new(cd).unwrap(),
        )
        .unwrap()
    }

    fn hspf(equipment: &Equipment, cop: f64, cd: f64) -> f64 {
        seasonal_heating(&profile(equipment, cop, cd), &HeatingConditions::default())
            .unwrap()
            .metric
    }

    #[test]
    fn coldest_bin_runs_on_backup_only() {
        let profile = profile(&Equipment::HeatPump(Staging::TwoSpeed), 3.5, 0.11);
        let performance = seasonal_heating(&profile, &HeatingConditions::default()).unwrap();

        let coldest = performance.bins.last().unwrap();
        assert_relative_eq!(coldest.outdoor, -8.0);
        assert_relative_eq!(coldest.availability, 0.0);
        assert_eq!(coldest.operation, Operation::LockedOut);
        assert_relative_eq!(coldest.compressor_energy, 0.0);
        assert_relative_eq!(coldest.delivered, 0.0);
        assert_relative_eq!(
            coldest.backup_energy,
            coldest.load / BTU_PER_WATT_HOUR,
            epsilon = 1e-15
        );
    }

    #[test]
    fn cut_in_band_runs_half_the_time() {
        let profile = profile(&Equipment::HeatPump(Staging::SingleSpeed), 3.3, 0.11);
        let performance = seasonal_heating(&profile, &HeatingConditions::default()).unwrap();

        let bin = performance
            .bins
            .iter()
            .find(|bin| bin.outdoor == 12.0)
            .unwrap();
        assert_relative_eq!(bin.availability, 0.5);
        assert!(bin.backup_energy > 0.0);
        assert!(bin.compressor_energy > 0.0);
    }

    #[test]
    fn mild_bins_need_no_backup() {
        let profile = profile(&Equipment::HeatPump(Staging::VariableSpeed), 3.0, 0.24);
        let performance = seasonal_heating(&profile, &HeatingConditions::default()).unwrap();

        for bin in performance.bins.iter().filter(|bin| bin.outdoor >= 42.0) {
            assert_relative_eq!(bin.backup_energy, 0.0, epsilon = 1e-15);
            assert_relative_eq!(bin.delivered, bin.load, epsilon = 1e-15);
        }
    }

    #[test]
    fn lower_lockout_raises_hspf() {
        let profile = profile(&Equipment::MiniSplitHeatPump(Default::default()), 3.5, 0.25);
        let default = seasonal_heating(&profile, &HeatingConditions::default())
            .unwrap()
            .metric;

        let fahrenheit = |t| ThermodynamicTemperature::new::<degree_fahrenheit>(t);
        let conditions = HeatingConditions {
            lockout: Lockout::new(fahrenheit(-15.0), fahrenheit(-10.0)).unwrap(),
            ..HeatingConditions::default()
        };
        let extended = seasonal_heating(&profile, &conditions).unwrap().metric;

        assert!(extended > default);
    }

    #[test]
    fn hspf_increases_with_rated_cop() {
        for (equipment, cd) in [
            (Equipment::HeatPump(Staging::SingleSpeed), 0.11),
            (Equipment::HeatPump(Staging::TwoSpeed), 0.11),
            (Equipment::HeatPump(Staging::VariableSpeed), 0.24),
            (Equipment::MiniSplitHeatPump(Default::default()), 0.25),
        ] {
            let values: Vec<f64> = [2.0, 2.5, 3.0, 3.5, 4.0]
                .into_iter()
                .map(|cop| hspf(&equipment, cop, cd))
                .collect();
            assert!(
                values.windows(2).all(|w| w[1] > w[0]),
                "{equipment}: {values:?}"
            );
        }
    }

    #[test]
    fn poor_heat_pump_defers_to_resistance() {
        // Flat curves hold the net COP at 0.9 in every bin.
        let profile = test_support::flat_profile(Mode::Heating, &[1.0], &[1.0], 0.9, 0.1);
        let performance = seasonal_heating(&profile, &HeatingConditions::default()).unwrap();

        assert!(performance.bins.iter().all(|bin| bin.availability == 0.0));
        assert_relative_eq!(performance.metric, BTU_PER_WATT_HOUR, epsilon = 1e-12);
    }

    #[test]
    fn rejects_cooling_profile() {
        let profile = test_support::two_speed_cooling(12.0);
        assert!(matches!(
            seasonal_heating(&profile, &HeatingConditions::default()),
            Err(RatingError::InvalidParameters(
                InvalidParameters::ProfileMode { .. }
            ))
        ));
    }

    #[test]
    fn extreme_cold_bin_goes_to_backup() {
        for (equipment, cd) in [
            (Equipment::HeatPump(Staging::SingleSpeed), 0.11),
            (Equipment::HeatPump(Staging::TwoSpeed), 0.11),
            (Equipment::HeatPump(Staging::VariableSpeed), 0.24),
            (Equipment::MiniSplitHeatPump(Default::default()), 0.25),
        ] {
            let performance =
                seasonal_heating(&profile(&equipment, 3.0, cd), &extreme_conditions())
                    .unwrap_or_else(|err| panic!("{equipment}: {err}"));

            let coldest = &performance.bins[2];
            assert_eq!(coldest.operation, Operation::LockedOut);
            assert_relative_eq!(coldest.compressor_energy, 0.0);
            assert_relative_eq!(coldest.delivered, 0.0);
            assert_relative_eq!(
                coldest.backup_energy,
                coldest.load / BTU_PER_WATT_HOUR,
                epsilon = 1e-15
            );
            assert!(performance.metric.is_finite() && performance.metric > 0.0);
        }
    }

    #[test]
    fn locked_out_bin_skips_staging() {
        let profile = test_support::fading_heating();
        let performance = seasonal_heating(&profile, &extreme_conditions()).unwrap();

        assert_eq!(performance.bins[2].operation, Operation::LockedOut);
        assert!(performance.bins[0].compressor_energy > 0.0);
    }

    #[test]
    fn rejects_non_positive_load_factor() {
        let profile = profile(&Equipment::HeatPump(Staging::TwoSpeed), 3.0, 0.11);

        for load_factor in [0.0, -0.77, f64::NAN] {
            let conditions = HeatingConditions {
                load_factor,
                ..HeatingConditions::default()
            };
            assert!(matches!(
                seasonal_heating(&profile, &conditions),
                Err(RatingError::InvalidParameters(
                    InvalidParameters::LoadFactor(_)
                ))
            ));
        }
    }
}
