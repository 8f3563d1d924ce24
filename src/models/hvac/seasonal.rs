//! Seasonal efficiency ratings for air conditioners and heat pumps.
//!
//! Nameplate ratings (SEER for cooling, HSPF for heating) summarize a whole
//! season of part-load operation. Simulation needs the opposite: rated
//! efficiencies at standard test conditions for each compressor speed. This
//! module bridges the two.
//!
//! - [`seasonal_cooling`] and [`seasonal_heating`] compute the seasonal metric
//!   of a [`SpeedProfile`] over a bin distribution.
//! - [`SeasonalModel`] wraps them as a [`twine_core::Model`] from nominal
//!   rated efficiency to [`SeasonalPerformance`].
//! - [`solve_rated_efficiency`] inverts any such model by bisection.
//! - [`rate`] ties it together for an [`Equipment`] archetype and a
//!   [`RatingTarget`].
//!
//! ```
//! use twine_ratings::models::hvac::seasonal::{
//!     Equipment, RatingConfig, RatingRequest, RatingTarget, Staging, rate,
//! };
//!
//! let request = RatingRequest::new(
//!     "condenser",
//!     Equipment::AirConditioner(Staging::SingleSpeed),
//!     RatingTarget::seer(13.0).unwrap(),
//! );
//! let rating = rate(&request, &RatingConfig::default()).unwrap();
//!
//! assert!((rating.achieved() - 13.0).abs() < 1e-3);
//! assert!(rating.nominal_efficiency > 10.0 && rating.nominal_efficiency < 12.0);
//! ```

mod core;

pub use core::{
    BTU_PER_WATT_HOUR, Bin, BinDistribution, BinResult, COOLING_BINS, ConvergencePolicy,
    CoolingConditions, Degradation, EfficiencySource, Equipment, FanPower, FanPowerClass,
    HEATING_BINS, HeatingConditions, InvalidParameters, Lockout, MetricKind, Mode, Operation,
    RATED_CFM_PER_TON, RatedEfficiency, RatingConfig, RatingError, RatingRequest, RatingResult,
    RatingTarget, SeasonalModel, SeasonalPerformance, SolverConfig, Speed, SpeedProfile,
    SpeedSelection, SpeedSpec, SpeedTable, Staging, cop_from_eir, eer_from_eir, eir_from_cop,
    eir_from_eer, propagate_efficiency, rate, seasonal_cooling, seasonal_heating,
    solve_rated_efficiency,
};

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use twine_core::Model;

    /// Solver settings that stop only on the seasonal metric residual.
    fn residual_driven() -> RatingConfig {
        RatingConfig {
            solver: SolverConfig {
                efficiency_tol: 1e-10,
                ..SolverConfig::default()
            },
            ..RatingConfig::default()
        }
    }

    fn archetypes() -> Vec<Equipment> {
        vec![
            Equipment::AirConditioner(Staging::SingleSpeed),
            Equipment::HeatPump(Staging::TwoSpeed),
            Equipment::HeatPump(Staging::VariableSpeed),
            Equipment::MiniSplitHeatPump(SpeedSelection::default()),
        ]
    }

    fn rate_target(equipment: &Equipment, target: RatingTarget) -> RatingResult {
        let request = RatingRequest::new("test unit", equipment.clone(), target);
        rate(&request, &residual_driven())
            .unwrap_or_else(|err| panic!("{equipment} at {target:?}: {err}"))
    }

    #[test]
    fn cooling_round_trip() {
        for equipment in archetypes() {
            for seer in [8.0, 13.0, 18.0, 24.0, 30.0] {
                let rating = rate_target(&equipment, RatingTarget::seer(seer).unwrap());
                assert!(matches!(rating.source, EfficiencySource::Solved { .. }));
                assert!(
                    (rating.achieved() - seer).abs() <= 1e-4,
                    "{equipment}: SEER {seer} gave {}",
                    rating.achieved()
                );
            }
        }
    }

    #[test]
    fn heating_round_trip() {
        let heat_pumps = archetypes()
            .into_iter()
            .filter(|equipment| equipment.supports(Mode::Heating));

        for equipment in heat_pumps {
            for hspf in [6.0, 7.5, 9.0, 11.0, 13.0] {
                let rating = rate_target(&equipment, RatingTarget::hspf(hspf).unwrap());
                assert!(
                    (rating.achieved() - hspf).abs() <= 1e-4,
                    "{equipment}: HSPF {hspf} gave {}",
                    rating.achieved()
                );
            }
        }
    }

    #[test]
    fn forward_model_reproduces_the_rating() {
        let equipment = Equipment::HeatPump(Staging::VariableSpeed);
        let rating = rate_target(&equipment, RatingTarget::seer(20.0).unwrap());

        let table = equipment.speed_table(Mode::Cooling).unwrap();
        let model = SeasonalModel::new(
            table,
            Mode::Cooling,
            RatingRequest::new("x", equipment.clone(), rating.target).fan_power,
            rating.degradation(),
        );

        let performance = model.call(&rating.nominal_efficiency).unwrap();
        assert_relative_eq!(performance.metric, rating.achieved(), epsilon = 1e-12);
    }

    #[test]
    fn solved_efficiency_increases_with_target() {
        // Single-speed targets stay on one side of the SEER 13 and HSPF 7
        // degradation tiers.
        for equipment in archetypes() {
            let solved: Vec<f64> = [13.0, 15.0, 18.0, 22.0, 27.0]
                .into_iter()
                .map(|seer| {
                    rate_target(&equipment, RatingTarget::seer(seer).unwrap()).nominal_efficiency
                })
                .collect();
            assert!(solved.windows(2).all(|w| w[1] > w[0]), "{equipment}: {solved:?}");

            if equipment.supports(Mode::Heating) {
                let solved: Vec<f64> = [7.0, 8.0, 9.5, 11.0, 12.5]
                    .into_iter()
                    .map(|hspf| {
                        rate_target(&equipment, RatingTarget::hspf(hspf).unwrap())
                            .nominal_efficiency
                    })
                    .collect();
                assert!(solved.windows(2).all(|w| w[1] > w[0]), "{equipment}: {solved:?}");
            }
        }
    }

    #[test]
    fn per_speed_arrays_are_consistent() {
        for equipment in archetypes() {
            let rating = rate_target(&equipment, RatingTarget::seer(16.0).unwrap());
            let speeds = rating.profile.speeds();

            assert_eq!(speeds.len(), equipment.speed_count());
            assert!(speeds
                .windows(2)
                .all(|w| w[1].capacity_ratio > w[0].capacity_ratio));
            assert!(speeds
                .windows(2)
                .all(|w| w[1].airflow_ratio > w[0].airflow_ratio));
            assert_relative_eq!(rating.profile.highest().capacity_ratio, 1.0);
            assert_relative_eq!(
                rating.profile.highest().net_efficiency,
                rating.nominal_efficiency
            );
            assert!(speeds.iter().all(|s| s.eir > 0.0 && s.eir.is_finite()));
        }
    }

    #[test]
    fn coldest_bin_is_served_by_backup() {
        let equipment = Equipment::HeatPump(Staging::VariableSpeed);
        let rating = rate_target(&equipment, RatingTarget::hspf(10.0).unwrap());

        let coldest = rating
            .performance
            .bins
            .iter()
            .min_by(|a, b| a.outdoor.total_cmp(&b.outdoor))
            .unwrap();

        assert!(coldest.outdoor <= 10.0);
        assert_eq!(coldest.operation, Operation::LockedOut);
        assert_relative_eq!(coldest.compressor_energy, 0.0);
        assert_relative_eq!(coldest.delivered, 0.0);
        assert_relative_eq!(
            coldest.backup_energy * BTU_PER_WATT_HOUR,
            coldest.load,
            epsilon = 1e-12
        );
    }

    #[test]
    fn conversion_round_trip() {
        for class in [
            FanPowerClass::PermanentSplitCapacitor,
            FanPowerClass::ElectronicallyCommutated,
            FanPowerClass::Ductless,
        ] {
            let fan = FanPower::from(class);
            for eer in [7.5, 11.2, 16.0, 25.0] {
                assert_relative_eq!(
                    eer_from_eir(eir_from_eer(eer, fan), fan),
                    eer,
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn single_speed_air_conditioner_at_seer_13() {
        let request = RatingRequest::new(
            "reference condenser",
            Equipment::AirConditioner(Staging::SingleSpeed),
            RatingTarget::seer(13.0).unwrap(),
        );
        assert_relative_eq!(request.fan_power.watts_per_cfm(), 0.365);

        let rating = rate(&request, &RatingConfig::default()).unwrap();

        assert!(
            (11.1..=11.3).contains(&rating.nominal_efficiency),
            "EER {}",
            rating.nominal_efficiency
        );
        assert_relative_eq!(rating.degradation().coefficient(), 0.07);
        assert_eq!(rating.profile.speeds().len(), 1);
    }

    #[test]
    fn two_speed_heat_pump_at_hspf_9() {
        let equipment = Equipment::HeatPump(Staging::TwoSpeed);
        let rating = rate_target(&equipment, RatingTarget::hspf(9.0).unwrap());

        let [low, high] = rating.profile.speeds() else {
            panic!("expected two speeds");
        };
        for speed in [low, high] {
            assert!(speed.net_efficiency.is_finite() && speed.net_efficiency > 0.0);
            assert!(speed.gross_cop().is_finite() && speed.gross_cop() > 0.0);
        }
        assert_relative_eq!(low.net_efficiency / high.net_efficiency, 1.10, epsilon = 1e-12);
        assert!((3.3..3.9).contains(&rating.nominal_efficiency));

        let forward = seasonal_heating(&rating.profile, &HeatingConditions::default()).unwrap();
        assert!((forward.metric - 9.0).abs() <= 1e-4);
    }

    #[test]
    fn mini_split_speed_selection_changes_the_rating() {
        let target = RatingTarget::seer(22.0).unwrap();
        let default = rate_target(
            &Equipment::MiniSplitHeatPump(SpeedSelection::default()),
            target,
        );
        let wide = rate_target(
            &Equipment::MiniSplitHeatPump(SpeedSelection::new([0, 3, 6, 8, 9]).unwrap()),
            target,
        );

        assert_eq!(wide.profile.speeds().len(), 5);
        assert!((wide.achieved() - 22.0).abs() <= 1e-4);
        assert!((default.nominal_efficiency - wide.nominal_efficiency).abs() > 1e-6);
    }

    #[test]
    fn results_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<RatingRequest>();
        assert_send_sync::<RatingResult>();
        assert_send_sync::<SeasonalModel>();
        assert_send_sync::<RatingError>();
    }

    #[test]
    fn unsupported_speed_count_fails_fast() {
        assert_eq!(
            Staging::from_speed_count(3),
            Err(InvalidParameters::UnsupportedSpeedCount(3))
        );
    }

    #[test]
    fn curves_hand_off_in_celsius() {
        let rating = rate_target(
            &Equipment::HeatPump(Staging::TwoSpeed),
            RatingTarget::seer(16.0).unwrap(),
        );
        let speed = rating.profile.highest();
        let celsius = crate::support::curve::Biquadratic::new(speed.capacity_curve.to_celsius());

        assert_relative_eq!(
            celsius.evaluate((67.0 - 32.0) / 1.8, 35.0),
            speed.capacity_curve.evaluate(67.0, 95.0),
            epsilon = 1e-9
        );
    }
}
