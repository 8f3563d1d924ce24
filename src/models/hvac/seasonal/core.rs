//! Seasonal rating calculations.
//!
//! Forward calculations take a speed profile (per-speed capacity, airflow and
//! rated efficiency with their temperature curves) and weight its performance
//! over a bin distribution to produce SEER or HSPF. The inverse problem
//! bisects on the nominal rated efficiency until the forward result matches a
//! nameplate target.

mod bins;
mod conditions;
mod conversion;
mod cooling;
mod degradation;
mod equipment;
mod error;
mod heating;
mod model;
mod performance;
mod profile;
mod rate;
mod results;
mod solve;
mod tables;

#[cfg(test)]
mod test_support;

pub use bins::{Bin, BinDistribution, COOLING_BINS, HEATING_BINS};
pub use conditions::{CoolingConditions, HeatingConditions, Lockout};
pub use conversion::{
    BTU_PER_WATT_HOUR, FanPower, FanPowerClass, RATED_CFM_PER_TON, cop_from_eir, eer_from_eir,
    eir_from_cop, eir_from_eer,
};
pub use cooling::seasonal_cooling;
pub use degradation::Degradation;
pub use equipment::{Equipment, Mode, SpeedSelection, Staging};
pub use error::{InvalidParameters, RatingError};
pub use heating::seasonal_heating;
pub use model::SeasonalModel;
pub use profile::{Speed, SpeedProfile, SpeedSpec, SpeedTable, propagate_efficiency};
pub use rate::{ConvergencePolicy, MetricKind, RatingConfig, RatingRequest, RatingTarget, rate};
pub use results::{BinResult, EfficiencySource, Operation, RatingResult, SeasonalPerformance};
pub use solve::{RatedEfficiency, SolverConfig, solve_rated_efficiency};
