//! Results types for seasonal calculations and ratings.

use super::{
    Degradation, Equipment, MetricKind, Mode, RatingError, RatingTarget, SpeedProfile,
};

/// How the equipment met the load in one bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// The low speed cycles on and off.
    Cycling {
        /// Load over low-speed capacity.
        part_load_ratio: f64,
    },

    /// Two-speed equipment alternates between its low and high speed.
    Blended {
        /// Fraction of the time spent at low speed.
        low_speed_fraction: f64,
    },

    /// Variable-speed equipment runs continuously at the load.
    Modulating {
        /// Net efficiency at the load, Btu/Wh.
        efficiency: f64,
    },

    /// The high speed runs continuously and cannot meet the full load.
    Full,

    /// The compressor is off for low outdoor temperature.
    LockedOut,
}

/// Performance in one outdoor temperature bin.
///
/// Capacities and loads are per unit of nominal capacity (Btu/h per Btu/h).
/// Powers are in W per Btu/h of nominal capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinResult {
    /// Bin outdoor temperature, °F.
    pub outdoor: f64,

    /// Fraction of seasonal hours in the bin.
    pub fraction: f64,

    /// Building load.
    pub load: f64,

    /// Capacity delivered by the compressor.
    pub delivered: f64,

    /// Average compressor and fan power.
    pub compressor_energy: f64,

    /// Average resistance backup power.
    pub backup_energy: f64,

    /// Fraction of the time the compressor may run.
    pub availability: f64,

    /// How the load was met.
    pub operation: Operation,
}

/// Result of a forward seasonal calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalPerformance {
    /// Operating mode.
    pub mode: Mode,

    /// SEER (Btu/Wh) for cooling or HSPF (Btu/Wh) for heating.
    pub metric: f64,

    /// Per-bin breakdown in distribution order.
    pub bins: Vec<BinResult>,
}

impl SeasonalPerformance {
    /// Computes the seasonal metric from a bin breakdown.
    ///
    /// Cooling credits only delivered capacity; heating credits the full
    /// building load and charges backup energy against it.
    pub(super) fn from_bins(mode: Mode, bins: Vec<BinResult>) -> Result<Self, RatingError> {
        let weighted = |f: fn(&BinResult) -> f64| -> f64 {
            bins.iter().map(|bin| bin.fraction * f(bin)).sum()
        };

        let credited = match mode {
            Mode::Cooling => weighted(|bin| bin.delivered),
            Mode::Heating => weighted(|bin| bin.load),
        };
        let energy = weighted(|bin| bin.compressor_energy + bin.backup_energy);

        let metric = RatingError::check_finite("seasonal metric", credited / energy)?;

        Ok(Self { mode, metric, bins })
    }

    /// Hours-weighted average compressor and fan power.
    #[must_use]
    pub fn compressor_energy(&self) -> f64 {
        self.bins
            .iter()
            .map(|bin| bin.fraction * bin.compressor_energy)
            .sum()
    }

    /// Hours-weighted average resistance backup power.
    #[must_use]
    pub fn backup_energy(&self) -> f64 {
        self.bins
            .iter()
            .map(|bin| bin.fraction * bin.backup_energy)
            .sum()
    }
}

/// Where the reported nominal efficiency came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencySource {
    /// Bisection converged on the seasonal target.
    Solved {
        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// Bisection failed and a closed-form correlation was used instead.
    Correlation,
}

/// A completed rating.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingResult {
    /// Caller-supplied equipment name.
    pub name: String,

    /// Rated equipment.
    pub equipment: Equipment,

    /// The nameplate target.
    pub target: RatingTarget,

    /// Rated net efficiency of the highest speed: EER (Btu/Wh) for cooling,
    /// COP for heating.
    pub nominal_efficiency: f64,

    /// Whether the nominal efficiency was solved or estimated.
    pub source: EfficiencySource,

    /// Per-speed rated performance at the nominal efficiency.
    pub profile: SpeedProfile,

    /// Seasonal performance at the nominal efficiency.
    pub performance: SeasonalPerformance,
}

impl RatingResult {
    /// Operating mode of the rating.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.target.kind().mode()
    }

    /// Cyclic degradation coefficient used.
    #[must_use]
    pub fn degradation(&self) -> Degradation {
        self.profile.degradation()
    }

    /// Seasonal metric achieved at the nominal efficiency.
    ///
    /// Matches the target within solver tolerance when the efficiency was
    /// solved.
    #[must_use]
    pub fn achieved(&self) -> f64 {
        self.performance.metric
    }

    /// Nominal efficiency expressed as a COP, regardless of mode.
    #[must_use]
    pub fn nominal_cop(&self) -> f64 {
        match self.target.kind() {
            MetricKind::Seer => self.nominal_efficiency / super::BTU_PER_WATT_HOUR,
            MetricKind::Hspf => self.nominal_efficiency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bin(outdoor: f64, fraction: f64, load: f64, delivered: f64, energy: f64) -> BinResult {
        BinResult {
            outdoor,
            fraction,
            load,
            delivered,
            compressor_energy: energy,
            backup_energy: 0.0,
            availability: 1.0,
            operation: Operation::Full,
        }
    }

    #[test]
    fn cooling_credits_delivered_capacity() {
        let bins = vec![
            bin(80.0, 0.5, 0.5, 0.5, 0.05),
            bin(100.0, 0.5, 1.2, 1.0, 0.10),
        ];
        let performance = SeasonalPerformance::from_bins(Mode::Cooling, bins).unwrap();

        assert_relative_eq!(performance.metric, 1.5 / 0.15, epsilon = 1e-12);
        assert_relative_eq!(performance.compressor_energy(), 0.075, epsilon = 1e-15);
    }

    #[test]
    fn heating_charges_backup() {
        let mut cold = bin(0.0, 0.5, 1.2, 0.0, 0.0);
        cold.backup_energy = 1.2 / crate::models::hvac::seasonal::core::BTU_PER_WATT_HOUR;
        cold.availability = 0.0;
        cold.operation = Operation::LockedOut;
        let bins = vec![bin(40.0, 0.5, 0.4, 0.4, 0.04), cold];

        let performance = SeasonalPerformance::from_bins(Mode::Heating, bins).unwrap();
        let expected = (0.5 * 0.4 + 0.5 * 1.2) / (0.5 * 0.04 + 0.5 * cold.backup_energy);
        assert_relative_eq!(performance.metric, expected, epsilon = 1e-12);
        assert!(performance.backup_energy() > 0.0);
    }

    #[test]
    fn no_energy_is_non_finite() {
        let bins = vec![bin(80.0, 1.0, 0.0, 0.0, 0.0)];
        assert!(matches!(
            SeasonalPerformance::from_bins(Mode::Cooling, bins),
            Err(RatingError::NonFinite { .. })
        ));
    }
}
