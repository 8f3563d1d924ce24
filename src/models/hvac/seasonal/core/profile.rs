//! Per-speed descriptions of equipment performance.
//!
//! A [`SpeedTable`] holds the class-level ratios of each speed relative to the
//! highest one. Applying a nominal rated efficiency and a fan power expands it
//! into a [`SpeedProfile`] of concrete per-speed values.

use crate::support::curve::Biquadratic;

use super::{
    BTU_PER_WATT_HOUR, Degradation, FanPower, InvalidParameters, Mode, RATED_CFM_PER_TON,
    RatingError, cop_from_eir, eer_from_eir, eir_from_cop, eir_from_eer,
};

/// Class-level description of one speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedSpec {
    /// Rated capacity relative to the highest speed.
    pub capacity_ratio: f64,

    /// Indoor airflow per ton of this speed's capacity, cfm/ton.
    pub cfm_per_ton: f64,

    /// Rated net efficiency relative to the highest speed.
    pub efficiency_ratio: f64,

    /// Capacity correction curve.
    pub capacity_curve: Biquadratic,

    /// Energy input ratio correction curve.
    pub eir_curve: Biquadratic,
}

impl SpeedSpec {
    /// Indoor airflow relative to rated airflow at the highest speed.
    #[must_use]
    pub fn airflow_ratio(&self) -> f64 {
        self.capacity_ratio * self.cfm_per_ton / RATED_CFM_PER_TON
    }
}

/// Speeds of an equipment class, lowest capacity first.
///
/// Ratios are normalized so the last speed has capacity and efficiency
/// ratios of exactly one.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedTable {
    speeds: Vec<SpeedSpec>,
}

impl SpeedTable {
    /// Creates a table, normalizing ratios to the highest speed.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, if capacity or airflow ratios
    /// do not strictly increase, or if any ratio is not positive and finite.
    pub fn new(mut speeds: Vec<SpeedSpec>) -> Result<Self, InvalidParameters> {
        let Some(&highest) = speeds.last() else {
            return Err(InvalidParameters::UnsupportedSpeedCount(0));
        };

        for (index, speed) in speeds.iter().enumerate() {
            for (quantity, value) in [
                ("capacity ratio", speed.capacity_ratio),
                ("airflow", speed.cfm_per_ton),
                ("efficiency ratio", speed.efficiency_ratio),
            ] {
                if !(value.is_finite() && value > 0.0) {
                    return Err(InvalidParameters::SpeedValue {
                        quantity,
                        speed: index,
                        value,
                    });
                }
            }
        }

        for (index, pair) in speeds.windows(2).enumerate() {
            let quantity = if pair[1].capacity_ratio <= pair[0].capacity_ratio {
                "capacity ratio"
            } else if pair[1].airflow_ratio() <= pair[0].airflow_ratio() {
                "airflow ratio"
            } else {
                continue;
            };
            return Err(InvalidParameters::NonMonotonicSpeeds {
                quantity,
                speed: index + 1,
            });
        }

        for speed in &mut speeds {
            speed.capacity_ratio /= highest.capacity_ratio;
            speed.efficiency_ratio /= highest.efficiency_ratio;
        }

        Ok(Self { speeds })
    }

    /// Returns the speeds, lowest capacity first.
    #[must_use]
    pub fn speeds(&self) -> &[SpeedSpec] {
        &self.speeds
    }

    /// Returns each speed's efficiency ratio.
    #[must_use]
    pub fn efficiency_ratios(&self) -> Vec<f64> {
        self.speeds.iter().map(|s| s.efficiency_ratio).collect()
    }

    /// Highest nominal efficiency for which every speed keeps a positive gross EIR.
    ///
    /// Net efficiency includes the fan, so above this value the compressor
    /// would have to supply negative power. Returns infinity without a fan.
    #[must_use]
    pub fn efficiency_limit(&self, mode: Mode, fan: FanPower) -> f64 {
        self.speeds
            .iter()
            .map(|speed| {
                let f = fan.at_airflow(speed.cfm_per_ton).watts_per_btu_h();
                let limit = match mode {
                    Mode::Cooling => (1.0 - BTU_PER_WATT_HOUR * f) / f,
                    Mode::Heating => (1.0 + BTU_PER_WATT_HOUR * f) / (BTU_PER_WATT_HOUR * f),
                };
                limit / speed.efficiency_ratio
            })
            .fold(f64::INFINITY, f64::min)
    }
}

/// Multiplies a nominal efficiency by each speed's efficiency ratio.
///
/// ```
/// use twine_ratings::models::hvac::seasonal::propagate_efficiency;
///
/// assert_eq!(propagate_efficiency(10.0, &[1.2, 1.0]), vec![12.0, 10.0]);
/// ```
#[must_use]
pub fn propagate_efficiency(nominal: f64, ratios: &[f64]) -> Vec<f64> {
    ratios.iter().map(|ratio| nominal * ratio).collect()
}

/// Concrete rated performance of one speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed {
    /// Rated capacity relative to nominal capacity.
    pub capacity_ratio: f64,

    /// Indoor airflow relative to rated airflow at nominal capacity.
    pub airflow_ratio: f64,

    /// Rated net efficiency: EER (Btu/Wh) for cooling, COP for heating.
    pub net_efficiency: f64,

    /// Rated gross energy input ratio (compressor power over gross capacity).
    pub eir: f64,

    /// Indoor fan power at this speed's airflow.
    pub fan: FanPower,

    /// Capacity correction curve.
    pub capacity_curve: Biquadratic,

    /// Energy input ratio correction curve.
    pub eir_curve: Biquadratic,
}

impl Speed {
    /// Indoor airflow per ton of this speed's capacity, cfm/ton.
    #[must_use]
    pub fn cfm_per_ton(&self) -> f64 {
        self.fan.cfm_per_ton()
    }

    /// Rated gross coefficient of performance.
    #[must_use]
    pub fn gross_cop(&self) -> f64 {
        1.0 / self.eir
    }
}

/// Rated performance of every speed at a given nominal efficiency.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedProfile {
    mode: Mode,
    speeds: Vec<Speed>,
    degradation: Degradation,
}

impl SpeedProfile {
    /// Expands a speed table at a nominal net efficiency.
    ///
    /// The nominal efficiency is the highest speed's rated EER (cooling) or
    /// COP (heating). Each speed's net efficiency is converted to a gross EIR
    /// with the fan running at that speed's airflow.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::NonFinite`] if an EIR is not finite and
    /// [`InvalidParameters::NonPositiveEir`] if any speed's EIR is not positive.
    pub fn expand(
        table: &SpeedTable,
        mode: Mode,
        nominal: f64,
        fan: FanPower,
        degradation: Degradation,
    ) -> Result<Self, RatingError> {
        let efficiencies = propagate_efficiency(nominal, &table.efficiency_ratios());

        let speeds = table
            .speeds()
            .iter()
            .zip(efficiencies)
            .enumerate()
            .map(|(index, (spec, net_efficiency))| -> Result<Speed, RatingError> {
                let fan = fan.at_airflow(spec.cfm_per_ton);
                let eir = match mode {
                    Mode::Cooling => eir_from_eer(net_efficiency, fan),
                    Mode::Heating => eir_from_cop(net_efficiency, fan),
                };

                let eir = RatingError::check_finite("rated EIR", eir)?;
                if eir <= 0.0 {
                    return Err(InvalidParameters::NonPositiveEir { speed: index, eir }.into());
                }

                Ok(Speed {
                    capacity_ratio: spec.capacity_ratio,
                    airflow_ratio: spec.airflow_ratio(),
                    net_efficiency,
                    eir,
                    fan,
                    capacity_curve: spec.capacity_curve,
                    eir_curve: spec.eir_curve,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            mode,
            speeds,
            degradation,
        })
    }

    /// Operating mode the profile was expanded for.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the speeds, lowest capacity first.
    #[must_use]
    pub fn speeds(&self) -> &[Speed] {
        &self.speeds
    }

    #[cfg(test)]
    pub(super) fn speeds_mut(&mut self) -> &mut [Speed] {
        &mut self.speeds
    }

    /// Cyclic degradation coefficient applied when cycling the lowest speed.
    #[must_use]
    pub fn degradation(&self) -> Degradation {
        self.degradation
    }

    /// Lowest-capacity speed.
    #[must_use]
    pub fn lowest(&self) -> &Speed {
        &self.speeds[0]
    }

    /// Highest-capacity speed, which carries the nominal efficiency.
    #[must_use]
    pub fn highest(&self) -> &Speed {
        &self.speeds[self.speeds.len() - 1]
    }

    /// Net efficiency recovered from each speed's gross EIR.
    ///
    /// Matches each speed's `net_efficiency` up to rounding.
    #[must_use]
    pub fn recovered_efficiencies(&self) -> Vec<f64> {
        self.speeds
            .iter()
            .map(|speed| match self.mode {
                Mode::Cooling => eer_from_eir(speed.eir, speed.fan),
                Mode::Heating => cop_from_eir(speed.eir, speed.fan),
            })
            .collect()
    }
}
