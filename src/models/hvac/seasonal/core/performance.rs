//! Net operating points and part-load staging.
//!
//! All capacities and powers are per unit of nominal capacity: capacity in
//! Btu/h per Btu/h, power in W per Btu/h. Their ratio is an efficiency in
//! Btu/Wh.

use super::{BTU_PER_WATT_HOUR, Degradation, Mode, Operation, RatingError, Speed, SpeedProfile};

/// Indoor wet-bulb temperature for cooling ratings, °F.
const COOLING_INDOOR_WET_BULB: f64 = 67.0;

/// Indoor dry-bulb temperature for heating ratings, °F.
const HEATING_INDOOR_DRY_BULB: f64 = 70.0;

/// Net capacity and power at one outdoor temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct OperatingPoint {
    pub(super) capacity: f64,
    pub(super) power: f64,
}

impl OperatingPoint {
    /// Net efficiency, Btu/Wh.
    pub(super) fn efficiency(self) -> f64 {
        self.capacity / self.power
    }

    /// Net coefficient of performance.
    pub(super) fn cop(self) -> f64 {
        self.efficiency() / BTU_PER_WATT_HOUR
    }
}

impl Speed {
    /// Net operating point at outdoor dry-bulb temperature `outdoor` (°F).
    ///
    /// The indoor fan adds its heat to heating capacity and removes it from
    /// cooling capacity; its power adds to compressor power in both modes.
    pub(super) fn operating_point(
        &self,
        mode: Mode,
        outdoor: f64,
    ) -> Result<OperatingPoint, RatingError> {
        let indoor = match mode {
            Mode::Cooling => COOLING_INDOOR_WET_BULB,
            Mode::Heating => HEATING_INDOOR_DRY_BULB,
        };

        let capacity_ratio = RatingError::check_finite(
            "capacity curve",
            self.capacity_curve.evaluate(indoor, outdoor),
        )?;
        let eir_ratio =
            RatingError::check_finite("EIR curve", self.eir_curve.evaluate(indoor, outdoor))?;

        let gross_capacity = self.capacity_ratio * capacity_ratio;
        let compressor_power = gross_capacity * self.eir * eir_ratio / BTU_PER_WATT_HOUR;
        let fan_power = self.fan.watts_per_btu_h() * self.capacity_ratio;

        let capacity = match mode {
            Mode::Cooling => gross_capacity - BTU_PER_WATT_HOUR * fan_power,
            Mode::Heating => gross_capacity + BTU_PER_WATT_HOUR * fan_power,
        };

        Ok(OperatingPoint {
            capacity,
            power: compressor_power + fan_power,
        })
    }
}

/// A speed's operating points at two rating temperatures, extended linearly.
#[derive(Debug, Clone, Copy)]
pub(super) struct PerformanceLine {
    temperature: f64,
    at: OperatingPoint,
    slope: OperatingPoint,
}

impl PerformanceLine {
    pub(super) fn new(speed: &Speed, mode: Mode, [t0, t1]: [f64; 2]) -> Result<Self, RatingError> {
        let p0 = speed.operating_point(mode, t0)?;
        let p1 = speed.operating_point(mode, t1)?;
        let dt = t1 - t0;

        Ok(Self {
            temperature: t0,
            at: p0,
            slope: OperatingPoint {
                capacity: (p1.capacity - p0.capacity) / dt,
                power: (p1.power - p0.power) / dt,
            },
        })
    }

    /// Operating point at outdoor temperature `t` (°F).
    pub(super) fn at(&self, t: f64) -> OperatingPoint {
        let dt = t - self.temperature;
        OperatingPoint {
            capacity: self.at.capacity + self.slope.capacity * dt,
            power: self.at.power + self.slope.power * dt,
        }
    }
}

/// Quadratic `a + b·x + c·x²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
}

impl Quadratic {
    /// Fits the quadratic passing through three points.
    ///
    /// Coefficients are not finite if two `x` values coincide.
    pub(super) fn through([(x1, y1), (x2, y2), (x3, y3)]: [(f64, f64); 3]) -> Self {
        let d = (x1 - x2) * (x1 - x3) * (x2 - x3);
        Self {
            a: (x2 * x3 * (x2 - x3) * y1 + x3 * x1 * (x3 - x1) * y2 + x1 * x2 * (x1 - x2) * y3)
                / d,
            b: (x3 * x3 * (y1 - y2) + x2 * x2 * (y3 - y1) + x1 * x1 * (y2 - y3)) / d,
            c: (x3 * (y2 - y1) + x2 * (y1 - y3) + x1 * (y3 - y2)) / d,
        }
    }

    pub(super) fn evaluate(&self, x: f64) -> f64 {
        self.a + self.b * x + self.c * x * x
    }
}

/// Intermediate-speed performance translated across outdoor temperature.
///
/// The intermediate speed is evaluated once at its rating temperature. At
/// other temperatures it moves with a slope blended from the low and high
/// speed slopes, weighted by where it sits between them.
#[derive(Debug, Clone, Copy)]
struct Intermediate {
    line: PerformanceLine,
}

impl Intermediate {
    fn new(
        speed: &Speed,
        mode: Mode,
        temperature: f64,
        low: &PerformanceLine,
        high: &PerformanceLine,
    ) -> Result<Self, RatingError> {
        let at = speed.operating_point(mode, temperature)?;
        let (lo, hi) = (low.at(temperature), high.at(temperature));

        let blend = |value: f64, lo: f64, hi: f64, lo_slope: f64, hi_slope: f64| {
            let n = (value - lo) / (hi - lo);
            lo_slope * (1.0 - n) + n * hi_slope
        };

        let slope = OperatingPoint {
            capacity: blend(
                at.capacity,
                lo.capacity,
                hi.capacity,
                low.slope.capacity,
                high.slope.capacity,
            ),
            power: blend(at.power, lo.power, hi.power, low.slope.power, high.slope.power),
        };

        Ok(Self {
            line: PerformanceLine {
                temperature,
                at,
                slope,
            },
        })
    }
}

/// How one bin's load is met.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Staged {
    /// Capacity delivered to the building.
    pub(super) delivered: f64,

    /// Average power drawn.
    pub(super) energy: f64,

    pub(super) operation: Operation,
}

/// Performance lines of the speeds that matter for staging.
#[derive(Debug, Clone, Copy)]
pub(super) struct SpeedLines {
    low: PerformanceLine,
    high: PerformanceLine,
    intermediate: Option<Intermediate>,
    degradation: Degradation,
}

impl SpeedLines {
    /// Builds lines through `rating_temperatures` for the lowest and highest speed.
    ///
    /// Profiles with three or more speeds also carry the middle speed,
    /// evaluated at `intermediate_temperature`, for modulating operation.
    pub(super) fn new(
        profile: &SpeedProfile,
        rating_temperatures: [f64; 2],
        intermediate_temperature: f64,
    ) -> Result<Self, RatingError> {
        let mode = profile.mode();
        let speeds = profile.speeds();

        let low = PerformanceLine::new(profile.lowest(), mode, rating_temperatures)?;
        let high = PerformanceLine::new(profile.highest(), mode, rating_temperatures)?;

        let intermediate = if speeds.len() > 2 {
            Some(Intermediate::new(
                &speeds[speeds.len() / 2],
                mode,
                intermediate_temperature,
                &low,
                &high,
            )?)
        } else {
            None
        };

        Ok(Self {
            low,
            high,
            intermediate,
            degradation: profile.degradation(),
        })
    }

    /// Highest-speed operating point at outdoor temperature `t` (°F).
    pub(super) fn high(&self, t: f64) -> OperatingPoint {
        self.high.at(t)
    }

    /// Meets `load` at outdoor temperature `t` (°F).
    ///
    /// Below low-speed capacity the low speed cycles. Between the low and
    /// high speed capacities, two-speed equipment alternates between them
    /// while variable-speed equipment modulates along a quadratic efficiency
    /// curve. Above high-speed capacity the unit runs flat out and the
    /// shortfall is left to the caller.
    pub(super) fn meet(&self, load: f64, t: f64) -> Result<Staged, RatingError> {
        let low = self.low.at(t);
        let high = self.high.at(t);

        if !(low.capacity > 0.0 && low.power > 0.0) {
            return Err(RatingError::NonPositiveOperatingPoint {
                speed: "low",
                outdoor: t,
                capacity: low.capacity,
                power: low.power,
            });
        }

        if load <= low.capacity {
            let part_load_ratio = load / low.capacity;
            let plf = self.degradation.part_load_factor(part_load_ratio);
            return Ok(Staged {
                delivered: load,
                energy: part_load_ratio * low.power / plf,
                operation: Operation::Cycling { part_load_ratio },
            });
        }

        if load >= high.capacity {
            return Ok(Staged {
                delivered: high.capacity,
                energy: high.power,
                operation: Operation::Full,
            });
        }

        match self.intermediate {
            Some(intermediate) => {
                let mid = intermediate.line.at(t);
                let curve = Quadratic::through([
                    (low.capacity, low.efficiency()),
                    (mid.capacity, mid.efficiency()),
                    (high.capacity, high.efficiency()),
                ]);

                let efficiency = curve.evaluate(load);
                if !(efficiency.is_finite() && efficiency > 0.0) {
                    return Err(RatingError::NonFinite {
                        quantity: "modulating efficiency",
                        value: efficiency,
                    });
                }

                Ok(Staged {
                    delivered: load,
                    energy: load / efficiency,
                    operation: Operation::Modulating { efficiency },
                })
            }
            None => {
                let low_speed_fraction = (high.capacity - load) / (high.capacity - low.capacity);
                Ok(Staged {
                    delivered: load,
                    energy: low_speed_fraction * low.power
                        + (1.0 - low_speed_fraction) * high.power,
                    operation: Operation::Blended { low_speed_fraction },
                })
            }
        }
    }
}
