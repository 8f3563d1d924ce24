//! Rating conditions for the seasonal calculations.
//!
//! The defaults reproduce the standard rating procedure. Other bin
//! distributions or lockout settings can be substituted to study a climate.

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

use super::{BinDistribution, COOLING_BINS, HEATING_BINS, InvalidParameters};

/// Lockout temperatures are stored in steps of 1e-9 °F.
const STEPS_PER_DEGREE: f64 = 1e9;

/// Conditions for the cooling season calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingConditions {
    /// Outdoor temperature bins weighting the season.
    pub bins: BinDistribution,

    /// Oversizing of the equipment relative to the 95 °F building load.
    pub sizing_factor: f64,
}

impl Default for CoolingConditions {
    fn default() -> Self {
        Self {
            bins: COOLING_BINS,
            sizing_factor: 1.1,
        }
    }
}

/// Conditions for the heating season calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingConditions {
    /// Outdoor temperature bins weighting the season.
    pub bins: BinDistribution,

    /// Low-temperature compressor cut-out.
    pub lockout: Lockout,

    /// Building load adjustment applied to the design heating requirement.
    pub load_factor: f64,
}

impl Default for HeatingConditions {
    fn default() -> Self {
        Self {
            bins: HEATING_BINS,
            lockout: Lockout::default(),
            load_factor: 0.77,
        }
    }
}

/// Low-temperature cut-out of a heat pump compressor.
///
/// At or below `off` the compressor does not run. Between `off` and `on`
/// (inclusive) it is available half the time. Above `on` it is fully
/// available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lockout {
    off: f64,
    on: f64,
}

impl Lockout {
    /// Creates a lockout band.
    ///
    /// Temperatures are rounded to 1e-9 °F so that a threshold given on a
    /// bin temperature compares equal to that bin after the unit conversion.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameters::Lockout`] if `off` is above `on` or either
    /// temperature is not finite.
    pub fn new(
        off: ThermodynamicTemperature,
        on: ThermodynamicTemperature,
    ) -> Result<Self, InvalidParameters> {
        let off = to_fahrenheit(off);
        let on = to_fahrenheit(on);

        if off.is_finite() && on.is_finite() && off <= on {
            Ok(Self { off, on })
        } else {
            Err(InvalidParameters::Lockout { off, on })
        }
    }

    /// Compressor cut-out temperature.
    #[must_use]
    pub fn off(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_fahrenheit>(self.off)
    }

    /// Compressor cut-in temperature.
    #[must_use]
    pub fn on(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_fahrenheit>(self.on)
    }

    /// Fraction of the time the compressor can run at outdoor temperature `t` (°F).
    #[must_use]
    pub fn availability(&self, t: f64) -> f64 {
        if t <= self.off {
            0.0
        } else if t <= self.on {
            0.5
        } else {
            1.0
        }
    }
}

fn to_fahrenheit(t: ThermodynamicTemperature) -> f64 {
    (t.get::<degree_fahrenheit>() * STEPS_PER_DEGREE).round() / STEPS_PER_DEGREE
}

impl Default for Lockout {
    fn default() -> Self {
        Self {
            off: 10.0,
            on: 14.0,
        }
    }
}
