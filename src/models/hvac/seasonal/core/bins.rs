//! Standardized outdoor temperature bin distributions.
//!
//! Seasonal ratings weight equipment performance by the fraction of annual
//! operating hours spent in each outdoor temperature bin. The distributions
//! are fixed by the rating procedure and independent of the equipment.

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

/// One outdoor temperature bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Bin center outdoor dry-bulb temperature, °F.
    pub outdoor: f64,

    /// Fraction of the season's operating hours spent in this bin.
    pub fraction: f64,
}

impl Bin {
    /// Creates a bin centered on `outdoor` (°F).
    #[must_use]
    pub const fn new(outdoor: f64, fraction: f64) -> Self {
        Self { outdoor, fraction }
    }

    /// Bin center outdoor temperature.
    #[must_use]
    pub fn outdoor_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_fahrenheit>(self.outdoor)
    }
}

/// An ordered table of temperature bins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinDistribution(&'static [Bin]);

impl BinDistribution {
    /// Creates a distribution from a bin table.
    ///
    /// Fractions are used as given; they should sum to one.
    #[must_use]
    pub const fn new(bins: &'static [Bin]) -> Self {
        Self(bins)
    }

    /// Returns the bins in table order.
    #[must_use]
    pub fn bins(&self) -> &'static [Bin] {
        self.0
    }

    /// Returns the sum of all bin fractions.
    #[must_use]
    pub fn total_fraction(&self) -> f64 {
        self.0.iter().map(|bin| bin.fraction).sum()
    }
}

/// Cooling season bins, 67 °F through 102 °F.
pub static COOLING_BINS: BinDistribution = BinDistribution::new(&COOLING);

/// Heating season bins for climate region IV, 62 °F down to −8 °F.
pub static HEATING_BINS: BinDistribution = BinDistribution::new(&HEATING);

static COOLING: [Bin; 8] = [
    Bin::new(67.0, 0.214),
    Bin::new(72.0, 0.231),
    Bin::new(77.0, 0.216),
    Bin::new(82.0, 0.161),
    Bin::new(87.0, 0.104),
    Bin::new(92.0, 0.052),
    Bin::new(97.0, 0.018),
    Bin::new(102.0, 0.004),
];

static HEATING: [Bin; 15] = [
    Bin::new(62.0, 0.132),
    Bin::new(57.0, 0.111),
    Bin::new(52.0, 0.103),
    Bin::new(47.0, 0.093),
    Bin::new(42.0, 0.100),
    Bin::new(37.0, 0.109),
    Bin::new(32.0, 0.126),
    Bin::new(27.0, 0.087),
    Bin::new(22.0, 0.055),
    Bin::new(17.0, 0.036),
    Bin::new(12.0, 0.026),
    Bin::new(7.0, 0.013),
    Bin::new(2.0, 0.006),
    Bin::new(-3.0, 0.002),
    Bin::new(-8.0, 0.001),
];
