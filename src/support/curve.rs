//! Temperature-dependent performance curves.
//!
//! Equipment performance maps normalize capacity and energy input ratio to
//! their rated values and express the correction as a biquadratic in an
//! indoor and an outdoor temperature.

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

/// Degrees Fahrenheit per degree Celsius.
const FAHRENHEIT_SCALE: f64 = 1.8;

/// Fahrenheit reading at 0 °C.
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// A two-variable quadratic performance curve.
///
/// Evaluates `a0 + a1·x + a2·x² + a3·y + a4·y² + a5·x·y`, where `x` is the
/// indoor temperature (wet bulb for cooling, dry bulb for heating) and `y` is
/// the outdoor dry-bulb temperature, both in °F.
///
/// Inputs are never clamped; callers keep them inside the domain the curve
/// was fit over.
///
/// ```
/// use twine_ratings::support::curve::Biquadratic;
///
/// let flat = Biquadratic::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
/// assert_eq!(flat.evaluate(67.0, 95.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biquadratic {
    coefficients: [f64; 6],
}

impl Biquadratic {
    /// Creates a curve from coefficients `[a0, a1, a2, a3, a4, a5]` fit in °F.
    #[must_use]
    pub const fn new(coefficients: [f64; 6]) -> Self {
        Self { coefficients }
    }

    /// Creates a curve from coefficients fit with temperatures in °C.
    ///
    /// The returned curve takes °F inputs and evaluates to the same ratio.
    #[must_use]
    pub fn from_celsius(coefficients: [f64; 6]) -> Self {
        Self::new(coefficients).substitute(
            1.0 / FAHRENHEIT_SCALE,
            -FAHRENHEIT_OFFSET / FAHRENHEIT_SCALE,
        )
    }

    /// Returns the coefficients `[a0, a1, a2, a3, a4, a5]` for °F inputs.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 6] {
        self.coefficients
    }

    /// Returns the equivalent coefficients for °C inputs.
    ///
    /// Downstream simulators that work in SI units consume curves in this form.
    #[must_use]
    pub fn to_celsius(&self) -> [f64; 6] {
        self.substitute(FAHRENHEIT_SCALE, FAHRENHEIT_OFFSET)
            .coefficients
    }

    /// Evaluates the curve at indoor temperature `x` and outdoor temperature `y` (°F).
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let [a0, a1, a2, a3, a4, a5] = self.coefficients;
        a0 + a1 * x + a2 * x * x + a3 * y + a4 * y * y + a5 * x * y
    }

    /// Evaluates the curve at the given indoor and outdoor temperatures.
    #[must_use]
    pub fn evaluate_at(
        &self,
        indoor: ThermodynamicTemperature,
        outdoor: ThermodynamicTemperature,
    ) -> f64 {
        self.evaluate(
            indoor.get::<degree_fahrenheit>(),
            outdoor.get::<degree_fahrenheit>(),
        )
    }

    /// Rewrites the curve in a new variable `u`, where `x = scale·u + offset`
    /// and the same map applies to `y`.
    fn substitute(&self, scale: f64, offset: f64) -> Self {
        let [a0, a1, a2, a3, a4, a5] = self.coefficients;
        let (s, o) = (scale, offset);

        Self::new([
            a0 + (a1 + a3) * o + (a2 + a4 + a5) * o * o,
            (a1 + (2.0 * a2 + a5) * o) * s,
            a2 * s * s,
            (a3 + (2.0 * a4 + a5) * o) * s,
            a4 * s * s,
            a5 * s * s,
        ])
    }
}
