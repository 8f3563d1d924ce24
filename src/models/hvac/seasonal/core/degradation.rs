use super::InvalidParameters;

/// Cyclic degradation coefficient `C_d`.
///
/// Cycling a compressor to meet a load below its capacity costs efficiency.
/// The part-load factor at part-load ratio `x` is `1 − C_d·(1 − x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Degradation(f64);

impl Degradation {
    pub(super) const LEGACY: Self = Self(0.20);
    pub(super) const SINGLE_SPEED_COOLING: Self = Self(0.07);
    pub(super) const SINGLE_SPEED_HEATING: Self = Self(0.11);
    pub(super) const TWO_SPEED: Self = Self(0.11);
    pub(super) const VARIABLE_SPEED_COOLING: Self = Self(0.25);
    pub(super) const VARIABLE_SPEED_HEATING: Self = Self(0.24);
    pub(super) const MINI_SPLIT: Self = Self(0.25);

    /// Creates a degradation coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameters::Degradation`] unless `0 ≤ coefficient < 1`.
    pub fn new(coefficient: f64) -> Result<Self, InvalidParameters> {
        if (0.0..1.0).contains(&coefficient) {
            Ok(Self(coefficient))
        } else {
            Err(InvalidParameters::Degradation(coefficient))
        }
    }

    /// Returns `C_d`.
    #[must_use]
    pub fn coefficient(self) -> f64 {
        self.0
    }

    /// Part-load factor at part-load ratio `plr`.
    #[must_use]
    pub fn part_load_factor(self, plr: f64) -> f64 {
        1.0 - self.0 * (1.0 - plr)
    }
}
