//! Problem formulation for rated efficiency inversion.

use std::convert::Infallible;

use twine_core::EquationProblem;

use crate::models::hvac::seasonal::core::SeasonalPerformance;

/// Equation problem definition for seasonal metric matching.
///
/// Computes the residual as `achieved_metric - target_metric`.
pub(super) struct TargetMetric {
    target: f64,
}

impl TargetMetric {
    pub(super) fn new(target: f64) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for TargetMetric {
    type Input = f64;
    type Output = SeasonalPerformance;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.metric - self.target])
    }
}
