use twine_solvers::equation::bisection;

/// Solver configuration for rated efficiency inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the nominal efficiency (EER or COP).
    pub efficiency_tol: f64,

    /// Absolute tolerance on the seasonal metric residual (achieved − target).
    pub metric_tol: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            efficiency_tol: 1e-4,
            metric_tol: 1e-4,
        }
    }
}

impl SolverConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.efficiency_tol,
            x_rel_tol: 0.0,
            residual_tol: self.metric_tol,
        }
    }
}
