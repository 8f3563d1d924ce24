use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::support::constraint::ConstraintError;

use super::Mode;

/// Errors that can occur while computing or inverting a seasonal rating.
#[derive(Debug, Error)]
pub enum RatingError {
    /// The request was rejected before any iteration started.
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] InvalidParameters),

    /// The search bracket cannot reach the requested seasonal metric.
    #[error("target {target} is outside the achievable range {achievable:?}")]
    TargetOutOfRange {
        /// Requested seasonal metric.
        target: f64,

        /// Seasonal metric at the low and high ends of the search bracket.
        achievable: [f64; 2],
    },

    /// The solver reached the iteration limit without converging.
    #[error("rating for {equipment} did not converge: residual={residual}")]
    ConvergenceFailure {
        /// Name of the equipment being rated.
        equipment: String,

        /// Best metric residual (achieved − target) encountered.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// A curve or operating point produced a non-finite value.
    #[error("non-finite {quantity}: {value}")]
    NonFinite {
        /// What was being computed.
        quantity: &'static str,

        /// The offending value.
        value: f64,
    },

    /// A speed has no positive net capacity or power at a bin temperature.
    #[error(
        "{speed} speed cannot run at {outdoor} °F: capacity={capacity}, power={power}"
    )]
    NonPositiveOperatingPoint {
        /// Which speed.
        speed: &'static str,

        /// Outdoor temperature, °F.
        outdoor: f64,

        /// Net capacity per unit of nominal capacity.
        capacity: f64,

        /// Net power per unit of nominal capacity, W per Btu/h.
        power: f64,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),
}

impl RatingError {
    /// Passes `value` through if it is finite.
    pub(super) fn check_finite(quantity: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { quantity, value })
        }
    }
}

impl From<ConstraintError> for RatingError {
    fn from(err: ConstraintError) -> Self {
        Self::InvalidParameters(err.into())
    }
}

/// Reasons a rating request is rejected up front.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum InvalidParameters {
    /// A numeric input violated its constraint.
    #[error("constraint violated: {0}")]
    Constraint(#[from] ConstraintError),

    /// Ducted equipment comes in 1, 2 or 4 speeds.
    #[error("unsupported speed count: {0}")]
    UnsupportedSpeedCount(usize),

    /// The equipment cannot operate in the requested mode.
    #[error("{equipment} has no {mode} mode")]
    UnsupportedMode {
        /// Equipment description.
        equipment: String,

        /// Requested mode.
        mode: Mode,
    },

    /// A mini-split speed selection is too short, out of range or unordered.
    #[error("invalid speed selection {indices:?}: {reason}")]
    SpeedSelection {
        /// The rejected indices.
        indices: Vec<usize>,

        /// What is wrong with them.
        reason: &'static str,
    },

    /// Capacity or airflow ratios do not strictly increase with speed.
    #[error("speed ratios must strictly increase: {quantity} at speed {speed}")]
    NonMonotonicSpeeds {
        /// Which ratio is out of order.
        quantity: &'static str,

        /// Index of the first offending speed.
        speed: usize,
    },

    /// A per-speed table value that is not positive and finite.
    #[error("speed {speed} has invalid {quantity} {value}")]
    SpeedValue {
        /// Which value is invalid.
        quantity: &'static str,

        /// Index of the offending speed.
        speed: usize,

        /// The rejected value.
        value: f64,
    },

    /// A speed's gross energy input ratio is not positive.
    #[error("speed {speed} has non-positive EIR {eir}")]
    NonPositiveEir {
        /// Index of the offending speed.
        speed: usize,

        /// The computed EIR.
        eir: f64,
    },

    /// A speed profile was expanded for the other mode.
    #[error("expected a {expected} profile, found {found}")]
    ProfileMode {
        /// Mode the calculation needs.
        expected: Mode,

        /// Mode of the supplied profile.
        found: Mode,
    },

    /// A degradation coefficient outside `[0, 1)`.
    #[error("degradation coefficient {0} is outside [0, 1)")]
    Degradation(f64),

    /// A cooling sizing factor that is not positive and finite.
    #[error("sizing factor {0} must be positive and finite")]
    SizingFactor(f64),

    /// A heating load factor that is not positive and finite.
    #[error("load factor {0} must be positive and finite")]
    LoadFactor(f64),

    /// Lockout temperatures where `off` is above `on`.
    #[error("lockout off temperature {off} °F is above on temperature {on} °F")]
    Lockout {
        /// Compressor cut-out temperature, °F.
        off: f64,

        /// Compressor cut-in temperature, °F.
        on: f64,
    },
}
