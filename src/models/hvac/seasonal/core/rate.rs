//! Rating entry point: from a nameplate rating to rated per-speed performance.

use twine_core::Model;

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{
    CoolingConditions, EfficiencySource, Equipment, FanPower, FanPowerClass, HeatingConditions,
    InvalidParameters, Mode, RatingError, RatingResult, SeasonalModel, SolverConfig,
    solve_rated_efficiency,
};

/// Fraction of the efficiency limit used as the highest bracket value.
const LIMIT_MARGIN: f64 = 0.95;

/// Kind of seasonal rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Seasonal energy efficiency ratio, Btu/Wh.
    Seer,
    /// Heating seasonal performance factor, Btu/Wh.
    Hspf,
}

impl MetricKind {
    /// Operating mode the metric rates.
    #[must_use]
    pub fn mode(self) -> Mode {
        match self {
            Self::Seer => Mode::Cooling,
            Self::Hspf => Mode::Heating,
        }
    }
}

/// A nameplate seasonal rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingTarget {
    kind: MetricKind,
    value: Constrained<f64, StrictlyPositive>,
}

impl RatingTarget {
    /// Creates a target.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameters::Constraint`] if `value` is not strictly positive.
    pub fn new(kind: MetricKind, value: f64) -> Result<Self, InvalidParameters> {
        Ok(Self {
            kind,
            value: StrictlyPositive::new(value)?,
        })
    }

    /// Creates a SEER target.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameters::Constraint`] if `seer` is not strictly positive.
    pub fn seer(seer: f64) -> Result<Self, InvalidParameters> {
        Self::new(MetricKind::Seer, seer)
    }

    /// Creates an HSPF target.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameters::Constraint`] if `hspf` is not strictly positive.
    pub fn hspf(hspf: f64) -> Result<Self, InvalidParameters> {
        Self::new(MetricKind::Hspf, hspf)
    }

    /// Kind of rating.
    #[must_use]
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Rating value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value.into_inner()
    }

    /// Closed-form estimate of the nominal efficiency for this rating.
    ///
    /// Returns an EER (Btu/Wh) for SEER targets and a COP for HSPF targets.
    /// Used only when the seasonal inversion does not converge.
    #[must_use]
    pub fn correlation_efficiency(&self) -> f64 {
        let x = self.value();
        match self.kind {
            MetricKind::Seer => 1.1088 * x - 0.0182 * x * x,
            MetricKind::Hspf => 0.7134 * x - 0.0296 * x * x,
        }
    }
}

/// A request to rate one piece of equipment in one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingRequest {
    /// Equipment name, used in error reports.
    pub name: String,

    /// Equipment archetype.
    pub equipment: Equipment,

    /// Nameplate rating to reproduce.
    pub target: RatingTarget,

    /// Rated indoor fan power.
    pub fan_power: FanPower,
}

impl RatingRequest {
    /// Creates a request with the customary fan power for the equipment.
    ///
    /// Mini-splits use a ductless indoor head. Ducted equipment uses a PSC
    /// motor, or an ECM motor above SEER 15.
    #[must_use]
    pub fn new(name: impl Into<String>, equipment: Equipment, target: RatingTarget) -> Self {
        let class = match (&equipment, target.kind()) {
            (Equipment::MiniSplitHeatPump(_), _) => FanPowerClass::Ductless,
            (_, MetricKind::Seer) => FanPowerClass::for_seer(target.value()),
            (_, MetricKind::Hspf) => FanPowerClass::PermanentSplitCapacitor,
        };

        Self {
            name: name.into(),
            equipment,
            target,
            fan_power: class.into(),
        }
    }

    /// Replaces the rated fan power.
    #[must_use]
    pub fn with_fan_power(self, fan_power: FanPower) -> Self {
        Self { fan_power, ..self }
    }
}

/// What to do when the inversion hits its iteration limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConvergencePolicy {
    /// Report [`RatingError::ConvergenceFailure`].
    #[default]
    Fail,

    /// Fall back to [`RatingTarget::correlation_efficiency`] and flag the
    /// result with [`EfficiencySource::Correlation`].
    Correlation,
}

/// Configuration for [`rate`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingConfig {
    /// Bisection settings.
    pub solver: SolverConfig,

    /// Handling of convergence failures.
    pub policy: ConvergencePolicy,

    /// Cooling season conditions.
    pub cooling: CoolingConditions,

    /// Heating season conditions.
    pub heating: HeatingConditions,
}

/// Rates equipment against a nameplate seasonal rating.
///
/// Selects the class speed table and degradation coefficient, solves for the
/// nominal rated efficiency that reproduces the target, and returns the
/// per-speed rated performance at that efficiency.
///
/// # Errors
///
/// Returns [`RatingError::InvalidParameters`] before iterating if the
/// equipment cannot be rated in the target's mode, and otherwise any error
/// from [`solve_rated_efficiency`] not covered by the convergence policy.
pub fn rate(request: &RatingRequest, config: &RatingConfig) -> Result<RatingResult, RatingError> {
    let mode = request.target.kind().mode();
    let equipment = &request.equipment;

    let table = equipment.speed_table(mode)?;
    let degradation = equipment.degradation(mode, request.target.value());
    let model = SeasonalModel::new(table, mode, request.fan_power, degradation)
        .with_conditions(config.cooling, config.heating);

    let [lo, hi] = equipment.bracket(mode);
    let bracket = [lo, hi.min(LIMIT_MARGIN * model.efficiency_limit())];

    let solved = solve_rated_efficiency(
        request.target.value,
        &model,
        bracket,
        &config.solver,
        &format!("{} ({equipment})", request.name),
    );

    let (nominal, source, performance) = match solved {
        Ok(solved) => (
            solved.nominal,
            EfficiencySource::Solved {
                iters: solved.iters,
            },
            solved.performance,
        ),
        Err(RatingError::ConvergenceFailure { .. })
            if config.policy == ConvergencePolicy::Correlation =>
        {
            let nominal = request.target.correlation_efficiency();
            (nominal, EfficiencySource::Correlation, model.call(&nominal)?)
        }
        Err(err) => return Err(err),
    };

    Ok(RatingResult {
        name: request.name.clone(),
        equipment: equipment.clone(),
        target: request.target,
        nominal_efficiency: nominal,
        source,
        profile: model.profile(nominal)?,
        performance,
    })
}
