//! Conversions between net rated efficiency and gross energy input ratio.
//!
//! Rated efficiencies (EER in Btu/Wh, COP in W/W) are net values: they include
//! the indoor fan's power draw and its heat. Performance curves work with the
//! gross compressor-side energy input ratio (EIR, W/W). The conversions here
//! add or remove the rated fan contribution in closed form.

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

/// Btu per watt-hour.
pub const BTU_PER_WATT_HOUR: f64 = 3.412_141_633;

/// Rated indoor airflow per ton of capacity used by the rating procedure.
pub const RATED_CFM_PER_TON: f64 = 400.0;

/// Btu/h per ton of refrigeration.
const BTU_PER_HOUR_PER_TON: f64 = 12_000.0;

/// Rated indoor fan power at a given airflow per ton.
///
/// ```
/// use twine_ratings::models::hvac::seasonal::{FanPower, eer_from_eir, eir_from_eer};
///
/// let fan = FanPower::new(0.365).unwrap();
/// let eir = eir_from_eer(11.2, fan);
/// assert!((eer_from_eir(eir, fan) - 11.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanPower {
    watts_per_cfm: Constrained<f64, NonNegative>,
    cfm_per_ton: f64,
}

impl FanPower {
    /// Creates a fan power in W/cfm at the rated 400 cfm/ton.
    ///
    /// # Errors
    ///
    /// Returns an error if the fan power is negative or `NaN`.
    pub fn new(watts_per_cfm: f64) -> ConstraintResult<Self> {
        Ok(Self {
            watts_per_cfm: NonNegative::new(watts_per_cfm)?,
            cfm_per_ton: RATED_CFM_PER_TON,
        })
    }

    /// Returns the same fan running at a different airflow per ton of capacity.
    #[must_use]
    pub fn at_airflow(self, cfm_per_ton: f64) -> Self {
        Self {
            cfm_per_ton,
            ..self
        }
    }

    /// Fan power in W/cfm.
    #[must_use]
    pub fn watts_per_cfm(&self) -> f64 {
        self.watts_per_cfm.into_inner()
    }

    /// Airflow per ton of capacity, cfm/ton.
    #[must_use]
    pub fn cfm_per_ton(&self) -> f64 {
        self.cfm_per_ton
    }

    /// Fan power per unit of capacity, W per Btu/h.
    #[must_use]
    pub fn watts_per_btu_h(&self) -> f64 {
        self.watts_per_cfm() * self.cfm_per_ton / BTU_PER_HOUR_PER_TON
    }
}

impl From<FanPowerClass> for FanPower {
    fn from(class: FanPowerClass) -> Self {
        Self {
            watts_per_cfm: Constrained::new_unchecked(class.watts_per_cfm()),
            cfm_per_ton: RATED_CFM_PER_TON,
        }
    }
}

/// Common indoor fan motor classes and their rated fan power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanPowerClass {
    /// Permanent split capacitor motor, 0.365 W/cfm.
    PermanentSplitCapacitor,
    /// Electronically commutated (brushless) motor, 0.14 W/cfm.
    ElectronicallyCommutated,
    /// Ductless indoor head, 0.07 W/cfm.
    Ductless,
}

impl FanPowerClass {
    /// Picks the customary ducted fan class for a nameplate SEER.
    ///
    /// Equipment at or below SEER 15 is assumed to ship with a PSC motor.
    #[must_use]
    pub fn for_seer(seer: f64) -> Self {
        if seer <= 15.0 {
            Self::PermanentSplitCapacitor
        } else {
            Self::ElectronicallyCommutated
        }
    }

    /// Rated fan power, W/cfm.
    #[must_use]
    pub fn watts_per_cfm(self) -> f64 {
        match self {
            Self::PermanentSplitCapacitor => 0.365,
            Self::ElectronicallyCommutated => 0.14,
            Self::Ductless => 0.07,
        }
    }
}

/// Converts a net cooling EER (Btu/Wh) to a gross cooling EIR (W/W).
#[must_use]
pub fn eir_from_eer(eer: f64, fan: FanPower) -> f64 {
    let f = fan.watts_per_btu_h();
    BTU_PER_WATT_HOUR * ((1.0 - BTU_PER_WATT_HOUR * f) / eer - f)
}

/// Converts a gross cooling EIR (W/W) to a net cooling EER (Btu/Wh).
#[must_use]
pub fn eer_from_eir(eir: f64, fan: FanPower) -> f64 {
    let f = fan.watts_per_btu_h();
    (1.0 - BTU_PER_WATT_HOUR * f) / (eir / BTU_PER_WATT_HOUR + f)
}

/// Converts a net heating COP to a gross heating EIR (W/W).
#[must_use]
pub fn eir_from_cop(cop: f64, fan: FanPower) -> f64 {
    let f = BTU_PER_WATT_HOUR * fan.watts_per_btu_h();
    (1.0 + f) / cop - f
}

/// Converts a gross heating EIR (W/W) to a net heating COP.
#[must_use]
pub fn cop_from_eir(eir: f64, fan: FanPower) -> f64 {
    let f = BTU_PER_WATT_HOUR * fan.watts_per_btu_h();
    (1.0 + f) / (eir + f)
}
