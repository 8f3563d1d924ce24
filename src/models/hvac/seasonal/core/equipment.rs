//! Equipment archetypes and their class-level rating parameters.

use std::fmt;

use crate::support::curve::Biquadratic;

use super::{
    Degradation, InvalidParameters, SpeedSpec, SpeedTable,
    tables::{self, DuctedTable, MINI_SPLIT_SPEEDS, MiniSplitTable},
};

/// Operating mode of a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Cooling, rated by SEER.
    Cooling,
    /// Heating, rated by HSPF.
    Heating,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cooling => f.write_str("cooling"),
            Self::Heating => f.write_str("heating"),
        }
    }
}

/// Compressor staging of ducted equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Staging {
    /// One compressor speed, cycled on and off.
    SingleSpeed,
    /// Low and high compressor speeds.
    TwoSpeed,
    /// Variable-speed compressor, represented by four speeds.
    VariableSpeed,
}

impl Staging {
    /// Picks the staging for a speed count.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameters::UnsupportedSpeedCount`] unless the count is 1, 2 or 4.
    pub fn from_speed_count(count: usize) -> Result<Self, InvalidParameters> {
        match count {
            1 => Ok(Self::SingleSpeed),
            2 => Ok(Self::TwoSpeed),
            4 => Ok(Self::VariableSpeed),
            _ => Err(InvalidParameters::UnsupportedSpeedCount(count)),
        }
    }

    /// Number of speeds in the class table.
    #[must_use]
    pub fn speed_count(self) -> usize {
        match self {
            Self::SingleSpeed => 1,
            Self::TwoSpeed => 2,
            Self::VariableSpeed => 4,
        }
    }

    fn table(self, mode: Mode) -> &'static DuctedTable {
        match (mode, self) {
            (Mode::Cooling, Self::SingleSpeed) => &tables::COOLING_SINGLE_SPEED,
            (Mode::Cooling, Self::TwoSpeed) => &tables::COOLING_TWO_SPEED,
            (Mode::Cooling, Self::VariableSpeed) => &tables::COOLING_VARIABLE_SPEED,
            (Mode::Heating, Self::SingleSpeed) => &tables::HEATING_SINGLE_SPEED,
            (Mode::Heating, Self::TwoSpeed) => &tables::HEATING_TWO_SPEED,
            (Mode::Heating, Self::VariableSpeed) => &tables::HEATING_VARIABLE_SPEED,
        }
    }
}

/// The canonical mini-split speeds retained for a rating.
///
/// Mini-split tables describe ten canonical speeds, indexed 0 through 9 from
/// lowest to highest capacity. A rating keeps a strictly increasing subset of
/// at least four of them; ratios are normalized to the highest one kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpeedSelection(Vec<usize>);

impl SpeedSelection {
    /// Minimum number of retained speeds.
    pub const MIN_SPEEDS: usize = 4;

    /// Creates a selection from canonical speed indices.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameters::SpeedSelection`] if fewer than four indices
    /// are given, if any index is 10 or above, or if they do not strictly increase.
    pub fn new(indices: impl Into<Vec<usize>>) -> Result<Self, InvalidParameters> {
        let indices = indices.into();

        let reason = if indices.len() < Self::MIN_SPEEDS {
            Some("at least four speeds are required")
        } else if indices.iter().any(|&i| i >= MINI_SPLIT_SPEEDS) {
            Some("speed indices must be below 10")
        } else if indices.windows(2).any(|w| w[1] <= w[0]) {
            Some("speed indices must strictly increase")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidParameters::SpeedSelection { indices, reason }),
            None => Ok(Self(indices)),
        }
    }

    /// Returns the retained canonical indices.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl Default for SpeedSelection {
    fn default() -> Self {
        Self(vec![1, 3, 5, 9])
    }
}

/// Equipment archetype being rated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Equipment {
    /// Ducted air conditioner, cooling only.
    AirConditioner(Staging),
    /// Ducted air-source heat pump.
    HeatPump(Staging),
    /// Ductless mini-split heat pump.
    MiniSplitHeatPump(SpeedSelection),
}

impl Equipment {
    /// Returns true if the equipment can be rated in `mode`.
    #[must_use]
    pub fn supports(&self, mode: Mode) -> bool {
        !matches!((self, mode), (Self::AirConditioner(_), Mode::Heating))
    }

    /// Number of speeds the rating models.
    #[must_use]
    pub fn speed_count(&self) -> usize {
        match self {
            Self::AirConditioner(staging) | Self::HeatPump(staging) => staging.speed_count(),
            Self::MiniSplitHeatPump(selection) => selection.indices().len(),
        }
    }

    /// Builds the normalized speed table for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameters::UnsupportedMode`] if the equipment cannot
    /// operate in `mode`.
    pub fn speed_table(&self, mode: Mode) -> Result<SpeedTable, InvalidParameters> {
        if !self.supports(mode) {
            return Err(InvalidParameters::UnsupportedMode {
                equipment: self.to_string(),
                mode,
            });
        }

        match self {
            Self::AirConditioner(staging) | Self::HeatPump(staging) => {
                ducted_speeds(staging.table(mode))
            }
            Self::MiniSplitHeatPump(selection) => {
                let table = match mode {
                    Mode::Cooling => &tables::MINI_SPLIT_COOLING,
                    Mode::Heating => &tables::MINI_SPLIT_HEATING,
                };
                mini_split_speeds(table, selection)
            }
        }
    }

    /// Cyclic degradation coefficient for this class at a nameplate rating.
    ///
    /// Single-speed equipment rated below SEER 13 (cooling) or HSPF 7
    /// (heating) uses the older default of 0.20.
    #[must_use]
    pub fn degradation(&self, mode: Mode, nameplate: f64) -> Degradation {
        match (self, mode) {
            (Self::MiniSplitHeatPump(_), _) => Degradation::MINI_SPLIT,
            (Self::AirConditioner(staging) | Self::HeatPump(staging), Mode::Cooling) => {
                match staging {
                    Staging::SingleSpeed if nameplate < 13.0 => Degradation::LEGACY,
                    Staging::SingleSpeed => Degradation::SINGLE_SPEED_COOLING,
                    Staging::TwoSpeed => Degradation::TWO_SPEED,
                    Staging::VariableSpeed => Degradation::VARIABLE_SPEED_COOLING,
                }
            }
            (Self::AirConditioner(staging) | Self::HeatPump(staging), Mode::Heating) => {
                match staging {
                    Staging::SingleSpeed if nameplate < 7.0 => Degradation::LEGACY,
                    Staging::SingleSpeed => Degradation::SINGLE_SPEED_HEATING,
                    Staging::TwoSpeed => Degradation::TWO_SPEED,
                    Staging::VariableSpeed => Degradation::VARIABLE_SPEED_HEATING,
                }
            }
        }
    }

    /// Search bracket for the rated efficiency: EER in Btu/Wh for cooling,
    /// COP for heating.
    #[must_use]
    pub fn bracket(&self, mode: Mode) -> [f64; 2] {
        match (self, mode) {
            (Self::MiniSplitHeatPump(_), Mode::Cooling) => [1.0, 40.0],
            (Self::MiniSplitHeatPump(_), Mode::Heating) => [1.2, 15.0],
            (_, Mode::Cooling) => [2.0, 50.0],
            (_, Mode::Heating) => [1.5, 20.0],
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let staging = |staging: &Staging| match staging {
            Staging::SingleSpeed => "single-speed",
            Staging::TwoSpeed => "two-speed",
            Staging::VariableSpeed => "variable-speed",
        };

        match self {
            Self::AirConditioner(s) => write!(f, "{} air conditioner", staging(s)),
            Self::HeatPump(s) => write!(f, "{} heat pump", staging(s)),
            Self::MiniSplitHeatPump(selection) => {
                write!(f, "mini-split heat pump {:?}", selection.indices())
            }
        }
    }
}

fn ducted_speeds(table: &DuctedTable) -> Result<SpeedTable, InvalidParameters> {
    let speeds = table
        .capacity_ratios
        .iter()
        .zip(table.airflow_ratios)
        .zip(table.efficiency_ratios)
        .zip(table.capacity_curves.iter().zip(table.eir_curves))
        .map(|(((&capacity, &airflow), &efficiency), (&cap_curve, &eir_curve))| SpeedSpec {
            capacity_ratio: capacity,
            cfm_per_ton: super::RATED_CFM_PER_TON * airflow / capacity,
            efficiency_ratio: efficiency,
            capacity_curve: cap_curve,
            eir_curve,
        })
        .collect();

    SpeedTable::new(speeds)
}

fn mini_split_speeds(
    table: &MiniSplitTable,
    selection: &SpeedSelection,
) -> Result<SpeedTable, InvalidParameters> {
    let capacity_curve = Biquadratic::from_celsius(table.capacity_curve_celsius);
    let eir_curve = Biquadratic::from_celsius(table.eir_curve_celsius);

    let speeds = selection
        .indices()
        .iter()
        .map(|&index| SpeedSpec {
            capacity_ratio: table.capacity_ratio(index),
            cfm_per_ton: table.cfm_per_ton(index),
            efficiency_ratio: table.efficiency_ratios[index],
            capacity_curve,
            eir_curve,
        })
        .collect();

    SpeedTable::new(speeds)
}
