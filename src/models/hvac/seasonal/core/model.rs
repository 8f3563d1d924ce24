//! Forward seasonal calculation as a [`Model`].

use twine_core::Model;

use super::{
    CoolingConditions, Degradation, FanPower, HeatingConditions, Mode, RatingError,
    SeasonalPerformance, SpeedProfile, SpeedTable, seasonal_cooling, seasonal_heating,
};

/// Maps a nominal rated efficiency to seasonal performance.
///
/// The input is the highest speed's net EER (Btu/Wh) in cooling or net COP
/// in heating. Each call expands the speed table afresh; the model holds no
/// state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalModel {
    table: SpeedTable,
    mode: Mode,
    fan: FanPower,
    degradation: Degradation,
    cooling: CoolingConditions,
    heating: HeatingConditions,
}

impl SeasonalModel {
    /// Creates a model at the standard rating conditions.
    #[must_use]
    pub fn new(table: SpeedTable, mode: Mode, fan: FanPower, degradation: Degradation) -> Self {
        Self {
            table,
            mode,
            fan,
            degradation,
            cooling: CoolingConditions::default(),
            heating: HeatingConditions::default(),
        }
    }

    /// Replaces the rating conditions.
    #[must_use]
    pub fn with_conditions(self, cooling: CoolingConditions, heating: HeatingConditions) -> Self {
        Self {
            cooling,
            heating,
            ..self
        }
    }

    /// Operating mode being rated.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Expands the speed table at a nominal efficiency.
    ///
    /// # Errors
    ///
    /// Returns an error if any speed's EIR is not positive and finite.
    pub fn profile(&self, nominal: f64) -> Result<SpeedProfile, RatingError> {
        SpeedProfile::expand(&self.table, self.mode, nominal, self.fan, self.degradation)
    }

    /// Highest nominal efficiency the model accepts.
    #[must_use]
    pub fn efficiency_limit(&self) -> f64 {
        self.table.efficiency_limit(self.mode, self.fan)
    }
}

impl Model for SeasonalModel {
    type Input = f64;
    type Output = SeasonalPerformance;
    type Error = RatingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let profile = self.profile(*input)?;
        match self.mode {
            Mode::Cooling => seasonal_cooling(&profile, &self.cooling),
            Mode::Heating => seasonal_heating(&profile, &self.heating),
        }
    }
}
