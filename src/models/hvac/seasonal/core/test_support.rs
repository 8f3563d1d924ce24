use crate::support::curve::Biquadratic;

use super::{
    Degradation, Equipment, FanPower, FanPowerClass, Mode, SpeedProfile, SpeedSpec, SpeedTable,
    Staging,
};

pub(super) fn psc_fan() -> FanPower {
    FanPowerClass::PermanentSplitCapacitor.into()
}

/// A curve that evaluates to one everywhere.
pub(super) fn flat_curve() -> Biquadratic {
    Biquadratic::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0])
}

/// A profile with temperature-independent performance at 400 cfm/ton.
pub(super) fn flat_profile(
    mode: Mode,
    capacity_ratios: &[f64],
    efficiency_ratios: &[f64],
    nominal: f64,
    degradation: f64,
) -> SpeedProfile {
    let speeds = capacity_ratios
        .iter()
        .zip(efficiency_ratios)
        .map(|(&capacity_ratio, &efficiency_ratio)| SpeedSpec {
            capacity_ratio,
            cfm_per_ton: 400.0,
            efficiency_ratio,
            capacity_curve: flat_curve(),
            eir_curve: flat_curve(),
        })
        .collect();

    let table = SpeedTable::new(speeds).expect("flat table should be valid");
    SpeedProfile::expand(
        &table,
        mode,
        nominal,
        psc_fan(),
        Degradation::new(degradation).expect("valid degradation"),
    )
    .expect("flat profile should expand")
}

/// Two-speed heat pump cooling profile at a nominal EER.
pub(super) fn two_speed_cooling(eer: f64) -> SpeedProfile {
    let table = Equipment::HeatPump(Staging::TwoSpeed)
        .speed_table(Mode::Cooling)
        .expect("two-speed cooling table");
    SpeedProfile::expand(
        &table,
        Mode::Cooling,
        eer,
        psc_fan(),
        Degradation::new(0.11).expect("valid degradation"),
    )
    .expect("two-speed profile should expand")
}

/// Single-speed heating profile at COP 3 whose capacity falls by 1% of
/// nominal per °F, reaching zero gross capacity at −50 °F.
pub(super) fn fading_heating() -> SpeedProfile {
    let mut profile = flat_profile(Mode::Heating, &[1.0], &[1.0], 3.0, 0.11);
    profile.speeds_mut()[0].capacity_curve = Biquadratic::new([0.5, 0.0, 0.0, 0.01, 0.0, 0.0]);
    profile
}
