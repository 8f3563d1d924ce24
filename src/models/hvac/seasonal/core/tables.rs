//! Class-specific speed and curve tables.
//!
//! These are fixed, lab-derived constants keyed by equipment class. Ducted
//! tables list one row per compressor speed, lowest capacity first. Mini-split
//! tables describe ten canonical speeds spanning a capacity range.

use crate::support::curve::Biquadratic;

/// Speed table for a ducted equipment class.
#[derive(Debug)]
pub(super) struct DuctedTable {
    pub(super) capacity_ratios: &'static [f64],
    pub(super) airflow_ratios: &'static [f64],
    /// Net rated efficiency of each speed relative to the highest speed.
    pub(super) efficiency_ratios: &'static [f64],
    pub(super) capacity_curves: &'static [Biquadratic],
    pub(super) eir_curves: &'static [Biquadratic],
}

/// Speed table for a ductless mini-split class.
#[derive(Debug)]
pub(super) struct MiniSplitTable {
    /// Capacity of the lowest and highest canonical speed relative to nominal.
    pub(super) capacity_range: [f64; 2],
    /// Airflow per ton at the lowest and highest canonical speed, cfm/ton.
    pub(super) cfm_per_ton_range: [f64; 2],
    /// Net rated efficiency of each canonical speed relative to the highest.
    pub(super) efficiency_ratios: [f64; MINI_SPLIT_SPEEDS],
    /// Capacity curve coefficients shared by all speeds, fit in °C.
    pub(super) capacity_curve_celsius: [f64; 6],
    /// EIR curve coefficients shared by all speeds, fit in °C.
    pub(super) eir_curve_celsius: [f64; 6],
}

impl MiniSplitTable {
    /// Capacity ratio of canonical speed `index`.
    pub(super) fn capacity_ratio(&self, index: usize) -> f64 {
        linear_step(self.capacity_range, index)
    }

    /// Airflow per ton of canonical speed `index`, cfm/ton.
    pub(super) fn cfm_per_ton(&self, index: usize) -> f64 {
        linear_step(self.cfm_per_ton_range, index)
    }
}

/// Number of canonical mini-split speeds.
pub const MINI_SPLIT_SPEEDS: usize = 10;

#[allow(clippy::cast_precision_loss)]
fn linear_step([low, high]: [f64; 2], index: usize) -> f64 {
    low + (high - low) * index as f64 / (MINI_SPLIT_SPEEDS - 1) as f64
}

pub(super) static COOLING_SINGLE_SPEED: DuctedTable = DuctedTable {
    capacity_ratios: &[1.0],
    airflow_ratios: &[1.0],
    efficiency_ratios: &[1.0],
    capacity_curves: &[Biquadratic::new([
        3.686_376_57,
        -0.098_352_478,
        0.000_956_357,
        0.005_838_141,
        -0.000_012_7,
        -0.000_131_702,
    ])],
    eir_curves: &[Biquadratic::new([
        -3.437_356_399,
        0.136_656_369,
        -0.001_049_231,
        -0.007_937_8,
        0.000_185_435,
        -0.000_144_1,
    ])],
};

pub(super) static COOLING_TWO_SPEED: DuctedTable = DuctedTable {
    capacity_ratios: &[0.72, 1.0],
    airflow_ratios: &[0.86, 1.0],
    efficiency_ratios: &[1.07, 1.0],
    capacity_curves: &[
        Biquadratic::new([
            3.998_418_659,
            -0.108_728_222,
            0.001_056_818,
            0.007_512_314,
            -0.000_013_9,
            -0.000_164_716,
        ]),
        Biquadratic::new([
            3.466_810_106,
            -0.091_476_056,
            0.000_901_205,
            0.004_163_355,
            -0.000_009_19,
            -0.000_110_829,
        ]),
    ],
    eir_curves: &[
        Biquadratic::new([
            -4.282_911_381,
            0.181_023_691,
            -0.001_357_391,
            -0.026_310_378,
            0.000_333_282,
            -0.000_197_405,
        ]),
        Biquadratic::new([
            -3.557_757_517,
            0.112_737_397,
            -0.000_731_381,
            0.013_184_877,
            0.000_132_645,
            -0.000_338_716,
        ]),
    ],
};

pub(super) static COOLING_VARIABLE_SPEED: DuctedTable = DuctedTable {
    capacity_ratios: &[0.36, 0.51, 0.67, 1.0],
    airflow_ratios: &[0.42, 0.54, 0.68, 1.0],
    efficiency_ratios: &[1.17, 1.15, 1.09, 1.0],
    capacity_curves: &[
        Biquadratic::new([
            3.633_968_57,
            -0.093_606_786,
            0.000_918_114,
            0.011_852_512,
            -0.000_031_830_7,
            -0.000_206_446,
        ]),
        Biquadratic::new([
            1.808_745_668,
            -0.041_963_484,
            0.000_545_263,
            0.011_346_539,
            -0.000_023_838,
            -0.000_205_162,
        ]),
        Biquadratic::new([
            0.112_814_745,
            0.005_638_646,
            0.000_203_427,
            0.011_981_545,
            -0.000_020_795_7,
            -0.000_212_379,
        ]),
        Biquadratic::new([
            1.141_506_147,
            -0.023_973_142,
            0.000_420_763,
            0.010_383_34,
            -0.000_017_463_3,
            -0.000_197_092,
        ]),
    ],
    eir_curves: &[
        Biquadratic::new([
            -1.380_674_217,
            0.083_176_919,
            -0.000_676_646,
            -0.028_120_348,
            0.000_320_593,
            -0.000_061_614_7,
        ]),
        Biquadratic::new([
            4.817_787_321,
            -0.100_122_768,
            0.000_673_499,
            -0.026_889_359,
            0.000_294_45,
            -0.000_039_033_1,
        ]),
        Biquadratic::new([
            -1.153_891_78,
            0.056_231_56,
            -0.000_347_862,
            -0.011_818_184,
            0.000_160_046,
            -0.000_058_720_8,
        ]),
        Biquadratic::new([
            -2.976_455_034,
            0.115_186_164,
            -0.000_852_001,
            0.004_678_056,
            0.000_147_17,
            -0.000_265_359,
        ]),
    ],
};

pub(super) static HEATING_SINGLE_SPEED: DuctedTable = DuctedTable {
    capacity_ratios: &[1.0],
    airflow_ratios: &[1.0],
    efficiency_ratios: &[1.0],
    capacity_curves: &[Biquadratic::new([
        0.566_333_415,
        -0.000_744_164,
        -0.000_010_3,
        0.009_414_634,
        0.000_050_6,
        -0.000_006_75,
    ])],
    eir_curves: &[Biquadratic::new([
        0.718_398_423,
        0.003_498_178,
        0.000_142_202,
        -0.005_724_331,
        0.000_140_85,
        -0.000_215_321,
    ])],
};

pub(super) static HEATING_TWO_SPEED: DuctedTable = DuctedTable {
    capacity_ratios: &[0.72, 1.0],
    airflow_ratios: &[0.8, 1.0],
    efficiency_ratios: &[1.10, 1.0],
    capacity_curves: &[
        Biquadratic::new([
            0.335_690_634,
            0.002_405_123,
            -0.000_046_4,
            0.013_498_735,
            0.000_049_9,
            -0.000_007_25,
        ]),
        Biquadratic::new([
            0.306_358_843,
            0.005_376_987,
            -0.000_057_9,
            0.011_645_092,
            0.000_059_1,
            -0.000_020_3,
        ]),
    ],
    eir_curves: &[
        Biquadratic::new([
            0.363_381_71,
            0.013_523_725,
            0.000_258_872,
            -0.009_450_269,
            0.000_439_519,
            -0.000_653_723,
        ]),
        Biquadratic::new([
            0.981_100_941,
            -0.005_158_493,
            0.000_243_416,
            -0.005_274_352,
            0.000_230_742,
            -0.000_336_954,
        ]),
    ],
};

pub(super) static HEATING_VARIABLE_SPEED: DuctedTable = DuctedTable {
    capacity_ratios: &[0.33, 0.56, 0.78, 1.0],
    airflow_ratios: &[0.63, 0.76, 0.88, 1.0],
    efficiency_ratios: &[1.21, 1.15, 1.08, 1.0],
    capacity_curves: &[
        Biquadratic::new([
            0.304_192_655,
            -0.003_972_566,
            0.000_019_643_2,
            0.024_471_251,
            -0.000_000_774_126,
            -0.000_084_132_3,
        ]),
        Biquadratic::new([
            0.496_381_324,
            -0.001_447_92,
            0.0,
            0.016_020_855,
            0.000_020_344_7,
            -0.000_058_411_8,
        ]),
        Biquadratic::new([
            0.697_171_186,
            -0.006_189_599,
            0.000_033_707_7,
            0.014_291_981,
            0.000_010_563_3,
            -0.000_038_795_6,
        ]),
        Biquadratic::new([
            0.555_513_805,
            -0.001_337_363,
            -0.000_002_651_17,
            0.014_328_826,
            0.000_016_384_9,
            -0.000_048_071_1,
        ]),
    ],
    eir_curves: &[
        Biquadratic::new([
            0.708_311_527,
            0.020_732_093,
            0.000_391_479,
            -0.037_640_031,
            0.000_979_937,
            -0.001_079_042,
        ]),
        Biquadratic::new([
            0.025_480_155,
            0.020_169_585,
            0.000_121_341,
            -0.004_429_789,
            0.000_166_472,
            -0.000_364_47,
        ]),
        Biquadratic::new([
            0.379_003_189,
            0.014_195_012,
            0.000_082_104_6,
            -0.008_894_061,
            0.000_151_519,
            -0.000_210_299,
        ]),
        Biquadratic::new([
            0.690_404_655,
            0.006_166_19,
            0.000_137_643,
            -0.009_350_199,
            0.000_153_427,
            -0.000_213_258,
        ]),
    ],
};

pub(super) static MINI_SPLIT_COOLING: MiniSplitTable = MiniSplitTable {
    capacity_range: [0.4, 1.2],
    cfm_per_ton_range: [200.0, 425.0],
    efficiency_ratios: [
        1.901, 1.859, 1.746, 1.609, 1.474, 1.353, 1.247, 1.156, 1.079, 1.0,
    ],
    capacity_curve_celsius: [
        1.008_993_521_905_866,
        0.006_512_749_025_457,
        0.0,
        0.003_917_565_735_935,
        -0.000_222_646_705_889,
        0.0,
    ],
    eir_curve_celsius: [
        0.429_214_441_601_141,
        -0.003_604_841_598_515,
        0.000_045_783_162_727,
        0.026_490_875_804_937,
        -0.000_159_212_286_878,
        -0.000_159_062_656_483,
    ],
};

pub(super) static MINI_SPLIT_HEATING: MiniSplitTable = MiniSplitTable {
    capacity_range: [0.3, 1.2],
    cfm_per_ton_range: [200.0, 400.0],
    efficiency_ratios: [
        1.792, 1.502, 1.308, 1.207, 1.145, 1.105, 1.077, 1.056, 1.041, 1.0,
    ],
    capacity_curve_celsius: [
        1.152_712_465_590_857_1,
        -0.010_386_676_170_938,
        0.0,
        0.008_652_201_004_69,
        -0.000_019_895_298_1,
        0.0,
    ],
    eir_curve_celsius: [
        0.966_475_472_847_719,
        0.005_914_950_101_249,
        0.000_191_201_688_297,
        -0.012_965_668_198_361,
        0.000_042_253_229_429,
        -0.000_524_002_558_712,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn ducted() -> [&'static DuctedTable; 6] {
        [
            &COOLING_SINGLE_SPEED,
            &COOLING_TWO_SPEED,
            &COOLING_VARIABLE_SPEED,
            &HEATING_SINGLE_SPEED,
            &HEATING_TWO_SPEED,
            &HEATING_VARIABLE_SPEED,
        ]
    }

    #[test]
    fn ducted_tables_are_consistent() {
        for table in ducted() {
            let n = table.capacity_ratios.len();
            assert_eq!(table.airflow_ratios.len(), n);
            assert_eq!(table.efficiency_ratios.len(), n);
            assert_eq!(table.capacity_curves.len(), n);
            assert_eq!(table.eir_curves.len(), n);

            assert!(table.capacity_ratios.windows(2).all(|w| w[1] > w[0]));
            assert!(table.airflow_ratios.windows(2).all(|w| w[1] > w[0]));
            assert_relative_eq!(table.capacity_ratios[n - 1], 1.0);
            assert_relative_eq!(table.efficiency_ratios[n - 1], 1.0);
        }
    }

    #[test]
    fn curves_are_normalized_at_rating_conditions() {
        let cooling = [
            &COOLING_SINGLE_SPEED,
            &COOLING_TWO_SPEED,
            &COOLING_VARIABLE_SPEED,
        ];
        for table in cooling {
            for (cap, eir) in table.capacity_curves.iter().zip(table.eir_curves) {
                assert_relative_eq!(cap.evaluate(67.0, 95.0), 1.0, epsilon = 0.02);
                assert_relative_eq!(eir.evaluate(67.0, 95.0), 1.0, epsilon = 0.02);
            }
        }

        let heating = [
            &HEATING_SINGLE_SPEED,
            &HEATING_TWO_SPEED,
            &HEATING_VARIABLE_SPEED,
        ];
        for table in heating {
            for (cap, eir) in table.capacity_curves.iter().zip(table.eir_curves) {
                assert_relative_eq!(cap.evaluate(70.0, 47.0), 1.0, epsilon = 0.02);
                assert_relative_eq!(eir.evaluate(70.0, 47.0), 1.0, epsilon = 0.08);
            }
        }
    }

    #[test]
    fn mini_split_curves_are_normalized_in_fahrenheit() {
        let cap = Biquadratic::from_celsius(MINI_SPLIT_COOLING.capacity_curve_celsius);
        let eir = Biquadratic::from_celsius(MINI_SPLIT_COOLING.eir_curve_celsius);
        assert_relative_eq!(cap.evaluate(67.0, 95.0), 1.0, epsilon = 0.01);
        assert_relative_eq!(eir.evaluate(67.0, 95.0), 1.0, epsilon = 0.01);

        let cap = Biquadratic::from_celsius(MINI_SPLIT_HEATING.capacity_curve_celsius);
        assert_relative_eq!(cap.evaluate(70.0, 47.0), 1.0, epsilon = 0.01);
    }

    #[test]
    fn mini_split_speed_ranges() {
        for table in [&MINI_SPLIT_COOLING, &MINI_SPLIT_HEATING] {
            assert_relative_eq!(table.capacity_ratio(0), table.capacity_range[0]);
            assert_relative_eq!(
                table.capacity_ratio(MINI_SPLIT_SPEEDS - 1),
                table.capacity_range[1],
                epsilon = 1e-12
            );
            assert_relative_eq!(table.efficiency_ratios[MINI_SPLIT_SPEEDS - 1], 1.0);
            assert!(table.efficiency_ratios.windows(2).all(|w| w[1] < w[0]));
        }
        assert_relative_eq!(MINI_SPLIT_HEATING.capacity_ratio(0), 0.3);
        assert_relative_eq!(MINI_SPLIT_COOLING.cfm_per_ton(9), 425.0, epsilon = 1e-12);
    }
}
