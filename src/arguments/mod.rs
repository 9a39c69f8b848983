//! Fundamental arguments of the nutation theory
//!
//! Two families feed the series summation in [`crate::nutationlib`]:
//!
//! - the five Delaunay arguments as arcsecond polynomials (IERS 2003
//!   conventions for l, F, Ω; the MHB2000 expressions for l' and D), wrapped
//!   into a turn before conversion to radians;
//! - the MHB2000 planetary argument set: truncated linear Delaunay
//!   expressions, the eight planetary mean longitudes, and the general
//!   accumulated precession in longitude.
//!
//! All wrapping is floor-modulo, so every wrapped argument lands in
//! `[0, 2π)` no matter the sign of the rate or the century. The general
//! precession `pa` is the one unwrapped exception; it stays a small
//! quadratic.
//!
//! Every function takes Julian centuries of TDB since J2000.0.

use crate::constants::{AS2R, PI2, TURNAS};

/// Mean anomaly of the Moon, l (IERS 2003)
pub fn moon_anomaly(jc: f64) -> f64 {
    ((485_868.249036
        + (1_717_915_923.2178 + (31.8792 + (0.051635 + (-0.000_244_70) * jc) * jc) * jc) * jc)
        .rem_euclid(TURNAS))
        * AS2R
}

/// Mean anomaly of the Sun, l' (MHB2000)
pub fn sun_anomaly(jc: f64) -> f64 {
    ((1_287_104.79305
        + (129_596_581.0481 + (-0.5532 + (0.000_136 + (-0.000_011_49) * jc) * jc) * jc) * jc)
        .rem_euclid(TURNAS))
        * AS2R
}

/// Mean argument of latitude of the Moon, F (IERS 2003)
pub fn moon_latitude(jc: f64) -> f64 {
    ((335_779.526232
        + (1_739_527_262.8478 + (-12.7512 + (-0.001_037 + (0.000_004_17) * jc) * jc) * jc) * jc)
        .rem_euclid(TURNAS))
        * AS2R
}

/// Mean elongation of the Moon from the Sun, D (MHB2000)
pub fn moon_elongation(jc: f64) -> f64 {
    ((1_072_260.70369
        + (1_602_961_601.2090 + (-6.3706 + (0.006_593 + (-0.000_031_69) * jc) * jc) * jc) * jc)
        .rem_euclid(TURNAS))
        * AS2R
}

/// Mean longitude of the Moon's ascending node, Ω (IERS 2003)
pub fn moon_node(jc: f64) -> f64 {
    ((450_160.398036
        + (-6_962_890.5431 + (7.4722 + (0.007_702 + (-0.000_059_39) * jc) * jc) * jc) * jc)
        .rem_euclid(TURNAS))
        * AS2R
}

/// Mean anomaly of the Moon, truncated linear form (MHB2000)
pub fn moon_anomaly_mhb(jc: f64) -> f64 {
    (2.355_555_98 + 8_328.691_426_955_4 * jc).rem_euclid(PI2)
}

/// Mean argument of latitude of the Moon, truncated linear form (MHB2000)
pub fn moon_latitude_mhb(jc: f64) -> f64 {
    (1.627_905_234 + 8_433.466_158_131 * jc).rem_euclid(PI2)
}

/// Mean elongation of the Moon from the Sun, truncated linear form (MHB2000)
pub fn moon_elongation_mhb(jc: f64) -> f64 {
    (5.198_466_741 + 7_771.377_146_812_1 * jc).rem_euclid(PI2)
}

/// Mean longitude of the Moon's ascending node, truncated linear form (MHB2000)
pub fn moon_node_mhb(jc: f64) -> f64 {
    (2.182_439_20 - 33.757_045 * jc).rem_euclid(PI2)
}

/// General accumulated precession in longitude, pa (IERS 2003)
///
/// Not wrapped; over the supported century range it never completes a turn.
pub fn general_precession(jc: f64) -> f64 {
    (0.024_381_750 + 0.000_005_386_91 * jc) * jc
}

/// Mean longitude of Mercury (IERS 2003)
pub fn mercury_longitude(jc: f64) -> f64 {
    (4.402_608_842 + 2_608.790_314_157_4 * jc).rem_euclid(PI2)
}

/// Mean longitude of Venus (IERS 2003)
pub fn venus_longitude(jc: f64) -> f64 {
    (3.176_146_697 + 1_021.328_554_621_1 * jc).rem_euclid(PI2)
}

/// Mean longitude of Earth (IERS 2003)
pub fn earth_longitude(jc: f64) -> f64 {
    (1.753_470_314 + 628.307_584_999_1 * jc).rem_euclid(PI2)
}

/// Mean longitude of Mars (IERS 2003)
pub fn mars_longitude(jc: f64) -> f64 {
    (6.203_480_913 + 334.061_242_670_0 * jc).rem_euclid(PI2)
}

/// Mean longitude of Jupiter (IERS 2003)
pub fn jupiter_longitude(jc: f64) -> f64 {
    (0.599_546_497 + 52.969_096_264_1 * jc).rem_euclid(PI2)
}

/// Mean longitude of Saturn (IERS 2003)
pub fn saturn_longitude(jc: f64) -> f64 {
    (0.874_016_757 + 21.329_910_496_0 * jc).rem_euclid(PI2)
}

/// Mean longitude of Uranus (IERS 2003)
pub fn uranus_longitude(jc: f64) -> f64 {
    (5.481_293_872 + 7.478_159_856_7 * jc).rem_euclid(PI2)
}

/// Mean longitude of Neptune (MHB2000)
pub fn neptune_longitude(jc: f64) -> f64 {
    (5.321_159_000 + 3.812_777_400_0 * jc).rem_euclid(PI2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    // 2016-07-23 00:00:00 TDB
    const JC: f64 = 0.165_571_526_351_813_82;

    #[rstest]
    #[case(moon_anomaly, 5.332_129_578_825_667_5)]
    #[case(sun_anomaly, 3.454_823_558_906_166_4)]
    #[case(moon_latitude, 3.102_629_229_938_814)]
    #[case(moon_elongation, 3.864_253_621_839_477)]
    #[case(moon_node, 2.876_419_873_397_379_6)]
    #[case(moon_anomaly_mhb, 5.332_125_781_942_402)]
    #[case(moon_latitude_mhb, 3.102_631_278_248_779_3)]
    #[case(moon_elongation_mhb, 3.864_254_822_468_133_5)]
    #[case(moon_node_mhb, 2.876_419_041_402_721_5)]
    #[case(general_precession, 0.004_037_071_239_003_816_5)]
    #[case(mercury_longitude, 2.804_216_893_477_196_5)]
    #[case(venus_longitude, 2.633_071_098_458_565)]
    #[case(earth_longitude, 5.252_351_265_849_597)]
    #[case(mars_longitude, 4.965_842_992_239_303)]
    #[case(jupiter_longitude, 3.086_535_307_743_611_5)]
    #[case(saturn_longitude, 4.405_642_594_770_295)]
    #[case(uranus_longitude, 0.436_278_906_597_094)]
    #[case(neptune_longitude, 5.952_446_373_757_7)]
    fn test_reference_epoch_values(#[case] f: fn(f64) -> f64, #[case] expected: f64) {
        assert_abs_diff_eq!(f(JC), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_floor_modulo_before_j2000() {
        // Polynomials go hugely negative for past centuries; the wrap must
        // still land in [0, 2*pi).
        assert_abs_diff_eq!(
            moon_anomaly(-1.2345),
            6.160_573_612_433_719,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(moon_node(-1.2345), 6.156_455_720_824_431, epsilon = 1e-12);
        assert_abs_diff_eq!(
            moon_node_mhb(-1.2345),
            6.156_399_409_422_477,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            neptune_longitude(-1.2345),
            0.614_285_299_700_000_6,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_wrapped_arguments_stay_in_range() {
        let wrapped: [fn(f64) -> f64; 17] = [
            moon_anomaly,
            sun_anomaly,
            moon_latitude,
            moon_elongation,
            moon_node,
            moon_anomaly_mhb,
            moon_latitude_mhb,
            moon_elongation_mhb,
            moon_node_mhb,
            mercury_longitude,
            venus_longitude,
            earth_longitude,
            mars_longitude,
            jupiter_longitude,
            saturn_longitude,
            uranus_longitude,
            neptune_longitude,
        ];

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let jc = rng.gen_range(-100.0..100.0);
            for f in wrapped {
                let a = f(jc);
                assert!(
                    (0.0..crate::constants::PI2).contains(&a),
                    "argument {} out of range at jc {}",
                    a,
                    jc
                );
            }
        }
    }
}
