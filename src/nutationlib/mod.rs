//! IAU 2000A nutation, with the IAU 2006 compatibility rescale
//!
//! The luni-solar and planetary series are summed from the last table row
//! to the first, so the smallest amplitudes accumulate before the large
//! leading terms. The regression values below are pinned to that order;
//! summing forward agrees only to about 1e-15 relative.

pub mod tables;

use crate::arguments;
use crate::constants::{PI2, U2R};

/// Luni-solar nutation components `(dpsi, deps)` in radians
pub fn lunisolar(jc: f64) -> (f64, f64) {
    let l = arguments::moon_anomaly(jc);
    let lp = arguments::sun_anomaly(jc);
    let f = arguments::moon_latitude(jc);
    let d = arguments::moon_elongation(jc);
    let om = arguments::moon_node(jc);

    let mut dpsi = 0.0_f64;
    let mut deps = 0.0_f64;
    for row in tables::NUT_LS.iter().rev() {
        let arg = (row[0] as f64 * l
            + row[1] as f64 * lp
            + row[2] as f64 * f
            + row[3] as f64 * d
            + row[4] as f64 * om)
            .rem_euclid(PI2);
        let sin_arg = arg.sin();
        let cos_arg = arg.cos();

        dpsi += (row[5] as f64 + row[6] as f64 * jc) * sin_arg + row[7] as f64 * cos_arg;
        deps += (row[8] as f64 + row[9] as f64 * jc) * cos_arg + row[10] as f64 * sin_arg;
    }

    (dpsi * U2R, deps * U2R)
}

/// Planetary nutation components `(dpsi, deps)` in radians
pub fn planetary(jc: f64) -> (f64, f64) {
    let l = arguments::moon_anomaly_mhb(jc);
    let f = arguments::moon_latitude_mhb(jc);
    let d = arguments::moon_elongation_mhb(jc);
    let om = arguments::moon_node_mhb(jc);
    let pa = arguments::general_precession(jc);
    let lme = arguments::mercury_longitude(jc);
    let lve = arguments::venus_longitude(jc);
    let lea = arguments::earth_longitude(jc);
    let lma = arguments::mars_longitude(jc);
    let lju = arguments::jupiter_longitude(jc);
    let lsa = arguments::saturn_longitude(jc);
    let lur = arguments::uranus_longitude(jc);
    let lne = arguments::neptune_longitude(jc);

    let mut dpsi = 0.0_f64;
    let mut deps = 0.0_f64;
    for row in tables::NUT_PL.iter().rev() {
        // row[1] multiplies l' which never appears in the planetary series
        let arg = (row[0] as f64 * l
            + row[2] as f64 * f
            + row[3] as f64 * d
            + row[4] as f64 * om
            + row[5] as f64 * lme
            + row[6] as f64 * lve
            + row[7] as f64 * lea
            + row[8] as f64 * lma
            + row[9] as f64 * lju
            + row[10] as f64 * lsa
            + row[11] as f64 * lur
            + row[12] as f64 * lne
            + row[13] as f64 * pa)
            .rem_euclid(PI2);
        let sin_arg = arg.sin();
        let cos_arg = arg.cos();

        dpsi += row[14] as f64 * sin_arg + row[15] as f64 * cos_arg;
        deps += row[16] as f64 * sin_arg + row[17] as f64 * cos_arg;
    }

    (dpsi * U2R, deps * U2R)
}

/// Total nutation `(dpsi, deps)` in radians
///
/// Sum of the luni-solar and planetary series, rescaled for use with the
/// IAU 2006 precession (the P03 secular J2 correction).
pub fn nutation(jc: f64) -> (f64, f64) {
    let fj2 = -2.7774e-6 * jc;
    let (dpsi_ls, deps_ls) = lunisolar(jc);
    let (dpsi_pl, deps_pl) = planetary(jc);

    let mut dpsi = dpsi_ls + dpsi_pl;
    let mut deps = deps_ls + deps_pl;
    dpsi += dpsi * (0.4697e-6 + fj2);
    deps += deps * fj2;

    (dpsi, deps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // 2016-07-23 00:00:00 TDB
    const JC: f64 = 0.165_571_526_351_813_82;

    #[test]
    fn test_lunisolar_reference_epoch() {
        let (dpsi, deps) = lunisolar(JC);
        assert_abs_diff_eq!(dpsi, -1.657_631_198_105_273e-5, epsilon = 1e-17);
        assert_abs_diff_eq!(deps, -4.450_096_572_299_437e-5, epsilon = 1e-17);
    }

    #[test]
    fn test_planetary_reference_epoch() {
        let (dpsi, deps) = planetary(JC);
        assert_abs_diff_eq!(dpsi, -1.839_902_699_884_2e-9, epsilon = 1e-20);
        assert_abs_diff_eq!(deps, 1.069_064_074_772_259e-9, epsilon = 1e-20);
    }

    #[test]
    fn test_nutation_reference_epoch() {
        let (dpsi, deps) = nutation(JC);
        assert_abs_diff_eq!(dpsi, -1.657_815_204_690_886_3e-5, epsilon = 1e-17);
        assert_abs_diff_eq!(deps, -4.449_987_619_527_022e-5, epsilon = 1e-17);
    }

    #[test]
    fn test_nutation_at_j2000() {
        let (dpsi, deps) = nutation(0.0);
        assert_abs_diff_eq!(dpsi, -6.754_425_598_969_512e-5, epsilon = 1e-17);
        assert_abs_diff_eq!(deps, -2.797_083_119_237_413_7e-5, epsilon = 1e-17);
    }

    #[test]
    fn test_nutation_a_century_back() {
        let (dpsi, deps) = nutation(-1.0);
        assert_abs_diff_eq!(dpsi, 8.409_780_441_913_467e-5, epsilon = 1e-17);
        assert_abs_diff_eq!(deps, -1.111_634_431_643_504e-5, epsilon = 1e-17);
    }

    #[test]
    fn test_series_sum_matches_published_nut00a_value() {
        // SOFA's published IAU 2000A check values at 2006-01-15 (MJD 53736.0),
        // before the IAU 2006 rescale is applied
        let jc = (2_400_000.5 + 53_736.0 - 2_451_545.0) / 36_525.0;
        let (dpsi_ls, deps_ls) = lunisolar(jc);
        let (dpsi_pl, deps_pl) = planetary(jc);

        assert_abs_diff_eq!(
            dpsi_ls + dpsi_pl,
            -0.963_090_910_711_551_843_1e-5,
            epsilon = 1e-13
        );
        assert_abs_diff_eq!(
            deps_ls + deps_pl,
            0.406_323_917_400_167_871_0e-4,
            epsilon = 1e-13
        );
    }

    #[test]
    fn test_reverse_accumulation_vs_forward() {
        // same series summed first row to last
        let l = arguments::moon_anomaly(JC);
        let lp = arguments::sun_anomaly(JC);
        let f = arguments::moon_latitude(JC);
        let d = arguments::moon_elongation(JC);
        let om = arguments::moon_node(JC);
        let mut dpsi = 0.0_f64;
        let mut deps = 0.0_f64;
        for row in tables::NUT_LS.iter() {
            let arg = (row[0] as f64 * l
                + row[1] as f64 * lp
                + row[2] as f64 * f
                + row[3] as f64 * d
                + row[4] as f64 * om)
                .rem_euclid(PI2);
            dpsi += (row[5] as f64 + row[6] as f64 * JC) * arg.sin() + row[7] as f64 * arg.cos();
            deps += (row[8] as f64 + row[9] as f64 * JC) * arg.cos() + row[10] as f64 * arg.sin();
        }
        let forward = (dpsi * U2R, deps * U2R);
        let reverse = lunisolar(JC);

        // close but not bit-identical; the pinned values above are the
        // reverse order
        assert_abs_diff_eq!(forward.0, reverse.0, epsilon = 1e-18);
        assert_abs_diff_eq!(forward.1, reverse.1, epsilon = 1e-18);
    }

    #[test]
    fn test_planetary_reverse_accumulation_vs_forward() {
        let l = arguments::moon_anomaly_mhb(JC);
        let f = arguments::moon_latitude_mhb(JC);
        let d = arguments::moon_elongation_mhb(JC);
        let om = arguments::moon_node_mhb(JC);
        let pa = arguments::general_precession(JC);
        let lme = arguments::mercury_longitude(JC);
        let lve = arguments::venus_longitude(JC);
        let lea = arguments::earth_longitude(JC);
        let lma = arguments::mars_longitude(JC);
        let lju = arguments::jupiter_longitude(JC);
        let lsa = arguments::saturn_longitude(JC);
        let lur = arguments::uranus_longitude(JC);
        let lne = arguments::neptune_longitude(JC);
        let mut dpsi = 0.0_f64;
        let mut deps = 0.0_f64;
        for row in tables::NUT_PL.iter() {
            let arg = (row[0] as f64 * l
                + row[2] as f64 * f
                + row[3] as f64 * d
                + row[4] as f64 * om
                + row[5] as f64 * lme
                + row[6] as f64 * lve
                + row[7] as f64 * lea
                + row[8] as f64 * lma
                + row[9] as f64 * lju
                + row[10] as f64 * lsa
                + row[11] as f64 * lur
                + row[12] as f64 * lne
                + row[13] as f64 * pa)
                .rem_euclid(PI2);
            dpsi += row[14] as f64 * arg.sin() + row[15] as f64 * arg.cos();
            deps += row[16] as f64 * arg.sin() + row[17] as f64 * arg.cos();
        }
        let forward = (dpsi * U2R, deps * U2R);
        let reverse = planetary(JC);

        assert_abs_diff_eq!(forward.0, reverse.0, epsilon = 1e-22);
        assert_abs_diff_eq!(forward.1, reverse.1, epsilon = 1e-22);
    }

    #[test]
    fn test_amplitudes_are_bounded() {
        // nutation in longitude stays under ~20 arcseconds
        use crate::constants::AS2R;
        for k in -20..=20 {
            let (dpsi, deps) = nutation(k as f64 / 4.0);
            assert!(dpsi.abs() < 20.0 * AS2R, "dpsi {} at jc {}", dpsi, k);
            assert!(deps.abs() < 12.0 * AS2R, "deps {} at jc {}", deps, k);
        }
    }
}
