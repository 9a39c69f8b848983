//! Frame rotations between the ICRS and the equator-of-date frames
//!
//! [`Ephemeris`] evaluates the IAU 2006/2000A model once for a TDB epoch and
//! holds the six rotation matrices: bias, precession, nutation, and their
//! compositions. Applying a matrix to a [`Cartesian3`] direction reexpresses
//! it in the rotated frame; magnitudes are preserved.
//!
//! The composed matrices are built directly from the Fukushima-Williams
//! angles rather than by multiplying the single-step matrices together.
//! `apply_nutation(apply_bias_precession(v))` still agrees with
//! `apply_bias_precession_nutation(v)` to machine precision, but chaining
//! the three single steps picks up the microarcsecond-level difference
//! between the two FW angle families (see [`crate::precessionlib`]).

use log::debug;
use nalgebra::Matrix3;
use once_cell::sync::Lazy;

use crate::constants::MAS2R;
use crate::coordinates::Cartesian3;
use crate::rotationlib::{rotate, rx, ry, rz};
use crate::time::Epoch;
use crate::{earthlib, nutationlib, precessionlib};

// The frame bias does not depend on the epoch; build it once.
static R_BIAS: Lazy<Matrix3<f64>> = Lazy::new(|| {
    let r = rx(precessionlib::BIAS_X_MAS * MAS2R, &Matrix3::identity());
    let r = ry(precessionlib::BIAS_Y_MAS * MAS2R, &r);
    rz(precessionlib::BIAS_Z_MAS * MAS2R, &r)
});

/// Rotation matrices of the IAU 2006/2000A model, evaluated at one epoch
///
/// Everything is computed in the constructor; the apply methods are plain
/// matrix-vector products and never fail.
#[derive(Debug, Clone)]
pub struct Ephemeris {
    epoch: Epoch,
    jd: f64,
    jc: f64,
    eps: f64,
    dpsi: f64,
    deps: f64,
    r_bias: Matrix3<f64>,
    r_prec: Matrix3<f64>,
    r_nut: Matrix3<f64>,
    r_bias_prec: Matrix3<f64>,
    r_prec_nut: Matrix3<f64>,
    r_bias_prec_nut: Matrix3<f64>,
}

impl Ephemeris {
    /// Evaluates the model at the given TDB epoch
    pub fn new(epoch: Epoch) -> Self {
        let jd = epoch.julian_day();
        let jc = epoch.julian_century();
        let eps = earthlib::mean_obliquity(jc);
        let (dpsi, deps) = nutationlib::nutation(jc);

        debug!(
            "ephemeris at jd {} (jc {}): eps {}, dpsi {}, deps {}",
            jd, jc, eps, dpsi, deps
        );

        // R_x(-eps - deps) R_z(-psi - dpsi) R_x(phi) R_z(gamma)
        let fukushima_williams =
            |gamma: f64, phi: f64, psi: f64, dpsi: f64, deps: f64| -> Matrix3<f64> {
                let r = rz(gamma, &Matrix3::identity());
                let r = rx(phi, &r);
                let r = rz(-psi - dpsi, &r);
                rx(-eps - deps, &r)
            };

        let r_prec = fukushima_williams(
            precessionlib::gamma_p(jc),
            precessionlib::phi_p(jc),
            precessionlib::psi_p(jc),
            0.0,
            0.0,
        );
        let r_prec_nut = fukushima_williams(
            precessionlib::gamma_p(jc),
            precessionlib::phi_p(jc),
            precessionlib::psi_p(jc),
            dpsi,
            deps,
        );
        let r_bias_prec = fukushima_williams(
            precessionlib::gamma_bp(jc),
            precessionlib::phi_bp(jc),
            precessionlib::psi_bp(jc),
            0.0,
            0.0,
        );
        let r_bias_prec_nut = fukushima_williams(
            precessionlib::gamma_bp(jc),
            precessionlib::phi_bp(jc),
            precessionlib::psi_bp(jc),
            dpsi,
            deps,
        );

        // nutation alone rotates through the mean obliquity of date
        let r = rx(eps, &Matrix3::identity());
        let r = rz(-dpsi, &r);
        let r_nut = rx(-eps - deps, &r);

        Ephemeris {
            epoch,
            jd,
            jc,
            eps,
            dpsi,
            deps,
            r_bias: *R_BIAS,
            r_prec,
            r_nut,
            r_bias_prec,
            r_prec_nut,
            r_bias_prec_nut,
        }
    }

    /// The epoch this ephemeris was evaluated at
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Julian date of the epoch
    pub fn julian_day(&self) -> f64 {
        self.jd
    }

    /// Julian centuries of TDB since J2000.0
    pub fn julian_century(&self) -> f64 {
        self.jc
    }

    /// Mean obliquity of the ecliptic at the epoch, radians
    pub fn mean_obliquity(&self) -> f64 {
        self.eps
    }

    /// Nutation in longitude at the epoch, radians
    pub fn nutation_longitude(&self) -> f64 {
        self.dpsi
    }

    /// Nutation in obliquity at the epoch, radians
    pub fn nutation_obliquity(&self) -> f64 {
        self.deps
    }

    /// The ICRS frame-bias rotation
    pub fn bias_matrix(&self) -> &Matrix3<f64> {
        &self.r_bias
    }

    /// The precession rotation, J2000.0 mean equator to mean-of-date
    pub fn precession_matrix(&self) -> &Matrix3<f64> {
        &self.r_prec
    }

    /// The nutation rotation, mean-of-date to true-of-date
    pub fn nutation_matrix(&self) -> &Matrix3<f64> {
        &self.r_nut
    }

    /// Bias and precession combined, ICRS to mean-of-date
    pub fn bias_precession_matrix(&self) -> &Matrix3<f64> {
        &self.r_bias_prec
    }

    /// Precession and nutation combined, J2000.0 mean equator to true-of-date
    pub fn precession_nutation_matrix(&self) -> &Matrix3<f64> {
        &self.r_prec_nut
    }

    /// The full rotation, ICRS to true-of-date
    pub fn bias_precession_nutation_matrix(&self) -> &Matrix3<f64> {
        &self.r_bias_prec_nut
    }

    /// Rotates an ICRS direction to the J2000.0 mean equator and equinox
    pub fn apply_bias(&self, v: Cartesian3) -> Cartesian3 {
        self.apply(&self.r_bias, v)
    }

    /// Rotates a J2000.0 mean direction to the mean equator of date
    pub fn apply_precession(&self, v: Cartesian3) -> Cartesian3 {
        self.apply(&self.r_prec, v)
    }

    /// Rotates a mean-of-date direction to the true equator of date
    pub fn apply_nutation(&self, v: Cartesian3) -> Cartesian3 {
        self.apply(&self.r_nut, v)
    }

    /// Rotates an ICRS direction to the mean equator of date
    pub fn apply_bias_precession(&self, v: Cartesian3) -> Cartesian3 {
        self.apply(&self.r_bias_prec, v)
    }

    /// Rotates a J2000.0 mean direction to the true equator of date
    pub fn apply_precession_nutation(&self, v: Cartesian3) -> Cartesian3 {
        self.apply(&self.r_prec_nut, v)
    }

    /// Rotates an ICRS direction to the true equator of date
    pub fn apply_bias_precession_nutation(&self, v: Cartesian3) -> Cartesian3 {
        self.apply(&self.r_bias_prec_nut, v)
    }

    fn apply(&self, r: &Matrix3<f64>, v: Cartesian3) -> Cartesian3 {
        Cartesian3::from_vector3(rotate(r, &v.to_vector3()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn reference_ephemeris() -> Ephemeris {
        Ephemeris::new(Epoch::from_ymd(2016, 7, 23).unwrap())
    }

    fn max_abs_diff(a: &Matrix3<f64>, b: &Matrix3<f64>) -> f64 {
        (a - b).abs().max()
    }

    #[test]
    fn test_scalar_quantities() {
        let eph = reference_ephemeris();
        assert_eq!(eph.julian_day(), 2_457_592.5);
        assert_abs_diff_eq!(
            eph.julian_century(),
            0.165_571_526_351_813_82,
            epsilon = 1e-17
        );
        assert_abs_diff_eq!(
            eph.mean_obliquity(),
            0.409_055_004_117_671_76,
            epsilon = 1e-17
        );
        assert_abs_diff_eq!(
            eph.nutation_longitude(),
            -1.657_815_204_690_886_3e-5,
            epsilon = 1e-17
        );
        assert_abs_diff_eq!(
            eph.nutation_obliquity(),
            -4.449_987_619_527_022e-5,
            epsilon = 1e-17
        );
    }

    #[test]
    fn test_bias_matrix() {
        let eph = reference_ephemeris();
        let expected = Matrix3::new(
            0.999_999_999_999_925,
            3.781_546_733_392_249e-7,
            8.387_275_748_188_115e-8,
            -3.781_546_712_654_277_6e-7,
            0.999_999_999_999_928_2,
            -2.472_552_945_346_313_6e-8,
            -8.387_276_683_194_964e-8,
            2.472_549_773_658_624_4e-8,
            0.999_999_999_999_996_1,
        );
        assert!(max_abs_diff(eph.bias_matrix(), &expected) < 1e-15);
    }

    #[test]
    fn test_precession_matrix() {
        let eph = reference_ephemeris();
        let expected = Matrix3::new(
            0.999_991_852_011_074_1,
            -0.003_702_417_894_805_917_7,
            -0.001_608_730_304_985_47,
            0.003_702_417_927_931_962,
            0.999_993_146_022_881_4,
            -2.957_516_671_786_564e-6,
            0.001_608_730_228_747_419_3,
            -2.998_699_348_499_833_7e-6,
            0.999_998_705_988_192_2,
        );
        assert!(max_abs_diff(eph.precession_matrix(), &expected) < 1e-15);
    }

    #[test]
    fn test_bias_precession_matrix() {
        let eph = reference_ephemeris();
        let expected = Matrix3::new(
            0.999_991_851_878_600_2,
            -0.003_702_488_624_825_192_3,
            -0.001_608_649_865_816_292_1,
            0.003_702_488_711_461_927,
            0.999_993_145_760_905_1,
            -2.924_159_313_910_657e-6,
            0.001_608_649_666_412_089_1,
            -3.031_872_481_351_616_2e-6,
            0.999_998_706_117_692,
        );
        assert!(max_abs_diff(eph.bias_precession_matrix(), &expected) < 1e-15);
    }

    #[test]
    fn test_nutation_matrix() {
        let eph = reference_ephemeris();
        let expected = Matrix3::new(
            0.999_999_999_862_582_5,
            1.521_040_638_312_573_4e-5,
            6.593_835_221_281_949e-6,
            -1.521_069_979_291_651_6e-5,
            0.999_999_998_894_200_1,
            4.449_982_603_221_825e-5,
            -6.593_158_353_552_559e-6,
            -4.449_992_632_288_291e-5,
            0.999_999_998_988_143_3,
        );
        assert!(max_abs_diff(eph.nutation_matrix(), &expected) < 1e-13);
    }

    #[test]
    fn test_precession_nutation_matrix() {
        let eph = reference_ephemeris();
        let expected = Matrix3::new(
            0.999_991_918_796_641,
            -0.003_687_207_611_938_721,
            -0.001_602_136_523_060_651_3,
            0.003_687_278_936_196_837,
            0.999_993_201_100_014_6,
            4.156_672_169_408_626e-5,
            0.001_601_972_365_162_034_2,
            -4.747_391_003_939_727e-5,
            0.999_998_715_714_559_8,
        );
        assert!(max_abs_diff(eph.precession_nutation_matrix(), &expected) < 1e-13);
    }

    #[test]
    fn test_bias_precession_nutation_matrix() {
        let eph = reference_ephemeris();
        let expected = Matrix3::new(
            0.999_991_918_664_712_5,
            -0.003_687_278_342_180_709_5,
            -0.001_602_056_083_383_251_6,
            0.003_687_349_716_143_728_4,
            0.999_993_200_837_637_9,
            4.160_007_783_415_853e-5,
            0.001_601_891_799_677_796_7,
            -4.750_708_269_429_804e-5,
            0.999_998_715_842_045,
        );
        assert!(
            max_abs_diff(eph.bias_precession_nutation_matrix(), &expected) < 1e-13
        );
    }

    #[test]
    fn test_apply_bias() {
        let eph = reference_ephemeris();
        let v = Cartesian3::new(-0.50787065, 0.80728228, 0.34996714);
        let out = eph.apply_bias(v);
        assert_abs_diff_eq!(out.x, -0.507_870_315_369_686, epsilon = 1e-15);
        assert_abs_diff_eq!(out.y, 0.807_282_463_400_477_9, epsilon = 1e-15);
        assert_abs_diff_eq!(out.z, 0.349_967_202_556_971_45, epsilon = 1e-15);
    }

    #[test]
    fn test_apply_precession_after_bias() {
        let eph = reference_ephemeris();
        let v = Cartesian3::new(-0.50787065, 0.80728228, 0.34996714);
        let out = eph.apply_precession(eph.apply_bias(v));
        assert_abs_diff_eq!(out.x, -0.511_418_077_131_141_8, epsilon = 1e-15);
        assert_abs_diff_eq!(out.y, 0.805_395_547_110_420_2, epsilon = 1e-15);
        assert_abs_diff_eq!(out.z, 0.349_147_302_569_263_24, epsilon = 1e-15);
    }

    #[test]
    fn test_apply_bias_precession() {
        let eph = reference_ephemeris();
        let v = Cartesian3::new(-0.50787065, 0.80728228, 0.34996714);
        let out = eph.apply_bias_precession(v);
        assert_abs_diff_eq!(out.x, -0.511_418_439_859_812_4, epsilon = 1e-15);
        assert_abs_diff_eq!(out.y, 0.805_395_337_986_056, epsilon = 1e-15);
        assert_abs_diff_eq!(out.z, 0.349_147_253_655_076_8, epsilon = 1e-15);
    }

    #[test]
    fn test_apply_bias_precession_nutation() {
        let eph = reference_ephemeris();
        let v = Cartesian3::new(-0.50787065, 0.80728228, 0.34996714);
        let out = eph.apply_bias_precession_nutation(v);
        assert_abs_diff_eq!(out.x, -0.511_403_887_179_686_1, epsilon = 1e-13);
        assert_abs_diff_eq!(out.y, 0.805_418_653_119_854_5, epsilon = 1e-13);
        assert_abs_diff_eq!(out.z, 0.349_114_785_131_347_6, epsilon = 1e-13);
    }

    #[test]
    fn test_apply_precession_nutation() {
        let eph = reference_ephemeris();
        let v = Cartesian3::new(-0.50787065, 0.80728228, 0.34996714);
        let out = eph.apply_precession_nutation(v);
        assert_abs_diff_eq!(out.x, -0.511_403_858_298_661_5, epsilon = 1e-13);
        assert_abs_diff_eq!(out.y, 0.805_418_677_605_171_2, epsilon = 1e-13);
        assert_abs_diff_eq!(out.z, 0.349_114_770_949_583_54, epsilon = 1e-13);
    }

    #[test]
    fn test_apply_nutation() {
        let eph = reference_ephemeris();
        let v = Cartesian3::new(-0.50787065, 0.80728228, 0.34996714);
        let out = eph.apply_nutation(v);
        assert_abs_diff_eq!(out.x, -0.507_856_063_213_011, epsilon = 1e-13);
        assert_abs_diff_eq!(out.y, 0.807_305_577_652_145_1, epsilon = 1e-13);
        assert_abs_diff_eq!(out.z, 0.349_934_564_115_520_2, epsilon = 1e-13);
    }

    #[test]
    fn test_nutation_uses_full_published_amplitudes() {
        // Tabulations that strip trailing zeros when converting the 0.1 uas
        // amplitude listing to integers (0.1440 read as 144) lose a factor
        // of ten on the affected terms and shift this rotation by ~2e-8.
        // The value below is what such a truncated table produces; staying
        // inside the band means the full amplitudes are in use but the two
        // conventions have not drifted apart for any other reason.
        let eph = reference_ephemeris();
        let mean_of_date = Cartesian3::new(
            -0.511_418_077_131_141_8,
            0.805_395_547_110_420_2,
            0.349_147_302_569_263_24,
        );
        let truncated_amps = Cartesian3::new(
            -0.511_403_505_100_387_6,
            0.805_418_874_110_851_4,
            0.349_114_834_990_216_56,
        );
        let out = eph.apply_nutation(mean_of_date);

        let dist = ((out.x - truncated_amps.x).powi(2)
            + (out.y - truncated_amps.y).powi(2)
            + (out.z - truncated_amps.z).powi(2))
        .sqrt();
        assert!(dist > 1e-8, "distance {}", dist);
        assert!(dist < 1e-7, "distance {}", dist);
    }

    #[test]
    fn test_composed_equals_nutation_after_bias_precession() {
        let eph = reference_ephemeris();
        let v = Cartesian3::new(-0.50787065, 0.80728228, 0.34996714);
        let chained = eph.apply_nutation(eph.apply_bias_precession(v));
        let direct = eph.apply_bias_precession_nutation(v);

        assert_abs_diff_eq!(chained.x, direct.x, epsilon = 1e-12);
        assert_abs_diff_eq!(chained.y, direct.y, epsilon = 1e-12);
        assert_abs_diff_eq!(chained.z, direct.z, epsilon = 1e-12);

        let chained = eph.apply_nutation(eph.apply_precession(v));
        let direct = eph.apply_precession_nutation(v);

        assert_abs_diff_eq!(chained.x, direct.x, epsilon = 1e-12);
        assert_abs_diff_eq!(chained.y, direct.y, epsilon = 1e-12);
        assert_abs_diff_eq!(chained.z, direct.z, epsilon = 1e-12);
    }

    #[test]
    fn test_three_step_chain_carries_the_bias_fit_split() {
        // bias, then precession, then nutation crosses between the two
        // Fukushima-Williams angle families; the agreement with the single
        // composed rotation is only at the microarcsecond level
        let eph = reference_ephemeris();
        let v = Cartesian3::new(-0.50787065, 0.80728228, 0.34996714);
        let chained = eph.apply_nutation(eph.apply_precession(eph.apply_bias(v)));
        let direct = eph.apply_bias_precession_nutation(v);

        let split = ((chained.x - direct.x).powi(2)
            + (chained.y - direct.y).powi(2)
            + (chained.z - direct.z).powi(2))
        .sqrt();
        assert!(split < 1e-6, "split {}", split);
        assert!(split > 1e-9, "split {}", split);
    }

    #[test]
    fn test_matrices_are_orthonormal_across_centuries() {
        let mut rng = StdRng::seed_from_u64(20_160_723);
        let eye = Matrix3::identity();
        for i in 0..50 {
            let year = rng.gen_range(-8000..12000);
            let month = rng.gen_range(1..=12);
            let day = rng.gen_range(1..=28);
            let epoch = Epoch::from_ymd(year, month, day).unwrap();
            let eph = Ephemeris::new(epoch);

            println!("orthonormality sweep {}: year {}", i, year);
            for r in [
                eph.bias_matrix(),
                eph.precession_matrix(),
                eph.nutation_matrix(),
                eph.bias_precession_matrix(),
                eph.precession_nutation_matrix(),
                eph.bias_precession_nutation_matrix(),
            ] {
                assert!(max_abs_diff(&(r * r.transpose()), &eye) < 1e-9);
                assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_apply_preserves_magnitude() {
        let mut rng = StdRng::seed_from_u64(424_242);
        let eph = reference_ephemeris();
        for _ in 0..100 {
            let v = Cartesian3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let out = eph.apply_bias_precession_nutation(v);
            assert_relative_eq!(out.magnitude(), v.magnitude(), epsilon = 1e-13);
        }
    }

    #[test]
    fn test_bias_is_epoch_independent() {
        let a = Ephemeris::new(Epoch::from_ymd(1900, 1, 1).unwrap());
        let b = Ephemeris::new(Epoch::from_ymd(2100, 1, 1).unwrap());
        assert_eq!(a.bias_matrix(), b.bias_matrix());
    }
}
