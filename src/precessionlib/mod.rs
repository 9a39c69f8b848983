//! IAU 2006 precession angles and the ICRS frame bias
//!
//! The precession of the equator and ecliptic is carried here as
//! Fukushima-Williams angles: gamma (angle from the J2000.0 equinox to the
//! intersection of the two ecliptics), phi (obliquity of date on the J2000.0
//! ecliptic), and psi (planetary precession plus luni-solar precession).
//! Composing `R_z(gamma)`, then `R_x(phi)`, then `R_z(-psi)`, then
//! `R_x(-eps)` yields the precession matrix; see [`crate::framelib`].
//!
//! Two angle families are provided. The `*_p` set carries precession alone.
//! The `*_bp` set is a separately fitted parameterization that folds the
//! fixed ICRS frame bias into the same four-angle form; it is not the
//! literal product of the bias rotation with the precession angles, and
//! compositions built from it agree with the chained form only at the
//! microarcsecond level.
//!
//! All angles are in radians; inputs are Julian centuries of TDB since
//! J2000.0.

use crate::constants::AS2R;

/// ICRS pole offset about the X axis, milliarcseconds
pub const BIAS_X_MAS: f64 = -5.1;
/// ICRS pole offset about the Y axis, milliarcseconds
pub const BIAS_Y_MAS: f64 = -17.3;
/// ICRS right ascension offset about the Z axis, milliarcseconds
pub const BIAS_Z_MAS: f64 = 78.0;

/// Fukushima-Williams gamma for precession alone
pub fn gamma_p(jc: f64) -> f64 {
    ((10.556403
        + (0.493_204_4
            + (-0.000_312_38 + (-0.000_002_788 + (0.000_000_026_0) * jc) * jc) * jc)
            * jc)
        * jc)
        * AS2R
}

/// Fukushima-Williams phi for precession alone
pub fn phi_p(jc: f64) -> f64 {
    (84_381.406_000
        + (-46.811015
            + (0.051_126_9
                + (0.000_532_89 + (-0.000_000_440 + (-0.000_000_017_6) * jc) * jc) * jc)
                * jc)
            * jc)
        * AS2R
}

/// Fukushima-Williams psi for precession alone
pub fn psi_p(jc: f64) -> f64 {
    ((5_038.481507
        + (1.558_417_6
            + (-0.000_185_22 + (-0.000_026_452 + (-0.000_000_014_8) * jc) * jc) * jc)
            * jc)
        * jc)
        * AS2R
}

/// Fukushima-Williams gamma with the frame bias folded in
pub fn gamma_bp(jc: f64) -> f64 {
    (-0.052928
        + (10.556378
            + (0.493_204_4
                + (-0.000_312_38 + (-0.000_002_788 + (0.000_000_026_0) * jc) * jc) * jc)
                * jc)
            * jc)
        * AS2R
}

/// Fukushima-Williams phi with the frame bias folded in
pub fn phi_bp(jc: f64) -> f64 {
    (84_381.412819
        + (-46.811016
            + (0.051_126_8
                + (0.000_532_89 + (-0.000_000_440 + (-0.000_000_017_6) * jc) * jc) * jc)
                * jc)
            * jc)
        * AS2R
}

/// Fukushima-Williams psi with the frame bias folded in
pub fn psi_bp(jc: f64) -> f64 {
    (-0.041775
        + (5_038.481484
            + (1.558_417_5
                + (-0.000_185_22 + (-0.000_026_452 + (-0.000_000_014_8) * jc) * jc) * jc)
                * jc)
            * jc)
        * AS2R
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // 2016-07-23 00:00:00 TDB
    const JC: f64 = 0.165_571_526_351_813_82;

    #[test]
    fn test_angles_vanish_at_j2000_for_precession_family() {
        assert_eq!(gamma_p(0.0), 0.0);
        assert_eq!(psi_p(0.0), 0.0);
        assert_abs_diff_eq!(phi_p(0.0), 84_381.406 * AS2R, epsilon = 1e-17);
    }

    #[test]
    fn test_bias_family_offsets_at_j2000() {
        // at J2000.0 only the fitted frame-bias constants remain
        assert_abs_diff_eq!(gamma_bp(0.0), -0.052928 * AS2R, epsilon = 1e-20);
        assert_abs_diff_eq!(phi_bp(0.0), 84_381.412819 * AS2R, epsilon = 1e-17);
        assert_abs_diff_eq!(psi_bp(0.0), -0.041775 * AS2R, epsilon = 1e-20);
    }

    #[test]
    fn test_reference_epoch_precession_angles() {
        assert_abs_diff_eq!(gamma_p(JC), 8.539_309_447_074_353e-6, epsilon = 1e-20);
        assert_abs_diff_eq!(phi_p(JC), 0.409_055_031_577_845, epsilon = 1e-17);
        assert_abs_diff_eq!(psi_p(JC), 0.004_044_663_800_284_435, epsilon = 1e-18);
    }

    #[test]
    fn test_reference_epoch_bias_precession_angles() {
        assert_abs_diff_eq!(gamma_bp(JC), 8.282_687_194_101_404e-6, epsilon = 1e-20);
        assert_abs_diff_eq!(phi_bp(JC), 0.409_055_064_636_473_95, epsilon = 1e-17);
        assert_abs_diff_eq!(psi_bp(JC), 0.004_044_461_250_893_452, epsilon = 1e-18);
    }

    #[test]
    fn test_families_diverge_by_the_bias() {
        // the two parameterizations differ by roughly the frame bias,
        // a few tens of milliarcseconds
        let dpsi = (psi_p(JC) - psi_bp(JC)) / AS2R;
        assert!(dpsi.abs() > 0.01 && dpsi.abs() < 0.1);
    }
}
