//! Constants for angle and time conversions

use std::f64::consts::PI;

// Angles
/// Arcseconds in a complete circle
pub const TURNAS: f64 = 1_296_000.0;
/// Arcseconds to radians conversion factor
pub const AS2R: f64 = 4.848_136_811_095_36e-6;
/// Milliarcseconds to radians conversion factor
pub const MAS2R: f64 = AS2R / 1_000.0;
/// 0.1 microarcseconds to radians; the unit of the nutation table amplitudes
pub const U2R: f64 = AS2R / 1.0e7;
/// Tau (2*PI) for full circle
pub const PI2: f64 = 2.0 * PI;

// Time constants
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days per Julian century
pub const DJC: f64 = 36_525.0;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_angle_factors() {
        assert_abs_diff_eq!(AS2R, PI / 648_000.0, epsilon = 1e-20);
        assert_abs_diff_eq!(MAS2R, 4.848_136_811_095_36e-9, epsilon = 1e-23);
        assert_abs_diff_eq!(U2R, 4.848_136_811_095_359e-13, epsilon = 1e-27);
        assert_abs_diff_eq!(TURNAS * AS2R, PI2, epsilon = 1e-15);
    }
}
