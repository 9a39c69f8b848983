//! End-to-end checks of the public API against reference rotation values.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use precess::{Cartesian3, Ephemeris, Epoch};

const ICRS_DIRECTION: [f64; 3] = [-0.50787065, 0.80728228, 0.34996714];

fn reference_ephemeris() -> Ephemeris {
    Ephemeris::new(Epoch::parse("20160723").unwrap())
}

#[test]
fn scalar_pipeline_from_parsed_epoch() {
    let eph = reference_ephemeris();

    assert_eq!(eph.julian_day(), 2_457_592.5);
    assert_abs_diff_eq!(eph.julian_century(), 0.165_571_526_351_813_82, epsilon = 1e-17);
    assert_abs_diff_eq!(eph.mean_obliquity(), 0.409_055_004_117_671_76, epsilon = 1e-17);
}

#[test]
fn icrs_to_mean_of_date() {
    let eph = reference_ephemeris();
    let out = eph.apply_bias_precession(ICRS_DIRECTION.into());

    assert_abs_diff_eq!(out.x, -0.511_418_439_859_812_4, epsilon = 1e-15);
    assert_abs_diff_eq!(out.y, 0.805_395_337_986_056, epsilon = 1e-15);
    assert_abs_diff_eq!(out.z, 0.349_147_253_655_076_8, epsilon = 1e-15);
}

#[test]
fn icrs_to_true_of_date() {
    let eph = reference_ephemeris();
    let out = eph.apply_bias_precession_nutation(ICRS_DIRECTION.into());

    assert_abs_diff_eq!(out.x, -0.511_403_887_179_686_1, epsilon = 1e-13);
    assert_abs_diff_eq!(out.y, 0.805_418_653_119_854_5, epsilon = 1e-13);
    assert_abs_diff_eq!(out.z, 0.349_114_785_131_347_6, epsilon = 1e-13);
}

#[test]
fn stepwise_matches_composed_rotation() {
    let eph = reference_ephemeris();
    let v: Cartesian3 = ICRS_DIRECTION.into();

    let stepwise = eph.apply_nutation(eph.apply_bias_precession(v));
    let composed = eph.apply_bias_precession_nutation(v);

    assert_abs_diff_eq!(stepwise.x, composed.x, epsilon = 1e-12);
    assert_abs_diff_eq!(stepwise.y, composed.y, epsilon = 1e-12);
    assert_abs_diff_eq!(stepwise.z, composed.z, epsilon = 1e-12);
}

#[test]
fn rotations_preserve_direction_magnitude() {
    let eph = reference_ephemeris();
    let v: Cartesian3 = ICRS_DIRECTION.into();

    for out in [
        eph.apply_bias(v),
        eph.apply_precession(v),
        eph.apply_nutation(v),
        eph.apply_bias_precession(v),
        eph.apply_precession_nutation(v),
        eph.apply_bias_precession_nutation(v),
    ] {
        assert_relative_eq!(out.magnitude(), v.magnitude(), epsilon = 1e-13);
    }
}

#[test]
fn epoch_roundtrips_through_serde() {
    let epoch = Epoch::parse("20160723120000").unwrap();
    let json = serde_json::to_string(&epoch).unwrap();
    let restored: Epoch = serde_json::from_str(&json).unwrap();

    assert_eq!(epoch, restored);
    assert_eq!(
        Ephemeris::new(epoch).julian_day(),
        Ephemeris::new(restored).julian_day()
    );
}

#[test]
fn distinct_epochs_give_distinct_rotations() {
    let a = Ephemeris::new(Epoch::parse("20000101").unwrap());
    let b = Ephemeris::new(Epoch::parse("20160723").unwrap());
    let v: Cartesian3 = ICRS_DIRECTION.into();

    let va = a.apply_bias_precession_nutation(v);
    let vb = b.apply_bias_precession_nutation(v);
    let shift = ((va.x - vb.x).powi(2) + (va.y - vb.y).powi(2) + (va.z - vb.z).powi(2)).sqrt();

    // about 16.5 years of precession, roughly 0.0013 radians of motion
    assert!(shift > 1e-4, "shift {}", shift);
    assert!(shift < 1e-2, "shift {}", shift);
}
