//! Elementary frame rotations
//!
//! Each of [`rx`], [`ry`], [`rz`] prepends a rotation about one coordinate
//! axis onto an already-accumulated matrix, i.e. `rx(phi, &r)` returns
//! `R_x(phi) * r`. Building a composite by chaining these calls therefore
//! applies the rotations to a vector in call order, which is how every
//! composition in [`crate::framelib`] is written.
//!
//! Angles are in radians and positive angles rotate the frame
//! counterclockwise as seen from the positive end of the axis, so a vector's
//! components turn clockwise.
//!
//! The row recombinations are written out explicitly rather than going
//! through a general matrix product, which keeps the floating-point
//! evaluation order fixed and the composite matrices reproducible to the
//! last bit.

use nalgebra::{Matrix3, Vector3};

/// Prepends a rotation of `phi` radians about the X axis onto `r`
pub fn rx(phi: f64, r: &Matrix3<f64>) -> Matrix3<f64> {
    let s = phi.sin();
    let c = phi.cos();

    Matrix3::new(
        r[(0, 0)],
        r[(0, 1)],
        r[(0, 2)],
        c * r[(1, 0)] + s * r[(2, 0)],
        c * r[(1, 1)] + s * r[(2, 1)],
        c * r[(1, 2)] + s * r[(2, 2)],
        -s * r[(1, 0)] + c * r[(2, 0)],
        -s * r[(1, 1)] + c * r[(2, 1)],
        -s * r[(1, 2)] + c * r[(2, 2)],
    )
}

/// Prepends a rotation of `theta` radians about the Y axis onto `r`
pub fn ry(theta: f64, r: &Matrix3<f64>) -> Matrix3<f64> {
    let s = theta.sin();
    let c = theta.cos();

    Matrix3::new(
        c * r[(0, 0)] - s * r[(2, 0)],
        c * r[(0, 1)] - s * r[(2, 1)],
        c * r[(0, 2)] - s * r[(2, 2)],
        r[(1, 0)],
        r[(1, 1)],
        r[(1, 2)],
        s * r[(0, 0)] + c * r[(2, 0)],
        s * r[(0, 1)] + c * r[(2, 1)],
        s * r[(0, 2)] + c * r[(2, 2)],
    )
}

/// Prepends a rotation of `psi` radians about the Z axis onto `r`
pub fn rz(psi: f64, r: &Matrix3<f64>) -> Matrix3<f64> {
    let s = psi.sin();
    let c = psi.cos();

    Matrix3::new(
        c * r[(0, 0)] + s * r[(1, 0)],
        c * r[(0, 1)] + s * r[(1, 1)],
        c * r[(0, 2)] + s * r[(1, 2)],
        -s * r[(0, 0)] + c * r[(1, 0)],
        -s * r[(0, 1)] + c * r[(1, 1)],
        -s * r[(0, 2)] + c * r[(1, 2)],
        r[(2, 0)],
        r[(2, 1)],
        r[(2, 2)],
    )
}

/// Applies a rotation matrix to a vector
///
/// Row-by-row dot products with a fixed left-to-right accumulation order.
pub fn rotate(r: &Matrix3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        r[(0, 0)] * v[0] + r[(0, 1)] * v[1] + r[(0, 2)] * v[2],
        r[(1, 0)] * v[0] + r[(1, 1)] * v[1] + r[(1, 2)] * v[2],
        r[(2, 0)] * v[0] + r[(2, 1)] * v[1] + r[(2, 2)] * v[2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn max_abs_diff(a: &Matrix3<f64>, b: &Matrix3<f64>) -> f64 {
        (a - b).abs().max()
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let eye = Matrix3::identity();
        assert_eq!(rx(0.0, &eye), eye);
        assert_eq!(ry(0.0, &eye), eye);
        assert_eq!(rz(0.0, &eye), eye);
    }

    #[test]
    fn test_quarter_turns() {
        let eye = Matrix3::identity();

        // R_x(90°) sends +Y to +Z components-wise: (0,1,0) -> (0,0,-1)
        let v = rotate(&rx(FRAC_PI_2, &eye), &Vector3::new(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(v, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-15);

        let v = rotate(&ry(FRAC_PI_2, &eye), &Vector3::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(v, Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-15);

        let v = rotate(&rz(FRAC_PI_2, &eye), &Vector3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(v, Vector3::new(0.0, -1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_prepending_matches_left_multiplication() {
        let eye = Matrix3::identity();
        let a = rx(0.3, &eye);
        let chained = rz(-0.7, &rx(0.3, &eye));
        let product = rz(-0.7, &eye) * a;

        assert!(max_abs_diff(&chained, &product) < 1e-15);
    }

    #[test]
    fn test_inverse_is_transpose() {
        let eye = Matrix3::identity();
        let r = rz(0.4, &ry(-1.1, &rx(0.25, &eye)));
        let should_be_eye = r * r.transpose();

        assert!(max_abs_diff(&should_be_eye, &eye) < 1e-15);
    }

    #[test]
    fn test_rotation_order_matters() {
        let eye = Matrix3::identity();
        let xy = ry(0.5, &rx(0.5, &eye));
        let yx = rx(0.5, &ry(0.5, &eye));

        assert!(max_abs_diff(&xy, &yx) > 1e-3);
    }

    #[test]
    fn test_rotate_preserves_magnitude() {
        let eye = Matrix3::identity();
        let r = rx(1.234, &rz(-0.987, &eye));
        let v = Vector3::new(-0.50787065, 0.80728228, 0.34996714);

        assert_abs_diff_eq!(rotate(&r, &v).norm(), v.norm(), epsilon = 1e-15);
    }
}
