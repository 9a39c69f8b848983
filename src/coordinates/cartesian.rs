//! # Cartesian Coordinate Module
//!
//! Three-component Cartesian direction vectors, the input and output format
//! of every frame rotation in this crate.
//!
//! ## Coordinate System Convention
//!
//! The axes follow the usual equatorial convention:
//! - **X-axis**: Points toward the vernal equinox (RA = 0°, Dec = 0°)
//! - **Y-axis**: Points toward RA = 90°, Dec = 0°
//! - **Z-axis**: Points toward the north celestial pole (Dec = +90°)
//!
//! A rotation matrix applied to a `Cartesian3` reinterprets the same direction
//! in a different equatorial frame; the magnitude is untouched.
//!
//! ## Examples
//!
//! ```rust
//! use precess::coordinates::Cartesian3;
//!
//! // Unit vector pointing toward the vernal equinox
//! let vernal_equinox = Cartesian3::new(1.0, 0.0, 0.0);
//!
//! // Unit vector pointing toward the north celestial pole
//! let north_pole = Cartesian3::new(0.0, 0.0, 1.0);
//!
//! // Dot product gives the cosine of the angle between the two
//! assert_eq!(vernal_equinox.dot(&north_pole), 0.0);
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Three-dimensional Cartesian coordinate representation
///
/// Represents a point or direction in 3D space. Components are stored as
/// plain `f64` values with no internal normalization, so unit vectors and
/// scaled position vectors are both representable; the rotations in this
/// crate do not care which one they are given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component (toward vernal equinox)
    pub x: f64,
    /// Y-component (toward RA = 90°)
    pub y: f64,
    /// Z-component (toward north celestial pole)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Computes the dot product with another vector
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the Euclidean magnitude
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Converts to a nalgebra `Vector3` for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates a Cartesian coordinate from a nalgebra `Vector3`
    pub fn from_vector3(v: Vector3<f64>) -> Self {
        Cartesian3 {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }
}

impl From<[f64; 3]> for Cartesian3 {
    fn from(a: [f64; 3]) -> Self {
        Cartesian3::new(a[0], a[1], a[2])
    }
}

impl From<Cartesian3> for [f64; 3] {
    fn from(c: Cartesian3) -> Self {
        [c.x, c.y, c.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot_and_magnitude() {
        let a = Cartesian3::new(1.0, 2.0, 2.0);
        let b = Cartesian3::new(2.0, -1.0, 0.5);

        assert_relative_eq!(a.dot(&b), 1.0, epsilon = 1e-15);
        assert_relative_eq!(a.magnitude(), 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_vector3_roundtrip() {
        let c = Cartesian3::new(-0.50787065, 0.80728228, 0.34996714);
        let v = c.to_vector3();
        let back = Cartesian3::from_vector3(v);

        assert_eq!(c, back);
        assert_relative_eq!(c.magnitude(), v.norm(), epsilon = 1e-15);
    }

    #[test]
    fn test_array_conversion() {
        let c: Cartesian3 = [0.1, 0.2, 0.3].into();
        let a: [f64; 3] = c.into();
        assert_eq!(a, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let c = Cartesian3::new(-0.5, 0.8, 0.3);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cartesian3 = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
