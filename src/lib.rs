//! Precess: IAU 2006/2000A bias, precession and nutation rotations
//!
//! This crate evaluates the IAU 2006 precession and IAU 2000A nutation
//! models at a TDB epoch and applies the resulting rotation matrices to
//! Cartesian direction vectors, moving them between the ICRS and the mean
//! or true equator-of-date frames.
//!
//! ```rust
//! use precess::{Cartesian3, Ephemeris, Epoch};
//!
//! let epoch = Epoch::parse("20160723").unwrap();
//! let eph = Ephemeris::new(epoch);
//!
//! let icrs = Cartesian3::new(-0.50787065, 0.80728228, 0.34996714);
//! let true_of_date = eph.apply_bias_precession_nutation(icrs);
//!
//! assert!((true_of_date.magnitude() - icrs.magnitude()).abs() < 1e-12);
//! ```

use thiserror::Error;

pub mod arguments;
pub mod constants;
pub mod coordinates;
pub mod earthlib;
pub mod framelib;
pub mod nutationlib;
pub mod precessionlib;
pub mod rotationlib;
pub mod time;

// Re-export commonly used types
pub use coordinates::Cartesian3;
pub use framelib::Ephemeris;
pub use time::{Epoch, TimeError};

/// Main error type for the precess library
///
/// The rotation core itself is total and never fails; everything that can
/// go wrong happens while resolving the input epoch.
#[derive(Debug, Error)]
pub enum PrecessError {
    #[error("Time error: {0}")]
    TimeError(#[from] time::TimeError),
}

/// Result type for precess operations
pub type Result<T> = std::result::Result<T, PrecessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_error_converts() {
        fn resolve(s: &str) -> Result<Ephemeris> {
            let epoch = Epoch::parse(s)?;
            Ok(Ephemeris::new(epoch))
        }

        assert!(resolve("20160723").is_ok());
        let err = resolve("2016-07-23").unwrap_err();
        assert!(matches!(err, PrecessError::TimeError(_)));
        println!("propagated: {}", err);
    }
}
