//! TDB epoch handling and Julian date conversions
//!
//! The rotation models in this crate are parameterized by Julian centuries of
//! TDB elapsed since J2000.0. This module owns the path from a calendar
//! instant to that parameter: a validated [`Epoch`], the proleptic-Gregorian
//! calendar to Julian date conversion [`gc2jd`], and the Julian date to
//! Julian century conversion [`jd2jc`].
//!
//! Leap seconds and UT1/TDB corrections are out of scope; the epoch is taken
//! to already be in TDB.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DJC, J2000};

/// Errors raised while resolving an epoch from user input
#[derive(Debug, Error, PartialEq)]
pub enum TimeError {
    #[error("Invalid epoch format: {0}")]
    InvalidFormat(String),

    #[error("Invalid date-time: {0}")]
    InvalidDateTime(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// A calendar instant in the TDB timescale, proleptic Gregorian
///
/// Construction validates the calendar fields, so every `Epoch` in existence
/// maps to a well-defined Julian date. Seconds are whole; the underlying
/// models vary over centuries and sub-second epoch resolution is meaningless
/// for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epoch {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Epoch {
    /// Creates an epoch from calendar fields, validating ranges
    ///
    /// The date must exist in the proleptic Gregorian calendar (Feb 30
    /// is rejected, Feb 29 only on leap years) and the time of day must be
    /// within 00:00:00..=23:59:59.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidDateTime(format!(
                "no such calendar date: {:04}-{:02}-{:02}",
                year, month, day
            )));
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidDateTime(format!(
                "time of day out of range: {:02}:{:02}:{:02}",
                hour, minute, second
            )));
        }
        Ok(Epoch {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates an epoch at midnight of the given date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Epoch::new(year, month, day, 0, 0, 0)
    }

    /// Parses an epoch from a `YYYYMMDD` or `YYYYMMDDHHMMSS` digit string
    ///
    /// The eight-digit form means midnight. Anything else, including signs,
    /// separators, or stray whitespace, is an `InvalidFormat` error; a
    /// well-formed string naming an impossible instant is `InvalidDateTime`.
    pub fn parse(s: &str) -> Result<Self> {
        if !(s.len() == 8 || s.len() == 14) || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::InvalidFormat(format!(
                "expected YYYYMMDD or YYYYMMDDHHMMSS, got {:?}",
                s
            )));
        }

        let field = |r: std::ops::Range<usize>| -> Result<u32> {
            s[r.clone()]
                .parse::<u32>()
                .map_err(|e| TimeError::InvalidFormat(format!("{}: {:?}", e, &s[r])))
        };

        let year = field(0..4)? as i32;
        let month = field(4..6)?;
        let day = field(6..8)?;
        let (hour, minute, second) = if s.len() == 14 {
            (field(8..10)?, field(10..12)?, field(12..14)?)
        } else {
            (0, 0, 0)
        };

        Epoch::new(year, month, day, hour, minute, second)
    }

    /// Julian date of this epoch
    pub fn julian_day(&self) -> f64 {
        gc2jd(self)
    }

    /// Julian centuries of TDB since J2000.0
    pub fn julian_century(&self) -> f64 {
        jd2jc(self.julian_day())
    }
}

/// Converts a proleptic-Gregorian calendar instant to a Julian date
///
/// Fliegel-style floor arithmetic; January and February count as months 13
/// and 14 of the previous year. Midnight dates land exactly on half-integer
/// Julian dates, e.g. 1858-11-17 00:00 is 2400000.5 (the MJD origin) and
/// 2000-01-01 12:00 is 2451545.0 (J2000.0).
pub fn gc2jd(epoch: &Epoch) -> f64 {
    let mut year = f64::from(epoch.year);
    let mut month = f64::from(epoch.month);
    if epoch.month < 3 {
        year -= 1.0;
        month += 12.0;
    }

    let day = (365.25 * year).floor() + (year / 400.0).floor() - (year / 100.0).floor()
        + (30.59 * (month - 2.0)).floor()
        + f64::from(epoch.day)
        + 1_721_088.5;
    let fraction = (f64::from(epoch.second) / 3600.0 + f64::from(epoch.minute) / 60.0
        + f64::from(epoch.hour))
        / 24.0;

    day + fraction
}

/// Converts a Julian date to Julian centuries since J2000.0
pub fn jd2jc(jd: f64) -> f64 {
    (jd - J2000) / DJC
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1858, 11, 17, 0, 0, 0, 2_400_000.5)] // MJD origin
    #[case(2000, 1, 1, 12, 0, 0, 2_451_545.0)] // J2000.0
    #[case(2016, 7, 23, 0, 0, 0, 2_457_592.5)]
    #[case(2016, 2, 29, 0, 0, 0, 2_457_447.5)]
    #[case(1, 1, 1, 0, 0, 0, 1_721_425.5)]
    fn test_gc2jd_reference_dates(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] hour: u32,
        #[case] minute: u32,
        #[case] second: u32,
        #[case] expected: f64,
    ) {
        let epoch = Epoch::new(year, month, day, hour, minute, second).unwrap();
        assert_eq!(epoch.julian_day(), expected);
    }

    #[test]
    fn test_gc2jd_time_fraction() {
        let epoch = Epoch::new(1999, 12, 31, 23, 59, 59).unwrap();
        assert_abs_diff_eq!(epoch.julian_day(), 2_451_544.499_988_426, epsilon = 1e-9);
    }

    #[test]
    fn test_jd2jc() {
        assert_eq!(jd2jc(2_451_545.0), 0.0);
        assert_eq!(jd2jc(2_451_545.0 + 36_525.0), 1.0);
        assert_abs_diff_eq!(
            jd2jc(2_457_592.5),
            0.165_571_526_351_813_82,
            epsilon = 1e-17
        );
    }

    #[test]
    fn test_new_rejects_bad_dates() {
        assert!(Epoch::new(2016, 2, 30, 0, 0, 0).is_err());
        assert!(Epoch::new(2015, 2, 29, 0, 0, 0).is_err());
        assert!(Epoch::new(2016, 13, 1, 0, 0, 0).is_err());
        assert!(Epoch::new(2016, 7, 23, 24, 0, 0).is_err());
        assert!(Epoch::new(2016, 7, 23, 0, 60, 0).is_err());
        assert!(Epoch::new(2016, 7, 23, 0, 0, 60).is_err());
    }

    #[test]
    fn test_parse_date_only() {
        let epoch = Epoch::parse("20160723").unwrap();
        assert_eq!(epoch, Epoch::from_ymd(2016, 7, 23).unwrap());
        assert_eq!(epoch.julian_day(), 2_457_592.5);
    }

    #[test]
    fn test_parse_full() {
        let epoch = Epoch::parse("19991231235959").unwrap();
        assert_eq!(epoch, Epoch::new(1999, 12, 31, 23, 59, 59).unwrap());
    }

    #[rstest]
    #[case("2016723")] // too short
    #[case("201607230")] // nine digits
    #[case("2016-07-23")]
    #[case("20160723 ")]
    #[case("+2016072")]
    #[case("")]
    fn test_parse_rejects_malformed(#[case] input: &str) {
        assert!(matches!(
            Epoch::parse(input),
            Err(TimeError::InvalidFormat(_))
        ));
    }

    #[rstest]
    #[case("20160230")] // Feb 30
    #[case("20160723240000")]
    #[case("20160000")]
    fn test_parse_rejects_impossible_instants(#[case] input: &str) {
        assert!(matches!(
            Epoch::parse(input),
            Err(TimeError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let epoch = Epoch::new(2016, 7, 23, 1, 2, 3).unwrap();
        let json = serde_json::to_string(&epoch).unwrap();
        let back: Epoch = serde_json::from_str(&json).unwrap();
        assert_eq!(epoch, back);
    }
}
