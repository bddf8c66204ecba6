//! Bidirectional conversion between the proleptic Gregorian calendar and the
//! tabular Hijri calendar, pivoting through a Julian Day Number.
//!
//! The two converters are pure, stateless mirror images: equal inputs always
//! produce identical outputs, and `to_gregorian(to_hijri(d)) == d` for any
//! real calendar day. The default entry points are deliberately permissive
//! (no input validation, garbage in / garbage out); `_checked` variants
//! reject out-of-range fields instead of silently computing nonsense.
//!
//! The Hijri side is the tabular 30-year-cycle approximation. It tracks
//! sighting-based civil calendars to within a day or two but is not a
//! religious authority; do not use it to schedule observances.
//!
//! ```
//! use hijri_date::{GregorianDate, HijriDate};
//!
//! let h = GregorianDate::new(2024, 7, 7).to_hijri();
//! assert_eq!(h, HijriDate::new(1446, 1, 1));
//! assert_eq!(h.month_name(), Some("Muharrem"));
//! assert_eq!(h.to_gregorian(), GregorianDate::new(2024, 7, 7));
//! ```

mod consts;
mod jdn;
mod prelude;
mod types;

pub use consts::*;
pub use types::{
    GregorianDate, HijriDate, gregorian_month_len, hijri_month_len, is_gregorian_leap_year,
    is_hijri_leap_year,
};

/// Error type for the validating conversion entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Month outside 1-12.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day outside the month's length.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

impl GregorianDate {
    /// Converts to the tabular Hijri calendar.
    ///
    /// Pre-1583 inputs are read as Julian-calendar dates; 1582 itself
    /// switches at the October reform cutoff. No validation is performed:
    /// an impossible month/day shifts the result by the excess days rather
    /// than failing.
    pub fn to_hijri(self) -> HijriDate {
        jdn::hijri_from_jdn(jdn::jdn_from_gregorian(self))
    }

    /// Validating variant of [`to_hijri`](Self::to_hijri).
    ///
    /// # Errors
    /// Returns `ConvertError` when the month is outside 1-12 or the day does
    /// not exist in the month.
    pub fn to_hijri_checked(self) -> Result<HijriDate, ConvertError> {
        self.validate()?;
        Ok(self.to_hijri())
    }
}

impl HijriDate {
    /// Converts to the Gregorian calendar.
    ///
    /// Results on or before 4 October 1582 (JDN 2299160) are Julian-calendar
    /// dates, matching the forward direction's reform handling. No validation
    /// is performed on the input.
    pub fn to_gregorian(self) -> GregorianDate {
        jdn::gregorian_from_jdn(jdn::jdn_from_hijri(self))
    }

    /// Validating variant of [`to_gregorian`](Self::to_gregorian).
    ///
    /// # Errors
    /// Returns `ConvertError` when the month is outside 1-12 or the day
    /// exceeds the tabular month length (30 for odd months, 29 for even,
    /// 30 for Zilhicce of a leap year).
    pub fn to_gregorian_checked(self) -> Result<GregorianDate, ConvertError> {
        self.validate()?;
        Ok(self.to_gregorian())
    }
}
