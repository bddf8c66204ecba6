use crate::ConvertError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_MONTHS,
    HIJRI_MONTHS, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A Gregorian calendar date as a plain value.
///
/// The year is proleptic and may be negative or pre-1582; pre-1583 dates are
/// interpreted on the Julian calendar, matching the reform handling of the
/// converters. The fields are deliberately unconstrained: conversions accept
/// out-of-range month/day and push them through the arithmetic unchanged.
/// Use [`GregorianDate::validate`] or the `_checked` entry points when the
/// input is untrusted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// A tabular Hijri calendar date as a plain value.
///
/// Same permissive contract as [`GregorianDate`]: day 30 of a 29-day month is
/// representable and only rejected by the validating entry points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct HijriDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    /// Creates a date without validating it.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Checks that the month is 1-12 and the day fits the civil month length.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidMonth` or `ConvertError::InvalidDay`.
    pub fn validate(self) -> Result<(), ConvertError> {
        if !(1..=MAX_MONTH).contains(&self.month) {
            return Err(ConvertError::InvalidMonth(self.month));
        }
        if self.day < MIN_DAY || self.day > gregorian_month_len(self.year, self.month) {
            return Err(ConvertError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        Ok(())
    }

    /// Returns the month label for rendering, `None` if the month is out of range.
    pub fn month_name(self) -> Option<&'static str> {
        GREGORIAN_MONTHS
            .get(usize::from(self.month.wrapping_sub(1)))
            .copied()
    }
}

impl HijriDate {
    /// Creates a date without validating it.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Checks that the month is 1-12 and the day fits the tabular month length.
    ///
    /// The length check uses the full 30-year-cycle rule, so day 30 of
    /// Zilhicce is accepted exactly in leap years. Every date the forward
    /// converter can produce passes this check.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidMonth` or `ConvertError::InvalidDay`.
    pub fn validate(self) -> Result<(), ConvertError> {
        if !(1..=MAX_MONTH).contains(&self.month) {
            return Err(ConvertError::InvalidMonth(self.month));
        }
        if self.day < MIN_DAY || self.day > hijri_month_len(self.year, self.month) {
            return Err(ConvertError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        Ok(())
    }

    /// Returns the month label for rendering, `None` if the month is out of range.
    pub fn month_name(self) -> Option<&'static str> {
        HIJRI_MONTHS
            .get(usize::from(self.month.wrapping_sub(1)))
            .copied()
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn gregorian_month_len(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// A tabular Hijri year is leap when `(11y + 3) mod 30 >= 19`, which places
/// the 11 leap years at 2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29 of each cycle.
pub const fn is_hijri_leap_year(year: i32) -> bool {
    (11 * year as i64 + 3).rem_euclid(30) >= 19
}

/// Tabular month lengths alternate 30/29, with Zilhicce (month 12) taking the
/// leap day.
pub const fn hijri_month_len(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month % 2 == 1 || (month == MAX_MONTH && is_hijri_leap_year(year)) {
        30
    } else {
        29
    }
}
