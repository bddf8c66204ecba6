//! Julian Day Number pivot arithmetic.
//!
//! Both converters meet in the middle at a JDN, a plain day count since the
//! astronomical epoch. The four functions here are two exact inverse pairs:
//! Gregorian/Julian <-> JDN and tabular Hijri <-> JDN. The JDN itself never
//! leaves this module.

use crate::consts::{GREGORIAN_REFORM_JDN, HIJRI_CYCLE_DAYS, HIJRI_CYCLE_YEARS, HIJRI_EPOCH_JDN};
use crate::types::{GregorianDate, HijriDate};

/// Days of the 1582 reform gap: 4 October was followed by 15 October.
const REFORM_GAP_DAYS: i64 = 10;

/// Computes the day number of a calendar date.
///
/// Years before 1583 are taken on the Julian calendar (no century
/// correction); within 1582 itself the correction switches at the October
/// reform cutoff. Out-of-range month/day values are not rejected, they
/// simply shift the result by the excess.
pub(crate) fn jdn_from_gregorian(date: GregorianDate) -> i64 {
    let mut y = i64::from(date.year);
    let mut m = i64::from(date.month);
    let day = i64::from(date.day);

    // January and February count as months 13/14 of the previous year so the
    // leap day lands at the end of the shifted year.
    if m < 3 {
        y -= 1;
        m += 12;
    }

    let a = y.div_euclid(100);
    let mut b = 2 - a + a.div_euclid(4);
    if y < 1583 {
        b = 0;
    }
    if y == 1582 && (m > 10 || (m == 10 && day > 14)) {
        b = -REFORM_GAP_DAYS;
    }

    floor_i64(365.25 * (y + 4716) as f64) + floor_i64(30.6001 * (m + 1) as f64) + day + b - 1524
}

/// Decomposes a day number into a tabular Hijri date.
pub(crate) fn hijri_from_jdn(jdn: i64) -> HijriDate {
    let days = jdn - HIJRI_EPOCH_JDN;
    let cycle = days.div_euclid(HIJRI_CYCLE_DAYS);
    let z = days - HIJRI_CYCLE_DAYS * cycle; // day of cycle, 0..=10630

    // Year within the cycle (1..=30), the exact inverse of the day count in
    // `jdn_from_hijri`.
    let j = (HIJRI_CYCLE_YEARS * z + 10_646).div_euclid(HIJRI_CYCLE_DAYS);
    let year = HIJRI_CYCLE_YEARS * cycle + j;

    let year_start = 354 * (j - 1) + (11 * j + 3).div_euclid(30);
    let doy = z - year_start + 1; // 1..=355

    // Months alternate 30/29 days, so 29.5 splits them evenly; the offsets
    // nudge the boundaries onto whole days.
    let mut month = floor_i64((doy as f64 + 28.5001) / 29.5);
    if month == 13 {
        // Day 355 only exists in leap years and belongs to the long Zilhicce.
        month = 12;
    }
    let day = doy - floor_i64(29.5 * month as f64 - 28.999);

    HijriDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
    }
}

/// Computes the day number of a tabular Hijri date.
///
/// Like the Gregorian direction, out-of-range fields are carried through the
/// arithmetic rather than rejected.
pub(crate) fn jdn_from_hijri(date: HijriDate) -> i64 {
    let y = i64::from(date.year);
    let m = i64::from(date.month);
    let d = i64::from(date.day);

    (11 * y + 3).div_euclid(30) + 354 * y + 30 * m - (m - 1).div_euclid(2) + d + HIJRI_EPOCH_JDN
        - 385
}

/// Decomposes a day number into a calendar date, branching on the 1582
/// calendar reform: day numbers past [`GREGORIAN_REFORM_JDN`] follow the
/// Gregorian rules, earlier ones the Julian rules.
pub(crate) fn gregorian_from_jdn(jdn: i64) -> GregorianDate {
    let (year, month, day) = if jdn > GREGORIAN_REFORM_JDN {
        // 400-year Gregorian cycles of 146097 days.
        let l = jdn + 68_569;
        let n = (4 * l).div_euclid(146_097);
        let l = l - (146_097 * n + 3).div_euclid(4);
        let i = (4000 * (l + 1)).div_euclid(1_461_001);
        let l = l - (1461 * i).div_euclid(4) + 31;
        let j = (80 * l).div_euclid(2447);
        let day = l - (2447 * j).div_euclid(80);
        let l = j.div_euclid(11);
        let month = j + 2 - 12 * l;
        let year = 100 * (n - 49) + i + l;
        (year, month, day)
    } else {
        // 4-year Julian cycles of 1461 days.
        let j = jdn + 1402;
        let k = (j - 1).div_euclid(1461);
        let l = j - 1461 * k;
        let n = (l - 1).div_euclid(365) - l.div_euclid(1461);
        let i = l - 365 * n + 30;
        let j2 = (80 * i).div_euclid(2447);
        let day = i - (2447 * j2).div_euclid(80);
        let i2 = j2.div_euclid(11);
        let month = j2 + 2 - 12 * i2;
        let year = 4 * k + n + i2 - 4716;
        (year, month, day)
    };

    GregorianDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
    }
}

/// Civil-calendar intermediate terms of a day number.
///
/// The forward conversion computes these alongside the Hijri decomposition
/// but never reads them; the Hijri result is unaffected whether or not this
/// runs. Kept isolated here so nobody wires it into the conversion by
/// accident.
// TODO: turn this into a debug assertion that `gregorian_from_jdn` and
// `jdn_from_gregorian` agree on the decomposed year/month terms.
#[allow(dead_code)]
pub(crate) fn civil_decomposition_terms(jdn: i64) -> (i64, i64, i64) {
    let b1 = if jdn > GREGORIAN_REFORM_JDN {
        let a1 = floor_i64((jdn as f64 - 1_867_216.25) / 36_524.25);
        1 + a1 - a1.div_euclid(4)
    } else {
        0
    };
    let bb = jdn + b1 + 1524;
    let cc = floor_i64((bb as f64 - 122.1) / 365.25);
    let dd = floor_i64(365.25 * cc as f64);
    let ee = floor_i64((bb - dd) as f64 / 30.6001);
    (cc, dd, ee)
}

#[inline]
fn floor_i64(x: f64) -> i64 {
    x.floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hijri_epoch() {
        assert_eq!(jdn_from_hijri(HijriDate::new(1, 1, 1)), HIJRI_EPOCH_JDN);
        assert_eq!(hijri_from_jdn(HIJRI_EPOCH_JDN), HijriDate::new(1, 1, 1));
    }

    #[test]
    fn known_day_numbers() {
        // Widely published JDN anchors
        assert_eq!(jdn_from_gregorian(GregorianDate::new(2000, 1, 1)), 2_451_545);
        assert_eq!(jdn_from_gregorian(GregorianDate::new(1970, 1, 1)), 2_440_588);
        // Julian-calendar era (century correction suppressed)
        assert_eq!(jdn_from_gregorian(GregorianDate::new(1000, 1, 1)), 2_086_308);
        assert_eq!(jdn_from_gregorian(GregorianDate::new(622, 7, 16)), 1_948_440);
    }

    #[test]
    fn reform_boundary_decomposition() {
        assert_eq!(
            gregorian_from_jdn(GREGORIAN_REFORM_JDN),
            GregorianDate::new(1582, 10, 4)
        );
        assert_eq!(
            gregorian_from_jdn(GREGORIAN_REFORM_JDN + 1),
            GregorianDate::new(1582, 10, 15)
        );
        assert_eq!(
            gregorian_from_jdn(GREGORIAN_REFORM_JDN - 1),
            GregorianDate::new(1582, 10, 3)
        );
    }

    #[test]
    fn reform_boundary_composition() {
        assert_eq!(
            jdn_from_gregorian(GregorianDate::new(1582, 10, 4)),
            GREGORIAN_REFORM_JDN
        );
        assert_eq!(
            jdn_from_gregorian(GregorianDate::new(1582, 10, 15)),
            GREGORIAN_REFORM_JDN + 1
        );
    }

    #[test]
    fn month_formula_clamp() {
        // JDN 2460498 is day 355 of leap year 1445: the raw month formula
        // yields 13 and must clamp to Zilhicce day 30.
        assert_eq!(hijri_from_jdn(2_460_498), HijriDate::new(1445, 12, 30));
        // The next day opens year 1446.
        assert_eq!(hijri_from_jdn(2_460_499), HijriDate::new(1446, 1, 1));
    }

    #[test]
    fn hijri_round_trip_every_day() {
        // Every day of several 30-year cycles, spanning the reform boundary
        for jdn in 2_290_000..2_330_000 {
            let h = hijri_from_jdn(jdn);
            assert_eq!(jdn_from_hijri(h), jdn, "hijri {h} at jdn {jdn}");
        }
        // The modern era
        for jdn in 2_451_545..2_462_000 {
            let h = hijri_from_jdn(jdn);
            assert_eq!(jdn_from_hijri(h), jdn, "hijri {h} at jdn {jdn}");
        }
    }

    #[test]
    fn gregorian_round_trip_every_day() {
        for jdn in 2_290_000..2_330_000 {
            let g = gregorian_from_jdn(jdn);
            assert_eq!(jdn_from_gregorian(g), jdn, "gregorian {g} at jdn {jdn}");
        }
        for jdn in 2_451_545..2_462_000 {
            let g = gregorian_from_jdn(jdn);
            assert_eq!(jdn_from_gregorian(g), jdn, "gregorian {g} at jdn {jdn}");
        }
    }

    #[test]
    fn proleptic_negative_years() {
        for (date, jdn) in [
            (GregorianDate::new(100, 1, 1), 1_757_583),
            (GregorianDate::new(-100, 1, 1), 1_684_533),
        ] {
            assert_eq!(jdn_from_gregorian(date), jdn);
            assert_eq!(gregorian_from_jdn(jdn), date);
        }
        // Hijri years before the epoch
        let h = hijri_from_jdn(1_903_683);
        assert_eq!(h, HijriDate::new(-126, 9, 14));
        assert_eq!(jdn_from_hijri(h), 1_903_683);
    }

    #[test]
    fn vestigial_terms_do_not_affect_result() {
        let jdn = 2_460_499;
        let before = hijri_from_jdn(jdn);
        let _ = civil_decomposition_terms(jdn);
        assert_eq!(hijri_from_jdn(jdn), before);
    }
}
