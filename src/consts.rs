/// Julian Day Number of 1 Muharrem 1 AH (15 July 622, Julian calendar).
pub const HIJRI_EPOCH_JDN: i64 = 1_948_439;

/// Days in one 30-year tabular Hijri cycle (19 common + 11 leap years).
pub const HIJRI_CYCLE_DAYS: i64 = 10_631;

/// Years in one tabular Hijri cycle.
pub const HIJRI_CYCLE_YEARS: i64 = 30;

/// Day number of 4 October 1582, the last Julian-calendar day. The next
/// day number is 15 October 1582, Gregorian.
pub const GREGORIAN_REFORM_JDN: i64 = 2_299_160;

/// Maximum valid month (December / Zilhicce)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Hijri month names, index 0 = month 1 (Muharrem).
pub const HIJRI_MONTHS: [&str; 12] = [
    "Muharrem",
    "Safer",
    "Rebiülevvel",
    "Rebiülahir",
    "Cemaziyelevvel",
    "Cemaziyelahir",
    "Recep",
    "Şaban",
    "Ramazan",
    "Şevval",
    "Zilkade",
    "Zilhicce",
];

/// Gregorian month names, index 0 = month 1 (Ocak/January).
pub const GREGORIAN_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];
