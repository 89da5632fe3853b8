//! Calendar date → Julian Day Number (Fliegel & Van Flandern, 1968).
//!
//! Integer arithmetic throughout, with floor division so that the formula
//! stays correct for years before 1 AD in the proleptic Gregorian calendar.

use crate::LocalDate;

/// Julian Day of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day Number for a proleptic-Gregorian `year`-`month`-`day`.
///
/// The caller guarantees a valid calendar date; see [`LocalDate::new`] for
/// a checked way to build one.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));

    // March-based year: Jan/Feb count as months 13/14 of the previous year
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let jdn = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045;
    jdn as f64
}

/// Julian Day Number for a [`LocalDate`].
pub fn julian_day_for(date: LocalDate) -> f64 {
    julian_day(date.year, date.month, date.day)
}

/// Julian centuries elapsed since J2000.0.
#[inline]
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}
