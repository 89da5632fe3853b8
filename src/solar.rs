//! Low-precision solar ephemeris (Meeus, *Astronomical Algorithms*, ch. 25)
//!
//! Truncated series for the Sun's apparent longitude plus the NOAA form of
//! the equation of time. Accuracy: ~0.01° in declination and a few seconds
//! in the equation of time for dates within a few centuries of J2000, which
//! is well below the one-minute resolution of a prayer timetable.
//!
//! The numeric coefficients below are the model. Do not round or "tidy"
//! them: every schedule regression fixture depends on them.

#![allow(clippy::many_single_char_names)]

use crate::angle::{normalize_angle, to_degrees, to_radians};
use crate::julian::{julian_centuries, julian_day_for};
use crate::LocalDate;

/// Where the Sun sits on a given day, as far as rise/set math cares.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolarPosition {
    /// Declination in degrees (±23.45 in practice)
    pub declination: f64,
    /// Equation of time in minutes (apparent minus mean solar time, ±20)
    pub equation_of_time: f64,
}

impl SolarPosition {
    /// Evaluate the model at Julian Day `jd` (fractional days allowed).
    pub fn at(jd: f64) -> Self {
        let t = julian_centuries(jd);
        let t2 = t * t;

        // ---------- 1. Mean elements of the Sun's apparent orbit ----------
        let l0 = normalize_angle(280.46646 + 36000.76983 * t + 0.0003032 * t2);
        let m = normalize_angle(357.52911 + 35999.05029 * t - 0.0001537 * t2);
        let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

        // ---------- 2. Equation of centre → true and apparent longitude ----
        let m_rad = to_radians(m);
        let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m_rad.sin()
            + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
            + 0.000289 * (3.0 * m_rad).sin();
        let true_longitude = l0 + c;

        // Ω drives both the nutation/aberration and the obliquity corrections
        let omega = to_radians(125.04 - 1934.136 * t);
        let apparent_longitude = true_longitude - 0.00569 - 0.00478 * omega.sin();

        // ---------- 3. Obliquity of the ecliptic ----------------------------
        let eps0 = 23.4392911111111 - 0.0130041666667 * t - 1.666666667e-7 * t2
            + 5.02777778e-7 * t2 * t;
        let eps = to_radians(eps0 + 0.00256 * omega.cos());

        // ---------- 4. Declination ------------------------------------------
        let declination = to_degrees((eps.sin() * to_radians(apparent_longitude).sin()).asin());

        // ---------- 5. Equation of time (radians → degrees → minutes) ------
        let y = (eps / 2.0).tan().powi(2);
        let l0_rad = to_radians(l0);
        let eot = y * (2.0 * l0_rad).sin() - 2.0 * e * m_rad.sin()
            + 4.0 * e * y * m_rad.sin() * (2.0 * l0_rad).cos()
            - 0.5 * y * y * (4.0 * l0_rad).sin()
            - 1.25 * e * e * (2.0 * m_rad).sin();
        let equation_of_time = to_degrees(eot) * 4.0;

        SolarPosition {
            declination,
            equation_of_time,
        }
    }

    /// Evaluate the model at midday (JD + 0.5) of a calendar date.
    ///
    /// Midday keeps the values representative of the daylight hours the
    /// schedule cares about.
    pub fn for_date(date: LocalDate) -> Self {
        Self::at(julian_day_for(date) + 0.5)
    }
}
