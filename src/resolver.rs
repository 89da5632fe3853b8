//! # Event-Time Resolution
//!
//! Turns hour angles into local clock times for one observer on one day.
//!
//! Every event except Asr comes in a symmetric pair around local solar noon:
//! the Sun crosses a given altitude once while rising and once while setting,
//! `H / 15` hours either side of the meridian. Asr uses its own altitude
//! formula and only ever takes the afternoon crossing.
//!
//! Thresholds can be stated either as an *altitude* above the horizon
//! (negative below it) or as a *zenith distance*; the two entry points
//! [`SolarDay::resolve_by_altitude`] and [`SolarDay::resolve_by_zenith`] keep
//! the conventions apart instead of guessing from the magnitude.

use crate::angle::{to_degrees, to_radians};
use crate::hour_angle::hour_angle;
use crate::{GeoLocation, LocalDate, SolarPosition, UtcOffset};

/// Altitude of the Sun's centre at apparent sunrise/sunset: 16' semi-diameter
/// plus 34' of standard horizontal refraction.
pub const SUNRISE_ALTITUDE: f64 = -0.833;

/// Morning and evening local times at which the Sun crosses one threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventPair {
    /// Rising crossing, fractional local hours
    pub morning: f64,
    /// Setting crossing, fractional local hours
    pub evening: f64,
}

/// One observer's day: location, clock offset and the Sun's position for
/// that date, computed once and shared by every event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolarDay {
    pub location: GeoLocation,
    pub offset: UtcOffset,
    pub sun: SolarPosition,
}

impl SolarDay {
    pub fn new(location: GeoLocation, offset: UtcOffset, date: LocalDate) -> Self {
        Self {
            location,
            offset,
            sun: SolarPosition::for_date(date),
        }
    }

    /// Local clock time of solar transit (Dhuhr).
    ///
    /// Depends only on longitude, offset and the equation of time.
    pub fn solar_noon(&self) -> f64 {
        let noon_utc = 12.0 - self.sun.equation_of_time / 60.0 - self.location.longitude / 15.0;
        noon_utc + self.offset.hours()
    }

    /// Crossings of a threshold stated as altitude above the horizon.
    pub fn resolve_by_altitude(&self, altitude: f64) -> Option<EventPair> {
        self.resolve_by_zenith(90.0 - altitude)
    }

    /// Crossings of a threshold stated as zenith distance.
    pub fn resolve_by_zenith(&self, zenith: f64) -> Option<EventPair> {
        let h = hour_angle(self.location.latitude, self.sun.declination, zenith)?;
        Some(self.pair_around_noon(h))
    }

    /// Symmetric pair `H / 15` hours either side of solar noon.
    pub fn pair_around_noon(&self, hour_angle: f64) -> EventPair {
        let noon = self.solar_noon();
        let delta = hour_angle / 15.0;
        EventPair {
            morning: noon - delta,
            evening: noon + delta,
        }
    }

    /// Local clock time of Asr for a shadow-length `factor` (1 or 2).
    pub fn asr(&self, factor: f64) -> Option<f64> {
        let altitude = asr_altitude(self.location.latitude, self.sun.declination, factor)?;
        self.resolve_by_altitude(altitude).map(|pair| pair.evening)
    }
}

/// Solar altitude in degrees at which Asr begins:
/// `atan(1 / (factor + |tan(φ − δ)|))`.
///
/// Returns `None` where the formula degenerates: `tan` blowing up as
/// φ − δ approaches ±90°, or a divisor that is not strictly positive.
pub fn asr_altitude(latitude: f64, declination: f64, factor: f64) -> Option<f64> {
    let noon_shadow = to_radians(latitude - declination).tan().abs();
    if !noon_shadow.is_finite() {
        return None;
    }
    let divisor = factor + noon_shadow;
    if divisor <= 0.0 || !divisor.is_finite() {
        return None;
    }
    let altitude = to_degrees((1.0 / divisor).atan());
    altitude.is_finite().then_some(altitude)
}
