//! # Daily Schedule Builder
//!
//! Composes the resolvers into the six daily events. The Sun's position is
//! evaluated once per call; every event is then resolved independently from
//! it, so a missing event (polar day or night) never affects the others.
//!
//! | Event   | Threshold                         | Root      |
//! |---------|-----------------------------------|-----------|
//! | Fajr    | altitude −fajr angle              | morning   |
//! | Sunrise | altitude −0.833°                  | morning   |
//! | Dhuhr   | solar transit                     | —         |
//! | Asr     | shadow = noon shadow + factor     | afternoon |
//! | Maghrib | altitude −0.833°                  | evening   |
//! | Isha    | altitude −isha angle              | evening   |

use crate::resolver::{SolarDay, SUNRISE_ALTITUDE};
use crate::{
    CalculationMethod, DailySchedule, GeoLocation, LocalDate, SalahError, ShadowConvention,
    UtcOffset,
};
use serde::{Deserialize, Serialize};

/// Build the schedule for one observer and date.
///
/// `shadow_factor` is the Asr multiplier, normally
/// [`ShadowConvention::factor`].
pub fn build(
    location: GeoLocation,
    offset: UtcOffset,
    date: LocalDate,
    method: CalculationMethod,
    shadow_factor: f64,
) -> DailySchedule {
    let day = SolarDay::new(location, offset, date);

    let horizon = day.resolve_by_altitude(SUNRISE_ALTITUDE);
    let fajr = day.resolve_by_altitude(-method.fajr_angle);
    let isha = day.resolve_by_altitude(-method.isha_angle);

    DailySchedule {
        fajr: fajr.map(|pair| pair.morning),
        sunrise: horizon.map(|pair| pair.morning),
        dhuhr: Some(day.solar_noon()),
        asr: day.asr(shadow_factor),
        maghrib: horizon.map(|pair| pair.evening),
        isha: isha.map(|pair| pair.evening),
    }
}

/// Flat-argument entry point for callers that hold plain numbers.
///
/// Preconditions: latitude in [-90, 90], longitude in [-180, 180], both
/// twilight angles positive and `shadow_factor >= 1`. Inputs are not
/// range-checked in release builds; validate with the checked constructors
/// ([`GeoLocation::new`], [`CalculationMethod::new`], …) before calling.
///
/// # Example
/// ```
/// use salah_clock_lib::{compute_daily_schedule, LocalDate};
///
/// let date = LocalDate::new(2024, 6, 21).unwrap();
/// let nyc = compute_daily_schedule(40.7128, -74.0060, -5.0, date, 18.0, 17.0, 1.0);
///
/// let dhuhr = nyc.dhuhr.unwrap();
/// assert!((dhuhr - 11.97).abs() < 0.01);
/// ```
pub fn compute_daily_schedule(
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    date: LocalDate,
    fajr_angle_degrees: f64,
    isha_angle_degrees: f64,
    shadow_factor: f64,
) -> DailySchedule {
    debug_assert!((-90.0..=90.0).contains(&latitude), "latitude {latitude}");
    debug_assert!((-180.0..=180.0).contains(&longitude), "longitude {longitude}");
    debug_assert!(fajr_angle_degrees > 0.0 && isha_angle_degrees > 0.0);
    debug_assert!(shadow_factor >= 1.0, "shadow factor {shadow_factor}");

    build(
        GeoLocation {
            latitude,
            longitude,
        },
        UtcOffset(utc_offset_hours),
        date,
        CalculationMethod {
            fajr_angle: fajr_angle_degrees,
            isha_angle: isha_angle_degrees,
        },
        shadow_factor,
    )
}

/// Everything needed to produce one schedule.
///
/// This is the whole of the application's state: the presentation layer
/// builds a new request whenever an input changes and recomputes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub location: GeoLocation,
    pub offset: UtcOffset,
    pub date: LocalDate,
    pub method: CalculationMethod,
    pub shadow: ShadowConvention,
}

impl ScheduleRequest {
    /// Checked constructor from raw user input.
    pub fn new(
        latitude: f64,
        longitude: f64,
        utc_offset_hours: f64,
        date: LocalDate,
        method: CalculationMethod,
        shadow: ShadowConvention,
    ) -> Result<Self, SalahError> {
        Ok(Self {
            location: GeoLocation::new(latitude, longitude)?,
            offset: UtcOffset::new(utc_offset_hours)?,
            date,
            method: CalculationMethod::new(method.fajr_angle, method.isha_angle)?,
            shadow,
        })
    }

    pub fn compute(&self) -> DailySchedule {
        build(
            self.location,
            self.offset,
            self.date,
            self.method,
            self.shadow.factor(),
        )
    }

    /// Same request for another day.
    pub fn on(self, date: LocalDate) -> Self {
        Self { date, ..self }
    }
}
