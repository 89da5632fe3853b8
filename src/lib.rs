//! # Salah Clock Core Library
//!
//! Daily prayer-time schedules computed from first principles: no ephemeris
//! files, no astronomy crates, no network access. Given a location, a
//! calendar date and a fixed UTC offset, the library produces the six daily
//! events (Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha) as local clock times.
//!
//! ## Design Philosophy
//!
//! ### Pure Values
//! - **No shared state**: every type here is a small `Copy` value; nothing is
//!   cached between calls, so schedules for different days or places can be
//!   computed from any number of threads at once
//! - **Absence is normal**: near the poles the Sun can fail to reach a
//!   threshold. Such events are `None`, never an error
//!
//! ### Data Flow
//! 1. **Date → Julian Day** ([`julian`])
//! 2. **Julian Day → declination + equation of time** ([`solar`])
//! 3. **Threshold angle → hour angle** ([`hour_angle`])
//! 4. **Hour angle → local clock times** ([`resolver`])
//! 5. **Six events → [`DailySchedule`]** ([`schedule`])
//!
//! Configuration, IP geolocation and terminal rendering live in [`config`],
//! [`geolocate`] and [`renderer`]; they only call into the core.
//!
//! ## Core Types
//! - [`GeoLocation`], [`LocalDate`], [`UtcOffset`]: the inputs
//! - [`CalculationMethod`], [`ShadowConvention`]: the juristic parameters
//! - [`DailySchedule`]: the output

use chrono::{Datelike, Local, NaiveDate, Offset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod angle;
pub mod config;
pub mod error;
pub mod geolocate;
pub mod hour_angle;
pub mod julian;
pub mod method;
pub mod renderer;
pub mod resolver;
pub mod schedule;
pub mod solar;

pub use error::SalahError;
pub use method::{CalculationMethod, MethodPreset, ShadowConvention};
pub use schedule::{compute_daily_schedule, ScheduleRequest};
pub use solar::SolarPosition;

/// A point on the Earth's surface.
///
/// Longitude is positive east of Greenwich.
///
/// # Example
/// ```
/// use salah_clock_lib::GeoLocation;
///
/// let mecca = GeoLocation::new(21.4225, 39.8262).unwrap();
/// assert_eq!(mecca.latitude, 21.4225);
///
/// assert!(GeoLocation::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Degrees north (-90 to 90)
    pub latitude: f64,
    /// Degrees east (-180 to 180)
    pub longitude: f64,
}

impl GeoLocation {
    /// Checked constructor; rejects out-of-range or non-finite coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SalahError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SalahError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SalahError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// A proleptic-Gregorian calendar date.
///
/// # Example
/// ```
/// use salah_clock_lib::LocalDate;
///
/// let date: LocalDate = "2024-06-21".parse().unwrap();
/// assert_eq!((date.year, date.month, date.day), (2024, 6, 21));
/// assert_eq!(date.to_string(), "2024-06-21");
///
/// assert!(LocalDate::new(2023, 2, 29).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocalDate {
    pub year: i32,
    /// 1 = January … 12 = December
    pub month: u32,
    /// 1 … 31
    pub day: u32,
}

impl LocalDate {
    /// Checked constructor; rejects dates that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, SalahError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or(SalahError::InvalidDate { year, month, day })
    }

    /// Today's date on the host clock.
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }
}

impl From<NaiveDate> for LocalDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl FromStr for LocalDate {
    type Err = SalahError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from)
            .map_err(|_| SalahError::UnparseableDate(s.to_string()))
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Fixed offset of local clock time from UTC, in hours.
///
/// There are no daylight-saving rules: during summer time pass the summer
/// offset (e.g. -4 for New York) explicitly.
///
/// # Example
/// ```
/// use salah_clock_lib::UtcOffset;
///
/// assert_eq!(UtcOffset::new(-5.0).unwrap().to_string(), "UTC-5");
/// assert_eq!(UtcOffset::new(5.5).unwrap().to_string(), "UTC+5.5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtcOffset(f64);

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset(0.0);

    /// Checked constructor; real-world offsets span -12 to +14 hours.
    pub fn new(hours: f64) -> Result<Self, SalahError> {
        if !(-14.0..=14.0).contains(&hours) {
            return Err(SalahError::InvalidUtcOffset(hours));
        }
        Ok(Self(hours))
    }

    /// The host clock's current offset, rounded to a tenth of an hour.
    pub fn from_local_clock() -> Self {
        let seconds = Local::now().offset().fix().local_minus_utc();
        Self((f64::from(seconds) / 3600.0 * 10.0).round() / 10.0)
    }

    pub fn hours(self) -> f64 {
        self.0
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding 0.0 turns -0.0 into 0.0
        write!(f, "UTC{:+}", self.0 + 0.0)
    }
}

/// The six daily events, in the order they occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// Every event in chronological order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One day's schedule as local clock times in fractional hours.
///
/// Values are normally within 0..24 but are not wrapped: an Isha past local
/// midnight shows up as e.g. `24.6`. `None` means the Sun never crosses the
/// event's threshold on that day at that latitude.
///
/// # Example
/// ```
/// use salah_clock_lib::{compute_daily_schedule, LocalDate, Prayer};
///
/// let date = LocalDate::new(2024, 3, 20).unwrap();
/// let schedule = compute_daily_schedule(0.0, 0.0, 0.0, date, 18.0, 17.0, 1.0);
///
/// assert!(schedule.get(Prayer::Sunrise).is_some());
/// assert!(schedule.is_ordered());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySchedule {
    pub fajr: Option<f64>,
    pub sunrise: Option<f64>,
    pub dhuhr: Option<f64>,
    pub asr: Option<f64>,
    pub maghrib: Option<f64>,
    pub isha: Option<f64>,
}

impl DailySchedule {
    pub fn get(&self, prayer: Prayer) -> Option<f64> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Entries in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, Option<f64>)> + '_ {
        Prayer::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// True unless two present events are out of chronological order.
    ///
    /// Absent events are skipped, so a polar schedule with only Dhuhr and
    /// Asr still checks that Asr follows Dhuhr.
    pub fn is_ordered(&self) -> bool {
        let present: Vec<f64> = self.iter().filter_map(|(_, t)| t).collect();
        present.windows(2).all(|w| w[0] <= w[1])
    }

    /// True when every one of the six events occurs.
    pub fn is_complete(&self) -> bool {
        self.iter().all(|(_, t)| t.is_some())
    }
}
