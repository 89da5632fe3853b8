//! # Schedule Rendering
//!
//! Terminal output for the prayer clock: a fixed-width ASCII table for humans
//! and a JSON document for scripts and status bars. Rendering never touches
//! the astronomy; it only formats a [`DailySchedule`] that was computed
//! elsewhere.

use crate::{DailySchedule, MethodPreset, ScheduleRequest, ShadowConvention};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Placeholder shown for an event that does not occur.
pub const MISSING: &str = "--:--";

/// Width of the right-aligned event-name column.
const LABEL_WIDTH: usize = 8;

/// Format fractional local hours as `HH:MM`.
///
/// Hours are floored and minutes rounded; a rounded minute of 60 carries
/// into the next hour, and hours wrap modulo 24 so that e.g. an Isha at
/// 24.6 h reads `00:36`.
///
/// # Example
/// ```
/// use salah_clock_lib::renderer::format_clock_time;
///
/// assert_eq!(format_clock_time(Some(13.5)), "13:30");
/// assert_eq!(format_clock_time(Some(23.9999)), "00:00");
/// assert_eq!(format_clock_time(None), "--:--");
/// ```
pub fn format_clock_time(hours: Option<f64>) -> String {
    let Some(t) = hours.filter(|t| t.is_finite()) else {
        return MISSING.to_string();
    };
    let whole = t.floor();
    let mut h = (whole as i64).rem_euclid(24);
    let mut m = ((t - whole) * 60.0).round() as i64;
    if m == 60 {
        m = 0;
        h = (h + 1) % 24;
    }
    format!("{h:02}:{m:02}")
}

/// Plain-text table, one event per line, followed by a status line.
pub fn render_table(schedule: &DailySchedule, request: &ScheduleRequest) -> String {
    let mut out = String::new();
    for (prayer, time) in schedule.iter() {
        out.push_str(&format!(
            "{:>width$}: {}\n",
            prayer.name(),
            format_clock_time(time),
            width = LABEL_WIDTH
        ));
    }
    out.push_str(&status_line(request));
    out.push('\n');
    out
}

/// `Calculated for 2024-06-21 (UTC-5)`
pub fn status_line(request: &ScheduleRequest) -> String {
    format!("Calculated for {} ({})", request.date, request.offset)
}

/// `Local time: 2024-06-21 14:03:09`
pub fn clock_line(now: NaiveDateTime) -> String {
    format!("Local time: {}", now.format("%Y-%m-%d %H:%M:%S"))
}

/// Print the table to stdout, optionally with a live clock line.
pub fn draw_ascii(schedule: &DailySchedule, request: &ScheduleRequest, now: Option<NaiveDateTime>) {
    print!("{}", render_table(schedule, request));
    if let Some(now) = now {
        println!("{}", clock_line(now));
    }
}

/// Six formatted times in schedule order; `null` for events that do not occur.
#[derive(Debug, Serialize)]
pub struct FormattedTimes {
    pub fajr: Option<String>,
    pub sunrise: Option<String>,
    pub dhuhr: Option<String>,
    pub asr: Option<String>,
    pub maghrib: Option<String>,
    pub isha: Option<String>,
}

/// Machine-readable rendering of one schedule and the inputs behind it.
#[derive(Debug, Serialize)]
pub struct ScheduleReport {
    pub date: String,
    pub utc_offset_hours: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Named preset, or `null` for custom angles
    pub method: Option<MethodPreset>,
    pub fajr_angle: f64,
    pub isha_angle: f64,
    pub asr: ShadowConvention,
    pub times: FormattedTimes,
}

impl ScheduleReport {
    pub fn new(schedule: &DailySchedule, request: &ScheduleRequest) -> Self {
        let fmt = |t: Option<f64>| t.map(|t| format_clock_time(Some(t)));
        Self {
            date: request.date.to_string(),
            utc_offset_hours: request.offset.hours(),
            latitude: request.location.latitude,
            longitude: request.location.longitude,
            method: MethodPreset::matching(request.method),
            fajr_angle: request.method.fajr_angle,
            isha_angle: request.method.isha_angle,
            asr: request.shadow,
            times: FormattedTimes {
                fajr: fmt(schedule.fajr),
                sunrise: fmt(schedule.sunrise),
                dhuhr: fmt(schedule.dhuhr),
                asr: fmt(schedule.asr),
                maghrib: fmt(schedule.maghrib),
                isha: fmt(schedule.isha),
            },
        }
    }
}

/// Pretty-printed JSON for one schedule.
pub fn render_json(
    schedule: &DailySchedule,
    request: &ScheduleRequest,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ScheduleReport::new(schedule, request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CalculationMethod, LocalDate, MethodPreset};
    use chrono::NaiveDate;

    fn nyc_request() -> ScheduleRequest {
        ScheduleRequest::new(
            40.7128,
            -74.0060,
            -5.0,
            LocalDate::new(2024, 6, 21).unwrap(),
            MethodPreset::Mwl.method(),
            ShadowConvention::Standard,
        )
        .unwrap()
    }

    #[test]
    fn test_format_clock_time() {
        assert_eq!(format_clock_time(Some(0.0)), "00:00");
        assert_eq!(format_clock_time(Some(4.421145)), "04:25");
        assert_eq!(format_clock_time(Some(11.967622)), "11:58");
        assert_eq!(format_clock_time(Some(19.514098)), "19:31");
        assert_eq!(format_clock_time(Some(12.0 + 59.6 / 60.0)), "13:00");
        assert_eq!(format_clock_time(Some(24.6)), "00:36");
        assert_eq!(format_clock_time(Some(-0.5)), "23:30");
        assert_eq!(format_clock_time(Some(f64::NAN)), MISSING);
        assert_eq!(format_clock_time(None), MISSING);
    }

    #[test]
    fn test_render_table_layout() {
        let request = nyc_request();
        let table = render_table(&request.compute(), &request);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines,
            [
                "    Fajr: 02:19",
                " Sunrise: 04:25",
                "   Dhuhr: 11:58",
                "     Asr: 15:58",
                " Maghrib: 19:31",
                "    Isha: 21:28",
                "Calculated for 2024-06-21 (UTC-5)",
            ]
        );
    }

    #[test]
    fn test_missing_events_use_placeholder() {
        let request = nyc_request();
        let schedule = DailySchedule {
            dhuhr: Some(12.0),
            ..DailySchedule::default()
        };
        let table = render_table(&schedule, &request);
        assert!(table.contains("    Fajr: --:--"));
        assert!(table.contains("   Dhuhr: 12:00"));
    }

    #[test]
    fn test_clock_line() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 21)
            .unwrap()
            .and_hms_opt(14, 3, 9)
            .unwrap();
        assert_eq!(clock_line(now), "Local time: 2024-06-21 14:03:09");
    }

    #[test]
    fn test_json_report() {
        let request = nyc_request();
        let schedule = DailySchedule {
            isha: None,
            ..request.compute()
        };
        let json = render_json(&schedule, &request).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["date"], "2024-06-21");
        assert_eq!(value["utc_offset_hours"], -5.0);
        assert_eq!(value["asr"], "standard");
        assert_eq!(value["method"], "mwl");
        assert_eq!(value["latitude"], 40.7128);
        assert_eq!(value["times"]["dhuhr"], "11:58");
        assert!(value["times"]["isha"].is_null());
    }

    #[test]
    fn test_json_report_custom_angles() {
        let request = ScheduleRequest {
            method: CalculationMethod::new(19.5, 17.0).unwrap(),
            ..nyc_request()
        };
        let report = ScheduleReport::new(&request.compute(), &request);
        assert_eq!(report.method, None);
        assert_eq!(report.fajr_angle, 19.5);

        let value: serde_json::Value =
            serde_json::from_str(&render_json(&request.compute(), &request).unwrap()).unwrap();
        assert!(value["method"].is_null());
    }
}
