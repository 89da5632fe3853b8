//! Input precedence when building a request from flags, lookup and config.

use crate::cli::Cli;
use crate::{accept_detected, resolve_request, Detected};
use clap::Parser;
use salah_clock_lib::config::Config;
use salah_clock_lib::geolocate::DetectedLocation;
use salah_clock_lib::{
    CalculationMethod, GeoLocation, LocalDate, MethodPreset, ShadowConvention, UtcOffset,
};

fn today() -> LocalDate {
    LocalDate::new(2024, 6, 21).unwrap()
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("salah-clock").chain(args.iter().copied())).unwrap()
}

fn mecca() -> Detected {
    Detected {
        location: GeoLocation::new(21.4225, 39.8262).unwrap(),
        offset: UtcOffset::new(3.0).unwrap(),
    }
}

#[test]
fn test_config_only() {
    let request = resolve_request(&cli(&[]), &Config::default(), None, today()).unwrap();
    assert_eq!(request.location.latitude, 40.7128);
    assert_eq!(request.location.longitude, -74.006);
    assert_eq!(request.offset.hours(), -5.0);
    assert_eq!(request.date, today());
    assert_eq!(request.method, CalculationMethod::default());
    assert_eq!(request.shadow, ShadowConvention::Standard);
}

#[test]
fn test_detected_location_beats_config() {
    let request = resolve_request(&cli(&[]), &Config::default(), Some(mecca()), today()).unwrap();
    assert_eq!(request.location, mecca().location);
    assert_eq!(request.offset, mecca().offset);
}

#[test]
fn test_flags_beat_detected_location() {
    let request = resolve_request(
        &cli(&["--lat", "51.5074", "--tz", "1", "--date", "2024-12-25"]),
        &Config::default(),
        Some(mecca()),
        today(),
    )
    .unwrap();
    assert_eq!(request.location.latitude, 51.5074);
    // Longitude was not given on the command line
    assert_eq!(request.location.longitude, 39.8262);
    assert_eq!(request.offset.hours(), 1.0);
    assert_eq!(request.date, LocalDate::new(2024, 12, 25).unwrap());
}

#[test]
fn test_method_preset_and_angle_overrides() {
    let mut config = Config::default();
    config.calculation.isha_angle = Some(16.5);

    // Configured override survives when no preset is given
    let request = resolve_request(&cli(&["--fajr-angle", "19"]), &config, None, today()).unwrap();
    assert_eq!(request.method.fajr_angle, 19.0);
    assert_eq!(request.method.isha_angle, 16.5);

    // A preset flag replaces the configured method entirely
    let request = resolve_request(
        &cli(&["--method", "isna", "--asr", "hanafi"]),
        &config,
        None,
        today(),
    )
    .unwrap();
    assert_eq!(request.method, MethodPreset::Isna.method());
    assert_eq!(request.shadow, ShadowConvention::Hanafi);
}

#[test]
fn test_invalid_input_is_reported() {
    let err = resolve_request(&cli(&["--lat", "95"]), &Config::default(), None, today())
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid input");
    assert!(format!("{err:#}").contains("95"));

    assert!(resolve_request(&cli(&["--tz", "20"]), &Config::default(), None, today()).is_err());
    assert!(
        resolve_request(&cli(&["--isha-angle", "0"]), &Config::default(), None, today())
            .is_err()
    );
}

#[test]
fn test_request_computes_expected_schedule() {
    let request = resolve_request(&cli(&["--date", "2024-06-21"]), &Config::default(), None, today())
        .unwrap();
    let schedule = request.compute();
    assert!(schedule.is_complete());
    assert!(schedule.is_ordered());
}

#[test]
fn test_detected_location_accepted() {
    let found = DetectedLocation {
        latitude: 21.4225,
        longitude: 39.8262,
        city: Some("Mecca".to_string()),
        timezone: Some("Asia/Riyadh".to_string()),
    };
    assert_eq!(
        accept_detected(&found, UtcOffset::new(3.0).unwrap()),
        Some(mecca())
    );
}

#[test]
fn test_implausible_detected_location_keeps_config() {
    let found = DetectedLocation {
        latitude: 123.0,
        longitude: 0.0,
        city: None,
        timezone: None,
    };
    let detected = accept_detected(&found, UtcOffset::UTC);
    assert_eq!(detected, None);

    let request = resolve_request(&cli(&[]), &Config::default(), detected, today()).unwrap();
    assert_eq!(request.location.latitude, 40.7128);
    assert_eq!(request.offset.hours(), -5.0);
}
