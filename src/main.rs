//! # Salah Clock Application Entry Point
//!
//! This binary crate wires the prayer-time library to the terminal:
//! configuration, optional IP geolocation, and table or JSON output.
//! It supports a one-shot mode (print today's schedule and exit) and a
//! watch mode that recomputes on a timer, following the date across midnight.

mod cli;

// Test modules
#[cfg(test)]
mod tests;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use cli::Cli;
use log::{info, warn, LevelFilter};
use salah_clock_lib::geolocate::{self, DetectedLocation};
use salah_clock_lib::{
    config::Config, renderer, GeoLocation, LocalDate, ScheduleRequest, UtcOffset,
};
use std::time::Duration;

/// Location and offset detected at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Detected {
    location: GeoLocation,
    offset: UtcOffset,
}

/// Merge the input sources into one validated request.
///
/// Precedence: command-line flag > detected location > config file.
fn resolve_request(
    cli: &Cli,
    config: &Config,
    detected: Option<Detected>,
    today: LocalDate,
) -> anyhow::Result<ScheduleRequest> {
    let (mut latitude, mut longitude, mut offset) = (
        config.location.latitude,
        config.location.longitude,
        config.location.utc_offset_hours,
    );
    if let Some(found) = detected {
        latitude = found.location.latitude;
        longitude = found.location.longitude;
        offset = found.offset.hours();
    }

    // A preset on the command line replaces the configured one, overrides and all
    let mut method = match cli.method {
        Some(preset) => preset.method(),
        None => config.calculation.method(),
    };
    if let Some(angle) = cli.fajr_angle {
        method.fajr_angle = angle;
    }
    if let Some(angle) = cli.isha_angle {
        method.isha_angle = angle;
    }

    ScheduleRequest::new(
        cli.lat.unwrap_or(latitude),
        cli.lon.unwrap_or(longitude),
        cli.tz.unwrap_or(offset),
        cli.date.unwrap_or(today),
        method,
        cli.asr.unwrap_or(config.calculation.asr),
    )
    .context("invalid input")
}

/// Look up the location by IP; on failure keep the configured one.
async fn detect_location(config: &Config) -> Option<Detected> {
    let ttl = Duration::from_secs(config.refresh.lookup_cache_ttl_minutes * 60);
    let found = match geolocate::lookup(ttl).await {
        Ok(found) => found,
        Err(error) => {
            warn!("Location lookup failed: {}", error);
            warn!("Falling back to configured location ({})", config.location.name);
            return None;
        }
    };

    accept_detected(&found, UtcOffset::from_local_clock())
}

/// Keep a looked-up location only if its coordinates are usable.
fn accept_detected(found: &DetectedLocation, offset: UtcOffset) -> Option<Detected> {
    match found.location() {
        Ok(location) => {
            info!("Detected {} ({})", found.place(), offset);
            Some(Detected { location, offset })
        }
        Err(error) => {
            warn!("Ignoring detected location: {}", error);
            warn!("Falling back to configured location");
            None
        }
    }
}

/// Compute and print one schedule.
fn show(request: &ScheduleRequest, json: bool, with_clock: bool) -> anyhow::Result<()> {
    let schedule = request.compute();
    if json {
        println!("{}", renderer::render_json(&schedule, request)?);
    } else {
        let now = with_clock.then(|| Local::now().naive_local());
        renderer::draw_ascii(&schedule, request, now);
    }
    Ok(())
}

/// Recompute on a timer until Ctrl-C.
///
/// With `follow_today` the date is re-read from the host clock on every
/// tick, so the schedule rolls over at local midnight.
async fn watch(
    mut request: ScheduleRequest,
    follow_today: bool,
    json: bool,
    period: Duration,
) -> anyhow::Result<()> {
    let mut ticker = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if follow_today {
                    request = request.on(LocalDate::today());
                }
                show(&request, json, true)?;
                if !json {
                    println!();
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, stopping watch mode");
                return Ok(());
            }
        }
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // RUST_LOG, when set, takes precedence over the flag
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    // Create Tokio runtime for the lookup and the refresh loop
    let rt = tokio::runtime::Runtime::new()?;

    let detected = if cli.locate {
        rt.block_on(detect_location(&config))
    } else {
        None
    };

    let request = resolve_request(&cli, &config, detected, LocalDate::today())?;

    match cli.watch {
        Some(seconds) => {
            let seconds = seconds.unwrap_or(config.refresh.interval_seconds);
            let period = Duration::from_secs(seconds.max(1));
            rt.block_on(watch(request, cli.date.is_none(), cli.json, period))
        }
        None => show(&request, cli.json, false),
    }
}
