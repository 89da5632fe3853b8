//! CLI argument definitions for salah-clock

use clap::Parser;
use salah_clock_lib::{LocalDate, MethodPreset, ShadowConvention};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "salah-clock")]
#[command(about = "Daily prayer times from local solar geometry")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: ./salah-config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Fixed UTC offset in hours (e.g. -5, 5.5); no DST rules are applied
    #[arg(long, allow_negative_numbers = true)]
    pub tz: Option<f64>,

    /// Date as YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<LocalDate>,

    /// Twilight-angle preset: mwl, isna, umm-al-qura
    #[arg(long)]
    pub method: Option<MethodPreset>,

    /// Asr shadow convention: standard, hanafi
    #[arg(long)]
    pub asr: Option<ShadowConvention>,

    /// Override the Fajr depression angle in degrees
    #[arg(long)]
    pub fajr_angle: Option<f64>,

    /// Override the Isha depression angle in degrees
    #[arg(long)]
    pub isha_angle: Option<f64>,

    /// Detect location from the public IP address and offset from the host clock
    #[arg(long)]
    pub locate: bool,

    /// Keep running and refresh every N seconds (default: config interval)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub watch: Option<Option<u64>>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
