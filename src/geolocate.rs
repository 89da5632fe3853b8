//! # IP Geolocation Lookup and Caching
//!
//! Fills in the observer's coordinates from the public IP address so the
//! clock can run without a configured location. The astronomy never depends
//! on this module: it only produces a [`GeoLocation`] to feed into a
//! [`ScheduleRequest`](crate::ScheduleRequest).
//!
//! ## Data Source
//! - **URL**: <http://ip-api.com/json/> (free tier, no key, HTTP only)
//! - **Format**: JSON object with `status`, `lat`, `lon`, `city`, `timezone`
//! - **Accuracy**: city level, which moves prayer times by well under a minute
//!
//! ## Caching Strategy
//! - **Location**: `salah_location.json` in the system temp dir (cleared on reboot)
//! - **TTL**: configurable, 30 minutes by default
//! - **Validation**: file modification time is checked before loading
//! - Write failures are ignored; a missing cache only costs one request
//!
//! All errors propagate through [`LookupError`]; callers fall back to the
//! configured location.

use crate::{GeoLocation, SalahError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use std::{env, fs, io};
use thiserror::Error;

/// Errors that can occur while looking up the current location.
#[derive(Error, Debug)]
pub enum LookupError {
    /// HTTP request failed (network, timeout, or non-JSON body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered but could not resolve this address
    #[error("location lookup rejected: {0}")]
    Rejected(String),

    /// Service returned coordinates outside the valid range
    #[error("implausible coordinates: {0}")]
    Invalid(#[from] SalahError),

    /// Cache file operations failed (missing, stale, permissions)
    #[error("cache IO: {0}")]
    Cache(#[from] io::Error),

    /// Cache file held something other than a location
    #[error("cache decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Lookup endpoint
const LOOKUP_URL: &str = "http://ip-api.com/json/";

/// Request timeout; the lookup is a convenience, never worth a long wait
const TIMEOUT: Duration = Duration::from_secs(5);

/// Cache file name inside the system temp dir
const CACHE_FILE: &str = "salah_location.json";

/// A location resolved from the public IP address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// City name, when the service knows it
    #[serde(default)]
    pub city: Option<String>,
    /// IANA zone name (informational; offsets come from the host clock)
    #[serde(default)]
    pub timezone: Option<String>,
}

impl DetectedLocation {
    pub fn location(&self) -> Result<GeoLocation, SalahError> {
        GeoLocation::new(self.latitude, self.longitude)
    }

    /// City name or a generic description.
    pub fn place(&self) -> &str {
        match self.city.as_deref() {
            Some(city) if !city.is_empty() => city,
            _ => "your area",
        }
    }
}

/// Raw ip-api.com response body.
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    timezone: Option<String>,
}

/// Default cache location.
pub fn default_cache_path() -> PathBuf {
    env::temp_dir().join(CACHE_FILE)
}

/// Look up the current location, from cache when fresh, else from the network.
///
/// # Example
/// ```no_run
/// use salah_clock_lib::geolocate;
/// use std::time::Duration;
///
/// # async fn demo() {
/// match geolocate::lookup(Duration::from_secs(1800)).await {
///     Ok(found) => println!("Detected {}", found.place()),
///     Err(err) => eprintln!("Location not found, enter manually: {err}"),
/// }
/// # }
/// ```
pub async fn lookup(ttl: Duration) -> Result<DetectedLocation, LookupError> {
    lookup_with_cache(&default_cache_path(), ttl).await
}

/// [`lookup`] with an explicit cache file.
pub async fn lookup_with_cache(
    cache: &Path,
    ttl: Duration,
) -> Result<DetectedLocation, LookupError> {
    // Try cache first - avoids a network round trip on every refresh
    match load_cache(cache, ttl) {
        Ok(found) => {
            debug!("Using cached location from {}", cache.display());
            return Ok(found);
        }
        Err(e) => debug!("Location cache unusable ({e}), querying {LOOKUP_URL}"),
    }

    let found = fetch_ip_api().await?;
    info!(
        "Detected {} at {:.4}, {:.4}",
        found.place(),
        found.latitude,
        found.longitude
    );

    // Save for future requests (ignore cache write failures)
    let _ = save_cache(cache, &found);

    Ok(found)
}

// -- Private Implementation --

async fn fetch_ip_api() -> Result<DetectedLocation, LookupError> {
    let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
    let body: IpApiResponse = client
        .get(LOOKUP_URL)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    parse_response(body)
}

/// Validate a response and round coordinates to four decimals (~11 m).
fn parse_response(body: IpApiResponse) -> Result<DetectedLocation, LookupError> {
    if body.status != "success" {
        return Err(LookupError::Rejected(
            body.message.unwrap_or_else(|| body.status.clone()),
        ));
    }
    let (Some(lat), Some(lon)) = (body.lat, body.lon) else {
        return Err(LookupError::Rejected("response without coordinates".into()));
    };

    let round4 = |v: f64| (v * 10_000.0).round() / 10_000.0;
    let found = DetectedLocation {
        latitude: round4(lat),
        longitude: round4(lon),
        city: body.city,
        timezone: body.timezone,
    };
    found.location()?;
    Ok(found)
}

/// Load a cached location if the file is younger than `ttl`.
fn load_cache(path: &Path, ttl: Duration) -> Result<DetectedLocation, LookupError> {
    let meta = fs::metadata(path)?;

    let age = SystemTime::now()
        .duration_since(meta.modified()?)
        .map_err(|_| io::Error::other("cache modified in the future"))?;
    if age > ttl {
        return Err(io::Error::other("stale").into());
    }

    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

fn save_cache(path: &Path, found: &DetectedLocation) -> Result<(), LookupError> {
    let data = serde_json::to_vec(found)?;
    fs::write(path, data)?;
    Ok(())
}
