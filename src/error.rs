//! # Input Validation Errors
//!
//! The astronomical core never fails: an event the sun does not reach is an
//! absent value, not an error. What *can* go wrong is the caller handing it
//! coordinates or dates outside the domain the formulas are defined for.
//! The checked constructors on the data-model types return [`SalahError`] so
//! the presentation layer can reject such input before any calculation runs.

use thiserror::Error;

/// Contract violations detected by the checked constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SalahError {
    /// Latitude outside -90..=90 degrees or not a finite number
    #[error("invalid latitude {0}° (must be between -90° and +90°)")]
    InvalidLatitude(f64),

    /// Longitude outside -180..=180 degrees or not a finite number
    #[error("invalid longitude {0}° (must be between -180° and +180°)")]
    InvalidLongitude(f64),

    /// UTC offset outside -14..=14 hours or not a finite number
    #[error("invalid UTC offset {0} h (must be between -14 and +14)")]
    InvalidUtcOffset(f64),

    /// Year/month/day triple that is not a proleptic-Gregorian date
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Date text that does not match YYYY-MM-DD
    #[error("date must be YYYY-MM-DD, got {0:?}")]
    UnparseableDate(String),

    /// Twilight angle that is not a positive depression below the horizon
    #[error("invalid twilight angle {0}° (must be between 0° and 90°, exclusive of 0)")]
    InvalidTwilightAngle(f64),

    /// Shadow-length multiplier below 1
    #[error("invalid shadow factor {0} (must be at least 1)")]
    InvalidShadowFactor(f64),

    /// Unknown preset or convention name
    #[error("unknown {kind} {name:?} (expected one of: {expected})")]
    UnknownName {
        kind: &'static str,
        name: String,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            SalahError::InvalidLatitude(91.0).to_string(),
            "invalid latitude 91° (must be between -90° and +90°)"
        );
        assert_eq!(
            SalahError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
            .to_string(),
            "invalid date 2023-02-29"
        );
    }

    #[test]
    fn test_unknown_name_lists_choices() {
        let err = SalahError::UnknownName {
            kind: "method",
            name: "egypt".to_string(),
            expected: "mwl, isna, umm-al-qura",
        };
        assert!(err.to_string().contains("mwl, isna, umm-al-qura"));
        assert!(err.to_string().contains("\"egypt\""));
    }
}
