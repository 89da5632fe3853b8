//! Hour angle at which the Sun reaches a given zenith distance.

use crate::angle::{to_degrees, to_radians};

/// Solve `cos H = (cos z − sin φ sin δ) / (cos φ cos δ)` for H.
///
/// All arguments are degrees: `latitude` φ, `declination` δ and the target
/// `zenith` distance z (90 = horizon, >90 = below it). Returns the hour
/// angle in degrees (0..=180, distance from local noon), or `None` when the
/// Sun never reaches that zenith on this day at this latitude.
pub fn hour_angle(latitude: f64, declination: f64, zenith: f64) -> Option<f64> {
    let lat = to_radians(latitude);
    let dec = to_radians(declination);
    let cos_h = (to_radians(zenith).cos() - lat.sin() * dec.sin()) / (lat.cos() * dec.cos());

    // Polar day/night, or a degenerate 0/0 at the pole itself
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(to_degrees(cos_h.acos()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_equinox_horizon_is_quarter_turn() {
        let h = hour_angle(0.0, 0.0, 90.0).unwrap();
        assert!((h - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_just_past_culmination_is_close_to_noon() {
        // Sun culminates at zenith distance |φ − δ| = 30°
        let h = hour_angle(40.0, 10.0, 30.5).unwrap();
        assert!(h > 0.0 && h < 10.0, "h = {h}");
        assert_eq!(hour_angle(40.0, 10.0, 29.5), None);
    }

    #[test]
    fn test_deeper_threshold_needs_larger_hour_angle() {
        let horizon = hour_angle(40.0, -10.0, 90.833).unwrap();
        let twilight = hour_angle(40.0, -10.0, 108.0).unwrap();
        assert!(twilight > horizon);
    }

    #[test]
    fn test_polar_day_and_night_do_not_occur() {
        // Midsummer above the arctic circle: sun never sets
        assert_eq!(hour_angle(80.0, 23.4, 90.833), None);
        // Midwinter: sun never rises
        assert_eq!(hour_angle(80.0, -23.4, 90.833), None);
    }

    #[test]
    fn test_result_is_never_negative() {
        for zenith in [60.0, 90.0, 96.0, 108.0] {
            if let Some(h) = hour_angle(30.0, 5.0, zenith) {
                assert!((0.0..=180.0).contains(&h));
            }
        }
    }
}
