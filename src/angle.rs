//! Degree/radian helpers shared by the solar formulas.

/// Converts degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Reduces an angle in degrees to the range [0, 360).
pub fn normalize_angle(degrees: f64) -> f64 {
    let reduced = degrees % 360.0;
    if reduced < 0.0 {
        reduced + 360.0
    } else {
        reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((to_radians(180.0) - PI).abs() < EPSILON);
        assert!((to_radians(-90.0) + PI / 2.0).abs() < EPSILON);
        assert!((to_degrees(PI / 2.0) - 90.0).abs() < EPSILON);
        assert!((to_degrees(to_radians(23.44)) - 23.44).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(359.5), 359.5);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(450.0), 90.0);
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(-720.0), 0.0);
        assert_eq!(normalize_angle(-1.0e3), 80.0);
    }
}
