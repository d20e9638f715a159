use std::f64::consts::{PI, TAU};

use super::Point;

/// Angle of a point around the vertical axis, offset by π so it lands in [0, 2π].
#[inline]
pub fn point_angle(point: &Point) -> f64 {
    point.z.atan2(point.x) + PI
}

/// Distance of a point from the vertical axis.
#[inline]
pub fn point_radius(point: &Point) -> f64 {
    point.x.hypot(point.z)
}

/// Wrap an angle in radians into [0, 2π).
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Whether `angle` lies in the arc from `min` to `max`. All values are
/// expected in [0, 2π); when `min >= max` the arc crosses the 0/2π boundary.
#[inline]
pub fn is_angle_in_range(angle: f64, min: f64, max: f64) -> bool {
    if min < max {
        return angle >= min && angle <= max;
    }
    angle >= min || angle < max
}

/// Line through `(x0, y0)` and `(x1, y1)` evaluated at `x`. Not clamped.
#[inline]
pub fn linear_interpolate(x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    (y0 * (x1 - x) + y1 * (x - x0)) / (x1 - x0)
}

/// Shortest distance between two angles around the circle, in [0, π].
#[inline]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = normalize_angle(a - b);
    d.min(TAU - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, z: f64) -> Point {
        Point { x, y: 0.0, z }
    }

    #[test]
    fn test_point_angle_offsets_atan2() {
        assert!((point_angle(&point(1.0, 0.0)) - PI).abs() < 1e-12);
        assert!((point_angle(&point(0.0, 1.0)) - 1.5 * PI).abs() < 1e-12);
        assert!((point_angle(&point(0.0, -1.0)) - 0.5 * PI).abs() < 1e-12);
        assert!(point_angle(&point(-1.0, -0.0)).abs() < 1e-12);
    }

    #[test]
    fn test_point_radius_ignores_height() {
        let p = Point {
            x: 3.0,
            y: 100.0,
            z: 4.0,
        };
        assert!((point_radius(&p) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(-0.5) - (TAU - 0.5)).abs() < 1e-12);
        assert!((normalize_angle(TAU + 0.25) - 0.25).abs() < 1e-12);
        assert_eq!(normalize_angle(TAU), 0.0);
        assert!(normalize_angle(-1e-20) < TAU);
    }

    #[test]
    fn test_angle_range_wraparound() {
        assert!(is_angle_in_range(6.2, 6.0, 0.5));
        assert!(is_angle_in_range(0.2, 6.0, 0.5));
        assert!(!is_angle_in_range(3.0, 6.0, 0.5));
    }

    #[test]
    fn test_angle_range_plain() {
        assert!(is_angle_in_range(1.0, 0.5, 2.0));
        assert!(is_angle_in_range(0.5, 0.5, 2.0));
        assert!(is_angle_in_range(2.0, 0.5, 2.0));
        assert!(!is_angle_in_range(2.5, 0.5, 2.0));
        assert!(!is_angle_in_range(0.1, 0.5, 2.0));
    }

    #[test]
    fn test_linear_interpolate_endpoints() {
        assert_eq!(linear_interpolate(0.0, 0.0, 20.0, 0.5, 100.0), 20.0);
        assert_eq!(linear_interpolate(0.5, 0.0, 20.0, 0.5, 100.0), 100.0);
        assert!((linear_interpolate(0.25, 0.0, 20.0, 0.5, 100.0) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_angular_distance_wraps() {
        assert!((angular_distance(0.1, TAU - 0.1) - 0.2).abs() < 1e-12);
        assert!((angular_distance(0.0, PI) - PI).abs() < 1e-12);
    }
}
