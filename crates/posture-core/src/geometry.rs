//! Planar geometry over landmark coordinates.
//!
//! These four primitives are all the scorer needs. Only `x` and `y` are read.

use crate::domain::Landmark;

/// Signed angle of the vector from `a` to `b`, in degrees within (-180, 180].
///
/// Coincident points give 0.
#[inline]
#[must_use]
pub fn angle_deg(a: Landmark, b: Landmark) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Midpoint of two landmarks.
#[inline]
#[must_use]
pub fn midpoint(a: Landmark, b: Landmark) -> Landmark {
    Landmark::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Absolute horizontal distance.
#[inline]
#[must_use]
pub fn dist_x(a: Landmark, b: Landmark) -> f64 {
    (a.x - b.x).abs()
}

/// Absolute vertical distance.
#[inline]
#[must_use]
pub fn dist_y(a: Landmark, b: Landmark) -> f64 {
    (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Landmark {
        Landmark::new(x, y)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_angle_cardinal_directions() {
        let o = p(0.5, 0.5);
        assert!(close(angle_deg(o, p(0.7, 0.5)), 0.0));
        assert!(close(angle_deg(o, p(0.5, 0.7)), 90.0));
        assert!(close(angle_deg(o, p(0.5, 0.3)), -90.0));
        assert!(close(angle_deg(o, p(0.3, 0.5)), 180.0));
    }

    #[test]
    fn test_angle_of_coincident_points_is_zero() {
        assert!(close(angle_deg(p(0.2, 0.2), p(0.2, 0.2)), 0.0));
    }

    #[test]
    fn test_angle_diagonal() {
        assert!(close(angle_deg(p(0.0, 0.0), p(0.1, 0.1)), 45.0));
        assert!(close(angle_deg(p(0.0, 0.0), p(-0.1, -0.1)), -135.0));
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(p(0.4, 0.4), p(0.6, 0.5));
        assert!(close(m.x, 0.5));
        assert!(close(m.y, 0.45));
    }

    #[test]
    fn test_axis_distances_are_absolute() {
        assert!(close(dist_x(p(0.2, 0.0), p(0.5, 0.0)), 0.3));
        assert!(close(dist_x(p(0.5, 0.0), p(0.2, 0.0)), 0.3));
        assert!(close(dist_y(p(0.0, 0.9), p(0.0, 0.1)), 0.8));
    }
}
