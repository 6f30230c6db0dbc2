//! Great-circle math over unit direction vectors.
//!
//! Angular separation and spherical linear interpolation, with the
//! degenerate endpoint handling (coincident, antipodal) that the arc
//! builder relies on.

use glam::DVec3;

/// Directions closer than this to parallel/antiparallel take the
/// degenerate-endpoint paths in [`slerp_direction`].
const DEGENERATE_ANGLE_EPSILON: f64 = 1e-9;

/// Angle in radians between two unit directions.
///
/// The dot product is clamped to `[-1, 1]` before `acos`, so nearly
/// coincident or nearly antipodal inputs stay finite instead of producing
/// NaN from floating error.
#[inline]
#[must_use]
pub fn angular_separation(a: DVec3, b: DVec3) -> f64 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// Interpolate between two unit directions along their great circle.
///
/// `t = 0` yields `a`, `t = 1` yields `b`, intermediate values follow the
/// shortest great-circle path. This is *not* linear interpolation of
/// latitude/longitude, which cuts corners near the poles and the date line.
///
/// Degenerate inputs are handled rather than rejected:
/// - coincident directions return `a`;
/// - antipodal directions have no unique great circle, so the path rotates
///   `a` around a deterministic orthogonal axis by `t·π`.
#[must_use]
pub fn slerp_direction(a: DVec3, b: DVec3, t: f64) -> DVec3 {
    let total = angular_separation(a, b);

    if total < DEGENERATE_ANGLE_EPSILON {
        return a;
    }
    if total > std::f64::consts::PI - DEGENERATE_ANGLE_EPSILON {
        let axis = orthogonal_axis(a);
        return glam::DQuat::from_axis_angle(axis, t * std::f64::consts::PI) * a;
    }

    let sin_total = total.sin();
    let wa = ((1.0 - t) * total).sin() / sin_total;
    let wb = (t * total).sin() / sin_total;
    (wa * a + wb * b).normalize()
}

/// A deterministic unit vector orthogonal to `dir`.
fn orthogonal_axis(dir: DVec3) -> DVec3 {
    let candidate = dir.cross(DVec3::Y);
    if candidate.length_squared() > DEGENERATE_ANGLE_EPSILON {
        candidate.normalize()
    } else {
        // dir is (anti)parallel to Y; X is orthogonal.
        dir.cross(DVec3::X).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_separation_of_orthogonal_directions() {
        let sep = angular_separation(DVec3::X, DVec3::Z);
        assert!(
            (sep - FRAC_PI_2).abs() < EPSILON,
            "Expected π/2, got {sep}"
        );
    }

    #[test]
    fn test_separation_is_symmetric() {
        let a = DVec3::new(1.0, 2.0, 3.0).normalize();
        let b = DVec3::new(-2.0, 0.5, 1.0).normalize();
        assert!((angular_separation(a, b) - angular_separation(b, a)).abs() < EPSILON);
    }

    #[test]
    fn test_separation_clamps_rounding_error() {
        // A dot product that floating error pushes slightly past 1.0
        // must not produce NaN.
        let a = DVec3::new(0.6, 0.48, 0.64).normalize();
        let sep = angular_separation(a, a);
        assert!(sep.is_finite());
        assert!(sep < 1e-7, "Coincident separation should be ~0, got {sep}");
    }

    #[test]
    fn test_antipodal_separation_is_pi() {
        let sep = angular_separation(DVec3::X, -DVec3::X);
        assert!((sep - PI).abs() < EPSILON);
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = DVec3::X;
        let b = DVec3::Z;
        assert!((slerp_direction(a, b, 0.0) - a).length() < EPSILON);
        assert!((slerp_direction(a, b, 1.0) - b).length() < EPSILON);
    }

    #[test]
    fn test_slerp_midpoint_is_on_great_circle() {
        let a = DVec3::X;
        let b = DVec3::Z;
        let mid = slerp_direction(a, b, 0.5);
        assert!((mid.length() - 1.0).abs() < EPSILON, "Midpoint not unit");
        // Equal angles to both endpoints
        let to_a = angular_separation(mid, a);
        let to_b = angular_separation(mid, b);
        assert!((to_a - to_b).abs() < EPSILON);
        assert!((to_a - FRAC_PI_2 / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_slerp_stays_unit_length() {
        let a = DVec3::new(0.3, -0.7, 0.2).normalize();
        let b = DVec3::new(-0.5, 0.1, 0.9).normalize();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let p = slerp_direction(a, b, t);
            assert!(
                (p.length() - 1.0).abs() < EPSILON,
                "slerp at t={t} not unit length: {}",
                p.length()
            );
        }
    }

    #[test]
    fn test_slerp_does_not_follow_latlon_chord() {
        // Two points at 60°N on opposite longitudes: the great circle goes
        // over the pole, not along the 60°N parallel.
        let lat = 60.0_f64.to_radians();
        let a = DVec3::new(lat.cos(), lat.sin(), 0.0);
        let b = DVec3::new(-lat.cos(), lat.sin(), 0.0);
        let mid = slerp_direction(a, b, 0.5);
        assert!(
            mid.y > 0.99,
            "Great-circle midpoint should be near the pole, got {mid:?}"
        );
    }

    #[test]
    fn test_slerp_coincident_returns_start() {
        let a = DVec3::new(0.1, 0.2, 0.3).normalize();
        let p = slerp_direction(a, a, 0.37);
        assert!((p - a).length() < EPSILON);
    }

    #[test]
    fn test_slerp_antipodal_is_finite_and_unit() {
        let a = DVec3::X;
        let b = -DVec3::X;
        for i in 0..=4 {
            let t = i as f64 / 4.0;
            let p = slerp_direction(a, b, t);
            assert!(p.is_finite(), "Antipodal slerp produced non-finite at t={t}");
            assert!((p.length() - 1.0).abs() < EPSILON);
        }
        // Endpoints still land where they should.
        assert!((slerp_direction(a, b, 0.0) - a).length() < EPSILON);
        assert!((slerp_direction(a, b, 1.0) - b).length() < 1e-8);
    }

    #[test]
    fn test_slerp_antipodal_poles_uses_fallback_axis() {
        let p = slerp_direction(DVec3::Y, -DVec3::Y, 0.5);
        assert!(p.is_finite());
        assert!((p.length() - 1.0).abs() < EPSILON);
        assert!(p.y.abs() < EPSILON, "Halfway point should sit on the equator");
    }
}
