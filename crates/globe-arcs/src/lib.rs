//! Geodesic connection arcs between points on the globe.
//!
//! Builds immutable cubic-curve descriptors approximating the great-circle
//! path between two geographic coordinates, lifted above the surface in
//! proportion to the endpoint separation: nearby endpoints produce shallow
//! arcs, far-apart endpoints tall ones.

use glam::DVec3;
use globe_geo::{GeoCoordinate, SpherePoint, angular_separation, slerp_direction};

/// Default coefficient relating arc height to surface distance.
///
/// Control points sit at radius `r + surface_distance · factor`. The value
/// is an aesthetic tuning knob, not a geometric necessity.
pub const DEFAULT_ALTITUDE_FACTOR: f64 = 0.5;

/// Positions along the great circle where the two control points are taken.
const CONTROL_T: (f64, f64) = (0.25, 0.75);

/// Errors for invalid arc-builder inputs.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ArcError {
    /// The sphere radius was non-positive or non-finite.
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}

/// A fully-determined cubic curve connecting two sphere points.
///
/// Immutable once built; per-frame dash animation lives with the renderer,
/// keyed by arc identity, and never mutates the descriptor.
#[derive(Clone, Copy, Debug)]
pub struct ArcCurveDescriptor {
    start: SpherePoint,
    end: SpherePoint,
    control1: DVec3,
    control2: DVec3,
    angular_separation: f64,
    surface_distance: f64,
}

impl ArcCurveDescriptor {
    /// Start endpoint, on the sphere surface.
    #[inline]
    #[must_use]
    pub fn start(&self) -> SpherePoint {
        self.start
    }

    /// End endpoint, on the sphere surface.
    #[inline]
    #[must_use]
    pub fn end(&self) -> SpherePoint {
        self.end
    }

    /// First control point, elevated above the surface.
    #[inline]
    #[must_use]
    pub fn control1(&self) -> DVec3 {
        self.control1
    }

    /// Second control point, elevated above the surface.
    #[inline]
    #[must_use]
    pub fn control2(&self) -> DVec3 {
        self.control2
    }

    /// Central angle between the endpoints, in radians.
    #[inline]
    #[must_use]
    pub fn angular_separation(&self) -> f64 {
        self.angular_separation
    }

    /// Great-circle distance between the endpoints along the surface.
    #[inline]
    #[must_use]
    pub fn surface_distance(&self) -> f64 {
        self.surface_distance
    }

    /// Evaluate the cubic Bézier at `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> DVec3 {
        let u = 1.0 - t;
        let p0 = self.start.position();
        let p3 = self.end.position();
        u * u * u * p0
            + 3.0 * u * u * t * self.control1
            + 3.0 * u * t * t * self.control2
            + t * t * t * p3
    }
}

/// Build an arc between two geographic coordinates with the default
/// altitude factor.
pub fn build_arc(
    start: GeoCoordinate,
    end: GeoCoordinate,
    radius: f64,
) -> Result<ArcCurveDescriptor, ArcError> {
    build_arc_with_altitude(start, end, radius, DEFAULT_ALTITUDE_FACTOR)
}

/// Build an arc between two geographic coordinates.
///
/// Endpoints are converted to sphere points, the control directions are
/// taken at 25% and 75% along the great circle between them, and both
/// controls are lifted to radius `radius + surface_distance · altitude_factor`.
///
/// Coincident endpoints yield a degenerate zero-height arc whose four
/// points coincide; antipodal endpoints stay finite through the clamped
/// separation and the slerp's orthogonal-axis fallback.
pub fn build_arc_with_altitude(
    start: GeoCoordinate,
    end: GeoCoordinate,
    radius: f64,
    altitude_factor: f64,
) -> Result<ArcCurveDescriptor, ArcError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(ArcError::InvalidRadius(radius));
    }

    let start_dir = start.direction();
    let end_dir = end.direction();

    let separation = angular_separation(start_dir, end_dir);
    let surface_distance = radius * separation;
    let elevated_radius = radius + surface_distance * altitude_factor;

    let control1 = slerp_direction(start_dir, end_dir, CONTROL_T.0) * elevated_radius;
    let control2 = slerp_direction(start_dir, end_dir, CONTROL_T.1) * elevated_radius;

    Ok(ArcCurveDescriptor {
        start: SpherePoint::from_direction(start_dir, radius),
        end: SpherePoint::from_direction(end_dir, radius),
        control1,
        control2,
        angular_separation: separation,
        surface_distance,
    })
}
