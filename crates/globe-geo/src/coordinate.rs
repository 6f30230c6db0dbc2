//! Geographic coordinates and points constrained to the sphere surface.

use std::fmt;

use glam::DVec3;

/// Convert spherical coordinates to Cartesian.
///
/// Uses the physics convention with Y as the polar axis: `polar` is the
/// colatitude measured from +Y and `azimuth` is measured around Y, so that
/// `x = r·sin(polar)·sin(azimuth)`, `y = r·cos(polar)`,
/// `z = r·sin(polar)·cos(azimuth)`. `azimuth = 0` points down +Z.
#[inline]
#[must_use]
pub fn spherical_to_cartesian(radius: f64, polar: f64, azimuth: f64) -> DVec3 {
    let sin_polar = polar.sin();
    DVec3::new(
        radius * sin_polar * azimuth.sin(),
        radius * polar.cos(),
        radius * sin_polar * azimuth.cos(),
    )
}

/// A position on the globe expressed as latitude and longitude, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees. Range: \[-90, 90\].
    /// Positive = north of the equator. Negative = south.
    pub latitude: f64,
    /// Longitude in degrees. Range: \[-180, 180\].
    /// Positive = east. Negative = west.
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a new geographic coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Unit direction from the sphere center toward this coordinate.
    ///
    /// Colatitude is `90° − latitude` and azimuth is the longitude, matching
    /// [`spherical_to_cartesian`]: the equator/prime-meridian intersection
    /// maps to +Z and the north pole to +Y.
    #[must_use]
    pub fn direction(&self) -> DVec3 {
        let polar = (90.0 - self.latitude).to_radians();
        let azimuth = self.longitude.to_radians();
        spherical_to_cartesian(1.0, polar, azimuth)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.2}\u{00B0}{}, {:.2}\u{00B0}{}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir,
        )
    }
}

/// A Cartesian point known to lie on the sphere surface.
///
/// The invariant `|position| == radius` (within floating tolerance) holds for
/// every instance: the constructors normalize their input, so an off-sphere
/// `SpherePoint` cannot be built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpherePoint {
    position: DVec3,
    radius: f64,
}

impl SpherePoint {
    /// Place a point on the sphere of the given radius along `direction`.
    ///
    /// The direction is normalized, so any non-zero vector is accepted.
    #[must_use]
    pub fn from_direction(direction: DVec3, radius: f64) -> Self {
        Self {
            position: direction.normalize() * radius,
            radius,
        }
    }

    /// Place a geographic coordinate on the sphere of the given radius.
    #[must_use]
    pub fn from_geo(coord: &GeoCoordinate, radius: f64) -> Self {
        Self {
            position: coord.direction() * radius,
            radius,
        }
    }

    /// The Cartesian position on the sphere surface.
    #[inline]
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Unit direction from the sphere center through this point.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> DVec3 {
        self.position / self.radius
    }

    /// The sphere radius this point lies on.
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}
