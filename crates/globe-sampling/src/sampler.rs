//! Fibonacci-lattice point distribution over the sphere.

use std::f64::consts::PI;

use globe_geo::{SpherePoint, spherical_to_cartesian};

/// Errors for invalid sampling inputs.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SampleError {
    /// The requested point count was zero.
    #[error("sample count must be positive")]
    InvalidCount,

    /// The sphere radius was non-positive or non-finite.
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}

/// Distribute approximately equidistributed points over a sphere using a
/// Fibonacci lattice (spherical spiral).
///
/// For each index `i` in `0..=count` the polar angle is
/// `acos(-1 + 2i/count)`, which spaces points with equal area per band and
/// sweeps pole to pole, and the azimuth is `sqrt(count·π)` times the polar
/// angle, the golden-angle-equivalent turn rate that keeps the spiral free
/// of visible seams or clustering.
///
/// Returns exactly `count + 1` points: the inclusive bound is deliberate,
/// not a rounding bug. The first point
/// is the south pole (`y = −radius`) and the last the north pole. Output is
/// deterministic for fixed inputs.
pub fn sample_sphere(count: u32, radius: f64) -> Result<Vec<SpherePoint>, SampleError> {
    if count == 0 {
        return Err(SampleError::InvalidCount);
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(SampleError::InvalidRadius(radius));
    }

    let turn_rate = (f64::from(count) * PI).sqrt();
    let mut points = Vec::with_capacity(count as usize + 1);

    for i in 0..=count {
        let polar = (-1.0 + 2.0 * f64::from(i) / f64::from(count)).acos();
        let azimuth = turn_rate * polar;
        let position = spherical_to_cartesian(radius, polar, azimuth);
        points.push(SpherePoint::from_direction(position, radius));
    }

    tracing::debug!(count, radius, produced = points.len(), "sampled sphere lattice");
    Ok(points)
}
