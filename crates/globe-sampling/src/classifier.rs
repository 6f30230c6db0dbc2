//! Land/water classification of sphere points against the mask raster.

use std::f64::consts::{PI, TAU};

use globe_geo::SpherePoint;

use crate::raster::MaskRaster;

/// Opacity at or above this value classifies a cell as land (out of 255).
pub const LAND_OPACITY_THRESHOLD: u8 = 90;

/// Whether a sphere point lies over land, using [`LAND_OPACITY_THRESHOLD`].
#[inline]
#[must_use]
pub fn is_land(point: &SpherePoint, mask: &MaskRaster) -> bool {
    is_land_with_threshold(point, mask, LAND_OPACITY_THRESHOLD)
}

/// Whether a sphere point lies over land, with an explicit opacity threshold.
///
/// The point's unit direction is mapped to equirectangular UV:
/// `u = atan2(x, z)/τ + 0.5` and `v = asin(y)/π + 0.5`. The `asin` form is
/// the true equirectangular latitude mapping; a linear `y·0.5 + 0.5` variant
/// visibly distorts polar regions. The raster is sampled nearest-neighbor
/// with boundary UVs clamped to valid cells.
#[must_use]
pub fn is_land_with_threshold(point: &SpherePoint, mask: &MaskRaster, threshold: u8) -> bool {
    let n = point.direction();
    let u = n.x.atan2(n.z) / TAU + 0.5;
    let v = n.y.clamp(-1.0, 1.0).asin() / PI + 0.5;
    mask.opacity_at_uv(u, v) >= threshold
}

/// The ordered set of sphere points retained after land classification.
///
/// Built once per mask load and read-only afterward; the raster itself is
/// not retained.
#[derive(Clone, Debug)]
pub struct LandPointSet {
    points: Vec<SpherePoint>,
    sampled_total: usize,
}

impl LandPointSet {
    /// Retained points, in sampling order.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[SpherePoint] {
        &self.points
    }

    /// Number of retained points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points were retained.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// How many candidate points were classified to produce this set.
    #[inline]
    #[must_use]
    pub fn sampled_total(&self) -> usize {
        self.sampled_total
    }

    /// Fraction of sampled points that were retained, in `[0, 1]`.
    #[must_use]
    pub fn retention(&self) -> f64 {
        if self.sampled_total == 0 {
            0.0
        } else {
            self.points.len() as f64 / self.sampled_total as f64
        }
    }
}

/// Filter sampled points against the mask, keeping those over land.
///
/// Order of the retained points follows the input order.
#[must_use]
pub fn build_land_points(
    points: &[SpherePoint],
    mask: &MaskRaster,
    threshold: u8,
) -> LandPointSet {
    let retained: Vec<SpherePoint> = points
        .iter()
        .filter(|p| is_land_with_threshold(p, mask, threshold))
        .copied()
        .collect();

    tracing::info!(
        sampled = points.len(),
        retained = retained.len(),
        threshold,
        "classified sphere points against land mask"
    );

    LandPointSet {
        points: retained,
        sampled_total: points.len(),
    }
}
