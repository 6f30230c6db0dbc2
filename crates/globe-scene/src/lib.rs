//! Renderer-facing scene assembly.
//!
//! Bridges the geometry pipeline to the (black-box) renderer: land points
//! become instanced dot transforms oriented toward the sphere center, arcs
//! become sampled polylines with per-arc dash state. Geometry is immutable
//! after assembly; only the dash animator mutates, once per frame.

use glam::{DQuat, DVec3};
use globe_animation::DashAnimator;
use globe_arcs::{ArcCurveDescriptor, ArcError, build_arc_with_altitude};
use globe_geo::GeoCoordinate;
use globe_sampling::LandPointSet;

/// Transform for one instanced dot on the globe surface.
#[derive(Clone, Copy, Debug)]
pub struct DotInstance {
    /// Position on the sphere surface.
    pub position: DVec3,
    /// Rotation orienting the dot's +Z axis toward the sphere center, so
    /// the billboard face lies flat on the surface.
    pub rotation: DQuat,
}

/// Build one instance transform per retained land point.
#[must_use]
pub fn dot_instances(land: &LandPointSet) -> Vec<DotInstance> {
    land.points()
        .iter()
        .map(|p| DotInstance {
            position: p.position(),
            rotation: DQuat::from_rotation_arc(DVec3::Z, -p.direction()),
        })
        .collect()
}

/// The assembled scene: dots, arcs, and the dash animator keyed by arc index.
///
/// The two geometry pipelines (land points, connection arcs) are independent;
/// the scene only co-hosts their results for the renderer.
pub struct GlobeScene {
    dots: Vec<DotInstance>,
    arcs: Vec<ArcCurveDescriptor>,
    animator: DashAnimator,
}

impl GlobeScene {
    /// Assemble a scene from classified land points and connection routes.
    ///
    /// One arc is built per route with the given altitude factor; the dash
    /// animator gets one phase per arc, seeded for reproducible runs.
    pub fn assemble(
        land: &LandPointSet,
        routes: &[(GeoCoordinate, GeoCoordinate)],
        radius: f64,
        altitude_factor: f64,
        dash_seed: u64,
    ) -> Result<Self, ArcError> {
        let dots = dot_instances(land);
        let arcs = routes
            .iter()
            .map(|(origin, destination)| {
                build_arc_with_altitude(*origin, *destination, radius, altitude_factor)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let animator = DashAnimator::new(arcs.len(), dash_seed);

        tracing::info!(
            dots = dots.len(),
            arcs = arcs.len(),
            "assembled globe scene"
        );

        Ok(Self {
            dots,
            arcs,
            animator,
        })
    }

    /// Instanced dot transforms.
    #[inline]
    #[must_use]
    pub fn dots(&self) -> &[DotInstance] {
        &self.dots
    }

    /// Arc curve descriptors, index-aligned with the dash animator.
    #[inline]
    #[must_use]
    pub fn arcs(&self) -> &[ArcCurveDescriptor] {
        &self.arcs
    }

    /// Current dash offset for the arc at `index`.
    #[inline]
    #[must_use]
    pub fn dash_offset(&self, index: usize) -> f64 {
        self.animator.offset(index)
    }

    /// Advance the per-arc dash phases by one rendered frame.
    ///
    /// This is the only per-frame mutation in the scene; arc and dot
    /// geometry never change after assembly.
    pub fn tick_frame(&mut self) {
        self.animator.advance_frame();
    }

    /// Sample the arc at `index` into a polyline with `segments` segments.
    ///
    /// Returns `segments + 1` points along the cubic curve, ready for
    /// dashed-line rendering together with [`Self::dash_offset`].
    #[must_use]
    pub fn arc_polyline(&self, index: usize, segments: u32) -> Vec<DVec3> {
        let arc = &self.arcs[index];
        (0..=segments)
            .map(|i| arc.point_at(f64::from(i) / f64::from(segments)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globe_sampling::{LAND_OPACITY_THRESHOLD, MaskRaster, build_land_points, sample_sphere};

    const RADIUS: f64 = 600.0;

    fn land_everywhere(count: u32) -> LandPointSet {
        let mask = MaskRaster::solid(8, 4, 255);
        let points = sample_sphere(count, RADIUS).unwrap();
        build_land_points(&points, &mask, LAND_OPACITY_THRESHOLD)
    }

    fn test_routes() -> Vec<(GeoCoordinate, GeoCoordinate)> {
        vec![
            (GeoCoordinate::new(40.7, -74.0), GeoCoordinate::new(51.5, -0.1)),
            (GeoCoordinate::new(35.7, 139.7), GeoCoordinate::new(-33.9, 151.2)),
        ]
    }

    #[test]
    fn test_dots_face_sphere_center() {
        let land = land_everywhere(100);
        let dots = dot_instances(&land);
        assert_eq!(dots.len(), land.len());
        for dot in &dots {
            let inward = -dot.position.normalize();
            let facing = dot.rotation * DVec3::Z;
            assert!(
                (facing - inward).length() < 1e-9,
                "Dot +Z should point at the center: facing {facing:?}, inward {inward:?}"
            );
        }
    }

    #[test]
    fn test_assemble_builds_one_arc_per_route() {
        let land = land_everywhere(50);
        let scene = GlobeScene::assemble(&land, &test_routes(), RADIUS, 0.5, 7).unwrap();
        assert_eq!(scene.arcs().len(), 2);
        assert_eq!(scene.dots().len(), land.len());
    }

    #[test]
    fn test_tick_advances_only_dash_state() {
        let land = land_everywhere(50);
        let mut scene = GlobeScene::assemble(&land, &test_routes(), RADIUS, 0.5, 7).unwrap();

        let arc_start = scene.arcs()[0].start().position();
        let dot_pos = scene.dots()[0].position;
        let offset_before = scene.dash_offset(0);

        scene.tick_frame();

        assert!(scene.dash_offset(0) < offset_before, "Dash offset must decrease");
        assert_eq!(scene.arcs()[0].start().position(), arc_start);
        assert_eq!(scene.dots()[0].position, dot_pos);
    }

    #[test]
    fn test_arc_polyline_spans_endpoints() {
        let land = land_everywhere(10);
        let scene = GlobeScene::assemble(&land, &test_routes(), RADIUS, 0.5, 0).unwrap();
        let polyline = scene.arc_polyline(0, 64);
        assert_eq!(polyline.len(), 65);
        assert!((polyline[0] - scene.arcs()[0].start().position()).length() < 1e-9);
        assert!(
            (polyline[64] - scene.arcs()[0].end().position()).length() < 1e-9
        );
    }

    #[test]
    fn test_empty_routes_scene() {
        let land = land_everywhere(10);
        let mut scene = GlobeScene::assemble(&land, &[], RADIUS, 0.5, 0).unwrap();
        assert!(scene.arcs().is_empty());
        scene.tick_frame(); // must not panic with no arcs
    }
}
