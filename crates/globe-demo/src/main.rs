//! Headless demo binary exercising the full globe pipeline.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Loads the land mask (falling back to a procedural one when the
//! configured image is missing), samples the sphere lattice, classifies the
//! points, assembles the scene with a set of demo routes, and runs the dash
//! animation for a few hundred frames while logging statistics.
//!
//! Run with `cargo run -p globe-demo`.
//! Run with `cargo run -p globe-demo -- --dot-count 10000 --radius 300` to
//! override globe parameters.

use clap::Parser;
use globe_config::{CliArgs, Config};
use globe_geo::GeoCoordinate;
use globe_sampling::{MaskRaster, build_land_points, sample_sphere};
use globe_scene::GlobeScene;
use tracing::{info, warn};

/// Demo connection routes between a few major cities.
fn demo_routes() -> Vec<(GeoCoordinate, GeoCoordinate)> {
    let new_york = GeoCoordinate::new(40.7128, -74.0060);
    let london = GeoCoordinate::new(51.5074, -0.1278);
    let tokyo = GeoCoordinate::new(35.6762, 139.6503);
    let sydney = GeoCoordinate::new(-33.8688, 151.2093);
    let sao_paulo = GeoCoordinate::new(-23.5505, -46.6333);
    let cape_town = GeoCoordinate::new(-33.9249, 18.4241);

    vec![
        (new_york, london),
        (london, tokyo),
        (tokyo, sydney),
        (sydney, cape_town),
        (cape_town, sao_paulo),
        (sao_paulo, new_york),
    ]
}

/// Procedural stand-in mask: opaque continents-like latitude bands.
///
/// Used when the configured mask image is missing so the demo still runs
/// end to end. Land covers the mid-latitudes, ocean the poles and a band
/// around the equator.
fn fallback_mask() -> MaskRaster {
    let (width, height) = (400u32, 200u32);
    let mut cells = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        let v = f64::from(y) / f64::from(height);
        let land = (0.15..0.45).contains(&v) || (0.55..0.85).contains(&v);
        for _ in 0..width {
            cells.push(if land { 255 } else { 0 });
        }
    }
    MaskRaster::new(width, height, cells).expect("fallback mask dimensions are valid")
}

fn load_mask(config: &Config) -> MaskRaster {
    let path = std::path::Path::new(&config.globe.mask_path);
    match globe_assets::load_mask_from_path(path) {
        Ok(raster) => raster,
        Err(e) => {
            warn!("Could not load mask from {}: {e}; using procedural fallback", path.display());
            fallback_mask()
        }
    }
}

fn run_pipeline(config: &Config, mask: &MaskRaster) -> GlobeScene {
    let points = sample_sphere(config.globe.dot_count, config.globe.radius)
        .expect("config guarantees positive count and radius");
    info!("Sampled {} lattice points", points.len());

    let land = build_land_points(&points, mask, config.globe.land_threshold);
    info!(
        "Retained {} land points ({:.1}% of sampled)",
        land.len(),
        land.retention() * 100.0
    );

    let scene = GlobeScene::assemble(
        &land,
        &demo_routes(),
        config.globe.radius,
        config.arcs.altitude_factor,
        config.arcs.dash_seed,
    )
    .expect("config guarantees a valid radius");

    for (i, arc) in scene.arcs().iter().enumerate() {
        info!(
            "Arc {i}: separation {:.3} rad, surface distance {:.1}, peak |control| {:.1}",
            arc.angular_separation(),
            arc.surface_distance(),
            arc.control1().length().max(arc.control2().length()),
        );
    }

    scene
}

fn run_animation(scene: &mut GlobeScene, config: &Config, frames: u32) {
    for frame in 0..frames {
        scene.tick_frame();
        if config.debug.show_stats && frame % 60 == 0 && !scene.arcs().is_empty() {
            info!("Frame {frame}: arc 0 dash offset {:.4}", scene.dash_offset(0));
        }
    }
    if !scene.arcs().is_empty() {
        info!(
            "After {frames} frames, dash offsets span {:.4} to {:.4}",
            (0..scene.arcs().len())
                .map(|i| scene.dash_offset(i))
                .fold(f64::INFINITY, f64::min),
            (0..scene.arcs().len())
                .map(|i| scene.dash_offset(i))
                .fold(f64::NEG_INFINITY, f64::max),
        );
    }
}

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .expect("Failed to resolve config directory")
            .join("globe")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    // Initialize logging with config and debug settings
    let log_dir = config_dir.join("logs");
    globe_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        "Globe pipeline: radius {}, {} samples, land threshold {}",
        config.globe.radius, config.globe.dot_count, config.globe.land_threshold
    );

    let mask = load_mask(&config);
    let mut scene = run_pipeline(&config, &mask);

    // Sample one arc polyline the way the renderer would
    if !scene.arcs().is_empty() {
        let polyline = scene.arc_polyline(0, config.arcs.segments);
        info!("Arc 0 polyline: {} points", polyline.len());
    }

    run_animation(&mut scene, &config, 300);

    info!("Globe demo completed successfully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_mask_has_land_and_ocean() {
        let mask = fallback_mask();
        let cells: Vec<u8> = (0..mask.height())
            .map(|y| mask.opacity_at(0, y))
            .collect();
        assert!(cells.iter().any(|&c| c == 255), "Fallback mask needs land");
        assert!(cells.iter().any(|&c| c == 0), "Fallback mask needs ocean");
    }

    #[test]
    fn test_pipeline_runs_with_defaults() {
        let mut config = Config::default();
        config.globe.dot_count = 2_000; // keep the test fast
        let mask = fallback_mask();
        let mut scene = run_pipeline(&config, &mask);
        assert!(!scene.dots().is_empty(), "Fallback mask should retain points");
        assert_eq!(scene.arcs().len(), demo_routes().len());

        let before = scene.dash_offset(0);
        run_animation(&mut scene, &config, 10);
        assert!(scene.dash_offset(0) < before);
    }
}
