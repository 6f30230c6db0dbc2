//! Command-line argument parsing for the globe engine.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Globe engine command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "globe", about = "Interactive dotted globe with connection arcs")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Sphere radius in scene units.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Number of lattice samples over the sphere.
    #[arg(long)]
    pub dot_count: Option<u32>,

    /// Land opacity threshold (0-255).
    #[arg(long)]
    pub land_threshold: Option<u8>,

    /// Path to the land-mask image.
    #[arg(long)]
    pub mask: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(r) = args.radius {
            self.globe.radius = r;
        }
        if let Some(count) = args.dot_count {
            self.globe.dot_count = count;
        }
        if let Some(threshold) = args.land_threshold {
            self.globe.land_threshold = threshold;
        }
        if let Some(ref mask) = args.mask {
            self.globe.mask_path = mask.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
