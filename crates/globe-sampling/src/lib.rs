//! Sphere point sampling and land/water classification.
//!
//! Generates a near-uniform Fibonacci-lattice point distribution over the
//! globe surface, then filters it against an equirectangular opacity raster
//! so only points over land are retained. The raster type doubles as the
//! readiness gate for the asynchronously decoded world map: classification
//! takes `&MaskRaster`, so it cannot run before a decode has completed.

mod classifier;
mod raster;
mod sampler;

pub use classifier::{
    LAND_OPACITY_THRESHOLD, LandPointSet, build_land_points, is_land, is_land_with_threshold,
};
pub use raster::{MaskError, MaskRaster};
pub use sampler::{SampleError, sample_sphere};
