//! Geographic and spherical coordinate core for the globe engine.
//!
//! Provides the value types shared by every other crate: latitude/longitude
//! coordinates, points constrained to the sphere surface, and the
//! great-circle math (angular separation, spherical interpolation) that the
//! sampler and arc builder are built on.

mod coordinate;
mod great_circle;

pub use coordinate::{GeoCoordinate, SpherePoint, spherical_to_cartesian};
pub use great_circle::{angular_separation, slerp_direction};
