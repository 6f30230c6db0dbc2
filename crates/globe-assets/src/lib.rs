//! World-map mask loading and decoding.
//!
//! The land mask ships as an ordinary image with land painted opaque and
//! ocean transparent; only the alpha channel matters. Decoding is the one
//! asynchronous-flavored boundary in the pipeline: it happens exactly once,
//! and everything downstream takes the produced [`MaskRaster`] by reference,
//! so sampling can never observe a half-loaded mask.

use std::io::Cursor;
use std::path::Path;

use globe_sampling::{MaskError, MaskRaster};

/// Errors that can occur while loading the mask image.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Failed to read the image file from disk.
    #[error("failed to read mask image: {0}")]
    ReadError(#[source] std::io::Error),

    /// The image bytes could not be decoded.
    #[error("failed to decode mask image: {0}")]
    DecodeError(#[source] image::ImageError),

    /// The decoded image produced an invalid raster.
    #[error("decoded mask is not a valid raster: {0}")]
    InvalidRaster(#[source] MaskError),
}

/// Decode image bytes into a [`MaskRaster`], keeping only the alpha channel.
///
/// The format is guessed from the bytes, so PNG and JPEG masks both work
/// (a JPEG has no alpha and decodes fully opaque).
pub fn decode_mask(bytes: &[u8]) -> Result<MaskRaster, AssetError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(AssetError::ReadError)?;
    let rgba = reader.decode().map_err(AssetError::DecodeError)?.to_rgba8();

    let width = rgba.width();
    let height = rgba.height();
    let opacity: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();

    let raster = MaskRaster::new(width, height, opacity).map_err(AssetError::InvalidRaster)?;
    tracing::info!(width, height, "decoded land mask");
    Ok(raster)
}

/// Read and decode a mask image from disk.
pub fn load_mask_from_path(path: &Path) -> Result<MaskRaster, AssetError> {
    let bytes = std::fs::read(path).map_err(AssetError::ReadError)?;
    decode_mask(&bytes)
}
