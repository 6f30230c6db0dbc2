//! Immutable equirectangular opacity raster.

/// Errors that can occur when constructing a [`MaskRaster`].
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    /// One or both raster dimensions are zero.
    #[error("raster dimensions must be non-zero, got {width}x{height}")]
    EmptyRaster {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The opacity buffer length does not match `width * height`.
    #[error("opacity buffer has {actual} cells, expected {expected}")]
    DimensionMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the provided buffer.
        actual: usize,
    },
}

/// An immutable 2D grid of opacity values in an equirectangular projection.
///
/// Horizontal position encodes longitude, vertical position latitude. Built
/// once from a decoded world-map image and never mutated; holding a
/// `MaskRaster` is proof that the decode completed, so "classify before the
/// mask is ready" is unrepresentable.
#[derive(Clone, Debug)]
pub struct MaskRaster {
    width: u32,
    height: u32,
    opacity: Vec<u8>,
}

impl MaskRaster {
    /// Build a raster from row-major opacity cells.
    pub fn new(width: u32, height: u32, opacity: Vec<u8>) -> Result<Self, MaskError> {
        if width == 0 || height == 0 {
            return Err(MaskError::EmptyRaster { width, height });
        }
        let expected = width as usize * height as usize;
        if opacity.len() != expected {
            return Err(MaskError::DimensionMismatch {
                expected,
                actual: opacity.len(),
            });
        }
        Ok(Self {
            width,
            height,
            opacity,
        })
    }

    /// Build a raster where every cell holds the same opacity value.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn solid(width: u32, height: u32, value: u8) -> Self {
        assert!(width > 0 && height > 0, "solid raster needs non-zero dimensions");
        Self {
            width,
            height,
            opacity: vec![value; width as usize * height as usize],
        }
    }

    /// Raster width in cells.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in cells.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Opacity at the given cell.
    ///
    /// # Panics
    ///
    /// Panics on out-of-range cells. Callers are expected to clamp; an
    /// out-of-range index here is a programming defect and fails loudly
    /// rather than silently reading as "not land".
    #[inline]
    #[must_use]
    pub fn opacity_at(&self, x: u32, y: u32) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "raster cell ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        self.opacity[y as usize * self.width as usize + x as usize]
    }

    /// Nearest-neighbor opacity lookup at normalized UV coordinates.
    ///
    /// `u` and `v` are expected in `[0, 1]`; the exact 0 and 1 boundaries
    /// clamp to valid cells instead of reading past the edge.
    #[must_use]
    pub fn opacity_at_uv(&self, u: f64, v: f64) -> u8 {
        let x = ((u * f64::from(self.width)).floor().max(0.0) as u32).min(self.width - 1);
        let y = ((v * f64::from(self.height)).floor().max(0.0) as u32).min(self.height - 1);
        self.opacity_at(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_buffer_length() {
        let result = MaskRaster::new(4, 2, vec![0; 7]);
        assert!(matches!(
            result,
            Err(MaskError::DimensionMismatch {
                expected: 8,
                actual: 7
            })
        ));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            MaskRaster::new(0, 2, vec![]),
            Err(MaskError::EmptyRaster { .. })
        ));
        assert!(matches!(
            MaskRaster::new(2, 0, vec![]),
            Err(MaskError::EmptyRaster { .. })
        ));
    }

    #[test]
    fn test_opacity_at_reads_row_major() {
        let raster = MaskRaster::new(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(raster.opacity_at(0, 0), 0);
        assert_eq!(raster.opacity_at(2, 0), 2);
        assert_eq!(raster.opacity_at(0, 1), 3);
        assert_eq!(raster.opacity_at(2, 1), 5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_opacity_at_panics_out_of_bounds() {
        let raster = MaskRaster::solid(3, 2, 255);
        let _ = raster.opacity_at(3, 0);
    }

    #[test]
    fn test_uv_boundaries_clamp() {
        let raster = MaskRaster::new(2, 2, vec![10, 20, 30, 40]).unwrap();
        assert_eq!(raster.opacity_at_uv(0.0, 0.0), 10);
        // u = 1.0 maps exactly to width; must clamp to the last column.
        assert_eq!(raster.opacity_at_uv(1.0, 0.0), 20);
        assert_eq!(raster.opacity_at_uv(0.0, 1.0), 30);
        assert_eq!(raster.opacity_at_uv(1.0, 1.0), 40);
    }

    #[test]
    fn test_uv_nearest_neighbor() {
        let raster = MaskRaster::new(4, 1, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(raster.opacity_at_uv(0.1, 0.5), 1);
        assert_eq!(raster.opacity_at_uv(0.3, 0.5), 2);
        assert_eq!(raster.opacity_at_uv(0.6, 0.5), 3);
        assert_eq!(raster.opacity_at_uv(0.9, 0.5), 4);
    }

    #[test]
    fn test_solid_fills_every_cell() {
        let raster = MaskRaster::solid(5, 3, 90);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(raster.opacity_at(x, y), 90);
            }
        }
    }
}
