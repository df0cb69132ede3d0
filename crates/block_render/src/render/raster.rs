//! Exports a bitmap snapshot as a two-color raster image.
//!
//! Encoding, saving and interactive viewing stay with the `image` crate;
//! this module's contract stops at the in-memory buffer.

use image::{Rgb, RgbImage};

use crate::{BitmapError, PixelGrid};

/// Controls for [`rasterize`].
#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Side length in image pixels of one bitmap pixel. Must be at least 1.
    pub scale: u32,
    /// Color of on pixels.
    pub on: Rgb<u8>,
    /// Color of off pixels.
    pub off: Rgb<u8>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1, on: Rgb([255, 255, 255]), off: Rgb([0, 0, 0]) }
    }
}

/// Renders a snapshot of `grid` as an RGB image of
/// `(width * scale, height * scale)` pixels, one `scale`-sided square per
/// bitmap pixel. Later mutation of the grid does not affect the result.
pub fn rasterize(grid: &PixelGrid, options: &RasterOptions) -> Result<RgbImage, BitmapError> {
    if options.scale == 0 {
        return Err(BitmapError::InvalidArgument("raster scale must be at least 1".into()));
    }

    let scale = options.scale;
    let image = RgbImage::from_fn(grid.width() * scale, grid.height() * scale, |px, py| {
        if grid[(px / scale, py / scale)] {
            options.on
        } else {
            options.off
        }
    });
    Ok(image)
}
