//! Terminal bitmaps drawn with Unicode half-block glyphs.
//!
//! A fixed-width text cell is roughly twice as tall as it is wide, so one
//! glyph can carry two vertically stacked pixels. [`PixelGrid`] owns the
//! pixel matrix, [`render`]/[`framed`] pack it into printable text, and
//! [`rasterize`] exports a snapshot as an [`image`] buffer.

mod bitmap;
mod render;

pub use bitmap::{
    expr::{EvalError, ParseError, PixelExpr},
    grid::PixelGrid,
};
pub use render::{
    raster::{rasterize, RasterOptions},
    text::{framed, render, rows, EMPTY_BLOCK, FULL_BLOCK, LOWER_HALF_BLOCK, UPPER_HALF_BLOCK},
};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BitmapError {
    #[error("coordinates ({x}, {y}) are out of bounds for this {width}x{height} bitmap")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failed to parse pixel expression: {0}")]
    Parse(#[from] ParseError),
    #[error("pixel expression evaluation failed: {0}")]
    Evaluation(#[from] EvalError),
}
