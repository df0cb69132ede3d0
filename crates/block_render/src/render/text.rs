//! Packs pairs of pixel rows into printable half-block glyph lines.

use std::fmt;

use crate::PixelGrid;

/// Glyph for an on pixel above an off pixel.
pub const UPPER_HALF_BLOCK: char = '▀';
/// Glyph for an off pixel above an on pixel.
pub const LOWER_HALF_BLOCK: char = '▄';
/// Glyph for two on pixels.
pub const FULL_BLOCK: char = '█';
/// Glyph for two off pixels.
pub const EMPTY_BLOCK: char = ' ';

const FRAME_TOP_LEFT: char = '┌';
const FRAME_TOP_RIGHT: char = '┐';
const FRAME_BOTTOM_LEFT: char = '└';
const FRAME_BOTTOM_RIGHT: char = '┘';
const FRAME_HORIZONTAL: char = '─';
const FRAME_VERTICAL: char = '│';

fn block_glyph(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (false, false) => EMPTY_BLOCK,
        (true, false) => UPPER_HALF_BLOCK,
        (false, true) => LOWER_HALF_BLOCK,
        (true, true) => FULL_BLOCK,
    }
}

/// Iterates over output lines, one per pair of pixel rows.
///
/// The glyph at column `x` of line `k` packs the pixels at `(x, 2k)` and
/// `(x, 2k + 1)`; when the height is odd, the final line's bottom row is
/// treated as entirely off.
pub fn rows(grid: &PixelGrid) -> impl Iterator<Item = String> + '_ {
    (0..grid.height()).step_by(2).map(move |y| {
        (0..grid.width())
            .map(|x| {
                let top = grid[(x, y)];
                let bottom = y + 1 < grid.height() && grid[(x, y + 1)];
                block_glyph(top, bottom)
            })
            .collect()
    })
}

/// Renders the whole grid as newline-joined glyph lines.
///
/// A pure function of the grid contents: rendering twice without mutation
/// yields identical text.
pub fn render(grid: &PixelGrid) -> String {
    rows(grid).collect::<Vec<_>>().join("\n")
}

/// Renders the grid inside a one-character box-drawing border.
///
/// The body is identical to [`render`]; the frame adds one row above, one
/// row below and one column on each side.
pub fn framed(grid: &PixelGrid) -> String {
    let width = grid.width() as usize;
    let lines = (grid.height() as usize + 1) / 2;
    let mut out = String::with_capacity((width + 3) * (lines + 2) * 3);

    out.push(FRAME_TOP_LEFT);
    for _ in 0..width {
        out.push(FRAME_HORIZONTAL);
    }
    out.push(FRAME_TOP_RIGHT);

    for line in rows(grid) {
        out.push('\n');
        out.push(FRAME_VERTICAL);
        out.push_str(&line);
        out.push(FRAME_VERTICAL);
    }

    out.push('\n');
    out.push(FRAME_BOTTOM_LEFT);
    for _ in 0..width {
        out.push(FRAME_HORIZONTAL);
    }
    out.push(FRAME_BOTTOM_RIGHT);
    out
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in rows(self).enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}
