//! Glyph rendering and raster export scenarios.

use block_render::{framed, rasterize, render, rows, BitmapError, PixelGrid, RasterOptions};
use image::Rgb;

fn pair(top: bool, bottom: bool) -> PixelGrid {
    let mut grid = PixelGrid::new(1, 2).unwrap();
    grid.set(0, 0, top).unwrap();
    grid.set(0, 1, bottom).unwrap();
    grid
}

#[test]
fn each_pixel_pair_selects_its_glyph() {
    assert_eq!(render(&pair(false, false)), " ");
    assert_eq!(render(&pair(true, false)), "▀");
    assert_eq!(render(&pair(false, true)), "▄");
    assert_eq!(render(&pair(true, true)), "█");
}

#[test]
fn two_by_two_all_on_renders_one_line_of_full_blocks() {
    let grid = PixelGrid::filled(2, 2, true).unwrap();
    assert_eq!(render(&grid), "██");
}

#[test]
fn single_on_pixel_renders_as_upper_half_block() {
    let mut grid = PixelGrid::new(1, 1).unwrap();
    grid.set(0, 0, true).unwrap();
    assert_eq!(render(&grid), "▀");
}

#[test]
fn odd_height_treats_the_missing_bottom_row_as_off() {
    let grid = PixelGrid::filled(2, 3, true).unwrap();
    assert_eq!(render(&grid), "██\n▀▀");
}

#[test]
fn line_count_is_half_the_height_rounded_up() {
    let grid = PixelGrid::new(3, 5).unwrap();
    assert_eq!(rows(&grid).count(), 3);
    assert_eq!(rows(&PixelGrid::new(3, 4).unwrap()).count(), 2);
}

#[test]
fn double_diagonals_render_as_an_x() {
    let mut grid = PixelGrid::new(10, 10).unwrap();
    for i in 0..10 {
        grid.set(i, i, true).unwrap();
        grid.set(9 - i, i, true).unwrap();
    }

    let expected = [
        "▀▄      ▄▀",
        "  ▀▄  ▄▀  ",
        "    ██    ",
        "  ▄▀  ▀▄  ",
        "▄▀      ▀▄",
    ]
    .join("\n");
    assert_eq!(render(&grid), expected);
}

#[test]
fn rendering_is_a_pure_function_of_contents() {
    let mut grid = PixelGrid::new(12, 7).unwrap();
    grid.apply_expr("(x * 3 + y) % 4").unwrap();

    let first = render(&grid);
    let second = render(&grid);
    assert_eq!(first, second);

    grid.toggle(0, 0).unwrap();
    assert_ne!(render(&grid), first);
}

#[test]
fn display_matches_render() {
    let mut grid = PixelGrid::new(6, 4).unwrap();
    grid.apply_expr("x & y").unwrap();
    assert_eq!(format!("{}", grid), render(&grid));
}

#[test]
fn framed_output_adds_a_one_character_border() {
    let mut grid = PixelGrid::new(4, 3).unwrap();
    grid.set(0, 0, true).unwrap();

    let text = framed(&grid);
    let lines: Vec<&str> = text.lines().collect();

    // ceil(3 / 2) body lines plus the top and bottom edges.
    assert_eq!(lines.len(), 4);
    for line in &lines {
        assert_eq!(line.chars().count(), 6);
    }
    assert_eq!(lines[0], "┌────┐");
    assert_eq!(lines[3], "└────┘");
    assert_eq!(lines[1], "│▀   │");
    assert!(lines[2].starts_with('│') && lines[2].ends_with('│'));
}

#[test]
fn framed_body_matches_the_plain_rendering() {
    let mut grid = PixelGrid::new(5, 6).unwrap();
    grid.apply_expr("(x + y) % 2").unwrap();

    let body: Vec<String> = framed(&grid)
        .lines()
        .skip(1)
        .take(3)
        .map(|line| {
            let chars: Vec<char> = line.chars().collect();
            chars[1..chars.len() - 1].iter().collect()
        })
        .collect();
    assert_eq!(body.join("\n"), render(&grid));
}

#[test]
fn rasterize_scales_each_pixel_to_a_square() {
    let grid = PixelGrid::filled(3, 2, true).unwrap();
    let image = rasterize(&grid, &RasterOptions { scale: 4, ..RasterOptions::default() }).unwrap();
    assert_eq!(image.dimensions(), (12, 8));
}

#[test]
fn rasterize_paints_uniform_color_blocks() {
    let mut grid = PixelGrid::new(2, 1).unwrap();
    grid.set(0, 0, true).unwrap();

    let image = rasterize(&grid, &RasterOptions { scale: 2, ..RasterOptions::default() }).unwrap();
    for py in 0..2 {
        for px in 0..2 {
            assert_eq!(image.get_pixel(px, py), &Rgb([255, 255, 255]));
            assert_eq!(image.get_pixel(px + 2, py), &Rgb([0, 0, 0]));
        }
    }
}

#[test]
fn rasterize_honors_custom_colors() {
    let grid = PixelGrid::filled(1, 1, true).unwrap();
    let options =
        RasterOptions { scale: 1, on: Rgb([200, 40, 0]), off: Rgb([10, 10, 10]) };
    let image = rasterize(&grid, &options).unwrap();
    assert_eq!(image.get_pixel(0, 0), &Rgb([200, 40, 0]));
}

#[test]
fn rasterize_rejects_zero_scale() {
    let grid = PixelGrid::new(2, 2).unwrap();
    let result = rasterize(&grid, &RasterOptions { scale: 0, ..RasterOptions::default() });
    assert!(matches!(result, Err(BitmapError::InvalidArgument(_))));
}

#[test]
fn rasterized_images_are_snapshots() {
    let mut grid = PixelGrid::filled(2, 2, true).unwrap();
    let image = rasterize(&grid, &RasterOptions::default()).unwrap();

    grid.clear();
    assert_eq!(image.get_pixel(0, 0), &Rgb([255, 255, 255]));
}
