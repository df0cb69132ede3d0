use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use block_render::{framed, rasterize, render, rows, PixelGrid, RasterOptions};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw and animate terminal bitmaps made of half-block glyphs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a bitmap to stdout for a quick look
    Preview(PreviewArgs),
    /// Render a bitmap and write the text to disk
    Convert(ConvertArgs),
    /// Export a bitmap as a raster image file
    Export(ExportArgs),
    /// Run Conway's Game of Life and write one text frame per generation
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    source: SourceSettings,
    /// Surround the output with a box-drawing border
    #[arg(long, default_value_t = false)]
    framed: bool,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    #[command(flatten)]
    source: SourceSettings,
    /// Surround the output with a box-drawing border
    #[arg(long, default_value_t = false)]
    framed: bool,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Output image path (format chosen from the extension)
    #[arg(short, long)]
    output: PathBuf,
    /// Image pixels per bitmap pixel
    #[arg(long, default_value_t = 8)]
    scale: u32,
    #[command(flatten)]
    source: SourceSettings,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Output directory for frame files
    #[arg(short, long)]
    out_dir: PathBuf,
    /// Number of generations to simulate
    #[arg(long, default_value_t = 100)]
    generations: u32,
    #[command(flatten)]
    source: SourceSettings,
}

#[derive(Parser, Debug, Clone)]
struct SourceSettings {
    /// Pixel expression over `x` and `y`; pixels are set where it is nonzero
    #[arg(long, conflicts_with_all = ["random", "cube"])]
    expr: Option<String>,
    /// Set pixels at random with the given probability
    #[arg(long, value_name = "PROBABILITY", conflicts_with = "cube")]
    random: Option<f64>,
    /// Use the built-in 24x24 cube bitmap
    #[arg(long, default_value_t = false, conflicts_with_all = ["width", "height"])]
    cube: bool,
    /// Bitmap width in pixels (defaults to the terminal width minus one)
    #[arg(long)]
    width: Option<u32>,
    /// Bitmap height in pixels (defaults to two pixel rows per terminal row)
    #[arg(long)]
    height: Option<u32>,
    /// Seed for `--random`, for reproducible bitmaps
    #[arg(long)]
    seed: Option<u64>,
    /// Invert the bitmap after it is built
    #[arg(long, default_value_t = false)]
    invert: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Preview(args) => preview(args),
        Commands::Convert(args) => convert(args),
        Commands::Export(args) => export(args),
        Commands::Animate(args) => animate(args),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let grid = args.source.build()?;
    if args.framed {
        println!("{}", framed(&grid));
    } else {
        println!("{}", render(&grid));
    }
    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let grid = args.source.build()?;
    let text = if args.framed { framed(&grid) } else { render(&grid) };

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {:?}", args.output))?;
    writeln!(file, "{}", text)?;
    Ok(())
}

fn export(args: ExportArgs) -> Result<()> {
    let grid = args.source.build()?;
    image::ImageFormat::from_path(&args.output)
        .with_context(|| format!("unsupported image extension for {:?}", args.output))?;

    let options = RasterOptions { scale: args.scale, ..RasterOptions::default() };
    let image = rasterize(&grid, &options)
        .with_context(|| format!("failed to rasterize at scale {}", args.scale))?;
    image.save(&args.output).with_context(|| format!("failed to write {:?}", args.output))?;
    Ok(())
}

fn animate(args: AnimateArgs) -> Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create output directory {:?}", args.out_dir))?;

    let mut grid = args.source.build_seeded_or_random()?;
    let progress = ProgressBar::new(u64::from(args.generations));
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} generations",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    for generation in 0..args.generations {
        let frame_path = args.out_dir.join(format!("frame_{:04}.txt", generation));
        let mut file = File::create(&frame_path)
            .with_context(|| format!("failed to create {:?}", frame_path))?;
        for row in rows(&grid) {
            writeln!(file, "{}", row)?;
        }

        grid = life_step(&grid);
        progress.inc(1);
    }

    progress.finish_with_message(format!("Frames written to {:?}", args.out_dir));
    Ok(())
}

/// One Game of Life generation on the torus, so gliders that leave one edge
/// come back on the opposite one.
fn life_step(grid: &PixelGrid) -> PixelGrid {
    let (width, height) = grid.size();
    let mut next = grid.clone();

    for y in 0..height {
        for x in 0..width {
            let mut neighbors = 0;
            for dy in [height - 1, 0, 1] {
                for dx in [width - 1, 0, 1] {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    if grid[((x + dx) % width, (y + dy) % height)] {
                        neighbors += 1;
                    }
                }
            }
            next[(x, y)] = matches!((grid[(x, y)], neighbors), (true, 2) | (true, 3) | (false, 3));
        }
    }
    next
}

impl SourceSettings {
    fn build(&self) -> Result<PixelGrid> {
        let mut grid = if self.cube {
            PixelGrid::cube()
        } else {
            let (width, height) = self.dimensions();
            let mut grid = PixelGrid::new(width, height)?;
            if let Some(expr) = &self.expr {
                grid.apply_expr(expr).with_context(|| format!("failed to apply {expr:?}"))?;
            } else if let Some(probability) = self.random {
                self.randomize(&mut grid, probability)?;
            }
            grid
        };

        if self.invert {
            grid.invert();
        }
        Ok(grid)
    }

    /// Like [`build`](Self::build), but an unconfigured bitmap starts as
    /// random soup rather than staying blank, since a blank Life board is a
    /// very short animation.
    fn build_seeded_or_random(&self) -> Result<PixelGrid> {
        if self.expr.is_none() && self.random.is_none() && !self.cube {
            let (width, height) = self.dimensions();
            let mut grid = PixelGrid::new(width, height)?;
            self.randomize(&mut grid, 0.5)?;
            if self.invert {
                grid.invert();
            }
            return Ok(grid);
        }
        self.build()
    }

    fn randomize(&self, grid: &mut PixelGrid, probability: f64) -> Result<()> {
        match self.seed {
            Some(seed) => grid.randomize_with(&mut StdRng::seed_from_u64(seed), probability)?,
            None => grid.randomize(probability)?,
        }
        Ok(())
    }

    fn dimensions(&self) -> (u32, u32) {
        let (columns, rows) = terminal_size();
        (self.width.unwrap_or(columns), self.height.unwrap_or(rows))
    }
}

/// Default bitmap size for the current terminal: one column per pixel, two
/// pixel rows per text row, minus a margin so the output fits without the
/// terminal wrapping or scrolling it.
fn terminal_size() -> (u32, u32) {
    let (columns, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let width = u32::from(columns.saturating_sub(1).max(1));
    let height = u32::from(rows.saturating_sub(2).max(1)) * 2;
    (width, height)
}
