//! Command-line front end for the Piet interpreter: loads an image,
//! reconstructs the program grid, and runs it to completion against the
//! real terminal.
//!
//! Argument parsing is hand-rolled rather than `clap`-driven: the usage
//! message text, the stream each diagnostic goes to, and the exit codes
//! are part of the external contract, and a general-purpose parser's
//! defaults would fight all three.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use image::GenericImageView;
use log::info;

use piet_vm::{Grid, Interpreter, StdIo};

const USAGE: &str = "usage: piet <image> <codel-size>";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        println!("{}", USAGE);
        return ExitCode::FAILURE;
    }

    let codel_size: usize = match args[2].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match load_and_run(&args[1], codel_size) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("piet: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_and_run(path: &str, codel_size: usize) -> Result<()> {
    let grid = load_grid(path, codel_size)?;
    info!("loaded {}x{} grid from {}", grid.width(), grid.height(), path);

    let mut io = StdIo::new();
    Interpreter::new(grid, &mut io).run();
    Ok(())
}

fn load_grid(path: &str, codel_size: usize) -> Result<Grid> {
    let image = image::ImageReader::open(Path::new(path))
        .with_context(|| format!("failed to open {}", path))?
        .decode()
        .with_context(|| format!("failed to decode {}", path))?;

    let (pixel_width, pixel_height) = image.dimensions();
    if pixel_width as usize % codel_size != 0 || pixel_height as usize % codel_size != 0 {
        return Err(anyhow!(
            "image dimensions {}x{} are not a multiple of codel size {}",
            pixel_width,
            pixel_height,
            codel_size
        ));
    }

    let rgb = image.to_rgb8();
    let grid_width = pixel_width as usize / codel_size;
    let grid_height = pixel_height as usize / codel_size;

    Grid::from_sampler(grid_width, grid_height, |x, y| {
        let pixel = rgb.get_pixel((x * codel_size) as u32, (y * codel_size) as u32);
        (pixel[0], pixel[1], pixel[2])
    })
    .context("failed to build program grid")
}
