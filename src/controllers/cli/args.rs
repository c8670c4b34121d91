use std::path::PathBuf;

use clap::Parser;

use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_FRAMES, DEFAULT_MAX_ITERATIONS, DEFAULT_SIDE, DEFAULT_ZOOM_FACTOR, DEFAULT_ZOOM_POINT,
    MandelbrotConfig, Parallelism,
};

/// Renders a zoom into the Mandelbrot set as an animated GIF.
#[derive(Debug, Parser)]
#[command(name = "mandelzoom", version)]
pub struct CliArgs {
    /// Number of frames in the animation
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: u32,

    /// Maximum iterations applied to z before a point counts as inside the set
    #[arg(short, long = "iter", default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    /// Point to zoom in on, e.g. -0.761574-0.0847596i
    #[arg(short, long, default_value_t = DEFAULT_ZOOM_POINT, allow_hyphen_values = true)]
    pub point: Complex,

    /// Scale applied between successive frames
    #[arg(short, long, default_value_t = DEFAULT_ZOOM_FACTOR)]
    pub zoom: f64,

    /// Image width in pixels
    #[arg(short, long, default_value_t = DEFAULT_SIDE)]
    pub width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_SIDE)]
    pub height: u32,

    /// Display time of each frame in milliseconds
    #[arg(short, long, default_value_t = 0)]
    pub delay: u32,

    /// Render frames and pixels on a single thread
    #[arg(long)]
    pub serial: bool,

    /// Output file
    #[arg(default_value = "out.gif")]
    pub outfile: PathBuf,
}

impl CliArgs {
    #[must_use]
    pub fn to_config(&self) -> MandelbrotConfig {
        MandelbrotConfig {
            max_iterations: self.iterations,
            zoom_factor: self.zoom,
            zoom_point: self.point,
            frames: self.frames,
            width: self.width,
            height: self.height,
            frame_delay_ms: self.delay,
            parallelism: if self.serial {
                Parallelism::Serial
            } else {
                Parallelism::Rayon
            },
            ..MandelbrotConfig::default()
        }
    }
}
