use rayon::prelude::*;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_indexed_frame::generate_indexed_frame::generate_indexed_frame;
use crate::core::actions::generate_zoom_sequence::generate_zoom_sequence::generate_zoom_sequence;
use crate::core::actions::normalize_palette::normalize_palette::normalize_palette;
use crate::core::actions::render_animation::ports::render_observer::RenderObserver;
use crate::core::data::animation::{Animation, FrameDelay};
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::indexed_frame::IndexedFrame;
use crate::core::data::indexed_palette::IndexedPalette;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::histogram_hue::MandelbrotHistogramHue;
use crate::core::fractals::mandelbrot::errors::MandelbrotConfigError;
use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, Parallelism};

/// Renders one frame: escape field, histogram curve, then palette indices.
pub fn render_frame(
    viewport: ComplexRect,
    pixel_rect: PixelRect,
    max_iterations: u32,
    palette: &IndexedPalette,
    parallelism: Parallelism,
) -> IndexedFrame {
    let algorithm = MandelbrotAlgorithm::new(pixel_rect, viewport, max_iterations);

    let field = match parallelism {
        Parallelism::Serial => generate_fractal_serial(&algorithm),
        Parallelism::Rayon => generate_fractal_parallel_rayon(&algorithm),
    };

    let curve = normalize_palette(field.histogram(), max_iterations);
    let colour_map = MandelbrotHistogramHue::new(&curve, max_iterations);

    generate_indexed_frame(&field, &colour_map, palette)
}

/// Renders the whole zoom described by `config`.
///
/// All viewports are computed first; frames are then independent and, with
/// [`Parallelism::Rayon`], rendered concurrently. Output order always
/// follows the zoom.
pub fn render_animation<O: RenderObserver>(
    config: &MandelbrotConfig,
    observer: &O,
) -> Result<Animation, MandelbrotConfigError> {
    config.validate()?;

    let pixel_rect = config.pixel_rect()?;
    let frames = config.frames as usize;
    let palette = IndexedPalette::plan9();

    observer.render_started(frames);

    let viewports = generate_zoom_sequence(
        config.region,
        config.zoom_point,
        config.zoom_factor,
        frames,
    );

    let render = |(index, viewport): (usize, &ComplexRect)| {
        observer.frame_started(index, frames);
        let frame = render_frame(
            *viewport,
            pixel_rect,
            config.max_iterations,
            &palette,
            config.parallelism,
        );
        observer.frame_completed(index, frames);
        frame
    };

    let rendered: Vec<IndexedFrame> = match config.parallelism {
        Parallelism::Serial => viewports.iter().enumerate().map(render).collect(),
        Parallelism::Rayon => viewports.par_iter().enumerate().map(render).collect(),
    };

    let delays = vec![FrameDelay::from_millis(config.frame_delay_ms); rendered.len()];

    Ok(Animation::new(palette, rendered, delays))
}
