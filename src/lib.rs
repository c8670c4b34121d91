mod adapters;
mod controllers;
mod core;
mod presenters;

pub use crate::controllers::animation::AnimationController;
pub use crate::controllers::cli::args::CliArgs;
pub use crate::controllers::ports::animation_presenter::AnimationPresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_zoom_sequence::generate_zoom_sequence::generate_zoom_sequence;
pub use crate::core::actions::normalize_palette::normalize_palette::normalize_palette;
pub use crate::core::actions::render_animation::ports::render_observer::{RenderObserver, SilentObserver};
pub use crate::core::actions::render_animation::render_animation::{render_animation, render_frame};
pub use crate::core::data::animation::{Animation, FrameDelay};
pub use crate::core::data::complex::{Complex, ParseComplexError};
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::escape_sample::EscapeSample;
pub use crate::core::data::frame_field::{FrameField, Histogram};
pub use crate::core::data::indexed_frame::IndexedFrame;
pub use crate::core::data::indexed_palette::IndexedPalette;
pub use crate::core::data::palette_curve::PaletteCurve;
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::fractals::mandelbrot::algorithm::{escape_time, MandelbrotAlgorithm};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotConfigError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, Parallelism};
pub use crate::presenters::file::gif::{GifFilePresenter, GifPresenterError};
pub use crate::presenters::logging::log_observer::LogObserver;
