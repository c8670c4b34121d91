use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_field::{FrameField, Histogram};

/// Reference frame field computation: one pixel at a time, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(algorithm: &Alg) -> FrameField {
    let pixel_rect = algorithm.pixel_rect();
    let max_iterations = algorithm.max_iterations();

    let mut values = Vec::with_capacity(pixel_rect.size());
    let mut histogram = Histogram::new(max_iterations);

    for pixel in pixel_rect.points() {
        let sample = algorithm.compute(pixel);

        values.push(sample.value);
        histogram.record(sample);
    }

    FrameField::new(pixel_rect, max_iterations, values, histogram)
}
