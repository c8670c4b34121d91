use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::escape_sample::EscapeSample;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

const ESCAPE_RADIUS: f64 = 2.0;
const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Iterates `z = z² + c` from zero until `|z|` reaches the escape radius or
/// `max_iterations` steps have been taken.
///
/// Escaped points get the smoothed count `n + 1 - ln(log2(|z|²))`, which
/// removes the banding of plain integer counts.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeSample {
    let mut z = Complex::ZERO;
    let mut n: u32 = 0;

    loop {
        let modulus = z.magnitude_squared();

        if modulus >= ESCAPE_RADIUS_SQUARED {
            return EscapeSample {
                value: f64::from(n + 1) - modulus.log2().ln(),
                escaped: true,
            };
        }

        if n >= max_iterations {
            return EscapeSample::inside(max_iterations);
        }

        z = z * z + c;
        n += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, complex_rect: ComplexRect, max_iterations: u32) -> Self {
        Self {
            pixel_rect,
            complex_rect,
            max_iterations,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn compute(&self, pixel: Point) -> EscapeSample {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect);

        escape_time(c, self.max_iterations)
    }
}
