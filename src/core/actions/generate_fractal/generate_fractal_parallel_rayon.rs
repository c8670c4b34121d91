use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_field::{FrameField, Histogram};

/// Computes the frame field with rows spread over rayon's work-stealing pool.
///
/// Rows are grouped so that each worker folds a contiguous run of rows into
/// its own values and partial histogram. A histogram holds `max_iterations + 1`
/// buckets, so there is one partial per worker rather than one per row.
/// Partials are reduced in row order, giving the same field as
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> FrameField
where
    Alg: FractalAlgorithm + Sync,
{
    let pixel_rect = algorithm.pixel_rect();
    let max_iterations = algorithm.max_iterations();
    let rows_per_worker = (pixel_rect.height() as usize).div_ceil(rayon::current_num_threads());

    let (values, histogram) = (0..pixel_rect.height())
        .into_par_iter()
        .with_min_len(rows_per_worker)
        .fold(
            || (Vec::new(), Histogram::new(max_iterations)),
            |(mut values, mut histogram), y| {
                for pixel in pixel_rect.row(y) {
                    let sample = algorithm.compute(pixel);

                    values.push(sample.value);
                    histogram.record(sample);
                }

                (values, histogram)
            },
        )
        .reduce_with(|(mut values, mut histogram), (tail, partial)| {
            values.extend(tail);
            histogram.merge(&partial);

            (values, histogram)
        })
        .unwrap_or_else(|| (Vec::new(), Histogram::new(max_iterations)));

    FrameField::new(pixel_rect, max_iterations, values, histogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::escape_sample::EscapeSample;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

    #[derive(Debug)]
    struct StubAlgorithm {
        pixel_rect: PixelRect,
    }

    impl FractalAlgorithm for StubAlgorithm {
        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }

        fn max_iterations(&self) -> u32 {
            64
        }

        fn compute(&self, pixel: Point) -> EscapeSample {
            EscapeSample {
                value: f64::from((pixel.x * 7 + pixel.y * 3) % 64),
                escaped: (pixel.x + pixel.y) % 3 != 0,
            }
        }
    }

    fn mandelbrot(width: u32, height: u32) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(
            PixelRect::new(width, height).unwrap(),
            ComplexRect::new(
                Complex {
                    real: -2.0,
                    imag: -1.0,
                },
                Complex {
                    real: 1.0,
                    imag: 1.0,
                },
            )
            .unwrap(),
            128,
        )
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubAlgorithm {
            pixel_rect: PixelRect::new(11, 9).unwrap(),
        };

        let serial = generate_fractal_serial(&algorithm);
        let rayon = generate_fractal_parallel_rayon(&algorithm);

        assert_eq!(rayon, serial);
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = StubAlgorithm {
            pixel_rect: PixelRect::new(1, 1).unwrap(),
        };

        assert_eq!(
            generate_fractal_parallel_rayon(&algorithm),
            generate_fractal_serial(&algorithm)
        );
    }

    #[test]
    fn test_rayon_matches_serial_on_mandelbrot_non_square() {
        let algorithm = mandelbrot(37, 13);

        let serial = generate_fractal_serial(&algorithm);
        let rayon = generate_fractal_parallel_rayon(&algorithm);

        assert_eq!(rayon.values(), serial.values());
        assert_eq!(rayon.histogram(), serial.histogram());
    }

    #[test]
    fn test_tall_raster_with_high_iteration_cap_matches_serial() {
        // Every pixel escapes on the first step, so the histogram dominates.
        let algorithm = MandelbrotAlgorithm::new(
            PixelRect::new(4, 256).unwrap(),
            ComplexRect::new(
                Complex {
                    real: 10.0,
                    imag: 10.0,
                },
                Complex {
                    real: 11.0,
                    imag: 11.0,
                },
            )
            .unwrap(),
            100_000,
        );
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(3)
            .build()
            .unwrap();

        let rayon = pool.install(|| generate_fractal_parallel_rayon(&algorithm));
        let serial = generate_fractal_serial(&algorithm);

        assert_eq!(rayon.histogram().total(), 1024);
        assert_eq!(rayon, serial);
    }

    #[test]
    fn test_four_by_four_reference_frame() {
        let field = generate_fractal_parallel_rayon(&mandelbrot(4, 4));
        let at = |x, y| field.value_at(Point { x, y });

        // Left column corners: c = -2 - i and c = -2 + 0.5i escape after one step.
        assert!((at(0, 0) - (2.0 - 5f64.log2().ln())).abs() < 1e-12);
        assert!((at(0, 0) - 1.1576).abs() < 1e-3);
        assert!((at(0, 3) - (2.0 - 4.25f64.log2().ln())).abs() < 1e-12);
        assert!((at(0, 3) - 1.2640).abs() < 1e-3);

        // c = -0.5 and c = -0.5 - 0.5i lie inside the main cardioid.
        assert_eq!(at(2, 2), 128.0);
        assert_eq!(at(2, 1), 128.0);

        // Right column: c = 0.25 - i escapes quickly, c = 0.25 is the cardioid cusp.
        assert!(at(3, 0) < 6.0);
        assert_eq!(at(3, 2), 128.0);
    }
}
