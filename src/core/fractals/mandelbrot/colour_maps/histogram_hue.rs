use crate::core::actions::generate_indexed_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::{Colour, Hsva};
use crate::core::data::palette_curve::PaletteCurve;

/// Histogram-equalized hue mapping.
///
/// Escaped pixels are fully lit with a hue read off the frame's palette
/// curve; pixels at or above the iteration cap are black.
#[derive(Debug)]
pub struct MandelbrotHistogramHue<'a> {
    curve: &'a PaletteCurve,
    max_iterations: u32,
}

impl<'a> MandelbrotHistogramHue<'a> {
    #[must_use]
    pub fn new(curve: &'a PaletteCurve, max_iterations: u32) -> Self {
        Self {
            curve,
            max_iterations,
        }
    }

    #[must_use]
    pub fn hsva(&self, value: f64) -> Hsva {
        let mu = value.max(0.0);
        let v = if mu >= f64::from(self.max_iterations) {
            0.0
        } else {
            1.0
        };

        Hsva {
            h: self.curve.interpolate(mu),
            s: 1.0,
            v,
            a: 1.0,
        }
    }
}

impl ColourMap<f64> for MandelbrotHistogramHue<'_> {
    fn map(&self, value: f64) -> Colour {
        self.hsva(value).to_colour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::normalize_palette::normalize_palette::normalize_palette;
    use crate::core::data::escape_sample::EscapeSample;
    use crate::core::data::frame_field::Histogram;

    fn curve(max_iterations: u32, values: &[f64]) -> PaletteCurve {
        let mut histogram = Histogram::new(max_iterations);
        for &value in values {
            histogram.record(EscapeSample {
                value,
                escaped: true,
            });
        }
        normalize_palette(&histogram, max_iterations)
    }

    #[test]
    fn test_inside_points_are_black() {
        let curve = curve(10, &[1.5, 2.5]);
        let map = MandelbrotHistogramHue::new(&curve, 10);

        assert_eq!(map.hsva(10.0).v, 0.0);
        assert_eq!(map.map(10.0), Colour::BLACK);
        assert_eq!(map.map(10.2), Colour::BLACK);
    }

    #[test]
    fn test_escaped_points_are_lit() {
        let curve = curve(10, &[1.5, 2.5]);
        let map = MandelbrotHistogramHue::new(&curve, 10);

        let hsva = map.hsva(9.99);

        assert_eq!(hsva.v, 1.0);
        assert_eq!(hsva.s, 1.0);
        assert_eq!(hsva.a, 1.0);
    }

    #[test]
    fn test_hue_interpolates_between_curve_entries() {
        // Curve: [0, 0.5, 1, 1, ...]
        let curve = curve(10, &[1.5, 2.5]);
        let map = MandelbrotHistogramHue::new(&curve, 10);

        assert_eq!(map.hsva(1.0).h, 0.5);
        assert_eq!(map.hsva(1.5).h, 0.75);
        assert_eq!(map.hsva(0.5).h, 0.25);
    }

    #[test]
    fn test_negative_values_use_first_entry() {
        let curve = curve(10, &[0.2, 2.5]);
        let map = MandelbrotHistogramHue::new(&curve, 10);

        assert_eq!(map.hsva(-0.7).h, 0.5);
    }

    #[test]
    fn test_empty_curve_never_produces_nan() {
        let curve = normalize_palette(&Histogram::new(10), 10);
        let map = MandelbrotHistogramHue::new(&curve, 10);

        for value in [0.0, 0.5, 3.3, 9.9, 10.0] {
            assert!(!map.hsva(value).h.is_nan());
        }
        // Hue 0 is red.
        assert_eq!(map.map(3.3), Colour { r: 255, g: 0, b: 0 });
    }
}
