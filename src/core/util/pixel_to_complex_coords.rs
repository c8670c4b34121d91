use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Maps a pixel onto the viewport. Pixel `(0, 0)` lands on the top-left
/// corner; the bottom and right edges of the viewport are never reached.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Complex {
    let real = complex_rect.top_left().real
        + f64::from(pixel_position.x) * complex_rect.width() / f64::from(pixel_rect.width());
    let imag = complex_rect.top_left().imag
        + f64::from(pixel_position.y) * complex_rect.height() / f64::from(pixel_rect.height());

    Complex { real, imag }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_view() -> ComplexRect {
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
        .unwrap()
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let pixel_rect = PixelRect::new(4, 4).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, pixel_rect, classic_view());

        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, -1.0);
    }

    #[test]
    fn test_pixel_to_complex_last_pixel() {
        let pixel_rect = PixelRect::new(4, 4).unwrap();

        let result = pixel_to_complex_coords(Point { x: 3, y: 3 }, pixel_rect, classic_view());

        assert_eq!(result.real, 0.25);
        assert_eq!(result.imag, 0.5);
    }

    #[test]
    fn test_pixel_to_complex_non_square() {
        let pixel_rect = PixelRect::new(6, 2).unwrap();

        let result = pixel_to_complex_coords(Point { x: 2, y: 1 }, pixel_rect, classic_view());

        assert_eq!(result.real, -1.0);
        assert_eq!(result.imag, 0.0);
    }
}
