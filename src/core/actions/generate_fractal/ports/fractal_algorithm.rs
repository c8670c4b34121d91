use crate::core::data::escape_sample::EscapeSample;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

pub trait FractalAlgorithm {
    fn pixel_rect(&self) -> PixelRect;

    fn max_iterations(&self) -> u32;

    fn compute(&self, pixel: Point) -> EscapeSample;
}
