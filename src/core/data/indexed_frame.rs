use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum IndexedFrameError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for IndexedFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} frame",
                    pixel.x,
                    pixel.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for IndexedFrameError {}

/// One raster frame as indices into the animation's shared palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFrame {
    pixel_rect: PixelRect,
    indices: Vec<u8>,
}

impl IndexedFrame {
    pub fn from_data(pixel_rect: PixelRect, indices: Vec<u8>) -> Result<Self, IndexedFrameError> {
        if pixel_rect.size() != indices.len() {
            return Err(IndexedFrameError::BoundsMismatch {
                pixel_rect_size: pixel_rect.size(),
                buffer_size: indices.len(),
            });
        }

        Ok(Self {
            pixel_rect,
            indices,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn index_at(&self, pixel: Point) -> Result<u8, IndexedFrameError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(IndexedFrameError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        Ok(self.indices[self.pixel_rect.index_of(pixel)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_valid() {
        let pixel_rect = PixelRect::new(2, 2).unwrap();
        let frame = IndexedFrame::from_data(pixel_rect, vec![1, 2, 3, 4]).unwrap();

        assert_eq!(frame.index_at(Point { x: 1, y: 0 }), Ok(2));
        assert_eq!(frame.index_at(Point { x: 0, y: 1 }), Ok(3));
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let pixel_rect = PixelRect::new(2, 2).unwrap();

        assert_eq!(
            IndexedFrame::from_data(pixel_rect, vec![0; 3]).unwrap_err(),
            IndexedFrameError::BoundsMismatch {
                pixel_rect_size: 4,
                buffer_size: 3
            }
        );
        assert_eq!(
            IndexedFrame::from_data(pixel_rect, vec![0; 8]).unwrap_err(),
            IndexedFrameError::BoundsMismatch {
                pixel_rect_size: 4,
                buffer_size: 8
            }
        );
    }

    #[test]
    fn test_index_at_outside_bounds() {
        let pixel_rect = PixelRect::new(3, 3).unwrap();
        let frame = IndexedFrame::from_data(pixel_rect, vec![0; 9]).unwrap();

        assert_eq!(
            frame.index_at(Point { x: 5, y: 1 }),
            Err(IndexedFrameError::PixelOutsideBounds {
                pixel: Point { x: 5, y: 1 },
                pixel_rect
            })
        );
    }
}
