use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// A viewport on the complex plane.
///
/// ```text
///      x0              x1
///  y0  +---------------+
///      |               |
///  y1  +---------------+
/// ```
///
/// The geometric transforms consume the rect and return a new one, so a
/// frame's viewport is always derived from a copy of the previous frame's.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        // Written as a negation so NaN sizes are rejected too.
        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.top_left.real + self.bottom_right.real) / 2.0,
            imag: (self.top_left.imag + self.bottom_right.imag) / 2.0,
        }
    }

    #[must_use]
    pub fn translate(self, offset: Complex) -> Self {
        Self {
            top_left: self.top_left + offset,
            bottom_right: self.bottom_right + offset,
        }
    }

    /// Scales all four bounds about the origin.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            top_left: Complex {
                real: self.top_left.real * factor,
                imag: self.top_left.imag * factor,
            },
            bottom_right: Complex {
                real: self.bottom_right.real * factor,
                imag: self.bottom_right.imag * factor,
            },
        }
    }

    /// Recentres the rect on the origin, scales it by `factor` and moves it
    /// so that it is centred on `target`.
    #[must_use]
    pub fn zoom_toward(self, target: Complex, factor: f64) -> Self {
        let center = self.center();

        self.translate(-center).scale(factor).translate(target)
    }
}
