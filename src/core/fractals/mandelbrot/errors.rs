use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MandelbrotConfigError {
    InvalidRasterSize { width: u32, height: u32 },
    ZeroFrames,
    InvalidZoomFactor(f64),
}

impl fmt::Display for MandelbrotConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRasterSize { width, height } => {
                write!(f, "raster size must be positive: {}x{}", width, height)
            }
            Self::ZeroFrames => write!(f, "animation needs at least one frame"),
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be finite and positive, got {}", factor)
            }
        }
    }
}

impl Error for MandelbrotConfigError {}
