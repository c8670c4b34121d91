use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::mandelbrot::errors::MandelbrotConfigError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1024;
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.93;
pub const DEFAULT_FRAMES: u32 = 50;
pub const DEFAULT_SIDE: u32 = 256;
pub const DEFAULT_ZOOM_POINT: Complex = Complex {
    real: 0.272195,
    imag: 0.00540474,
};

pub(crate) fn default_region() -> ComplexRect {
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
    .expect("default fractal region is valid")
}

/// How frames and pixels are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// One frame after another, one pixel after another.
    Serial,
    /// Frames and rows spread over rayon's thread pool.
    #[default]
    Rayon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: ComplexRect,
    pub max_iterations: u32,
    pub zoom_factor: f64,
    pub zoom_point: Complex,
    pub frames: u32,
    pub width: u32,
    pub height: u32,
    pub frame_delay_ms: u32,
    pub parallelism: Parallelism,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            zoom_point: DEFAULT_ZOOM_POINT,
            frames: DEFAULT_FRAMES,
            width: DEFAULT_SIDE,
            height: DEFAULT_SIDE,
            frame_delay_ms: 0,
            parallelism: Parallelism::default(),
        }
    }
}

impl MandelbrotConfig {
    pub fn validate(&self) -> Result<(), MandelbrotConfigError> {
        self.pixel_rect()?;

        if self.frames == 0 {
            return Err(MandelbrotConfigError::ZeroFrames);
        }

        if !(self.zoom_factor.is_finite() && self.zoom_factor > 0.0) {
            return Err(MandelbrotConfigError::InvalidZoomFactor(self.zoom_factor));
        }

        Ok(())
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, MandelbrotConfigError> {
        PixelRect::new(self.width, self.height).map_err(|_| {
            MandelbrotConfigError::InvalidRasterSize {
                width: self.width,
                height: self.height,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.region.width(), 3.0);
        assert_eq!(config.region.height(), 2.0);
        assert_eq!(config.pixel_rect().unwrap().size(), 256 * 256);
    }

    #[test]
    fn test_rejects_empty_raster() {
        let config = MandelbrotConfig {
            width: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(MandelbrotConfigError::InvalidRasterSize {
                width: 0,
                height: 256
            })
        );
    }

    #[test]
    fn test_rejects_zero_frames() {
        let config = MandelbrotConfig {
            frames: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(config.validate(), Err(MandelbrotConfigError::ZeroFrames));
    }

    #[test]
    fn test_rejects_bad_zoom_factors() {
        for zoom_factor in [0.0, -0.5, f64::INFINITY] {
            let config = MandelbrotConfig {
                zoom_factor,
                ..MandelbrotConfig::default()
            };

            assert_eq!(
                config.validate(),
                Err(MandelbrotConfigError::InvalidZoomFactor(zoom_factor))
            );
        }

        let nan = MandelbrotConfig {
            zoom_factor: f64::NAN,
            ..MandelbrotConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_zoom_out_is_allowed() {
        let config = MandelbrotConfig {
            zoom_factor: 1.1,
            ..MandelbrotConfig::default()
        };

        assert!(config.validate().is_ok());
    }
}
