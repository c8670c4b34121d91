use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageError, RgbaImage};

use crate::adapters::pixel_format::copy_indexed_to_rgba;
use crate::controllers::ports::animation_presenter::AnimationPresenterPort;
use crate::core::data::animation::Animation;

#[derive(Debug)]
pub enum GifPresenterError {
    Io(io::Error),
    Encode(ImageError),
}

impl fmt::Display for GifPresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot write gif: {}", err),
            Self::Encode(err) => write!(f, "cannot encode gif: {}", err),
        }
    }
}

impl Error for GifPresenterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<io::Error> for GifPresenterError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ImageError> for GifPresenterError {
    fn from(err: ImageError) -> Self {
        Self::Encode(err)
    }
}

/// Writes animations as looping GIFs.
///
/// Every frame is expanded through the shared palette before being handed to
/// the encoder, which gives each frame its own local colour table. A frame
/// never has more than 256 distinct colours, so that table holds them exactly
/// instead of re-quantizing. No global colour table is written.
#[derive(Debug, Default)]
pub struct GifFilePresenter {}

impl GifFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode<W: Write>(&self, animation: &Animation, writer: W) -> Result<(), GifPresenterError> {
        let mut encoder = GifEncoder::new(writer);
        encoder.set_repeat(Repeat::Infinite)?;

        for (frame, delay) in animation.frames().iter().zip(animation.delays()) {
            let pixel_rect = frame.pixel_rect();
            let mut rgba = vec![0; frame.indices().len() * 4];
            copy_indexed_to_rgba(frame.indices(), animation.palette(), &mut rgba);

            let buffer = RgbaImage::from_raw(pixel_rect.width(), pixel_rect.height(), rgba)
                .expect("rgba buffer sized from frame dimensions");
            let delay = Delay::from_numer_denom_ms(delay.as_millis(), 1);

            encoder.encode_frame(Frame::from_parts(buffer, 0, 0, delay))?;
        }

        Ok(())
    }
}

impl AnimationPresenterPort for GifFilePresenter {
    type Error = GifPresenterError;

    fn present(&self, animation: &Animation, filepath: impl AsRef<Path>) -> Result<(), Self::Error> {
        let mut writer = BufWriter::new(File::create(filepath)?);

        self.encode(animation, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
