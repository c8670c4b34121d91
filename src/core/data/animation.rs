use crate::core::data::indexed_frame::IndexedFrame;
use crate::core::data::indexed_palette::IndexedPalette;
use std::time::Duration;

/// How long a frame stays on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FrameDelay(Duration);

impl FrameDelay {
    #[must_use]
    pub fn from_millis(millis: u32) -> Self {
        Self(Duration::from_millis(u64::from(millis)))
    }

    #[must_use]
    pub fn as_millis(&self) -> u32 {
        u32::try_from(self.0.as_millis()).unwrap_or(u32::MAX)
    }
}

/// Rendered frames sharing one palette, with a delay per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    palette: IndexedPalette,
    frames: Vec<IndexedFrame>,
    delays: Vec<FrameDelay>,
}

impl Animation {
    /// # Panics
    ///
    /// Panics unless there is exactly one delay per frame.
    #[must_use]
    pub fn new(palette: IndexedPalette, frames: Vec<IndexedFrame>, delays: Vec<FrameDelay>) -> Self {
        assert_eq!(
            frames.len(),
            delays.len(),
            "animation needs one delay per frame"
        );

        Self {
            palette,
            frames,
            delays,
        }
    }

    #[must_use]
    pub fn palette(&self) -> &IndexedPalette {
        &self.palette
    }

    #[must_use]
    pub fn frames(&self) -> &[IndexedFrame] {
        &self.frames
    }

    #[must_use]
    pub fn delays(&self) -> &[FrameDelay] {
        &self.delays
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
