use std::time::Instant;

use log::{debug, info};

use crate::core::actions::render_animation::ports::render_observer::RenderObserver;

/// Reports render progress through the `log` facade, prefixing every
/// message with the time elapsed since the observer was created.
#[derive(Debug)]
pub struct LogObserver {
    started: Instant,
}

impl LogObserver {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    fn elapsed(&self) -> String {
        format!("{:.3?}", self.started.elapsed())
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderObserver for LogObserver {
    fn render_started(&self, frames: usize) {
        info!("{} rendering {} frames", self.elapsed(), frames);
    }

    fn frame_started(&self, index: usize, frames: usize) {
        debug!("{} frame {}/{} started", self.elapsed(), index + 1, frames);
    }

    fn frame_completed(&self, index: usize, frames: usize) {
        info!("{} frame {}/{} done", self.elapsed(), index + 1, frames);
    }

    fn encode_started(&self, frames: usize) {
        info!("{} encoding {} frames to gif", self.elapsed(), frames);
    }
}
