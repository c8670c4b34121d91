/// Progress checkpoints of an animation render.
///
/// Frames may be rendered concurrently, so frame notifications can arrive in
/// any order and from any thread.
pub trait RenderObserver: Sync {
    fn render_started(&self, _frames: usize) {}

    fn frame_started(&self, _index: usize, _frames: usize) {}

    fn frame_completed(&self, _index: usize, _frames: usize) {}

    fn encode_started(&self, _frames: usize) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl RenderObserver for SilentObserver {}
