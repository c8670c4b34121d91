use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;

/// Builds the viewport of every frame: the first is `initial`, each following
/// one zooms the previous toward `target` by `zoom_factor`.
///
/// Each viewport depends on the one before, so the chain is built serially.
#[must_use]
pub fn generate_zoom_sequence(
    initial: ComplexRect,
    target: Complex,
    zoom_factor: f64,
    frames: usize,
) -> Vec<ComplexRect> {
    std::iter::successors(Some(initial), |previous| {
        Some(previous.zoom_toward(target, zoom_factor))
    })
    .take(frames)
    .collect()
}
