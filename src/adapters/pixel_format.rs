//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::indexed_palette::IndexedPalette;

/// Expands palette indices into opaque RGBA pixels.
///
/// # Panics
/// Panics if `dst` is not exactly four bytes per index.
pub fn copy_indexed_to_rgba(indices: &[u8], palette: &IndexedPalette, dst: &mut [u8]) {
    assert_eq!(
        dst.len(),
        indices.len() * 4,
        "dst length {} does not match expected {}",
        dst.len(),
        indices.len() * 4
    );

    for (&index, dst_pixel) in indices.iter().zip(dst.chunks_exact_mut(4)) {
        let colour = palette.colour(index);
        dst_pixel[0] = colour.r;
        dst_pixel[1] = colour.g;
        dst_pixel[2] = colour.b;
        dst_pixel[3] = 255;
    }
}
