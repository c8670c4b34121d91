use crate::core::data::frame_field::Histogram;
use crate::core::data::palette_curve::PaletteCurve;

/// Turns a frame's histogram into its cumulative hue curve.
///
/// Entry `i` is the fraction of escaped pixels whose bucket is at most `i`,
/// for `i` below `max_iterations`; the two trailing entries repeat the last
/// running sum. A histogram with no escaped pixels yields an all-zero curve
/// rather than dividing by zero.
#[must_use]
pub fn normalize_palette(histogram: &Histogram, max_iterations: u32) -> PaletteCurve {
    let max_iterations = max_iterations as usize;
    let mut entries = vec![0.0; max_iterations + 2];
    let total = histogram.total();

    if total == 0 {
        return PaletteCurve::from_entries(entries);
    }

    let total = total as f64;
    let mut h = 0.0;

    for (i, entry) in entries.iter_mut().take(max_iterations).enumerate() {
        h += histogram.count(i) as f64 / total;
        *entry = h;
    }

    entries[max_iterations] = h;
    entries[max_iterations + 1] = h;

    PaletteCurve::from_entries(entries)
}
