/// Cumulative distribution of escape buckets, used to space hues by how many
/// pixels reached each iteration count.
///
/// Holds `max_iterations + 2` non-decreasing entries; the last two are equal
/// and cover values at or above the iteration cap.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteCurve {
    entries: Vec<f64>,
}

impl PaletteCurve {
    pub(crate) fn from_entries(entries: Vec<f64>) -> Self {
        debug_assert!(entries.len() >= 2);
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear interpolation between the entries either side of `mu`. Values
    /// outside the curve are clamped to its ends.
    #[must_use]
    pub fn interpolate(&self, mu: f64) -> f64 {
        let last = (self.entries.len() - 1) as f64;
        let mu = mu.clamp(0.0, last);

        let lower = self.entries[mu.floor() as usize];
        let upper = self.entries[mu.ceil() as usize];
        let t = mu.fract();

        lower * (1.0 - t) + upper * t
    }
}
