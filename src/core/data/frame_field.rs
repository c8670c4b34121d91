use crate::core::data::escape_sample::EscapeSample;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Histogram of escaped pixels, one bucket per integer iteration count from
/// `0` to `max_iterations` inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    buckets: Vec<u64>,
}

impl Histogram {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            buckets: vec![0; max_iterations as usize + 1],
        }
    }

    pub fn record(&mut self, sample: EscapeSample) {
        let max_iterations = (self.buckets.len() - 1) as u32;

        if let Some(bucket) = sample.bucket(max_iterations) {
            self.buckets[bucket] += 1;
        }
    }

    /// Adds the counts of `other` into `self`.
    ///
    /// # Panics
    ///
    /// Panics if the two histograms were built for different iteration caps.
    pub fn merge(&mut self, other: &Self) {
        assert_eq!(
            self.buckets.len(),
            other.buckets.len(),
            "cannot merge histograms with different bucket counts"
        );

        for (bucket, count) in self.buckets.iter_mut().zip(&other.buckets) {
            *bucket += count;
        }
    }

    #[must_use]
    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    #[must_use]
    pub fn count(&self, bucket: usize) -> u64 {
        self.buckets.get(bucket).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }
}

/// Escape values of every pixel of one frame, row-major, together with the
/// histogram of the escaped ones.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameField {
    pixel_rect: PixelRect,
    max_iterations: u32,
    values: Vec<f64>,
    histogram: Histogram,
}

impl FrameField {
    /// # Panics
    ///
    /// Panics if `values` does not hold exactly one entry per pixel.
    #[must_use]
    pub fn new(
        pixel_rect: PixelRect,
        max_iterations: u32,
        values: Vec<f64>,
        histogram: Histogram,
    ) -> Self {
        assert_eq!(
            values.len(),
            pixel_rect.size(),
            "frame field must hold one value per pixel"
        );

        Self {
            pixel_rect,
            max_iterations,
            values,
            histogram,
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn value_at(&self, point: Point) -> f64 {
        self.values[self.pixel_rect.index_of(point)]
    }

    #[must_use]
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }
}
