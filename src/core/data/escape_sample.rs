/// Outcome of iterating a single point.
///
/// `value` is `max_iterations` for points that never escaped, otherwise the
/// smoothed iteration count at which the orbit left the escape radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeSample {
    pub value: f64,
    pub escaped: bool,
}

impl EscapeSample {
    #[must_use]
    pub fn inside(max_iterations: u32) -> Self {
        Self {
            value: f64::from(max_iterations),
            escaped: false,
        }
    }

    /// Histogram bucket this sample counts towards, clamped into
    /// `[0, max_iterations]`. `None` for points that never escaped.
    #[must_use]
    pub fn bucket(&self, max_iterations: u32) -> Option<usize> {
        if !self.escaped {
            return None;
        }

        Some(self.value.floor().clamp(0.0, f64::from(max_iterations)) as usize)
    }
}
