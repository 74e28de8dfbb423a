// Progress domain model - how far the reference instant is through its window
use super::time_window::TimeWindow;
use std::fmt;

pub const MIN_PERCENT: f64 = 0.0;
pub const MAX_PERCENT: f64 = 100.0;

/// A percentage in `[0, 100]` with at most one decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ProgressValue(f64);

impl ProgressValue {
    /// Clamps into `[0, 100]` (NaN becomes 0) and truncates to one decimal place.
    pub fn new(percentage: f64) -> Self {
        let clamped = if percentage.is_nan() {
            MIN_PERCENT
        } else {
            percentage.clamp(MIN_PERCENT, MAX_PERCENT)
        };
        let truncated = (clamped * 10.0).floor() / 10.0;
        // normalises -0.0
        Self(truncated + 0.0)
    }

    /// Whole-percent position of `window.reference` inside the window.
    ///
    /// A window whose end does not lie after its start has no meaningful
    /// fraction: it reads as complete once the reference has reached the
    /// start, and as not started before that.
    pub fn from_window(window: &TimeWindow) -> Self {
        let span = window.end.signed_duration_since(window.start).num_milliseconds();
        if span <= 0 {
            return if window.reference >= window.start {
                Self::new(MAX_PERCENT)
            } else {
                Self::new(MIN_PERCENT)
            };
        }

        let elapsed = window
            .reference
            .signed_duration_since(window.start)
            .num_milliseconds();
        let fraction = elapsed as f64 / span as f64;
        // half-up rounding to whole percent
        Self::new((fraction * 100.0 + 0.5).floor())
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ProgressValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}
