//! Chart axis helpers: padded domains and "nice" tick values
//!
//! Both functions are total. Degenerate inputs fall back to fixed results
//! instead of failing: an empty band list yields [`FALLBACK_RANGE`] and an
//! empty or inverted axis yields a single tick.

use crate::domain::band::FrequencyBand;
use serde::{Deserialize, Serialize};

/// Default upper bound on the tick count
pub const DEFAULT_MAX_TICKS: usize = 10;

/// Fraction of the covered span added on each side
pub const PADDING_RATIO: f64 = 0.1;

/// Range used when there is nothing to show
pub const FALLBACK_RANGE: AxisRange = AxisRange {
    min: 0.0,
    max: 1000.0,
};

/// Visible span of a frequency axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` along the axis, 0.0 at `min` and 1.0 at `max`.
    ///
    /// An empty span is treated as 1 so collapsed axes still map somewhere.
    pub fn position(&self, value: f64) -> f64 {
        let span = self.span();
        let span = if span == 0.0 || span.is_nan() { 1.0 } else { span };
        (value - self.min) / span
    }

    pub fn ticks(&self, max_ticks: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, max_ticks)
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        FALLBACK_RANGE
    }
}

/// Padded range covering every present band.
///
/// `None` entries are skipped. The lower bound never goes below zero.
pub fn compute_domain(bands: &[Option<FrequencyBand>]) -> AxisRange {
    let covered = bands.iter().flatten().fold(None, |acc: Option<(f64, f64)>, band| {
        Some(match acc {
            Some((lo, hi)) => (lo.min(band.start), hi.max(band.end)),
            None => (band.start, band.end),
        })
    });

    let Some((raw_min, raw_max)) = covered else {
        return FALLBACK_RANGE;
    };

    let padding = (raw_max - raw_min) * PADDING_RATIO;
    AxisRange {
        min: (raw_min - padding).max(0.0),
        max: raw_max + padding,
    }
}

/// Ascending tick values between `min` and `max` on a 1/2/5 step.
///
/// The count only approximately honours `max_ticks`, and a `max_ticks` below
/// 2 is treated as 2 so the range is always split at least once. Values are
/// rounded to two decimals.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let range = max - min;
    if range <= 0.0 {
        return vec![min];
    }
    if !range.is_finite() {
        return Vec::new();
    }

    let rough_step = range / (max_ticks.max(2) - 1) as f64;
    let magnitude = 10f64.powf(rough_step.log10().floor());
    let fraction = rough_step / magnitude;

    let nice_fraction = if fraction < 1.5 {
        1.0
    } else if fraction < 3.0 {
        2.0
    } else if fraction < 7.0 {
        5.0
    } else {
        10.0
    };
    let step = nice_fraction * magnitude;

    // Index-based so the loop ends even when `t + step == t`
    let first = (min / step).ceil() * step;
    (0u64..)
        .map(|i| first + i as f64 * step)
        .take_while(|&t| t <= max)
        .map(round_tick)
        .collect()
}

fn round_tick(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // avoid "-0" labels
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
