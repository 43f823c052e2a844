//! Frequency band model
//!
//! A band is described by its center and bandwidth; the edges are derived at
//! construction time. Bands are plain `Copy` values and are rebuilt whenever
//! their defining parameters change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous frequency band. All fields share the same display unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBand {
    pub start: f64,
    pub end: f64,
    pub center: f64,
    pub bw: f64,
}

impl FrequencyBand {
    /// Build a band around `center`.
    ///
    /// No validation: a zero bandwidth collapses the band to a point and a
    /// negative one inverts its edges.
    pub fn new(center: f64, bw: f64) -> Self {
        Self {
            center,
            bw,
            start: center - bw / 2.0,
            end: center + bw / 2.0,
        }
    }

    /// Distance between the edges.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, freq: f64) -> bool {
        self.start <= freq && freq <= self.end
    }
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}..{:.2} (center {:.2}, bw {:.2})",
            self.start, self.end, self.center, self.bw
        )
    }
}

/// Free-function form of [`FrequencyBand::new`].
pub fn make_band(center: f64, bw: f64) -> FrequencyBand {
    FrequencyBand::new(center, bw)
}
