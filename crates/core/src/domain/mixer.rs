//! Mixing engine and mixer stage configuration
//!
//! This module models a single frequency mixer: given an input band and a
//! local oscillator (LO) it produces the sum, difference and image bands.
//! Cascading several stages lives in [`chain`].

pub mod chain;

use crate::domain::band::FrequencyBand;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::trace;

/// Errors raised while parsing a mixer mode or stage spec
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseStageError {
    #[error("Unknown mixer mode: {0}")]
    UnknownMode(String),

    #[error("Invalid frequency '{value}' in stage spec '{spec}'")]
    InvalidFrequency { spec: String, value: String },

    #[error("Wrong number of fields in stage spec '{0}'")]
    WrongArity(String),
}

/// How a mixer stage treats its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MixerMode {
    /// Pass the input through untouched
    #[default]
    Bypass,
    /// LO set to a single frequency
    Fixed,
    /// LO tuned inside `lo_start..=lo_end`
    Variable,
}

impl MixerMode {
    pub const ALL: [MixerMode; 3] = [MixerMode::Bypass, MixerMode::Fixed, MixerMode::Variable];

    pub fn is_bypass(self) -> bool {
        self == MixerMode::Bypass
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MixerMode::Bypass => "BYPASS",
            MixerMode::Fixed => "FIXED",
            MixerMode::Variable => "VARIABLE",
        }
    }
}

impl fmt::Display for MixerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MixerMode {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bypass" | "thru" => Ok(MixerMode::Bypass),
            "fixed" | "fix" => Ok(MixerMode::Fixed),
            "variable" | "var" => Ok(MixerMode::Variable),
            _ => Err(ParseStageError::UnknownMode(s.to_string())),
        }
    }
}

/// Products of one mixing operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixingResult {
    pub sum: Option<FrequencyBand>,
    pub diff: FrequencyBand,
    pub image: Option<FrequencyBand>,
}

impl MixingResult {
    /// Products in `sum, diff, image` order
    pub fn bands(&self) -> [Option<FrequencyBand>; 3] {
        [self.sum, Some(self.diff), self.image]
    }
}

/// Mix `input` with an LO at `lo_freq`.
///
/// Total over all real inputs. Bypass returns the input as the difference
/// product and no other products.
///
/// The difference edges are folded with `abs` and then reordered, so an LO
/// inside the band still yields `start <= end`; the bandwidth is carried over
/// from the input even though folding can shrink the real occupied width.
/// The image is the primary mirror `2 * lo - center`, folded back across
/// zero when negative. Both are planning approximations.
pub fn mix(input: &FrequencyBand, lo_freq: f64, mode: MixerMode) -> MixingResult {
    if mode.is_bypass() {
        return MixingResult {
            sum: None,
            diff: *input,
            image: None,
        };
    }

    let edge1 = (input.start - lo_freq).abs();
    let edge2 = (input.end - lo_freq).abs();
    let diff = FrequencyBand {
        start: edge1.min(edge2),
        end: edge1.max(edge2),
        center: (input.center - lo_freq).abs(),
        bw: input.bw,
    };

    let sum = FrequencyBand {
        start: input.start + lo_freq,
        end: input.end + lo_freq,
        center: input.center + lo_freq,
        bw: input.bw,
    };

    let image_center = 2.0 * lo_freq - input.center;
    let image = FrequencyBand::new(image_center.abs(), input.bw);

    trace!(lo_freq, %mode, if_center = diff.center, "Mixed band");

    MixingResult {
        sum: Some(sum),
        diff,
        image: Some(image),
    }
}

/// Configuration of one mixer stage
///
/// `lo_start <= lo_freq <= lo_end` is an editing constraint only; the engine
/// reads `lo_freq` as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixerConfig {
    pub mode: MixerMode,
    pub lo_freq: f64,
    pub lo_start: f64,
    pub lo_end: f64,
}

impl MixerConfig {
    pub fn new(mode: MixerMode, lo_freq: f64, lo_start: f64, lo_end: f64) -> Self {
        Self {
            mode,
            lo_freq,
            lo_start,
            lo_end,
        }
    }

    pub fn bypass() -> Self {
        Self::new(MixerMode::Bypass, 0.0, 0.0, 0.0)
    }

    pub fn fixed(lo_freq: f64) -> Self {
        Self::new(MixerMode::Fixed, lo_freq, lo_freq, lo_freq)
    }

    pub fn variable(lo_freq: f64, lo_start: f64, lo_end: f64) -> Self {
        Self::new(MixerMode::Variable, lo_freq, lo_start, lo_end)
    }

    /// Run this stage on `input`
    pub fn apply(&self, input: &FrequencyBand) -> MixingResult {
        mix(input, self.lo_freq, self.mode)
    }

    /// LO frequency to mark on a chart, if the stage is active
    pub fn lo_marker(&self) -> Option<f64> {
        (!self.mode.is_bypass()).then_some(self.lo_freq)
    }

    /// Whether the LO sits inside its editable range
    pub fn lo_in_range(&self) -> bool {
        self.lo_start <= self.lo_freq && self.lo_freq <= self.lo_end
    }
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self::bypass()
    }
}

fn parse_freq(spec: &str, value: &str) -> Result<f64, ParseStageError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseStageError::InvalidFrequency {
            spec: spec.to_string(),
            value: value.to_string(),
        })
}

/// Parses `bypass`, `fixed:<lo>`, `variable:<lo>` or
/// `variable:<lo>:<start>:<end>`.
impl FromStr for MixerConfig {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        let mode: MixerMode = fields[0].parse()?;

        match (mode, &fields[1..]) {
            (MixerMode::Bypass, []) => Ok(Self::bypass()),
            (MixerMode::Fixed, [lo]) => Ok(Self::fixed(parse_freq(s, lo)?)),
            (MixerMode::Variable, [lo]) => {
                let lo = parse_freq(s, lo)?;
                Ok(Self::variable(lo, lo, lo))
            }
            (MixerMode::Variable, [lo, start, end]) => Ok(Self::variable(
                parse_freq(s, lo)?,
                parse_freq(s, start)?,
                parse_freq(s, end)?,
            )),
            _ => Err(ParseStageError::WrongArity(s.to_string())),
        }
    }
}
