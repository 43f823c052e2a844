//! Editable plan state and its reducer
//!
//! The plan is an immutable value: every edit goes through [`PlanState::apply`]
//! (or the total [`reduce`]) and produces a new state. Bands derived from the
//! plan are recomputed on demand and never stored.

use crate::domain::band::FrequencyBand;
use crate::domain::mixer::chain::{run_chain, ChainOutput};
use crate::domain::mixer::{MixerConfig, MixerMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub type Result<T> = std::result::Result<T, PlanError>;

/// Step used when sweeping an LO across its range
pub const DEFAULT_SWEEP_STEP: f64 = 10.0;

/// Largest number of points a single LO sweep may produce
pub const MAX_SWEEP_POINTS: u64 = 1_000_000;

/// Errors raised by plan edits
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("Stage index {index} out of range (chain has {len} stages)")]
    StageOutOfRange { index: usize, len: usize },

    #[error("Sweep step {step} over span {span} exceeds {} points", MAX_SWEEP_POINTS)]
    SweepTooFine { span: f64, step: f64 },
}

/// User-facing description of the input signal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    pub center: f64,
    pub bw: f64,
}

impl InputSpec {
    pub fn new(center: f64, bw: f64) -> Self {
        Self { center, bw }
    }

    pub fn band(&self) -> FrequencyBand {
        FrequencyBand::new(self.center, self.bw)
    }
}

impl Default for InputSpec {
    fn default() -> Self {
        Self::new(1000.0, 100.0)
    }
}

/// Edits accepted by the reducer. Stage indexes are zero-based.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetInputCenter(f64),
    SetInputBandwidth(f64),
    SetStageMode { stage: usize, mode: MixerMode },
    SetLoFreq { stage: usize, freq: f64 },
    SetLoStart { stage: usize, freq: f64 },
    SetLoEnd { stage: usize, freq: f64 },
    SetStages(Vec<MixerConfig>),
    AddStage(MixerConfig),
    RemoveStage(usize),
    Reset,
}

/// Input signal plus the ordered mixer stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanState {
    pub input: InputSpec,
    pub stages: Vec<MixerConfig>,
}

impl Default for PlanState {
    /// Two-stage down-converter: 1000 MHz input, fixed 800 MHz LO, then bypass.
    fn default() -> Self {
        Self {
            input: InputSpec::default(),
            stages: vec![
                MixerConfig::new(MixerMode::Fixed, 800.0, 100.0, 3000.0),
                MixerConfig::new(MixerMode::Bypass, 200.0, 10.0, 1000.0),
            ],
        }
    }
}

impl PlanState {
    pub fn new(input: InputSpec, stages: Vec<MixerConfig>) -> Self {
        Self { input, stages }
    }

    pub fn stage(&self, index: usize) -> Result<&MixerConfig> {
        self.stages.get(index).ok_or(PlanError::StageOutOfRange {
            index,
            len: self.stages.len(),
        })
    }

    fn stage_mut(&mut self, index: usize) -> Result<&mut MixerConfig> {
        let len = self.stages.len();
        self.stages
            .get_mut(index)
            .ok_or(PlanError::StageOutOfRange { index, len })
    }

    /// Return the state that results from `action`, leaving `self` untouched.
    pub fn apply(&self, action: Action) -> Result<PlanState> {
        debug!(?action, "Applying plan action");

        let mut next = self.clone();
        match action {
            Action::SetInputCenter(center) => next.input.center = center,
            Action::SetInputBandwidth(bw) => next.input.bw = bw,
            Action::SetStageMode { stage, mode } => next.stage_mut(stage)?.mode = mode,
            Action::SetLoFreq { stage, freq } => next.stage_mut(stage)?.lo_freq = freq,
            Action::SetLoStart { stage, freq } => next.stage_mut(stage)?.lo_start = freq,
            Action::SetLoEnd { stage, freq } => next.stage_mut(stage)?.lo_end = freq,
            Action::SetStages(stages) => next.stages = stages,
            Action::AddStage(config) => next.stages.push(config),
            Action::RemoveStage(stage) => {
                next.stage(stage)?;
                next.stages.remove(stage);
            }
            Action::Reset => next = PlanState::default(),
        }

        Ok(next)
    }

    /// Run the input through every stage
    pub fn chain(&self) -> ChainOutput {
        run_chain(self.input.band(), &self.stages)
    }

    /// Active stages whose LO sits outside its editable range
    pub fn out_of_range_stages(&self) -> Vec<usize> {
        self.stages
            .iter()
            .enumerate()
            .filter(|(_, stage)| !stage.mode.is_bypass() && !stage.lo_in_range())
            .map(|(index, _)| index)
            .collect()
    }

    /// Step the LO of one stage from `lo_start` to `lo_end` inclusive.
    ///
    /// Yields nothing for a non-positive step or a reversed range. A step so
    /// small that the sweep would exceed [`MAX_SWEEP_POINTS`] is an error.
    pub fn sweep_lo(
        &self,
        stage: usize,
        step: f64,
    ) -> Result<impl Iterator<Item = (f64, ChainOutput)> + '_> {
        let config = *self.stage(stage)?;
        let (start, end) = (config.lo_start, config.lo_end);
        let span = end - start;

        let count = if step > 0.0 && span >= 0.0 && span.is_finite() {
            // small slack so float division does not drop the last point
            let intervals = (span / step + 1e-9).floor();
            if !intervals.is_finite() || intervals >= MAX_SWEEP_POINTS as f64 {
                return Err(PlanError::SweepTooFine { span, step });
            }
            intervals as u64 + 1
        } else {
            0
        };
        debug!(stage, start, end, step, count, "Sweeping LO");

        Ok((0..count).map(move |i| {
            let lo = start + i as f64 * step;
            let mut stages = self.stages.clone();
            stages[stage].lo_freq = lo;
            (lo, run_chain(self.input.band(), &stages))
        }))
    }
}

/// Total reducer: invalid actions leave the state unchanged.
pub fn reduce(state: &PlanState, action: Action) -> PlanState {
    state.apply(action).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring plan action");
        state.clone()
    })
}
