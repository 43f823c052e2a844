//! Cascaded mixer stages
//!
//! A chain is an ordered list of [`MixerConfig`]s. The difference product of
//! each stage feeds the next one, so the whole chain is a left fold of
//! [`mix`](super::mix) over the stage list.

use super::{MixerConfig, MixingResult};
use crate::domain::band::FrequencyBand;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// What one stage saw and produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageOutput {
    /// Zero-based position in the chain
    pub index: usize,
    pub config: MixerConfig,
    pub input: FrequencyBand,
    pub result: MixingResult,
}

/// Result of running a whole chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainOutput {
    pub input: FrequencyBand,
    pub stages: Vec<StageOutput>,
}

impl ChainOutput {
    /// Band leaving the last stage, or the raw input for an empty chain
    pub fn output(&self) -> FrequencyBand {
        self.stages
            .last()
            .map(|stage| stage.result.diff)
            .unwrap_or(self.input)
    }

    /// The input followed by every stage's `sum, diff, image`
    pub fn all_bands(&self) -> Vec<Option<FrequencyBand>> {
        std::iter::once(Some(self.input))
            .chain(self.stages.iter().flat_map(|stage| stage.result.bands()))
            .collect()
    }

    pub fn stage(&self, index: usize) -> Option<&StageOutput> {
        self.stages.get(index)
    }
}

/// Run `input` through `stages` in order.
pub fn run_chain(input: FrequencyBand, stages: &[MixerConfig]) -> ChainOutput {
    let (_, outputs) = stages.iter().enumerate().fold(
        (input, Vec::with_capacity(stages.len())),
        |(carried, mut outputs), (index, config)| {
            let result = config.apply(&carried);
            trace!(
                stage = index + 1,
                mode = %config.mode,
                out_center = result.diff.center,
                "Stage processed"
            );
            outputs.push(StageOutput {
                index,
                config: *config,
                input: carried,
                result,
            });
            (result.diff, outputs)
        },
    );

    ChainOutput {
        input,
        stages: outputs,
    }
}
