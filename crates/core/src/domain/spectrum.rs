//! Derived spectrum view
//!
//! Turns a plan into chart rows that share one frequency axis. Row 0 shows
//! the input together with the first stage's image; row `k` shows what
//! mixer `k` produces. Each row carries the LO marker of the stage that will
//! consume its bands.

use crate::domain::axis::{compute_domain, AxisRange};
use crate::domain::band::FrequencyBand;
use crate::domain::labels::Label;
use crate::domain::mixer::chain::ChainOutput;
use crate::domain::state::PlanState;
use serde::{Deserialize, Serialize};

/// What a band on the chart represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandRole {
    Input,
    Image,
    If,
    Sum,
    Output,
    Bypass,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBand {
    pub role: BandRole,
    #[serde(flatten)]
    pub band: FrequencyBand,
}

/// Vertical LO line; `stage` is one-based
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoMarker {
    pub stage: usize,
    pub freq: f64,
}

impl LoMarker {
    pub fn label(&self) -> Label {
        Label::LoMarker(self.stage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumRow {
    /// 0 for the input row, otherwise the one-based mixer number
    pub stage: usize,
    pub bands: Vec<ChartBand>,
    pub markers: Vec<LoMarker>,
}

impl SpectrumRow {
    pub fn title(&self) -> Label {
        match self.stage {
            0 => Label::InputStage,
            n => Label::MixerOutputStage(n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumView {
    pub range: AxisRange,
    pub ticks: Vec<f64>,
    pub rows: Vec<SpectrumRow>,
}

impl SpectrumView {
    pub fn build(state: &PlanState, max_ticks: usize) -> Self {
        Self::from_chain(&state.chain(), max_ticks)
    }

    pub fn from_chain(chain: &ChainOutput, max_ticks: usize) -> Self {
        let range = compute_domain(&chain.all_bands());
        let ticks = range.ticks(max_ticks);

        let marker_for = |index: usize| -> Vec<LoMarker> {
            chain
                .stage(index)
                .and_then(|stage| stage.config.lo_marker())
                .map(|freq| LoMarker {
                    stage: index + 1,
                    freq,
                })
                .into_iter()
                .collect()
        };

        let mut input_bands = vec![ChartBand {
            role: BandRole::Input,
            band: chain.input,
        }];
        if let Some(image) = chain.stage(0).and_then(|stage| stage.result.image) {
            input_bands.push(ChartBand {
                role: BandRole::Image,
                band: image,
            });
        }

        let mut rows = Vec::with_capacity(chain.stages.len() + 1);
        rows.push(SpectrumRow {
            stage: 0,
            bands: input_bands,
            markers: marker_for(0),
        });

        let last = chain.stages.len().saturating_sub(1);
        for stage in &chain.stages {
            let result = &stage.result;
            let bands = if stage.config.mode.is_bypass() {
                vec![ChartBand {
                    role: BandRole::Bypass,
                    band: result.diff,
                }]
            } else {
                let diff_role = if stage.index == last {
                    BandRole::Output
                } else {
                    BandRole::If
                };
                std::iter::once(ChartBand {
                    role: diff_role,
                    band: result.diff,
                })
                .chain(result.sum.map(|band| ChartBand {
                    role: BandRole::Sum,
                    band,
                }))
                .collect()
            };

            rows.push(SpectrumRow {
                stage: stage.index + 1,
                bands,
                markers: marker_for(stage.index + 1),
            });
        }

        Self { range, ticks, rows }
    }
}
