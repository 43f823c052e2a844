//! Domain entities and planning rules

pub mod axis;
pub mod band;
pub mod config;
pub mod labels;
pub mod mixer;
pub mod spectrum;
pub mod state;

// Re-export specific items to avoid ambiguous glob imports
pub use axis::{compute_domain, nice_ticks, AxisRange, DEFAULT_MAX_TICKS};
pub use band::{make_band, FrequencyBand};
pub use config::{AppConfig, ConfigError, ConfigManager, PlannerConfig};
pub use labels::{Label, Language};
pub use mixer::chain::{run_chain, ChainOutput, StageOutput};
pub use mixer::{mix, MixerConfig, MixerMode, MixingResult, ParseStageError};
pub use spectrum::{BandRole, ChartBand, LoMarker, SpectrumRow, SpectrumView};
pub use state::{reduce, Action, InputSpec, PlanError, PlanState};
