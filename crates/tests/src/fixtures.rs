//! Shared fixtures for the integration tests

use rfplan_core::{FrequencyBand, InputSpec, MixerConfig, PlanState};

/// 950..1050 input band of the reference plan
pub fn reference_input() -> FrequencyBand {
    FrequencyBand::new(1000.0, 100.0)
}

/// Reference plan: fixed 800 LO then a bypassed second mixer
pub fn reference_plan() -> PlanState {
    PlanState::default()
}

/// Plan with the given stages applied to the reference input
pub fn plan_with(stages: Vec<MixerConfig>) -> PlanState {
    PlanState::new(InputSpec::new(1000.0, 100.0), stages)
}

/// Approximate float comparison for derived values
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
