//! Integration tests for the planning pipeline
//!
//! These tests drive the complete flow a front end uses: edit the plan,
//! run the chain, derive the axis and ticks, and build the spectrum view.

use rfplan_core::{
    compute_domain, nice_ticks, reduce, Action, AxisRange, BandRole, MixerConfig, MixerMode,
    PlannerConfig, SpectrumView,
};
use crate::fixtures::{approx_eq, plan_with, reference_input, reference_plan};

// ============================================================================
// END-TO-END SCENARIOS
// ============================================================================

#[test]
fn test_reference_down_conversion() {
    let chain = reference_plan().chain();

    let mixer1 = &chain.stages[0].result;
    assert_eq!(mixer1.diff.center, 200.0);
    assert_eq!((mixer1.diff.start, mixer1.diff.end), (150.0, 250.0));

    let sum = mixer1.sum.unwrap();
    assert_eq!((sum.start, sum.end, sum.center), (1750.0, 1850.0, 1800.0));

    // Mixer 2 is bypassed: output is mixer 1's IF unchanged
    let output = chain.output();
    assert_eq!(output, mixer1.diff);
    assert_eq!(
        (output.start, output.end, output.center, output.bw),
        (150.0, 250.0, 200.0, 100.0)
    );
}

#[test]
fn test_reference_axis() {
    let chain = reference_plan().chain();
    let range = compute_domain(&chain.all_bands());

    assert_eq!(range, AxisRange::new(0.0, 2020.0));
    assert_eq!(
        nice_ticks(range.min, range.max, 8),
        vec![0.0, 200.0, 400.0, 600.0, 800.0, 1000.0, 1200.0, 1400.0, 1600.0, 1800.0, 2000.0]
    );
}

#[test]
fn test_high_side_lo_cascade() {
    // Chains carry the difference product, never the sum
    let plan = plan_with(vec![MixerConfig::fixed(2330.0), MixerConfig::fixed(2000.0)]);
    let chain = plan.chain();

    // |1000 - 2330| = 1330
    assert_eq!(chain.stages[0].result.diff.center, 1330.0);
    assert_eq!(chain.stages[1].input.center, 1330.0);
    assert_eq!(chain.output().center, 670.0);
}

#[test]
fn test_three_stage_superhet() {
    let plan = plan_with(vec![
        MixerConfig::fixed(1800.0),
        MixerConfig::variable(870.0, 700.0, 900.0),
        MixerConfig::fixed(60.0),
    ]);
    let view = SpectrumView::build(&plan, 8);

    assert_eq!(view.rows.len(), 4);
    // 1000 -> 800 -> 70 -> 10
    assert_eq!(view.rows[1].bands[0].band.center, 800.0);
    assert_eq!(view.rows[2].bands[0].band.center, 70.0);
    assert_eq!(view.rows[3].bands[0].band.center, 10.0);
    assert_eq!(view.rows[3].bands[0].role, BandRole::Output);
    assert_eq!(view.rows[2].bands[0].role, BandRole::If);
    assert_eq!(view.rows[2].markers[0].stage, 3);
}

// ============================================================================
// REDUCER-DRIVEN EDITS
// ============================================================================

#[test]
fn test_slider_session() {
    let actions = vec![
        Action::SetStageMode { stage: 1, mode: MixerMode::Variable },
        Action::SetLoStart { stage: 1, freq: 100.0 },
        Action::SetLoEnd { stage: 1, freq: 300.0 },
        Action::SetLoFreq { stage: 1, freq: 230.0 },
        Action::SetInputCenter(1010.0),
    ];
    let state = actions
        .into_iter()
        .fold(reference_plan(), |state, action| reduce(&state, action));

    assert!(state.out_of_range_stages().is_empty());
    // 1010 - 800 = 210, |210 - 230| = 20
    let output = state.chain().output();
    assert!(approx_eq(output.center, 20.0));
    assert!(output.start <= output.end);
}

#[test]
fn test_bypass_whole_chain_is_identity() {
    let state = reduce(
        &reference_plan(),
        Action::SetStageMode { stage: 0, mode: MixerMode::Bypass },
    );
    assert_eq!(state.chain().output(), reference_input());

    let view = SpectrumView::build(&state, 8);
    // axis only covers the input now
    assert_eq!(view.range, AxisRange::new(940.0, 1060.0));
    assert!(view.rows.iter().all(|row| row.markers.is_empty()));
}

#[test]
fn test_sweep_finds_image_collision() {
    // Sweep LO1 and look for the LO where the image lands on the input
    let state = reduce(
        &reference_plan(),
        Action::SetStageMode { stage: 0, mode: MixerMode::Variable },
    );
    let hit = state
        .sweep_lo(0, 10.0)
        .unwrap()
        .find(|(_, chain)| chain.stages[0].result.image == Some(chain.input));

    // image = 2 * lo - 1000 == 1000 when lo == 1000
    assert_eq!(hit.map(|(lo, _)| lo), Some(1000.0));
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[tokio::test]
async fn test_config_file_drives_view() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("gps.toml");
    std::fs::write(
        &path,
        r#"
        [app]
        max_ticks = 5

        [plan.input]
        center = 1575.42
        bw = 2.046

        [[plan.stages]]
        mode = "FIXED"
        lo_freq = 1500.0
        lo_start = 1400.0
        lo_end = 1600.0
        "#,
    )
    .unwrap();

    let config = PlannerConfig::load_from_file(&path).await.unwrap();
    let view = SpectrumView::build(&config.plan, config.app.max_ticks);

    let output = &view.rows[1].bands[0];
    assert_eq!(output.role, BandRole::Output);
    assert!(approx_eq(output.band.center, 75.42));
    assert!(view.ticks.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_view_serializes_to_json() {
    let view = SpectrumView::build(&reference_plan(), 8);
    let json = serde_json::to_string(&view).unwrap();
    let back: SpectrumView = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);
}
