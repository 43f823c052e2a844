//! Property tests for the band, mixing and axis rules

use proptest::prelude::*;
use rfplan_core::{
    compute_domain, make_band, mix, nice_ticks, run_chain, FrequencyBand, MixerConfig, MixerMode,
};
use crate::fixtures::approx_eq;

fn freq() -> impl Strategy<Value = f64> {
    0.0..10_000.0f64
}

fn bandwidth() -> impl Strategy<Value = f64> {
    0.0..2_000.0f64
}

fn active_mode() -> impl Strategy<Value = MixerMode> {
    prop_oneof![Just(MixerMode::Fixed), Just(MixerMode::Variable)]
}

fn stage() -> impl Strategy<Value = MixerConfig> {
    (
        prop_oneof![
            Just(MixerMode::Bypass),
            Just(MixerMode::Fixed),
            Just(MixerMode::Variable)
        ],
        freq(),
    )
        .prop_map(|(mode, lo)| MixerConfig::new(mode, lo, 0.0, 10_000.0))
}

proptest! {
    #[test]
    fn band_edges_match_center_and_width(center in -10_000.0..10_000.0f64, bw in -2_000.0..2_000.0f64) {
        let band = make_band(center, bw);
        prop_assert!(approx_eq(band.end - band.start, bw));
        prop_assert!(approx_eq((band.start + band.end) / 2.0, center));
    }

    #[test]
    fn bypass_is_identity(center in freq(), bw in bandwidth(), lo in freq()) {
        let input = FrequencyBand::new(center, bw);
        let result = mix(&input, lo, MixerMode::Bypass);
        prop_assert_eq!(result.diff, input);
        prop_assert!(result.sum.is_none());
        prop_assert!(result.image.is_none());
    }

    #[test]
    fn diff_edges_are_ordered(center in freq(), bw in bandwidth(), lo in freq(), mode in active_mode()) {
        let result = mix(&FrequencyBand::new(center, bw), lo, mode);
        prop_assert!(result.diff.start <= result.diff.end);
        prop_assert!(result.diff.start >= 0.0);
        prop_assert_eq!(result.diff.bw, bw);
    }

    #[test]
    fn sum_is_exact_translation(center in freq(), bw in bandwidth(), lo in freq()) {
        let input = FrequencyBand::new(center, bw);
        let sum = mix(&input, lo, MixerMode::Fixed).sum.unwrap();
        prop_assert_eq!(sum.start, input.start + lo);
        prop_assert_eq!(sum.end, input.end + lo);
        prop_assert_eq!(sum.center, input.center + lo);
        prop_assert_eq!(sum.bw, input.bw);
    }

    #[test]
    fn image_is_never_negative(center in freq(), bw in bandwidth(), lo in freq()) {
        let image = mix(&FrequencyBand::new(center, bw), lo, MixerMode::Fixed).image.unwrap();
        prop_assert!(image.center >= 0.0);
        prop_assert!(approx_eq(image.center, (2.0 * lo - center).abs()));
    }

    #[test]
    fn domain_covers_bands(bands in prop::collection::vec(
        prop::option::of((freq(), bandwidth()).prop_map(|(c, bw)| FrequencyBand::new(c, bw))),
        0..8,
    )) {
        let range = compute_domain(&bands);
        prop_assert!(range.min >= 0.0);
        prop_assert!(range.max >= range.min);
        for band in bands.iter().flatten() {
            prop_assert!(range.min <= band.start.max(0.0));
            prop_assert!(range.max >= band.end);
        }
    }

    #[test]
    fn ticks_are_ascending_and_inside(min in 0.0..5_000.0f64, span in 0.01..5_000.0f64, max_ticks in 2usize..20) {
        let max = min + span;
        let ticks = nice_ticks(min, max, max_ticks);
        prop_assert!(ticks.windows(2).all(|w| w[0] <= w[1]));
        for tick in &ticks {
            // rounding to 2 decimals may nudge the ends slightly
            prop_assert!(*tick >= min - 0.005 && *tick <= max + 0.005);
        }
        prop_assert!(ticks.len() <= 2 * max_ticks + 1);
    }

    #[test]
    fn chain_feeds_diff_forward(center in freq(), bw in bandwidth(), stages in prop::collection::vec(stage(), 0..5)) {
        let chain = run_chain(FrequencyBand::new(center, bw), &stages);
        prop_assert_eq!(chain.stages.len(), stages.len());
        for pair in chain.stages.windows(2) {
            prop_assert_eq!(pair[1].input, pair[0].result.diff);
        }
    }
}

#[test]
fn degenerate_tick_axis() {
    assert_eq!(nice_ticks(7.5, 7.5, 10), vec![7.5]);
    assert_eq!(nice_ticks(10.0, 3.0, 10), vec![10.0]);
}

#[test]
fn empty_domain_fallback() {
    let range = compute_domain(&[None, None, None]);
    assert_eq!((range.min, range.max), (0.0, 1000.0));
}
