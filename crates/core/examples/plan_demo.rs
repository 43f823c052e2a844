//! Example walking a plan through a few edits and printing each stage
//!
//! Run with: cargo run --package rfplan-core --example plan_demo

use rfplan_core::{reduce, Action, Label, Language, MixerMode, PlannerConfig, SpectrumView};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("rfplan_core=debug,info")
        .init();

    println!("=== rfplan Plan Demo ===\n");

    // 1. Start from the factory default configuration
    println!("1. Factory default configuration:");
    let config = PlannerConfig::factory_default();
    println!("{}", config.to_toml_string()?);

    // 2. Run the reference chain
    println!("2. Reference chain:");
    let state = config.plan.clone();
    for stage in &state.chain().stages {
        println!(
            "   {} [{}] in {} -> out {}",
            Label::MixerTitle(stage.index + 1).text(Language::En),
            stage.config.mode,
            stage.input,
            stage.result.diff
        );
    }

    // 3. Edit through the reducer
    println!("\n3. Applying edits:");
    let actions = vec![
        Action::SetInputCenter(1575.42),
        Action::SetInputBandwidth(2.0),
        Action::SetLoFreq { stage: 0, freq: 1500.0 },
        Action::SetStageMode { stage: 1, mode: MixerMode::Fixed },
        Action::SetLoFreq { stage: 1, freq: 70.0 },
    ];
    let state = actions.into_iter().fold(state, |state, action| {
        println!("   → {:?}", action);
        reduce(&state, action)
    });
    println!("   ✓ Final output band: {}", state.chain().output());

    // 4. Derived chart data
    println!("\n4. Spectrum view:");
    let view = SpectrumView::build(&state, config.app.max_ticks);
    println!("   Axis {:.2} .. {:.2}, ticks {:?}", view.range.min, view.range.max, view.ticks);
    for row in &view.rows {
        println!("   {}", row.title().text(Language::En));
        for item in &row.bands {
            println!(
                "     {:<16} {}",
                Label::Legend(item.role).text(Language::En),
                item.band
            );
        }
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
