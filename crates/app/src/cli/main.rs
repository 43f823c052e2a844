//! rfplan CLI Application

mod render;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rfplan_core::domain::state::DEFAULT_SWEEP_STEP;
use rfplan_core::{
    reduce, Action, ConfigManager, Language, MixerConfig, PlanState, PlannerConfig, SpectrumView,
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rfplan")]
#[command(about = "Frequency planner for cascaded mixer chains", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Label language: en or zh
    #[arg(long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the spectrum at every stage of the chain
    Show(ShowArgs),

    /// Step one stage's LO across its range and tabulate the output band
    Sweep {
        /// Stage to sweep, numbered from 1
        stage: usize,

        /// LO increment
        #[arg(long, default_value_t = DEFAULT_SWEEP_STEP)]
        step: f64,

        #[command(flatten)]
        plan: PlanArgs,
    },

    /// Print the effective configuration as TOML
    Config {
        #[command(flatten)]
        plan: PlanArgs,
    },
}

#[derive(Args, Default)]
struct ShowArgs {
    /// Emit the spectrum view as JSON instead of a chart
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    plan: PlanArgs,
}

/// Overrides applied on top of the configured plan
#[derive(Args, Default)]
struct PlanArgs {
    /// Input center frequency
    #[arg(long)]
    center: Option<f64>,

    /// Input bandwidth
    #[arg(long)]
    bw: Option<f64>,

    /// Mixer stage, repeatable: bypass | fixed:<lo> | variable:<lo>[:<start>:<end>]
    #[arg(long = "stage", value_name = "SPEC")]
    stages: Vec<MixerConfig>,
}

impl PlanArgs {
    fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(center) = self.center {
            actions.push(Action::SetInputCenter(center));
        }
        if let Some(bw) = self.bw {
            actions.push(Action::SetInputBandwidth(bw));
        }
        if !self.stages.is_empty() {
            actions.push(Action::SetStages(self.stages.clone()));
        }
        actions
    }

    fn apply_to(&self, plan: &PlanState) -> PlanState {
        self.actions()
            .into_iter()
            .fold(plan.clone(), |state, action| reduce(&state, action))
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn load_config(path: Option<&Path>) -> anyhow::Result<PlannerConfig> {
    if let Some(path) = path {
        return PlannerConfig::load_from_file(path)
            .await
            .with_context(|| format!("Failed to load configuration from {}", path.display()));
    }

    match ConfigManager::default_config_dir() {
        Ok(dir) => Ok(ConfigManager::new(dir).load().await),
        Err(e) => {
            warn!(error = %e, "Using factory default configuration");
            Ok(PlannerConfig::factory_default())
        }
    }
}

fn warn_out_of_range(plan: &PlanState) {
    for index in plan.out_of_range_stages() {
        let stage = &plan.stages[index];
        warn!(
            stage = index + 1,
            lo_freq = stage.lo_freq,
            lo_start = stage.lo_start,
            lo_end = stage.lo_end,
            "LO outside its range"
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_deref()).await?;
    if let Some(lang) = cli.lang {
        config.app.language = lang;
    }
    debug!(language = %config.app.language, unit = %config.app.unit, "rfplan starting");

    match cli.command.unwrap_or_else(|| Commands::Show(ShowArgs::default())) {
        Commands::Show(args) => {
            let plan = args.plan.apply_to(&config.plan);
            warn_out_of_range(&plan);

            let view = SpectrumView::build(&plan, config.app.max_ticks);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render::render_view(&view, &config.app));
            }
        }
        Commands::Sweep { stage, step, plan } => {
            let plan = plan.apply_to(&config.plan);
            let index = stage
                .checked_sub(1)
                .context("Stages are numbered from 1")?;
            let points = plan.sweep_lo(index, step)?;
            print!("{}", render::render_sweep(index, points, &config.app));
        }
        Commands::Config { plan } => {
            config.plan = plan.apply_to(&config.plan);
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
