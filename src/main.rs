use anyhow::{Context, Result};
use clap::Parser;
use hypoalert::analysis::{analyze_historical_with_tail, simulate_and_analyze};
use hypoalert::cli::{Cli, Command, OutputFormat};
use hypoalert::config::{AnalysisConfig, SimulationConfig};
use hypoalert::historical::HistoricalDataset;
use hypoalert::output;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run_simulate(
    config_path: Option<std::path::PathBuf>,
    trials: Option<usize>,
    seed: Option<u64>,
    parallel: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => SimulationConfig::from_file(&path)?,
        None => SimulationConfig::default(),
    };
    if let Some(trials) = trials {
        config.trials = trials;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    config.parallel |= parallel;
    config.validate()?;

    let report = simulate_and_analyze(&config).context("Simulation failed")?;

    match format {
        OutputFormat::Text => print!("{}", output::render_simulation_text(&report)),
        OutputFormat::Json => println!("{}", output::to_json(&report)?),
    }
    Ok(())
}

fn run_analyze(
    input: Option<std::path::PathBuf>,
    target: f64,
    alternative: hypoalert::stats::Tail,
    format: OutputFormat,
) -> Result<()> {
    let dataset = match input {
        Some(path) => HistoricalDataset::from_json_file(&path)?,
        None => HistoricalDataset::reference(),
    };
    let config = AnalysisConfig {
        target_errors: target,
        ..AnalysisConfig::default()
    };

    let report =
        analyze_historical_with_tail(&dataset, &config, alternative).context("Analysis failed")?;

    match format {
        OutputFormat::Text => print!("{}", output::render_historical_text(&report)),
        OutputFormat::Json => println!("{}", output::to_json(&report)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    match args.command {
        Command::Simulate {
            config,
            trials,
            seed,
            parallel,
        } => run_simulate(config, trials, seed, parallel, args.format),
        Command::Analyze {
            input,
            target,
            alternative,
        } => run_analyze(input, target, alternative, args.format),
    }
}
