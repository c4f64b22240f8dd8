use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use bank_sim::domain::simulator::config::{ServerLimits, SimulationConfig};
use bank_sim::domain::simulator::run_controller::RunController;
use bank_sim::domain::utils::statistics::StatsWriter;
use bank_sim::{load_config, logger};

/// Compares how long the busiest teller works for different numbers of tellers.
#[derive(Debug, Parser)]
#[command(name = "bank_sim", version)]
struct Cli {
    /// JSON input file. The built-in sample scenario is used if omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Smallest teller count to simulate (overrides the input file).
    #[arg(long)]
    min_servers: Option<usize>,

    /// Largest teller count to simulate (overrides the input file).
    #[arg(long)]
    max_servers: Option<usize>,

    /// Write per-teller statistics as CSV to this file.
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace). Defaults to RUST_LOG or info.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match &cli.log_level {
        Some(level) => Some(level.parse::<LevelFilter>().map_err(|_| anyhow::anyhow!("unknown log level '{}'", level))?),
        None => None,
    };
    logger::init(log_level);

    let mut config = match &cli.input {
        Some(path) => load_config(path).with_context(|| format!("loading simulation input '{}'", path.display()))?,
        None => {
            log::info!("No input file given, using the sample scenario.");
            SimulationConfig::sample()
        }
    };

    if cli.min_servers.is_some() || cli.max_servers.is_some() {
        let min = cli.min_servers.unwrap_or(config.limits.min());
        let max = cli.max_servers.unwrap_or(config.limits.max());
        config.limits = ServerLimits::new(min, max).context("applying teller limits from the command line")?;
    }

    let controller = RunController::try_from(config).context("preparing the simulation")?;
    let results = controller.compare().context("running the simulation")?;

    for result in &results {
        println!("{}", result.report_line());
    }

    if let Some(path) = &cli.stats {
        let mut writer = StatsWriter::create(path).with_context(|| format!("creating statistics file '{}'", path.display()))?;
        for result in &results {
            writer.add_result(result)?;
        }
        writer.finish()?;
    }

    Ok(())
}
