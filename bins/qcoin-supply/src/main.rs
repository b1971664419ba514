//! qcoin-supply — supply-curve simulator CLI.
//!
//! Runs the capped-emission supply simulation and renders the result as a
//! terminal chart, exports the series as JSON or CSV, or prints the halving
//! schedule. All parameters can be overridden via flags.

mod chart;
mod export;
mod tui;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;

use qcoin_emission::constants::COIN;
use qcoin_emission::params::genesis_date;
use qcoin_emission::{SimulationParams, SupplyCurve, schedule, simulate, supply_to_coins};

use crate::chart::ChartModel;

const CHART_TITLE: &str = "Total QCoin Supply Over Time";

/// CLI arguments. Monetary flags are in whole QC.
#[derive(Debug, Parser)]
#[command(name = "qcoin-supply")]
#[command(about = "QCoin supply-curve simulator", long_about = None)]
struct Cli {
    /// Per-block reward at genesis, in whole QC.
    #[arg(long, default_value_t = 50)]
    initial_reward: u64,

    /// Blocks between reward halvings.
    #[arg(long, default_value_t = 210_000)]
    halving_interval: u64,

    /// Blocks issued per year.
    #[arg(long, default_value_t = 52_560)]
    blocks_per_year: u64,

    /// Simulation start date (YYYY-MM-DD). Defaults to 2009-01-03.
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Maximum total supply, in whole QC.
    #[arg(long, default_value_t = 21_000_000)]
    supply_cap: u64,

    /// Hard stop on the simulated horizon, in years.
    #[arg(long, default_value_t = 200)]
    max_years: u64,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the supply curve as a terminal chart (default).
    Chart,
    /// Print the series as JSON or CSV.
    Export {
        /// Output format.
        #[arg(long, value_enum, default_value_t = export::Format::Json)]
        format: export::Format,

        /// Write to a file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the halving schedule table.
    Schedule,
}

impl Cli {
    fn params(&self) -> Result<SimulationParams> {
        let initial_reward = self
            .initial_reward
            .checked_mul(COIN)
            .context("initial reward overflows base units")?;
        let supply_cap = self
            .supply_cap
            .checked_mul(COIN)
            .context("supply cap overflows base units")?;
        Ok(SimulationParams {
            initial_reward,
            halving_interval: self.halving_interval,
            blocks_per_year: self.blocks_per_year,
            start_date: self.start_date.unwrap_or_else(genesis_date),
            supply_cap,
            max_years: self.max_years,
        })
    }
}

fn run_simulation(params: &SimulationParams) -> Result<SupplyCurve> {
    let curve = simulate(params)?;
    info!(
        samples = curve.len(),
        final_supply_qc = supply_to_coins(curve.final_supply().unwrap_or(0)),
        truncated = curve.truncated,
        "simulation complete"
    );
    Ok(curve)
}

fn print_schedule(params: &SimulationParams) {
    let last = schedule::last_reward_epoch(params.initial_reward);
    println!(
        "{:>5}  {:>14}  {:>18}  {:>6}",
        "epoch", "start height", "reward (QC)", "year"
    );
    for epoch in 0..=last {
        let start = schedule::epoch_start_height(epoch, params.halving_interval);
        let reward = schedule::epoch_reward(params.initial_reward, epoch);
        let year = start / params.blocks_per_year;
        println!(
            "{epoch:>5}  {start:>14}  {:>18.8}  {year:>6}",
            supply_to_coins(reward)
        );
    }
    let total = schedule::total_emission(params.initial_reward, params.halving_interval);
    println!(
        "\ntotal scheduled emission: {:.8} QC (cap {:.8} QC)",
        supply_to_coins(total),
        supply_to_coins(params.supply_cap)
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let params = cli.params()?;
    params.validate()?;

    match cli.command.unwrap_or(Command::Chart) {
        Command::Chart => {
            let curve = run_simulation(&params)?;
            let model =
                ChartModel::build(&curve, params.supply_cap).context("empty supply curve")?;
            tui::show_chart(&model, CHART_TITLE)?;
        }
        Command::Export { format, output } => {
            let curve = run_simulation(&params)?;
            let rendered = export::render(&curve, format)?;
            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), "series written");
                }
                None => print!("{rendered}"),
            }
        }
        Command::Schedule => print_schedule(&params),
    }

    Ok(())
}
