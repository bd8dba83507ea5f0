//! Command-line parsing for the CFR sampling-variability simulator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the sampling/statistics code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "cfr",
    version,
    about = "Case fatality ratio sampling-variability simulator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Simulate scenarios, print summary + table, and optionally plot/export.
    Run(RunArgs),
    /// Print the per-scenario summary table only (useful for scripting).
    Table(RunArgs),
    /// Plot a previously exported simulation JSON.
    Plot(PlotArgs),
}

/// Common options for simulating and tabulating.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// Daily case count per scenario (repeat for multiple scenarios).
    #[arg(short = 'c', long = "cases", default_values_t = [5u64, 10, 100])]
    pub cases: Vec<u64>,

    /// Number of simulated periods (days) per scenario.
    #[arg(short = 'p', long, default_value_t = 90)]
    pub periods: usize,

    /// True case fatality ratio (probability of death per case).
    #[arg(long, default_value_t = 0.2)]
    pub cfr: f64,

    /// Random seed (per-scenario streams are derived from it).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export per-period records to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full run (inputs + records) to JSON.
    #[arg(long = "export-sim")]
    pub export_sim: Option<PathBuf>,
}

/// Options for plotting a saved run.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Simulation JSON file produced by `cfr run --export-sim`.
    #[arg(long, value_name = "JSON")]
    pub sim: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
