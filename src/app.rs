//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the simulation pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, PlotArgs, RunArgs};
use crate::domain::SimConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cfr` binary.
pub fn run() -> Result<(), AppError> {
    // We want `cfr` and `cfr --cfr 0.1` to behave like `cfr run ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the convenient default UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Run(args) => handle_run(args, OutputMode::Full),
        Command::Table(args) => handle_run(args, OutputMode::TableOnly),
        Command::Plot(args) => handle_plot(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    TableOnly,
}

fn handle_run(args: RunArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = sim_config_from_args(&args);
    let run = pipeline::run_simulation(&config)?;

    // Print terminal output.
    if mode == OutputMode::Full {
        println!("{}", crate::report::format_run_summary(&run.set, &config));
    }

    println!("{}", crate::report::format_scenario_table(&run.summaries));

    if mode == OutputMode::Full && config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.set,
            config.cfr,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_records {
        crate::io::export::write_records_csv(path, &run.set)?;
    }
    if let Some(path) = &config.export_sim {
        crate::io::sim_file::write_sim_json(path, &run.set, &config)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let (set, cfr) = crate::io::sim_file::read_sim_json(&args.sim)?.into_set();

    let plot = crate::plot::render_ascii_plot(&set, cfr, args.width, args.height);
    println!("{plot}");
    Ok(())
}

pub fn sim_config_from_args(args: &RunArgs) -> SimConfig {
    SimConfig {
        case_counts: args.cases.clone(),
        period_count: args.periods,
        cfr: args.cfr,
        seed: args.seed,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_records: args.export.clone(),
        export_sim: args.export_sim.clone(),
    }
}

/// Rewrite argv so `cfr` defaults to `cfr run`.
///
/// Rules:
/// - `cfr`                     -> `cfr run`
/// - `cfr --cfr 0.1 ...`       -> `cfr run --cfr 0.1 ...`
/// - `cfr --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("run".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "run" | "table" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "run flags".
    if arg1.starts_with('-') {
        argv.insert(1, "run".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
