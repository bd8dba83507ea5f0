//! Per-scenario summaries and formatted terminal output.

pub mod format;

pub use format::{
    format_run_summary, format_scenario_table, summarize_scenarios, ScenarioSummary,
};
