//! Shared "simulation pipeline" logic used by every CLI entry point.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! run scenarios -> concatenate -> summarize
//!
//! The entry points can then focus on presentation (tables vs plots).

use crate::domain::{SimConfig, SimulationSet};
use crate::error::AppError;
use crate::report::{summarize_scenarios, ScenarioSummary};
use crate::sim::run_series;

/// All computed outputs of a single `cfr run`.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub set: SimulationSet,
    pub summaries: Vec<ScenarioSummary>,
}

/// Execute the full simulation pipeline and return the computed outputs.
pub fn run_simulation(config: &SimConfig) -> Result<RunOutput, AppError> {
    let set = run_series(
        &config.case_counts,
        config.period_count,
        config.cfr,
        config.seed,
    )?;

    let summaries = summarize_scenarios(&set)?;

    Ok(RunOutput { set, summaries })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimConfig {
        SimConfig {
            case_counts: vec![5, 10, 100],
            period_count: 90,
            cfr: 0.2,
            seed: 42,
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_records: None,
            export_sim: None,
        }
    }

    #[test]
    fn pipeline_produces_set_and_summaries() {
        let out = run_simulation(&config()).unwrap();
        assert_eq!(out.set.records.len(), 270);
        assert_eq!(out.summaries.len(), 3);
    }

    #[test]
    fn small_scenarios_fluctuate_more() {
        // The tutorial's core claim: at a fixed true CFR, per-period
        // estimates spread inversely with case volume.
        let out = run_simulation(&config()).unwrap();
        let sd_small = out.summaries[0].sd_ratio;
        let sd_large = out.summaries[2].sd_ratio;
        assert!(
            sd_small > sd_large,
            "sd at 5 cases/day ({sd_small:.4}) should exceed sd at 100 ({sd_large:.4})"
        );
    }
}
