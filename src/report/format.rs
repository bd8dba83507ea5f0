//! Reporting utilities: scenario summaries and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the sampling code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{SimConfig, SimulationSet, SimulationStats};
use crate::error::AppError;

/// Aggregate view of one scenario's estimated-ratio series.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub scenario_label: u64,
    pub periods: usize,
    pub mean_ratio: f64,
    pub sd_ratio: f64,
    pub min_ratio: f64,
    pub max_ratio: f64,
    /// Deaths summed across the whole scenario.
    pub total_deaths: u64,
    /// Cases summed across the whole scenario.
    pub total_cases: u64,
    /// total_deaths / total_cases: the estimate a pooled analysis would see.
    pub pooled_ratio: f64,
}

/// Compute one summary per scenario, in the set's scenario order.
pub fn summarize_scenarios(set: &SimulationSet) -> Result<Vec<ScenarioSummary>, AppError> {
    let mut out = Vec::with_capacity(set.scenario_order.len());

    // Duplicate labels would double-count under a plain label filter, so
    // split positionally: every scenario contributes the same record count.
    let scenario_count = set.scenario_order.len();
    if scenario_count == 0 || set.records.len() % scenario_count != 0 {
        return Err(AppError::upstream(
            "Simulation set record count does not match its scenario order.",
        ));
    }
    let per_scenario = set.records.len() / scenario_count;
    if per_scenario == 0 {
        return Err(AppError::upstream(
            "Simulation set is missing records for a requested scenario.",
        ));
    }

    for (i, &label) in set.scenario_order.iter().enumerate() {
        let group = &set.records[i * per_scenario..(i + 1) * per_scenario];
        if group.iter().any(|r| r.scenario_label != label) {
            return Err(AppError::upstream(
                "Simulation set records are out of scenario order.",
            ));
        }

        let n = group.len() as f64;
        let mean: f64 = group.iter().map(|r| r.outcome.estimated_ratio).sum::<f64>() / n;
        let var: f64 = group
            .iter()
            .map(|r| {
                let d = r.outcome.estimated_ratio - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        let mut min_ratio = f64::INFINITY;
        let mut max_ratio = f64::NEG_INFINITY;
        let mut total_deaths = 0u64;
        let mut total_cases = 0u64;
        for r in group {
            min_ratio = min_ratio.min(r.outcome.estimated_ratio);
            max_ratio = max_ratio.max(r.outcome.estimated_ratio);
            total_deaths += r.outcome.death_count;
            total_cases += r.outcome.case_count;
        }

        out.push(ScenarioSummary {
            scenario_label: label,
            periods: group.len(),
            mean_ratio: mean,
            sd_ratio: var.sqrt(),
            min_ratio,
            max_ratio,
            total_deaths,
            total_cases,
            pooled_ratio: total_deaths as f64 / total_cases as f64,
        });
    }

    Ok(out)
}

/// Format the full run summary (inputs + overall ratio range).
pub fn format_run_summary(set: &SimulationSet, config: &SimConfig) -> String {
    let mut out = String::new();

    out.push_str("=== cfr - CFR Sampling Variability ===\n");
    out.push_str(&format!("True CFR: {:.4}\n", config.cfr));
    out.push_str(&format!("Seed: {}\n", config.seed));
    out.push_str(&format!(
        "Scenarios: {} (daily cases: {})\n",
        config.case_counts.len(),
        fmt_labels(&config.case_counts),
    ));
    out.push_str(&format!("Periods per scenario: {}\n", config.period_count));

    if let Some(stats) = SimulationStats::from_set(set) {
        out.push_str(&format!(
            "Records: n={} | estimated ratio=[{:.4}, {:.4}]\n",
            stats.n_records, stats.ratio_min, stats.ratio_max
        ));
    }
    out.push('\n');

    out
}

/// Format the per-scenario summary table.
pub fn format_scenario_table(summaries: &[ScenarioSummary]) -> String {
    let mut out = String::new();

    out.push_str("Per-scenario estimate fluctuation:\n");
    out.push_str(
        format!(
            "{:>8} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
            "cases/d", "periods", "mean", "sd", "min", "max", "pooled"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<8} {:-<8} {:-<10} {:-<10} {:-<10} {:-<10} {:-<10}\n",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for s in summaries {
        out.push_str(
            format!(
                "{:>8} {:>8} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}\n",
                s.scenario_label,
                s.periods,
                s.mean_ratio,
                s.sd_ratio,
                s.min_ratio,
                s.max_ratio,
                s.pooled_ratio,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn fmt_labels(labels: &[u64]) -> String {
    let parts: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
    parts.join(", ")
}
