//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during simulation
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One simulated period's outcome for a fixed case volume.
///
/// Immutable value object: `survivor_count` and `estimated_ratio` are
/// derived once at construction and never recomputed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// Number of individuals exposed to risk in this period.
    pub case_count: u64,
    /// Binomially drawn death count, always in `[0, case_count]`.
    pub death_count: u64,
    /// `case_count - death_count`.
    pub survivor_count: u64,
    /// `death_count / case_count`, always in `[0.0, 1.0]`.
    pub estimated_ratio: f64,
}

impl OutcomeRecord {
    /// Build a record from a draw, deriving the dependent fields.
    ///
    /// Caller guarantees `death_count <= case_count` and `case_count > 0`
    /// (both hold for any binomial draw over validated inputs).
    pub fn from_draw(case_count: u64, death_count: u64) -> Self {
        Self {
            case_count,
            death_count,
            survivor_count: case_count - death_count,
            estimated_ratio: death_count as f64 / case_count as f64,
        }
    }
}

/// An [`OutcomeRecord`] tagged with its place in a simulated time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimRecord {
    /// Grouping key after scenarios are merged: the scenario's case count.
    pub scenario_label: u64,
    /// 1-based position within the scenario; strictly increasing and
    /// contiguous in draw order (the draws form a time series).
    pub period_index: usize,
    #[serde(flatten)]
    pub outcome: OutcomeRecord,
}

/// The ordered series produced for one scenario (one fixed case count).
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSeries {
    pub label: u64,
    pub records: Vec<SimRecord>,
}

/// Concatenation of every scenario's series, in input order.
///
/// This is the terminal artifact of a run: it exclusively owns the rows
/// and is what the report, plot, and export layers consume.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSet {
    /// All records, grouped by scenario in `scenario_order`, each group
    /// internally ordered by `period_index`.
    pub records: Vec<SimRecord>,
    /// Scenario labels in the order they were requested (duplicates kept).
    pub scenario_order: Vec<u64>,
}

impl SimulationSet {
    /// Iterate one scenario's records in period order.
    pub fn scenario(&self, label: u64) -> impl Iterator<Item = &SimRecord> {
        self.records
            .iter()
            .filter(move |r| r.scenario_label == label)
    }
}

/// Ratio extremes across a simulation set (for plot/report axes).
#[derive(Debug, Clone, Copy)]
pub struct SimulationStats {
    pub n_records: usize,
    pub ratio_min: f64,
    pub ratio_max: f64,
}

impl SimulationStats {
    pub fn from_set(set: &SimulationSet) -> Option<Self> {
        let mut ratio_min = f64::INFINITY;
        let mut ratio_max = f64::NEG_INFINITY;
        for r in &set.records {
            ratio_min = ratio_min.min(r.outcome.estimated_ratio);
            ratio_max = ratio_max.max(r.outcome.estimated_ratio);
        }
        if !(ratio_min.is_finite() && ratio_max.is_finite()) {
            return None;
        }
        Some(Self {
            n_records: set.records.len(),
            ratio_min,
            ratio_max,
        })
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// One scenario per entry; order preserved, duplicates allowed.
    pub case_counts: Vec<u64>,
    /// Periods simulated per scenario.
    pub period_count: usize,
    /// True per-individual probability of death.
    pub cfr: f64,
    /// Global seed; per-scenario streams are derived from it.
    pub seed: u64,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_records: Option<PathBuf>,
    pub export_sim: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_draw_derives_consistent_fields() {
        let rec = OutcomeRecord::from_draw(25, 7);
        assert_eq!(rec.survivor_count, 18);
        assert!((rec.estimated_ratio - 0.28).abs() < 1e-12);
        assert_eq!(rec.death_count + rec.survivor_count, rec.case_count);
    }

    #[test]
    fn from_draw_boundaries() {
        let none = OutcomeRecord::from_draw(10, 0);
        assert_eq!(none.survivor_count, 10);
        assert_eq!(none.estimated_ratio, 0.0);

        let all = OutcomeRecord::from_draw(10, 10);
        assert_eq!(all.survivor_count, 0);
        assert_eq!(all.estimated_ratio, 1.0);
    }
}
