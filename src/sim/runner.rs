//! Multi-scenario series orchestration.
//!
//! `run_series` fans one sampler call out per requested case count, tags
//! each draw with its period index and scenario label, and concatenates
//! everything into a single [`SimulationSet`] in the requested order.
//!
//! Scenarios are independent, so they run on the rayon pool; each gets its
//! own seeded `StdRng` stream derived from the global seed, which keeps a
//! fixed seed fully deterministic regardless of thread scheduling.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::domain::{ScenarioSeries, SimRecord, SimulationSet};
use crate::error::AppError;
use crate::sim::sampler::simulate_outcome;

/// Simulate `period_count` periods for every case count in `case_counts`
/// (order preserved, duplicates treated as independent scenarios) at a
/// shared true `cfr`.
///
/// All-or-nothing: any scenario failure fails the whole call and no
/// partial set is returned.
pub fn run_series(
    case_counts: &[u64],
    period_count: usize,
    cfr: f64,
    seed: u64,
) -> Result<SimulationSet, AppError> {
    if case_counts.is_empty() {
        return Err(AppError::invalid_parameter(
            "At least one case count is required.",
        ));
    }
    if case_counts.iter().any(|&c| c == 0) {
        return Err(AppError::invalid_parameter(
            "Every case count must be > 0.",
        ));
    }
    if period_count == 0 {
        return Err(AppError::invalid_parameter("period_count must be > 0."));
    }

    // Indexed par_iter keeps collection order identical to input order, so
    // concatenation below never depends on scheduling.
    let series: Vec<ScenarioSeries> = case_counts
        .par_iter()
        .enumerate()
        .map(|(position, &label)| run_scenario(position, label, period_count, cfr, seed))
        .collect::<Result<_, _>>()?;

    let mut records = Vec::with_capacity(case_counts.len() * period_count);
    for s in series {
        records.extend(s.records);
    }

    Ok(SimulationSet {
        records,
        scenario_order: case_counts.to_vec(),
    })
}

fn run_scenario(
    position: usize,
    label: u64,
    period_count: usize,
    cfr: f64,
    seed: u64,
) -> Result<ScenarioSeries, AppError> {
    let mut rng = StdRng::seed_from_u64(scenario_seed(seed, position, label));
    let outcomes = simulate_outcome(&mut rng, period_count, label, cfr)?;

    let records = outcomes
        .into_iter()
        .enumerate()
        .map(|(i, outcome)| SimRecord {
            scenario_label: label,
            // Draw order is period order: the series is a time series, not
            // an exchangeable bag of trials.
            period_index: i + 1,
            outcome,
        })
        .collect();

    Ok(ScenarioSeries { label, records })
}

/// Derive an isolated stream seed for one scenario.
///
/// The position participates so duplicate case counts still get distinct,
/// independent streams.
fn scenario_seed(seed: u64, position: usize, label: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    position.hash(&mut hasher);
    label.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn set_shape_matches_request() {
        let set = run_series(&[5, 10, 100], 90, 0.2, 42).unwrap();
        assert_eq!(set.records.len(), 270);
        assert_eq!(set.scenario_order, vec![5, 10, 100]);

        for &label in &[5u64, 10, 100] {
            let group: Vec<_> = set.scenario(label).collect();
            assert_eq!(group.len(), 90);
            let indices: Vec<usize> = group.iter().map(|r| r.period_index).collect();
            assert_eq!(indices, (1..=90).collect::<Vec<_>>());
            assert!(group.iter().all(|r| r.outcome.case_count == label));
        }

        // Concatenation preserves the requested scenario order.
        assert!(set.records[..90].iter().all(|r| r.scenario_label == 5));
        assert!(set.records[90..180].iter().all(|r| r.scenario_label == 10));
        assert!(set.records[180..].iter().all(|r| r.scenario_label == 100));
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let a = run_series(&[5, 10, 100], 30, 0.2, 7).unwrap();
        let b = run_series(&[5, 10, 100], 30, 0.2, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_scenarios_are_independent_streams() {
        let set = run_series(&[20, 20], 50, 0.5, 42).unwrap();
        let first: Vec<_> = set.records[..50].iter().map(|r| r.outcome).collect();
        let second: Vec<_> = set.records[50..].iter().map(|r| r.outcome).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn rejects_empty_case_counts() {
        let err = run_series(&[], 10, 0.2, 42).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn rejects_zero_period_count() {
        let err = run_series(&[5], 0, 0.2, 42).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn rejects_zero_case_count_before_any_sampling() {
        let err = run_series(&[5, 0, 100], 10, 0.2, 42).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }
}
