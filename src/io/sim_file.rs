//! Read/write simulation JSON files.
//!
//! Sim JSON is the "portable" representation of a finished run:
//! - the inputs that produced it (cfr, seed, period count, scenario order)
//! - the full record sequence
//!
//! `cfr plot --sim <file>` re-renders a saved run without re-simulating.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{SimConfig, SimRecord, SimulationSet};
use crate::error::AppError;

/// On-disk schema for a saved run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimFile {
    pub tool: String,
    pub cfr: f64,
    pub seed: u64,
    pub period_count: usize,
    pub scenario_order: Vec<u64>,
    pub records: Vec<SimRecord>,
}

impl SimFile {
    pub fn into_set(self) -> (SimulationSet, f64) {
        (
            SimulationSet {
                records: self.records,
                scenario_order: self.scenario_order,
            },
            self.cfr,
        )
    }
}

/// Write a simulation JSON file.
pub fn write_sim_json(path: &Path, set: &SimulationSet, config: &SimConfig) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::io(format!(
            "Failed to create sim JSON '{}': {e}",
            path.display()
        ))
    })?;

    let out = SimFile {
        tool: "cfr".to_string(),
        cfr: config.cfr,
        seed: config.seed,
        period_count: config.period_count,
        scenario_order: set.scenario_order.clone(),
        records: set.records.clone(),
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::io(format!("Failed to write sim JSON: {e}")))?;

    Ok(())
}

/// Read a simulation JSON file.
pub fn read_sim_json(path: &Path) -> Result<SimFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::io(format!("Failed to open sim JSON '{}': {e}", path.display()))
    })?;

    serde_json::from_reader(file)
        .map_err(|e| AppError::io(format!("Failed to parse sim JSON: {e}")))
}
