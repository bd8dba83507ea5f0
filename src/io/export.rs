//! Export per-period records to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! plotting scripts: one row per simulated period, all six fields.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::SimulationSet;
use crate::error::AppError;

/// Write every record of `set` to a CSV file.
pub fn write_records_csv(path: &Path, set: &SimulationSet) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::io(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    // Header
    writeln!(
        file,
        "scenario_label,period_index,case_count,death_count,survivor_count,estimated_ratio"
    )
    .map_err(|e| AppError::io(format!("Failed to write export CSV header: {e}")))?;

    for r in &set.records {
        writeln!(
            file,
            "{},{},{},{},{},{:.10}",
            r.scenario_label,
            r.period_index,
            r.outcome.case_count,
            r.outcome.death_count,
            r.outcome.survivor_count,
            r.outcome.estimated_ratio,
        )
        .map_err(|e| AppError::io(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
