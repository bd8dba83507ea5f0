//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - simulated outcome records (`OutcomeRecord`, `SimRecord`)
//! - scenario aggregates (`ScenarioSeries`, `SimulationSet`)
//! - run configuration (`SimConfig`) and dataset stats (`SimulationStats`)

pub mod types;

pub use types::*;
