//! Core stochastic simulation: per-period binomial draws (`sampler`) and
//! multi-scenario series orchestration (`runner`).

pub mod runner;
pub mod sampler;

pub use runner::run_series;
pub use sampler::simulate_outcome;
