//! Binomial outcome sampling.
//!
//! One call = one batch of independent draws from `Binomial(case_count, cfr)`,
//! each packaged as an [`OutcomeRecord`] with its derived fields.
//!
//! The sampler holds no state: it is a pure function of its inputs plus a
//! caller-supplied random source, so reproducibility is entirely the
//! caller's choice of RNG seeding.

use rand::Rng;
use rand_distr::{Binomial, Distribution};

use crate::domain::OutcomeRecord;
use crate::error::AppError;

/// Draw `trial_count` independent death counts for `case_count` exposed
/// individuals with true per-individual death probability `cfr`.
///
/// Validation is eager and all-or-nothing: no entropy is consumed and no
/// records are produced unless every parameter is accepted.
///
/// `trial_count = 0` is a valid request for an empty series.
pub fn simulate_outcome<R: Rng + ?Sized>(
    rng: &mut R,
    trial_count: usize,
    case_count: u64,
    cfr: f64,
) -> Result<Vec<OutcomeRecord>, AppError> {
    validate_params(case_count, cfr)?;

    if trial_count == 0 {
        return Ok(Vec::new());
    }

    // Validation above already guarantees these inputs are acceptable, so a
    // construction failure here is an upstream defect, not a caller error.
    let binomial = Binomial::new(case_count, cfr)
        .map_err(|e| AppError::upstream(format!("Binomial distribution error: {e}")))?;

    let mut records = Vec::with_capacity(trial_count);
    for _ in 0..trial_count {
        let death_count = binomial.sample(rng);
        records.push(OutcomeRecord::from_draw(case_count, death_count));
    }

    Ok(records)
}

fn validate_params(case_count: u64, cfr: f64) -> Result<(), AppError> {
    if case_count == 0 {
        return Err(AppError::invalid_parameter(
            "case_count must be > 0.",
        ));
    }
    if !(cfr.is_finite() && (0.0..=1.0).contains(&cfr)) {
        return Err(AppError::invalid_parameter(
            "cfr must be a probability in [0.0, 1.0].",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn records_satisfy_derived_field_identities() {
        let records = simulate_outcome(&mut rng(), 200, 37, 0.35).unwrap();
        assert_eq!(records.len(), 200);
        for r in &records {
            assert_eq!(r.case_count, 37);
            assert!(r.death_count <= r.case_count);
            assert_eq!(r.survivor_count, r.case_count - r.death_count);
            let expected = r.death_count as f64 / r.case_count as f64;
            assert!((r.estimated_ratio - expected).abs() < 1e-15);
            assert!((0.0..=1.0).contains(&r.estimated_ratio));
        }
    }

    #[test]
    fn zero_cfr_is_deterministically_deathless() {
        let records = simulate_outcome(&mut rng(), 50, 12, 0.0).unwrap();
        assert!(records.iter().all(|r| r.death_count == 0));
        assert!(records.iter().all(|r| r.estimated_ratio == 0.0));
    }

    #[test]
    fn unit_cfr_is_deterministically_fatal() {
        let records = simulate_outcome(&mut rng(), 50, 12, 1.0).unwrap();
        assert!(records.iter().all(|r| r.death_count == 12));
        assert!(records.iter().all(|r| r.survivor_count == 0));
        assert!(records.iter().all(|r| r.estimated_ratio == 1.0));
    }

    #[test]
    fn zero_trials_yields_empty_sequence() {
        let records = simulate_outcome(&mut rng(), 0, 10, 0.2).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_zero_case_count() {
        let err = simulate_outcome(&mut rng(), 1, 0, 0.2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn rejects_out_of_range_cfr() {
        let high = simulate_outcome(&mut rng(), 1, 10, 1.5).unwrap_err();
        assert_eq!(high.kind(), ErrorKind::InvalidParameter);

        let low = simulate_outcome(&mut rng(), 1, 10, -0.1).unwrap_err();
        assert_eq!(low.kind(), ErrorKind::InvalidParameter);

        let nan = simulate_outcome(&mut rng(), 1, 10, f64::NAN).unwrap_err();
        assert_eq!(nan.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn fixed_seed_reproduces_draws() {
        let a = simulate_outcome(&mut rng(), 30, 100, 0.2).unwrap();
        let b = simulate_outcome(&mut rng(), 30, 100, 0.2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn large_sample_mean_is_unbiased() {
        // 1M draws of Binomial(12, 0.4): the mean estimated ratio should sit
        // well within ±0.01 of the true probability.
        let records = simulate_outcome(&mut rng(), 1_000_000, 12, 0.4).unwrap();
        let mean: f64 =
            records.iter().map(|r| r.estimated_ratio).sum::<f64>() / records.len() as f64;
        assert!(
            (mean - 0.4).abs() < 0.01,
            "mean ratio {mean:.4} drifted from 0.4"
        );
    }
}
