//! Empirical success statistics for repeated searches

use crate::error::{AlgorithmError, Result};
use crate::grover::GroverSearch;
use rand::Rng;
use std::fmt;
use tracing::debug;

/// Outcome counts of repeated searches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialSummary {
    /// Number of runs
    pub trials: usize,

    /// Runs that returned the target
    pub successes: usize,
}

impl TrialSummary {
    /// Fraction of successful runs
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.successes as f64 / self.trials as f64
        }
    }

    /// Standard error of the success rate, `√(p(1−p)/n)`
    pub fn standard_error(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let p = self.success_rate();
        (p * (1.0 - p) / self.trials as f64).sqrt()
    }
}

impl fmt::Display for TrialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} successes ({:.2}% ± {:.2}%)",
            self.successes,
            self.trials,
            100.0 * self.success_rate(),
            100.0 * self.standard_error()
        )
    }
}

/// Run `search` for `target` `trials` times and count hits
pub fn run_trials<R: Rng + ?Sized>(
    search: &GroverSearch,
    target: usize,
    trials: usize,
    rng: &mut R,
) -> Result<TrialSummary> {
    if trials == 0 {
        return Err(AlgorithmError::InvalidConfig("trials must be > 0".to_string()));
    }

    let mut successes = 0;
    for _ in 0..trials {
        if search.search(target, rng)? == target {
            successes += 1;
        }
    }

    let summary = TrialSummary { trials, successes };
    debug!(target, %summary, "Grover trials");
    Ok(summary)
}

/// Fraction of `trials` searches that return `target`
pub fn estimate_success_rate<R: Rng + ?Sized>(
    search: &GroverSearch,
    target: usize,
    trials: usize,
    rng: &mut R,
) -> Result<f64> {
    Ok(run_trials(search, target, trials, rng)?.success_rate())
}
