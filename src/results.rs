//! Per-trial results and their ordered collection

use serde::{Deserialize, Serialize};

/// Outcome of one trial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Trial index (0-based)
    pub trial: usize,

    /// Errors of the simple detector
    pub simple_errors: usize,

    /// Errors of the complex (smoothed) detector at the tuned alpha
    pub complex_errors: usize,

    /// Tuned smoothing factor, in [0, 1)
    pub alpha: f64,
}

/// Ordered trial results of one run (insertion order = trial order)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    trials: Vec<TrialResult>,
}

impl ResultSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            trials: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, result: TrialResult) {
        self.trials.push(result);
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    pub fn trials(&self) -> &[TrialResult] {
        &self.trials
    }

    pub fn simple_errors(&self) -> Vec<usize> {
        self.trials.iter().map(|t| t.simple_errors).collect()
    }

    pub fn complex_errors(&self) -> Vec<usize> {
        self.trials.iter().map(|t| t.complex_errors).collect()
    }
}

impl FromIterator<TrialResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = TrialResult>>(iter: I) -> Self {
        Self {
            trials: iter.into_iter().collect(),
        }
    }
}

/// Error counts as `f64` for the statistics layer
pub fn as_samples(counts: &[usize]) -> Vec<f64> {
    counts.iter().map(|&c| c as f64).collect()
}

/// Total simple errors over total complex errors
///
/// `None` when the complex detector made no errors at all.
pub fn error_ratio(simple_counts: &[usize], complex_counts: &[usize]) -> Option<f64> {
    let total_simple: f64 = simple_counts.iter().map(|&c| c as f64).sum();
    let total_complex: f64 = complex_counts.iter().map(|&c| c as f64).sum();
    (total_complex > 0.0).then(|| total_simple / total_complex)
}

/// Arithmetic mean of error counts, `None` if empty
pub fn mean_errors(counts: &[usize]) -> Option<f64> {
    if counts.is_empty() {
        None
    } else {
        Some(counts.iter().map(|&c| c as f64).sum::<f64>() / counts.len() as f64)
    }
}
