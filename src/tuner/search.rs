// Search strategies over the alpha grid

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};
use crate::tuner::grid::AlphaGrid;

/// One evaluated candidate of the tuning curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuningPoint {
    pub alpha: f64,
    pub errors: usize,
}

/// Best candidate found by a strategy
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub best_alpha: f64,
    pub best_errors: usize,
    /// Number of objective evaluations spent
    pub evaluations: usize,
    pub curve: Option<Vec<TuningPoint>>,
}

/// Minimises an error-count objective over an alpha grid
///
/// Implementations must return the smallest alpha among all minimisers.
pub trait SearchStrategy {
    fn search(
        &self,
        grid: &AlphaGrid,
        objective: &mut dyn FnMut(f64) -> Result<usize>,
    ) -> Result<SearchOutcome>;
}

/// Brute-force line search over every grid candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSearch {
    record_curve: bool,
}

impl ExhaustiveSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep every (alpha, errors) pair for plotting consumers
    pub fn recording() -> Self {
        Self { record_curve: true }
    }
}

impl SearchStrategy for ExhaustiveSearch {
    fn search(
        &self,
        grid: &AlphaGrid,
        objective: &mut dyn FnMut(f64) -> Result<usize>,
    ) -> Result<SearchOutcome> {
        let mut best: Option<(f64, usize)> = None;
        let mut curve = self.record_curve.then(|| Vec::with_capacity(grid.len()));
        let mut evaluations = 0;

        for alpha in grid.iter() {
            let errors = objective(alpha)?;
            evaluations += 1;

            if let Some(points) = curve.as_mut() {
                points.push(TuningPoint { alpha, errors });
            }

            // Strict comparison: the first (smallest) minimiser is kept
            match best {
                Some((_, best_errors)) if errors >= best_errors => {}
                _ => best = Some((alpha, errors)),
            }
        }

        let (best_alpha, best_errors) = best.ok_or_else(|| {
            HarnessError::Configuration("alpha grid has no candidates".to_string())
        })?;

        Ok(SearchOutcome {
            best_alpha,
            best_errors,
            evaluations,
            curve,
        })
    }
}
