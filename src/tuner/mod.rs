// Smoothing factor tuning
//
// The tuner asks a search strategy for the alpha that minimises the filtered
// detector's error count against ground truth. Strategies share one contract:
// among all minimising candidates the smallest alpha wins, so previously
// recorded results stay reproducible whichever strategy is plugged in.

mod grid;
mod search;

pub use grid::AlphaGrid;
pub use search::{ExhaustiveSearch, SearchOutcome, SearchStrategy, TuningPoint};

use crate::detector::FilteredDetector;
use crate::error::Result;
use crate::scorer::score;

/// Result of tuning one observation
#[derive(Debug, Clone, PartialEq)]
pub struct TuningOutcome {
    /// Smallest alpha reaching the minimum error count
    pub best_alpha: f64,

    /// Error count of the filtered detector at `best_alpha`
    pub best_errors: usize,

    /// Every evaluated (alpha, errors) pair, if the strategy recorded them
    pub curve: Option<Vec<TuningPoint>>,
}

/// Tunes the filtered detector's smoothing factor per observation
pub struct ParameterTuner<S: SearchStrategy = ExhaustiveSearch> {
    cutoff: f64,
    grid: AlphaGrid,
    strategy: S,
}

impl ParameterTuner<ExhaustiveSearch> {
    /// Exhaustive tuner over `steps` candidates in `[0, 1)`
    pub fn exhaustive(cutoff: f64, steps: usize) -> Result<Self> {
        Ok(Self::new(cutoff, AlphaGrid::new(steps)?, ExhaustiveSearch::new()))
    }
}

impl<S: SearchStrategy> ParameterTuner<S> {
    pub fn new(cutoff: f64, grid: AlphaGrid, strategy: S) -> Self {
        Self {
            cutoff,
            grid,
            strategy,
        }
    }

    pub fn grid(&self) -> &AlphaGrid {
        &self.grid
    }

    /// Find the best smoothing factor for `observation`
    pub fn tune(&self, observation: &[f64], ground_truth: &[bool]) -> Result<TuningOutcome> {
        let cutoff = self.cutoff;
        let mut objective = |alpha: f64| -> Result<usize> {
            let output = FilteredDetector::classify_with_alpha(cutoff, observation, alpha)?;
            score(&output, ground_truth)
        };

        let outcome = self.strategy.search(&self.grid, &mut objective)?;
        tracing::debug!(
            alpha = outcome.best_alpha,
            errors = outcome.best_errors,
            evaluated = outcome.evaluations,
            "Tuned smoothing factor"
        );

        Ok(TuningOutcome {
            best_alpha: outcome.best_alpha,
            best_errors: outcome.best_errors,
            curve: outcome.curve,
        })
    }
}
