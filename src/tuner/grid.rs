// Candidate smoothing factors

use crate::error::{HarnessError, Result};

/// Half-open grid `{0, 1/steps, 2/steps, …, (steps − 1)/steps}`
///
/// `1.0` itself is never a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaGrid {
    steps: usize,
}

impl AlphaGrid {
    pub fn new(steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(HarnessError::Configuration(
                "alpha grid resolution must be positive".to_string(),
            ));
        }
        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }

    /// Candidate `index`, computed as `index / steps`
    pub fn candidate(&self, index: usize) -> f64 {
        index as f64 / self.steps as f64
    }

    /// Candidates in ascending order
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.steps).map(move |k| self.candidate(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        let grid = AlphaGrid::new(1000).unwrap();
        let candidates: Vec<f64> = grid.iter().collect();

        assert_eq!(candidates.len(), 1000);
        assert_eq!(candidates[0], 0.0);
        assert_eq!(candidates[1], 0.001);
        assert_eq!(candidates[386], 0.386);
        assert_eq!(candidates[999], 0.999);
        assert!(candidates.iter().all(|&a| a < 1.0));
    }

    #[test]
    fn test_zero_resolution_rejected() {
        assert!(matches!(
            AlphaGrid::new(0),
            Err(HarnessError::Configuration(_))
        ));
    }

    #[test]
    fn test_single_step_grid() {
        let grid = AlphaGrid::new(1).unwrap();
        assert_eq!(grid.iter().collect::<Vec<_>>(), vec![0.0]);
    }
}
