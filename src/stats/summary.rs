// Descriptive summary of one detector's error counts

use aprender::stats::DescriptiveStats;
use serde::{Deserialize, Serialize};
use trueno::Vector;

use crate::error::{HarnessError, Result};
use crate::results::mean_errors;

/// Descriptive statistics of a group of per-trial error counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Group name ("simple", "complex")
    pub name: String,

    /// Number of trials
    pub n: usize,

    /// Mean error count
    pub mean: f64,

    /// Sample standard deviation (n − 1)
    pub std_dev: f64,

    /// Median error count
    pub median: f64,

    /// Coefficient of variation (population std / mean), 0 for a zero mean
    pub coefficient_of_variation: f64,

    /// `accuracy_basis − mean`, read as a percentage when errors are counted
    /// over a 100-unit signal
    pub accuracy: f64,
}

impl GroupSummary {
    /// Summarise error counts of one detector
    ///
    /// # Example
    /// ```
    /// use hypoalert::stats::GroupSummary;
    ///
    /// let summary = GroupSummary::from_counts("simple", &[5, 9, 8, 7, 8], 100.0).unwrap();
    /// assert_eq!(summary.median, 8.0);
    /// assert!((summary.accuracy - 92.6).abs() < 1e-9);
    /// ```
    pub fn from_counts(name: &str, counts: &[usize], accuracy_basis: f64) -> Result<Self> {
        let mean = mean_errors(counts).ok_or_else(|| {
            HarnessError::DegenerateInput(format!("no error counts for group '{}'", name))
        })?;

        let n = counts.len();
        let std_dev = if n > 1 {
            let ss: f64 = counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        } else {
            0.0
        };

        let values: Vec<f32> = counts.iter().map(|&c| c as f32).collect();
        let vector = Vector::from_slice(&values);

        let median = DescriptiveStats::new(&vector).quantile(0.5).map_err(|e| {
            HarnessError::DegenerateInput(format!("failed to compute median: {}", e))
        })?;

        Ok(Self {
            name: name.to_string(),
            n,
            mean,
            std_dev,
            median: median as f64,
            coefficient_of_variation: coefficient_of_variation(&vector),
            accuracy: accuracy_basis - mean,
        })
    }
}

fn coefficient_of_variation(vector: &Vector<f32>) -> f64 {
    let Ok(mean) = vector.mean() else {
        return 0.0;
    };
    let Ok(std) = vector.stddev() else {
        return 0.0;
    };

    if mean.abs() < 1e-6 {
        return 0.0;
    }

    (std / mean.abs()) as f64
}
