//! Recorded per-trial error counts for the standalone analysis
//!
//! The reference dataset holds 119 trials of both detectors recorded with
//! the default configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const REFERENCE_SIMPLE: [usize; 119] = [
    5, 9, 8, 7, 8, 5, 9, 6, 4, 7, 4, 6, 5, 5, 6, 7, 8, 7, 10, 9, 5, 7, 6, 6, 7, 6, 4, 5, 7, 10, 2,
    9, 5, 9, 9, 9, 7, 10, 8, 6, 7, 11, 8, 5, 8, 5, 7, 8, 8, 5, 9, 7, 8, 10, 6, 6, 5, 9, 8, 10, 6,
    7, 6, 8, 8, 11, 5, 8, 6, 8, 6, 12, 6, 5, 6, 8, 10, 6, 9, 5, 6, 6, 6, 7, 5, 5, 8, 8, 7, 6, 6, 8,
    6, 6, 7, 8, 6, 9, 7, 7, 9, 7, 6, 8, 5, 8, 4, 9, 8, 7, 6, 8, 5, 5, 8, 6, 3, 8, 9,
];

const REFERENCE_COMPLEX: [usize; 119] = [
    4, 7, 7, 6, 7, 5, 6, 5, 4, 6, 4, 6, 2, 4, 6, 5, 6, 4, 7, 6, 3, 3, 5, 3, 4, 5, 4, 3, 5, 6, 2, 8,
    3, 7, 8, 4, 5, 6, 6, 3, 7, 7, 6, 3, 6, 4, 7, 6, 7, 3, 7, 5, 4, 9, 4, 5, 3, 8, 6, 8, 5, 5, 6, 7,
    6, 4, 5, 6, 5, 7, 4, 9, 4, 2, 3, 7, 7, 4, 5, 4, 4, 4, 6, 5, 5, 3, 5, 7, 6, 4, 4, 7, 6, 6, 5, 7,
    6, 7, 6, 6, 6, 5, 6, 7, 5, 5, 4, 7, 6, 6, 5, 5, 3, 4, 6, 5, 3, 6, 8,
];

/// Ordered per-trial error counts of both detectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalDataset {
    /// Simple detector errors, one per trial
    pub simple: Vec<usize>,

    /// Complex (smoothed) detector errors, one per trial
    pub complex: Vec<usize>,
}

impl HistoricalDataset {
    /// The recorded 119-trial reference run
    pub fn reference() -> Self {
        Self {
            simple: REFERENCE_SIMPLE.to_vec(),
            complex: REFERENCE_COMPLEX.to_vec(),
        }
    }

    /// Load `{ "simple": [...], "complex": [...] }` from a JSON file
    ///
    /// A serialized `ResultSet` (`{ "trials": [...] }`) is accepted too.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse either dataset shape from JSON content
    pub fn from_json_str(content: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Dataset(HistoricalDataset),
            Results(crate::results::ResultSet),
        }

        let dataset = match serde_json::from_str(content).context("Invalid dataset JSON")? {
            Shape::Dataset(dataset) => dataset,
            Shape::Results(results) => Self {
                simple: results.simple_errors(),
                complex: results.complex_errors(),
            },
        };
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_lengths() {
        let dataset = HistoricalDataset::reference();
        assert_eq!(dataset.simple.len(), 119);
        assert_eq!(dataset.complex.len(), 119);
        assert_eq!(&dataset.simple[..5], &[5, 9, 8, 7, 8]);
        assert_eq!(&dataset.complex[..5], &[4, 7, 7, 6, 7]);
    }

    #[test]
    fn test_reference_totals() {
        let dataset = HistoricalDataset::reference();
        assert_eq!(dataset.simple.iter().sum::<usize>(), 831);
        assert_eq!(dataset.complex.iter().sum::<usize>(), 631);
    }

    #[test]
    fn test_parse_dataset_shape() {
        let dataset =
            HistoricalDataset::from_json_str(r#"{"simple": [5, 9], "complex": [4, 7]}"#).unwrap();
        assert_eq!(dataset.simple, vec![5, 9]);
        assert_eq!(dataset.complex, vec![4, 7]);
    }

    #[test]
    fn test_parse_result_set_shape() {
        let json = r#"{"trials": [
            {"trial": 0, "simple_errors": 5, "complex_errors": 4, "alpha": 0.386},
            {"trial": 1, "simple_errors": 9, "complex_errors": 7, "alpha": 0.19}
        ]}"#;
        let dataset = HistoricalDataset::from_json_str(json).unwrap();
        assert_eq!(dataset.simple, vec![5, 9]);
        assert_eq!(dataset.complex, vec![4, 7]);
    }

    #[test]
    fn test_parse_rejects_negative_counts() {
        assert!(HistoricalDataset::from_json_str(r#"{"simple": [-1], "complex": [2]}"#).is_err());
    }
}
