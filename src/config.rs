// Configuration for the detector benchmark
//
// Every constant of the simulation lives here so that a run is fully
// described by one value (and optionally one TOML file).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::HarnessError;

/// Configuration for the simulation-and-analysis run
///
/// # Example
/// ```
/// use hypoalert::config::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// assert_eq!(config.trials, 119);
/// assert!((config.design_target() - 9.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Lowest signal level (mg/dL, typically before fainting)
    pub lowest: f64,

    /// Highest signal level (mg/dL, diabetics post eating)
    pub highest: f64,

    /// First point of the time grid
    pub domain_start: f64,

    /// Last point of the time grid (inclusive)
    pub domain_end: f64,

    /// Number of samples on the time grid
    pub samples: usize,

    /// Levels strictly below this are labeled hypoglycemic
    pub cutoff: f64,

    /// Target signal-to-noise ratio in dB
    pub snr_db: f64,

    /// Number of trials per run
    pub trials: usize,

    /// Seed of the random stream
    pub seed: u64,

    /// Number of candidate alphas in [0, 1)
    pub alpha_steps: usize,

    /// Accuracy the detectors are designed to reach (0.91 = 91%)
    pub design_accuracy: f64,

    /// Length error counts are reported against when converting them to a
    /// percentage accuracy
    pub accuracy_basis: f64,

    /// Significance level for the conclusion
    pub significance_level: f64,

    /// Run trials on rayon with per-trial sub-streams
    ///
    /// Results are reproducible across parallel runs but differ from the
    /// sequential reference run.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            lowest: 0.0,
            highest: 150.0,
            domain_start: 1.0,
            domain_end: 100.0,
            samples: 1000,
            cutoff: 54.0,
            snr_db: 15.0,
            trials: 119,
            seed: 42,
            alpha_steps: 1000,
            design_accuracy: 0.91,
            accuracy_basis: 100.0,
            significance_level: 0.05,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// Load a configuration from a TOML file
    ///
    /// Missing keys fall back to the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
    }

    /// Parse a configuration from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Design target expressed as an error count
    ///
    /// `accuracy_basis × (1 − design_accuracy)`, i.e. 9 errors for 91% over 100.
    pub fn design_target(&self) -> f64 {
        self.accuracy_basis * (1.0 - self.design_accuracy)
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), HarnessError> {
        if self.samples == 0 {
            return Err(HarnessError::Configuration(
                "samples must be > 0".to_string(),
            ));
        }

        if self.domain_start.is_nan()
            || self.domain_end.is_nan()
            || self.domain_end <= self.domain_start
        {
            return Err(HarnessError::Configuration(format!(
                "domain must be non-empty, got [{}, {}]",
                self.domain_start, self.domain_end
            )));
        }

        if self.lowest.is_nan() || self.highest.is_nan() || self.highest <= self.lowest {
            return Err(HarnessError::Configuration(format!(
                "highest ({}) must exceed lowest ({})",
                self.highest, self.lowest
            )));
        }

        if self.alpha_steps == 0 {
            return Err(HarnessError::Configuration(
                "alpha_steps must be > 0".to_string(),
            ));
        }

        if self.trials == 0 {
            return Err(HarnessError::Configuration(
                "trials must be > 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.design_accuracy) {
            return Err(HarnessError::Configuration(format!(
                "design_accuracy must be in [0, 1], got {}",
                self.design_accuracy
            )));
        }

        if !(0.0..=1.0).contains(&self.significance_level) {
            return Err(HarnessError::Configuration(format!(
                "significance_level must be in [0, 1], got {}",
                self.significance_level
            )));
        }

        if !self.snr_db.is_finite() || !self.cutoff.is_finite() {
            return Err(HarnessError::Configuration(
                "snr_db and cutoff must be finite".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration for the standalone analysis of recorded results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Literal design target as a raw error count
    pub target_errors: f64,

    /// Length error counts are reported against
    pub accuracy_basis: f64,

    /// Significance level for the conclusion
    pub significance_level: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_errors: 9.0,
            accuracy_basis: 100.0,
            significance_level: 0.05,
        }
    }
}

impl AnalysisConfig {
    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), HarnessError> {
        if !self.target_errors.is_finite() || self.target_errors < 0.0 {
            return Err(HarnessError::Configuration(format!(
                "target_errors must be a non-negative number, got {}",
                self.target_errors
            )));
        }

        if !(0.0..=1.0).contains(&self.significance_level) {
            return Err(HarnessError::Configuration(format!(
                "significance_level must be in [0, 1], got {}",
                self.significance_level
            )));
        }

        Ok(())
    }
}
