//! Hypoglycemia detectors
//!
//! Both detectors flag samples strictly below a cutoff. The filtered detector
//! first smooths the observation with a two-tap FIR combination of the
//! current and previous *raw* samples:
//!
//! ```text
//! smoothed[0] = obs[0]
//! smoothed[i] = alpha * obs[i] + (1 - alpha) * obs[i - 1]
//! ```
//!
//! This is not an exponential moving average: the previous smoothed value
//! never feeds back.

use crate::error::{HarnessError, Result};

/// Classifies every sample of a noisy observation
pub trait Detector {
    /// Human-readable detector name
    fn name(&self) -> &'static str;

    /// One label per observation sample, `true` = hypoglycemic
    fn classify(&self, observation: &[f64]) -> Vec<bool>;
}

/// Direct threshold on the raw observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleDetector {
    cutoff: f64,
}

impl SimpleDetector {
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }
}

impl Detector for SimpleDetector {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn classify(&self, observation: &[f64]) -> Vec<bool> {
        threshold(observation, self.cutoff)
    }
}

/// Threshold applied after two-tap smoothing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilteredDetector {
    cutoff: f64,
    alpha: f64,
}

impl FilteredDetector {
    /// Create a filtered detector
    ///
    /// Fails with `PreconditionViolation` unless `alpha` lies in `[0, 1]`.
    pub fn new(cutoff: f64, alpha: f64) -> Result<Self> {
        check_alpha(alpha)?;
        Ok(Self { cutoff, alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Smoothed observation with this detector's alpha
    pub fn smooth(&self, observation: &[f64]) -> Vec<f64> {
        smooth(observation, self.alpha)
    }

    /// Classify with an explicit smoothing factor
    ///
    /// Entry point for the tuner, which sweeps alpha without building a
    /// detector per candidate.
    pub fn classify_with_alpha(cutoff: f64, observation: &[f64], alpha: f64) -> Result<Vec<bool>> {
        check_alpha(alpha)?;
        Ok(threshold(&smooth(observation, alpha), cutoff))
    }
}

impl Detector for FilteredDetector {
    fn name(&self) -> &'static str {
        "filtered"
    }

    fn classify(&self, observation: &[f64]) -> Vec<bool> {
        threshold(&self.smooth(observation), self.cutoff)
    }
}

fn check_alpha(alpha: f64) -> Result<()> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(HarnessError::PreconditionViolation(format!(
            "smoothing factor must be in [0, 1], got {}",
            alpha
        )))
    }
}

fn smooth(observation: &[f64], alpha: f64) -> Vec<f64> {
    let mut smoothed = Vec::with_capacity(observation.len());
    if let Some(&first) = observation.first() {
        smoothed.push(first);
    }
    smoothed.extend(
        observation
            .windows(2)
            .map(|pair| alpha * pair[1] + (1.0 - alpha) * pair[0]),
    );
    smoothed
}

fn threshold(levels: &[f64], cutoff: f64) -> Vec<bool> {
    levels.iter().map(|&level| level < cutoff).collect()
}
