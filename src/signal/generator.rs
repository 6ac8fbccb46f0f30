// Clean reference signal and ground-truth labels

use std::f64::consts::PI;

use crate::config::SimulationConfig;
use crate::error::{HarnessError, Result};

/// Clean signal of one trial together with its time grid and labels
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSignal {
    /// Time grid the signal is sampled on
    pub time: Vec<f64>,

    /// Clean blood sugar levels
    pub levels: Vec<f64>,

    /// `true` where the clean level is below the cutoff
    pub ground_truth: Vec<bool>,
}

impl GeneratedSignal {
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Deterministic generator of the periodic reference waveform
///
/// `level(t) = (high − low) · (sin(t / 2π) + 1) / 2 + low`
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    lowest: f64,
    highest: f64,
    domain_start: f64,
    domain_end: f64,
    samples: usize,
    cutoff: f64,
}

impl SignalGenerator {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            lowest: config.lowest,
            highest: config.highest,
            domain_start: config.domain_start,
            domain_end: config.domain_end,
            samples: config.samples,
            cutoff: config.cutoff,
        }
    }

    /// Produce the clean signal and its labels
    ///
    /// Does not consume randomness. Fails only on an invalid grid or range.
    pub fn generate(&self) -> Result<GeneratedSignal> {
        if self.samples == 0 {
            return Err(HarnessError::Configuration(
                "sample count must be positive".to_string(),
            ));
        }
        if self.domain_start.is_nan()
            || self.domain_end.is_nan()
            || self.domain_end <= self.domain_start
        {
            return Err(HarnessError::Configuration(format!(
                "signal domain [{}, {}] is empty",
                self.domain_start, self.domain_end
            )));
        }
        if self.highest <= self.lowest {
            return Err(HarnessError::Configuration(format!(
                "signal range [{}, {}] is empty",
                self.lowest, self.highest
            )));
        }

        let time = linspace(self.domain_start, self.domain_end, self.samples);
        let span = self.highest - self.lowest;
        let levels: Vec<f64> = time
            .iter()
            .map(|t| span * ((t / (2.0 * PI)).sin() + 1.0) / 2.0 + self.lowest)
            .collect();
        let ground_truth = levels.iter().map(|&level| level < self.cutoff).collect();

        Ok(GeneratedSignal {
            time,
            levels,
            ground_truth,
        })
    }
}

/// `count` evenly spaced points over `[start, end]`, both ends included
///
/// The last point is pinned to `end` exactly.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut points: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            points[count - 1] = end;
            points
        }
    }
}
