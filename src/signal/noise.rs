// Additive Gaussian noise calibrated to a target SNR
//
// The noise amplitude is derived from the clean signal's mean level:
//   max_noise = sqrt(from_db(to_db(mean) − snr_db))
// and samples are drawn from N(−max_noise, max_noise²). The negative mean
// biases every observation downward; it is kept as-is so results stay
// comparable with previously recorded runs.

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};
use crate::rng::RandomStream;

/// Power ratio to decibels
pub fn to_db(x: f64) -> f64 {
    10.0 * x.log10()
}

/// Decibels to power ratio
pub fn from_db(x: f64) -> f64 {
    10.0_f64.powf(x / 10.0)
}

/// SNR of a signal under the `(mean / std)²` definition, in dB
///
/// Uses the population standard deviation. Returns `None` for an empty or
/// constant signal.
pub fn estimate_snr_db(signal: &[f64]) -> Option<f64> {
    if signal.is_empty() {
        return None;
    }
    let n = signal.len() as f64;
    let mean = signal.iter().sum::<f64>() / n;
    let variance = signal.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    if variance <= 0.0 {
        return None;
    }

    Some(to_db(mean.powi(2) / variance))
}

/// Noise parameters derived for one trial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseParameters {
    /// Target SNR in dB
    pub snr_db: f64,

    /// Mean level of the clean signal
    pub mean_level: f64,

    /// Standard deviation of the noise (its mean is `−max_noise`)
    pub max_noise: f64,
}

impl NoiseParameters {
    /// Derive the noise amplitude for `signal` at `snr_db`
    pub fn derive(signal: &[f64], snr_db: f64) -> Result<Self> {
        if signal.is_empty() {
            return Err(HarnessError::DegenerateInput(
                "cannot derive noise for an empty signal".to_string(),
            ));
        }

        let mean_level = signal.iter().sum::<f64>() / signal.len() as f64;
        if mean_level.is_nan() || mean_level <= 0.0 {
            return Err(HarnessError::DegenerateInput(format!(
                "mean signal level must be positive for dB conversion, got {}",
                mean_level
            )));
        }

        let max_noise = from_db(to_db(mean_level) - snr_db).sqrt();

        Ok(Self {
            snr_db,
            mean_level,
            max_noise,
        })
    }
}

/// Perturbs a clean signal to reach a target SNR
#[derive(Debug, Clone)]
pub struct NoiseInjector {
    snr_db: f64,
}

impl NoiseInjector {
    pub fn new(snr_db: f64) -> Self {
        Self { snr_db }
    }

    /// Add calibrated noise to `signal`, consuming `signal.len()` draws
    pub fn inject(&self, signal: &[f64], stream: &mut RandomStream) -> Result<Vec<f64>> {
        let params = NoiseParameters::derive(signal, self.snr_db)?;
        let noise = stream.gaussian(-params.max_noise, params.max_noise, signal.len())?;
        let observation: Vec<f64> = signal.iter().zip(noise).map(|(s, n)| s + n).collect();

        tracing::debug!(
            mean_level = params.mean_level,
            max_noise = params.max_noise,
            clean_snr_db = ?estimate_snr_db(signal),
            noisy_snr_db = ?estimate_snr_db(&observation),
            "Injected noise"
        );

        Ok(observation)
    }
}
