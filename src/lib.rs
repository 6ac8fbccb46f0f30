//! hypoalert - Synthetic benchmark of hypoglycemia threshold detectors
//!
//! This library generates a periodic blood sugar signal, perturbs it with
//! noise calibrated to a target SNR, and compares a direct threshold detector
//! against a smoothed one whose smoothing factor is tuned per trial. Welch and
//! one-sample t-tests turn the per-trial error counts into a conclusion.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod historical;
pub mod output;
pub mod results;
pub mod rng;
pub mod runner;
pub mod scorer;
pub mod signal;
pub mod stats;
pub mod tuner;

pub use error::{HarnessError, Result};
