// Synthetic blood sugar signal and its noisy observation
//
// The clean waveform is a pure function of a fixed time grid, so every trial
// sees the same reference signal and ground truth. Only the additive noise
// differs between trials.

mod generator;
mod noise;

pub use generator::{linspace, GeneratedSignal, SignalGenerator};
pub use noise::{estimate_snr_db, from_db, to_db, NoiseInjector, NoiseParameters};
