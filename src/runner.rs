//! Trial orchestration
//!
//! One trial runs generator → noise → simple detector → tuner → scoring and
//! yields a [`TrialResult`]. The sequential run consumes a single
//! [`RandomStream`] in trial order and is the reference for reproducibility.
//! The parallel run gives each trial the sub-stream `base_seed + trial`; it
//! is reproducible with itself but not with the sequential run.

use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::detector::{Detector, FilteredDetector, SimpleDetector};
use crate::error::{HarnessError, Result};
use crate::results::{ResultSet, TrialResult};
use crate::rng::RandomStream;
use crate::scorer::score;
use crate::signal::{NoiseInjector, SignalGenerator};
use crate::tuner::{AlphaGrid, ExhaustiveSearch, ParameterTuner, TuningPoint};

/// Intermediate arrays of a single trial, for plotting consumers
#[derive(Debug, Clone)]
pub struct TrialTrace {
    pub time: Vec<f64>,
    pub clean: Vec<f64>,
    pub noisy: Vec<f64>,
    /// Noisy observation smoothed with the tuned alpha
    pub smoothed: Vec<f64>,
    pub ground_truth: Vec<bool>,
    pub result: TrialResult,
    pub tuning_curve: Vec<TuningPoint>,
}

/// Runs the detector benchmark trial by trial
pub struct TrialRunner {
    config: SimulationConfig,
    generator: SignalGenerator,
    injector: NoiseInjector,
    simple: SimpleDetector,
    tuner: ParameterTuner,
}

impl TrialRunner {
    /// Build a runner; fails on invalid configuration
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            generator: SignalGenerator::new(&config),
            injector: NoiseInjector::new(config.snr_db),
            simple: SimpleDetector::new(config.cutoff),
            tuner: ParameterTuner::exhaustive(config.cutoff, config.alpha_steps)?,
            config,
        })
    }

    /// Run one trial, consuming `samples` draws from `stream`
    pub fn run_trial(&self, trial: usize, stream: &mut RandomStream) -> Result<TrialResult> {
        let signal = self.generator.generate()?;
        let observation = self.injector.inject(&signal.levels, stream)?;

        let simple_output = self.simple.classify(&observation);
        let simple_errors = score(&simple_output, &signal.ground_truth)?;

        let tuned = self.tuner.tune(&observation, &signal.ground_truth)?;

        let result = TrialResult {
            trial,
            simple_errors,
            complex_errors: tuned.best_errors,
            alpha: tuned.best_alpha,
        };
        tracing::info!(
            trial,
            simple = result.simple_errors,
            complex = result.complex_errors,
            alpha = result.alpha,
            "Trial complete"
        );
        if result.complex_errors > result.simple_errors {
            tracing::warn!(trial, "Filtered detector did worse than the simple detector");
        }

        Ok(result)
    }

    /// Run all configured trials sequentially on one stream
    ///
    /// The first failing trial aborts the run.
    pub fn run(&self, stream: &mut RandomStream) -> Result<ResultSet> {
        let mut results = ResultSet::with_capacity(self.config.trials);
        for trial in 0..self.config.trials {
            results.push(self.run_trial(trial, stream)?);
        }
        Ok(results)
    }

    /// Run all configured trials in parallel, one sub-stream per trial
    pub fn run_parallel(&self, base_seed: u64) -> Result<ResultSet> {
        let results: Vec<TrialResult> = (0..self.config.trials)
            .into_par_iter()
            .map(|trial| {
                let mut stream = RandomStream::for_trial(base_seed, trial);
                self.run_trial(trial, &mut stream)
            })
            .collect::<Result<_>>()?;

        Ok(results.into_iter().collect())
    }

    /// Run one trial and keep every intermediate array
    pub fn inspect_trial(&self, trial: usize, stream: &mut RandomStream) -> Result<TrialTrace> {
        let signal = self.generator.generate()?;
        let noisy = self.injector.inject(&signal.levels, stream)?;

        let simple_errors = score(&self.simple.classify(&noisy), &signal.ground_truth)?;

        let recorder = ParameterTuner::new(
            self.config.cutoff,
            AlphaGrid::new(self.config.alpha_steps)?,
            ExhaustiveSearch::recording(),
        );
        let tuned = recorder.tune(&noisy, &signal.ground_truth)?;
        let tuning_curve = tuned.curve.ok_or_else(|| {
            HarnessError::Configuration("recording search returned no curve".to_string())
        })?;

        let smoothed = FilteredDetector::new(self.config.cutoff, tuned.best_alpha)?.smooth(&noisy);

        Ok(TrialTrace {
            time: signal.time,
            clean: signal.levels,
            noisy,
            smoothed,
            ground_truth: signal.ground_truth,
            result: TrialResult {
                trial,
                simple_errors,
                complex_errors: tuned.best_errors,
                alpha: tuned.best_alpha,
            },
            tuning_curve,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            trials: 5,
            alpha_steps: 100,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_run_produces_one_result_per_trial() {
        let runner = TrialRunner::new(small_config()).unwrap();
        let results = runner.run(&mut RandomStream::new(42)).unwrap();

        assert_eq!(results.len(), 5);
        for (i, trial) in results.trials().iter().enumerate() {
            assert_eq!(trial.trial, i);
            assert!((0.0..1.0).contains(&trial.alpha));
            assert!(trial.simple_errors <= 1000);
        }
    }

    #[test]
    fn test_run_consumes_stream_in_order() {
        let runner = TrialRunner::new(small_config()).unwrap();
        let mut stream = RandomStream::new(42);
        runner.run(&mut stream).unwrap();
        assert_eq!(stream.draws(), 5 * 1000);
    }

    #[test]
    fn test_sequential_run_is_deterministic() {
        let runner = TrialRunner::new(small_config()).unwrap();
        let a = runner.run(&mut RandomStream::new(42)).unwrap();
        let b = runner.run(&mut RandomStream::new(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_run_is_deterministic_and_ordered() {
        let runner = TrialRunner::new(small_config()).unwrap();
        let a = runner.run_parallel(42).unwrap();
        let b = runner.run_parallel(42).unwrap();

        assert_eq!(a, b);
        let indices: Vec<usize> = a.trials().iter().map(|t| t.trial).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_parallel_trial_zero_matches_sequential() {
        let runner = TrialRunner::new(small_config()).unwrap();
        let sequential = runner.run(&mut RandomStream::new(42)).unwrap();
        let parallel = runner.run_parallel(42).unwrap();
        assert_eq!(sequential.trials()[0], parallel.trials()[0]);
    }

    #[test]
    fn test_inspect_trial_matches_run_trial() {
        let runner = TrialRunner::new(small_config()).unwrap();

        let trace = runner.inspect_trial(0, &mut RandomStream::new(9)).unwrap();
        let result = runner.run_trial(0, &mut RandomStream::new(9)).unwrap();

        assert_eq!(trace.result, result);
        assert_eq!(trace.noisy.len(), 1000);
        assert_eq!(trace.smoothed.len(), 1000);
        assert_eq!(trace.tuning_curve.len(), 100);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig {
            alpha_steps: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            TrialRunner::new(config),
            Err(HarnessError::Configuration(_))
        ));
    }
}
