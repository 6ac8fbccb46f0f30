//! End-to-end analysis pipelines
//!
//! Two entry points produce the same class of report:
//! - [`simulate_and_analyze`] runs the trials and tests the generated error
//!   counts (two-sided one-sample tests against the percentage-derived target)
//! - [`analyze_historical`] tests previously recorded error counts
//!   (one-sided "greater" tests against a literal error-count target)
//!
//! The two targets are kept as separate settings; they are not assumed to be
//! in the same units.

use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, SimulationConfig};
use crate::error::{HarnessError, Result};
use crate::historical::HistoricalDataset;
use crate::results::{as_samples, error_ratio, ResultSet};
use crate::rng::RandomStream;
use crate::runner::TrialRunner;
use crate::stats::{one_sample_t_test, welch_t_test, GroupSummary, SignificanceReport, Tail};

/// Decision drawn from the significance reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conclusion {
    /// Welch p-value below the significance level and the complex detector
    /// has the lower mean error count
    pub complex_outperforms: bool,

    /// Simple detector's mean error count is within the design target
    pub simple_meets_target: bool,

    /// Complex detector's mean error count is within the design target
    pub complex_meets_target: bool,
}

impl Conclusion {
    fn derive(
        simple: &GroupSummary,
        complex: &GroupSummary,
        welch: &SignificanceReport,
        target: f64,
        significance_level: f64,
    ) -> Self {
        Self {
            complex_outperforms: welch.is_significant(significance_level)
                && complex.mean < simple.mean,
            simple_meets_target: simple.mean <= target,
            complex_meets_target: complex.mean <= target,
        }
    }
}

/// Significance reports shared by both entry points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub simple: GroupSummary,
    pub complex: GroupSummary,

    /// Total simple errors over total complex errors
    pub error_ratio: Option<f64>,

    /// Welch two-sided test, simple vs. complex
    pub welch: SignificanceReport,

    /// Simple detector against the design target
    pub simple_vs_target: SignificanceReport,

    /// Complex detector against the design target
    pub complex_vs_target: SignificanceReport,

    /// Design target as an error count
    pub target: f64,

    pub conclusion: Conclusion,
}

/// Report of the simulation-and-analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    pub results: ResultSet,
    pub comparison: Comparison,
}

/// Report of the standalone analysis of recorded results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalReport {
    pub config: AnalysisConfig,
    pub comparison: Comparison,
}

/// Compare two groups of error counts
pub fn compare(
    simple_counts: &[usize],
    complex_counts: &[usize],
    target: f64,
    tail: Tail,
    accuracy_basis: f64,
    significance_level: f64,
) -> Result<Comparison> {
    let simple = GroupSummary::from_counts("simple", simple_counts, accuracy_basis)?;
    let complex = GroupSummary::from_counts("complex", complex_counts, accuracy_basis)?;

    let simple_samples = as_samples(simple_counts);
    let complex_samples = as_samples(complex_counts);

    let welch = welch_t_test(&simple_samples, &complex_samples)?;
    let simple_vs_target = one_sample_t_test(&simple_samples, target, tail)?;
    let complex_vs_target = one_sample_t_test(&complex_samples, target, tail)?;

    let error_ratio = error_ratio(simple_counts, complex_counts);

    let conclusion = Conclusion::derive(&simple, &complex, &welch, target, significance_level);

    Ok(Comparison {
        simple,
        complex,
        error_ratio,
        welch,
        simple_vs_target,
        complex_vs_target,
        target,
        conclusion,
    })
}

/// Run every trial, then test the generated error counts
///
/// Sequential by default; `config.parallel` switches to per-trial
/// sub-streams.
pub fn simulate_and_analyze(config: &SimulationConfig) -> Result<SimulationReport> {
    let runner = TrialRunner::new(config.clone())?;

    tracing::info!(
        trials = config.trials,
        seed = config.seed,
        parallel = config.parallel,
        "Starting simulation"
    );
    let results = if config.parallel {
        runner.run_parallel(config.seed)?
    } else {
        runner.run(&mut RandomStream::new(config.seed))?
    };

    let comparison = compare(
        &results.simple_errors(),
        &results.complex_errors(),
        config.design_target(),
        Tail::TwoSided,
        config.accuracy_basis,
        config.significance_level,
    )?;

    Ok(SimulationReport {
        config: config.clone(),
        results,
        comparison,
    })
}

/// Test recorded error counts against a literal target
pub fn analyze_historical(
    dataset: &HistoricalDataset,
    config: &AnalysisConfig,
) -> Result<HistoricalReport> {
    analyze_historical_with_tail(dataset, config, Tail::Greater)
}

/// [`analyze_historical`] with an explicit alternative for the one-sample tests
pub fn analyze_historical_with_tail(
    dataset: &HistoricalDataset,
    config: &AnalysisConfig,
    tail: Tail,
) -> Result<HistoricalReport> {
    config.validate()?;
    if dataset.simple.is_empty() || dataset.complex.is_empty() {
        return Err(HarnessError::DegenerateInput(
            "historical dataset is empty".to_string(),
        ));
    }
    tracing::info!(
        simple = dataset.simple.len(),
        complex = dataset.complex.len(),
        target = config.target_errors,
        "Analyzing recorded results"
    );

    let comparison = compare(
        &dataset.simple,
        &dataset.complex,
        config.target_errors,
        tail,
        config.accuracy_basis,
        config.significance_level,
    )?;

    Ok(HistoricalReport {
        config: config.clone(),
        comparison,
    })
}
