// Welch and one-sample t-tests

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{HarnessError, Result};

/// Alternative hypothesis of a one-sample test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Tail {
    /// Mean differs from the target
    TwoSided,
    /// Mean exceeds the target
    Greater,
    /// Mean is below the target
    Less,
}

impl std::fmt::Display for Tail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tail::TwoSided => "two-sided",
            Tail::Greater => "greater",
            Tail::Less => "less",
        };
        f.write_str(name)
    }
}

/// Result of a t-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificanceReport {
    /// t-statistic
    pub statistic: f64,

    /// p-value for `tail`, in [0, 1]
    pub pvalue: f64,

    /// Degrees of freedom (Welch–Satterthwaite for two samples)
    pub df: Option<f64>,

    /// Alternative the p-value refers to
    pub tail: Tail,
}

impl SignificanceReport {
    /// Whether the p-value falls below `significance_level`
    pub fn is_significant(&self, significance_level: f64) -> bool {
        self.pvalue < significance_level
    }
}

/// Welch's two-sided test for equal means under unequal variances
///
/// # Example
/// ```
/// use hypoalert::stats::welch_t_test;
///
/// let baseline = [10.0, 12.0, 11.0, 13.0, 10.0];
/// let current = [25.0, 27.0, 26.0, 28.0, 25.0];
///
/// let report = welch_t_test(&baseline, &current).unwrap();
/// assert!(report.statistic < 0.0);
/// assert!(report.pvalue < 0.05);
/// ```
pub fn welch_t_test(sample_a: &[f64], sample_b: &[f64]) -> Result<SignificanceReport> {
    let a = Moments::of(sample_a, "first sample")?;
    let b = Moments::of(sample_b, "second sample")?;

    let var_a = a.variance / a.n;
    let var_b = b.variance / b.n;
    let standard_error = (var_a + var_b).sqrt();
    if standard_error == 0.0 {
        return Err(HarnessError::DegenerateInput(
            "both samples have zero variance".to_string(),
        ));
    }

    let statistic = (a.mean - b.mean) / standard_error;
    let df = (var_a + var_b).powi(2)
        / (var_a.powi(2) / (a.n - 1.0) + var_b.powi(2) / (b.n - 1.0));

    Ok(SignificanceReport {
        statistic,
        pvalue: pvalue(statistic, df, Tail::TwoSided)?,
        df: Some(df),
        tail: Tail::TwoSided,
    })
}

/// One-sample test of `sample`'s mean against `target`
///
/// # Example
/// ```
/// use hypoalert::stats::{one_sample_t_test, Tail};
///
/// let errors = [5.0, 6.0, 7.0, 6.0, 5.0];
/// let report = one_sample_t_test(&errors, 9.0, Tail::Less).unwrap();
/// assert!(report.pvalue < 0.01);
/// ```
pub fn one_sample_t_test(sample: &[f64], target: f64, tail: Tail) -> Result<SignificanceReport> {
    let moments = Moments::of(sample, "sample")?;
    if moments.variance == 0.0 {
        return Err(HarnessError::DegenerateInput(
            "sample has zero variance".to_string(),
        ));
    }

    let statistic = (moments.mean - target) / (moments.variance.sqrt() / moments.n.sqrt());
    let df = moments.n - 1.0;

    Ok(SignificanceReport {
        statistic,
        pvalue: pvalue(statistic, df, tail)?,
        df: Some(df),
        tail,
    })
}

/// Mean and sample variance (n − 1) of a sample
struct Moments {
    n: f64,
    mean: f64,
    variance: f64,
}

impl Moments {
    fn of(sample: &[f64], label: &str) -> Result<Self> {
        if sample.len() < 2 {
            return Err(HarnessError::DegenerateInput(format!(
                "{} needs at least 2 values for a t-test, got {}",
                label,
                sample.len()
            )));
        }
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(HarnessError::DegenerateInput(format!(
                "{} contains non-finite values",
                label
            )));
        }

        let n = sample.len() as f64;
        let mean = sample.iter().sum::<f64>() / n;
        let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);

        Ok(Self { n, mean, variance })
    }
}

fn pvalue(statistic: f64, df: f64, tail: Tail) -> Result<f64> {
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
        HarnessError::DegenerateInput(format!("invalid Student-t (df={}): {}", df, e))
    })?;

    let p = match tail {
        Tail::TwoSided => 2.0 * dist.cdf(-statistic.abs()),
        Tail::Greater => dist.cdf(-statistic),
        Tail::Less => dist.cdf(statistic),
    };

    Ok(p.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welch_significant_difference() {
        let baseline = [10.0, 12.0, 11.0, 13.0, 10.0];
        let current = [25.0, 27.0, 26.0, 28.0, 25.0];

        let report = welch_t_test(&baseline, &current).unwrap();

        assert!(report.pvalue < 0.05, "p-value {} should be < 0.05", report.pvalue);
        assert!(report.statistic < 0.0);
        assert_eq!(report.tail, Tail::TwoSided);
    }

    #[test]
    fn test_welch_no_difference() {
        let baseline = [10.0, 12.0, 11.0, 13.0, 10.0];
        let current = [11.0, 13.0, 10.0, 12.0, 11.0];

        let report = welch_t_test(&baseline, &current).unwrap();
        assert!(report.pvalue >= 0.05, "p-value {} should be >= 0.05", report.pvalue);
    }

    #[test]
    fn test_welch_identical_samples() {
        let sample = [4.0, 7.0, 5.0, 6.0, 8.0, 5.0];
        let report = welch_t_test(&sample, &sample).unwrap();

        assert_eq!(report.statistic, 0.0);
        assert!((report.pvalue - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_welch_equal_variance_df() {
        // Equal n and variance: Welch df reduces to 2(n − 1)
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 3.0, 4.0, 5.0];
        let report = welch_t_test(&a, &b).unwrap();
        assert!((report.df.unwrap() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_welch_is_antisymmetric() {
        let a = [5.0, 9.0, 8.0, 7.0, 8.0, 5.0];
        let b = [4.0, 7.0, 7.0, 6.0, 7.0, 5.0];

        let ab = welch_t_test(&a, &b).unwrap();
        let ba = welch_t_test(&b, &a).unwrap();

        assert!((ab.statistic + ba.statistic).abs() < 1e-12);
        assert!((ab.pvalue - ba.pvalue).abs() < 1e-12);
    }

    #[test]
    fn test_welch_one_constant_sample_allowed() {
        let report = welch_t_test(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!(report.statistic > 0.0);
    }

    #[test]
    fn test_welch_degenerate_inputs() {
        assert!(matches!(
            welch_t_test(&[1.0], &[1.0, 2.0]),
            Err(HarnessError::DegenerateInput(_))
        ));
        assert!(matches!(
            welch_t_test(&[3.0, 3.0], &[4.0, 4.0]),
            Err(HarnessError::DegenerateInput(_))
        ));
        assert!(welch_t_test(&[], &[]).is_err());
    }

    #[test]
    fn test_one_sample_known_value() {
        // mean 3, s = sqrt(2.5), n = 5: t = (3 − 1) / (sqrt(2.5) / sqrt(5)) = 2·sqrt(2)
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        let report = one_sample_t_test(&sample, 1.0, Tail::TwoSided).unwrap();

        assert!((report.statistic - 2.0 * 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(report.df, Some(4.0));
        // Two-sided p for t = 2.828, df = 4 is about 0.0474
        assert!((report.pvalue - 0.0474).abs() < 1e-3, "p = {}", report.pvalue);
    }

    #[test]
    fn test_one_sample_tails_are_consistent() {
        let sample = [6.0, 8.0, 7.0, 9.0, 6.0, 7.0];

        let two = one_sample_t_test(&sample, 6.5, Tail::TwoSided).unwrap();
        let greater = one_sample_t_test(&sample, 6.5, Tail::Greater).unwrap();
        let less = one_sample_t_test(&sample, 6.5, Tail::Less).unwrap();

        assert!(greater.statistic > 0.0);
        assert!((greater.pvalue + less.pvalue - 1.0).abs() < 1e-12);
        assert!((two.pvalue - 2.0 * greater.pvalue).abs() < 1e-12);
    }

    #[test]
    fn test_one_sample_zero_variance_rejected() {
        let err = one_sample_t_test(&[9.0, 9.0, 9.0], 9.0, Tail::TwoSided).unwrap_err();
        assert!(matches!(err, HarnessError::DegenerateInput(_)));
    }

    #[test]
    fn test_one_sample_too_small() {
        assert!(one_sample_t_test(&[9.0], 9.0, Tail::Greater).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(one_sample_t_test(&[1.0, f64::NAN, 2.0], 0.0, Tail::Less).is_err());
    }

    #[test]
    fn test_is_significant() {
        let report = SignificanceReport {
            statistic: 3.0,
            pvalue: 0.01,
            df: Some(10.0),
            tail: Tail::TwoSided,
        };
        assert!(report.is_significant(0.05));
        assert!(!report.is_significant(0.01));
    }

    #[test]
    fn test_tail_display() {
        assert_eq!(Tail::TwoSided.to_string(), "two-sided");
        assert_eq!(Tail::Greater.to_string(), "greater");
    }
}
