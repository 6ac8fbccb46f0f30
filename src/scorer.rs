//! Label mismatch scoring

use crate::error::{HarnessError, Result};

/// Count the indices where `output` and `ground_truth` disagree
///
/// Ground truth is always passed explicitly. Sequences of unequal length are
/// rejected rather than truncated.
///
/// # Example
/// ```
/// use hypoalert::scorer::score;
///
/// let errors = score(&[true, false, true], &[true, true, false]).unwrap();
/// assert_eq!(errors, 2);
/// ```
pub fn score(output: &[bool], ground_truth: &[bool]) -> Result<usize> {
    if output.len() != ground_truth.len() {
        return Err(HarnessError::LengthMismatch {
            expected: ground_truth.len(),
            actual: output.len(),
        });
    }

    Ok(output
        .iter()
        .zip(ground_truth)
        .filter(|(predicted, actual)| predicted != actual)
        .count())
}
