// Statistical significance of detector error counts
//
// Welch's two-sample t-test compares the two detectors; one-sample t-tests
// compare each detector against the design target. Both return a structured
// SignificanceReport instead of positional tuples.
//
// Implementation:
// - statrs provides the Student-t CDF; p-values are taken from the lower tail
//   (F(−|t|)) so that very small p-values keep their precision
// - trueno::Vector and aprender's DescriptiveStats provide the descriptive
//   group summary (median, coefficient of variation)

mod summary;
mod ttest;

pub use summary::GroupSummary;
pub use ttest::{one_sample_t_test, welch_t_test, SignificanceReport, Tail};
