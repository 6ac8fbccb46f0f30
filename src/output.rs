//! Human-readable and JSON rendering of analysis reports

use serde::Serialize;

use crate::analysis::{Comparison, HistoricalReport, SimulationReport};
use crate::results::ResultSet;
use crate::stats::{GroupSummary, SignificanceReport};

/// Render any report as pretty JSON
pub fn to_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// One line per trial, in trial order
pub fn render_trials(results: &ResultSet) -> String {
    let mut out = String::new();
    for t in results.trials() {
        out.push_str(&format!(
            "Trial {}: Simple ({}) & Complex ({}); Filter Alpha ({})\n",
            t.trial, t.simple_errors, t.complex_errors, t.alpha
        ));
    }
    out
}

/// Full text report of a simulation run
pub fn render_simulation_text(report: &SimulationReport) -> String {
    let mut out = render_trials(&report.results);
    out.push('\n');

    out.push_str(&format!(
        "Simple errors:  {:?}\n",
        report.results.simple_errors()
    ));
    out.push_str(&format!(
        "Complex errors: {:?}\n\n",
        report.results.complex_errors()
    ));

    out.push_str(&render_comparison(&report.comparison, report.config.significance_level));
    out
}

/// Full text report of the standalone historical analysis
pub fn render_historical_text(report: &HistoricalReport) -> String {
    render_comparison(&report.comparison, report.config.significance_level)
}

fn render_comparison(c: &Comparison, significance_level: f64) -> String {
    let mut out = String::new();

    match c.error_ratio {
        Some(ratio) => out.push_str(&format!("Error ratio (simple / complex): {}\n", ratio)),
        None => out.push_str("Error ratio (simple / complex): undefined (no complex errors)\n"),
    }

    out.push_str("\n📊 Detectors:\n");
    out.push_str(&render_group(&c.simple));
    out.push_str(&render_group(&c.complex));

    out.push_str(&format!(
        "\n🔬 Significance (target = {} errors, alpha = {}):\n",
        c.target, significance_level
    ));
    out.push_str(&render_test("Welch's t-test (simple vs complex)", &c.welch));
    out.push_str(&render_test("Simple vs target", &c.simple_vs_target));
    out.push_str(&render_test("Complex vs target", &c.complex_vs_target));

    out.push('\n');
    if c.conclusion.complex_outperforms {
        out.push_str("✅ COMPLEX DETECTOR OUTPERFORMS SIMPLE DETECTOR\n");
    } else {
        out.push_str("❌ NO SIGNIFICANT IMPROVEMENT FROM THE COMPLEX DETECTOR\n");
    }
    out.push_str(&format!(
        "   simple meets target: {}, complex meets target: {}\n",
        yes_no(c.conclusion.simple_meets_target),
        yes_no(c.conclusion.complex_meets_target)
    ));

    out
}

fn render_group(g: &GroupSummary) -> String {
    format!(
        "  {:<8} n={} mean={:.4} std={:.4} median={:.1} cv={:.3} accuracy={:.4}%\n",
        g.name, g.n, g.mean, g.std_dev, g.median, g.coefficient_of_variation, g.accuracy
    )
}

fn render_test(label: &str, report: &SignificanceReport) -> String {
    let df = report
        .df
        .map(|df| format!(", df={:.2}", df))
        .unwrap_or_default();
    format!(
        "  {} [{}]: t={}, p={:e}{}\n",
        label, report.tail, report.statistic, report.pvalue, df
    )
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
