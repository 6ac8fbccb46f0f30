#![no_main]

use hypoalert::analysis::analyze_historical;
use hypoalert::config::AnalysisConfig;
use hypoalert::historical::HistoricalDataset;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing and analysis must report errors, never panic
        if let Ok(dataset) = HistoricalDataset::from_json_str(input) {
            let _ = analyze_historical(&dataset, &AnalysisConfig::default());
        }
    }
});
