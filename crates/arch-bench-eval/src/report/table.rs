//! Fixed-width console tables

use std::time::Duration;

use super::summary::{BenchmarkSummary, SuiteSummary};

/// Table report generator
pub struct TableReporter;

impl TableReporter {
    /// One row per case
    pub fn suite(summary: &SuiteSummary) -> String {
        let mut out = String::new();

        out.push_str(&format!("\nResults for Test Suite: {}\n", summary.name));
        out.push_str(&format!(
            "{:<20} {:<20} {:<15} {:<15} {:<10}\n",
            "TestSuite", "TestCase", "Duration", "Cost", "Rating"
        ));
        out.push_str(&format!("{:-<80}\n", ""));

        for case in &summary.cases {
            out.push_str(&format!(
                "{:<20} {:<20} {:<15} ${:<15.6} {:<10.2}\n",
                case.suite_name,
                case.case_name,
                format_duration(case.duration),
                case.cost,
                case.average_rating
            ));
        }
        out.push('\n');
        out
    }

    /// One row per suite, then the totals
    pub fn benchmark(summary: &BenchmarkSummary) -> String {
        let mut out = String::new();

        out.push_str(&format!("\nBenchmark Results: {}\n", summary.name));
        out.push_str(&format!(
            "{:<20} {:<15} {:<15} {:<10}\n",
            "TestSuite", "Duration", "Cost", "Avg Rating"
        ));
        out.push_str(&format!("{:-<60}\n", ""));

        for suite in &summary.suites {
            out.push_str(&format!(
                "{:<20} {:<15} ${:<15.6} {:<10.2}\n",
                suite.name,
                format_duration(suite.total_duration),
                suite.total_cost,
                suite.average_rating
            ));
        }

        out.push_str(&format!("{:-<60}\n", ""));
        out.push_str("Benchmark Summary:\n");
        out.push_str(&format!(
            "Total Duration: {}\n",
            format_duration(summary.total_duration)
        ));
        out.push_str(&format!("Total Cost:     ${:.6}\n", summary.total_cost));
        out.push_str(&format!("Judge Cost:     ${:.6}\n", summary.evaluation_cost));
        out.push_str(&format!("Average Rating: {:.2}\n", summary.average_rating));
        out.push('\n');
        out
    }
}

/// Compact duration rounded to the millisecond, e.g. `850ms`, `1.25s`, `2m3.5s`
pub fn format_duration(duration: Duration) -> String {
    let millis = (duration.as_micros() + 500) / 1000;
    if millis == 0 {
        return "0s".to_string();
    }
    if millis < 1000 {
        return format!("{}ms", millis);
    }

    let total_secs = millis / 1000;
    let frac = millis % 1000;
    let (mins, secs) = (total_secs / 60, total_secs % 60);

    let secs = if frac == 0 {
        secs.to_string()
    } else {
        format!("{}.{:03}", secs, frac).trim_end_matches('0').to_string()
    };

    if mins > 0 {
        format!("{}m{}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}
