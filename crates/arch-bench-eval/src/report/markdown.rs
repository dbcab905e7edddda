//! Markdown report generation

use super::summary::{BenchmarkSummary, SuiteSummary};
use super::table::format_duration;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    pub fn suite(summary: &SuiteSummary) -> String {
        let mut md = String::new();

        md.push_str(&format!("## Test Suite: {}\n\n", summary.name));
        md.push_str(&format!("- **Model**: {}\n\n", summary.model));
        md.push_str("| Test Case | Duration | Cost | Rating |\n");
        md.push_str("|-----------|----------|------|--------|\n");

        for case in &summary.cases {
            md.push_str(&format!(
                "| {} | {} | ${:.6} | {:.2} |\n",
                escape(&case.case_name),
                format_duration(case.duration),
                case.cost,
                case.average_rating
            ));
        }
        md.push('\n');
        md
    }

    pub fn benchmark(summary: &BenchmarkSummary) -> String {
        let mut md = String::new();

        md.push_str(&format!("# Benchmark Report: {}\n\n", summary.name));

        md.push_str("## Overview\n\n");
        md.push_str(&format!(
            "- **Evaluator**: {} / {}\n",
            summary.eval_provider, summary.eval_model
        ));
        md.push_str(&format!("- **Test Cases**: {}\n", summary.case_count));
        md.push_str(&format!(
            "- **Total Duration**: {}\n",
            format_duration(summary.total_duration)
        ));
        md.push_str(&format!("- **Total Cost**: ${:.6}\n", summary.total_cost));
        md.push_str(&format!("- **Judge Cost**: ${:.6}\n", summary.evaluation_cost));
        md.push_str(&format!(
            "- **Average Rating**: {:.2}\n\n",
            summary.average_rating
        ));

        if summary.suites.is_empty() {
            md.push_str("_No test suites were run._\n");
            return md;
        }

        md.push_str("## Results by Test Suite\n\n");
        md.push_str("| Test Suite | Model | Cases | Duration | Cost | Avg Rating |\n");
        md.push_str("|------------|-------|-------|----------|------|------------|\n");
        for suite in &summary.suites {
            md.push_str(&format!(
                "| {} | {} | {} | {} | ${:.6} | {:.2} |\n",
                escape(&suite.name),
                suite.model,
                suite.cases.len(),
                format_duration(suite.total_duration),
                suite.total_cost,
                suite.average_rating
            ));
        }
        md.push('\n');
        md
    }
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}
