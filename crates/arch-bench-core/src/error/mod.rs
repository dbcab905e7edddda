//! Error taxonomy for the benchmark pipeline
//!
//! Every failure in the gateway, invocation, judge and aggregation stages is a
//! [`BenchError`]. There is no local recovery: errors are wrapped with the
//! enclosing suite/case names and propagated to the caller.

mod constructors;
mod conversions;
mod sanitize;
mod types;

pub use sanitize::sanitize_error_body;
pub use types::{BenchError, BenchResult};

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn wrappers_name_suite_and_case() {
        let err = BenchError::provider("openai", "connection refused")
            .in_case("vision", "diagram-1")
            .in_suite("vision");

        let message = err.to_string();
        assert!(message.contains("test suite vision failed"));
        assert!(message.contains("vision/diagram-1"));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn root_cause_sees_through_wrappers() {
        let err = BenchError::pricing_unknown("gpt-9")
            .in_case("s", "c")
            .in_suite("s");
        assert_eq!(err.root_cause().error_code(), "BENCH_PRICING_UNKNOWN");
        assert!(err.source().is_some());
    }

    #[test]
    fn reasoning_failure_keeps_its_source() {
        let err = BenchError::reasoning(BenchError::Timeout { seconds: 5 });
        assert_eq!(err.error_code(), "BENCH_REASONING_FAILED");
        let source = err.source().expect("source");
        assert!(source.to_string().contains("5 seconds"));
    }

    #[test]
    fn transient_classification() {
        assert!(BenchError::provider_status("openai", 429, "slow down").is_transient());
        assert!(BenchError::provider_status("openai", 503, "busy").is_transient());
        assert!(!BenchError::provider_status("openai", 401, "bad key").is_transient());
        assert!(!BenchError::score_missing("no score").is_transient());
        assert!(BenchError::Timeout { seconds: 1 }.in_case("s", "c").is_transient());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: BenchError = io.into();
        assert_eq!(err.error_code(), "BENCH_IO");
    }
}
