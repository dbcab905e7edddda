//! Benchmark execution

mod invocation;
mod orchestrator;
mod progress;

pub use invocation::{Invocation, encode_attachments, invoke, mime_type_for};
pub use orchestrator::BenchmarkRunner;
pub use progress::{BenchmarkProgress, ProgressCallback, RunPhase};
