//! Run phases and progress events

use std::fmt;
use std::time::Duration;

/// Orchestrator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Init,
    RunningSuite { suite: usize },
    RunningCase { suite: usize, case: usize },
    Aggregating,
    Reporting,
    Done,
    /// Terminal; reachable from any running state
    Failed,
}

impl RunPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunPhase::Done | RunPhase::Failed)
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::Init => write!(f, "init"),
            RunPhase::RunningSuite { suite } => write!(f, "running suite #{}", suite + 1),
            RunPhase::RunningCase { suite, case } => {
                write!(f, "running case #{} of suite #{}", case + 1, suite + 1)
            }
            RunPhase::Aggregating => write!(f, "aggregating"),
            RunPhase::Reporting => write!(f, "reporting"),
            RunPhase::Done => write!(f, "done"),
            RunPhase::Failed => write!(f, "failed"),
        }
    }
}

/// Progress event emitted while a benchmark runs
#[derive(Debug, Clone, PartialEq)]
pub enum BenchmarkProgress {
    SuiteStarted {
        suite: String,
        /// 0-based position among the suites that will run
        index: usize,
        total: usize,
    },
    CaseStarted {
        suite: String,
        case: String,
        index: usize,
        total: usize,
    },
    CaseCompleted {
        suite: String,
        case: String,
        duration: Duration,
        cost: f64,
        average_rating: f64,
    },
    SuiteCompleted {
        suite: String,
        cases: usize,
    },
    Failed {
        phase: RunPhase,
        error: String,
    },
}

/// Callback for progress updates
pub type ProgressCallback = Box<dyn Fn(BenchmarkProgress) + Send + Sync>;
