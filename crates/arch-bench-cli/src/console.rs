//! CLI console utilities

use arch_bench_core::BenchError;
use arch_bench_eval::BenchmarkProgress;
use arch_bench_eval::report::format_duration;
use colored::*;

/// Where status output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    /// Keeps stdout free for machine-readable reports
    Stderr,
}

/// CLI console for formatted output
#[derive(Debug, Clone, Copy)]
pub struct CliConsole {
    verbose: bool,
    stream: Stream,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            stream: Stream::Stdout,
        }
    }

    /// Send status output to `stream`
    pub const fn with_stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }

    fn emit(&self, line: &str) {
        match self.stream {
            Stream::Stdout => println!("{}", line),
            Stream::Stderr => eprintln!("{}", line),
        }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            self.emit(&format!("{} {}", "ℹ".blue().bold(), message));
        }
    }

    pub fn success(&self, message: &str) {
        self.emit(&format!("{} {}", "✓".green().bold(), message.green()));
    }

    pub fn warn(&self, message: &str) {
        self.emit(&format!("{} {}", "⚠".yellow().bold(), message.yellow()));
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    pub fn print_header(&self, title: &str) {
        self.emit("");
        self.emit(&format!("{}", title.bold().underline()));
        self.emit(&format!("{}", "=".repeat(title.chars().count()).dimmed()));
    }

    /// Render one orchestrator event
    pub fn print_progress(&self, event: &BenchmarkProgress) {
        if let Some(line) = self.progress_line(event) {
            self.emit(&line);
        }
    }

    /// Text for one orchestrator event; `None` when it is not shown
    pub fn progress_line(&self, event: &BenchmarkProgress) -> Option<String> {
        match event {
            BenchmarkProgress::SuiteStarted { suite, index, total } => Some(format!(
                "\n{} {}",
                format!("[{}/{}]", index + 1, total).cyan().bold(),
                format!("Running test suite: {}", suite).bold()
            )),
            BenchmarkProgress::CaseStarted {
                case, index, total, ..
            } => Some(format!(
                "  {} {} {}",
                format!("({}/{})", index + 1, total).dimmed(),
                "→".dimmed(),
                case
            )),
            BenchmarkProgress::CaseCompleted {
                case,
                duration,
                cost,
                average_rating,
                ..
            } => Some(format!(
                "  {} {} {}",
                "✓".green().bold(),
                case,
                format!(
                    "rating {:.2}, {}, ${:.6}",
                    average_rating,
                    format_duration(*duration),
                    cost
                )
                .dimmed()
            )),
            BenchmarkProgress::SuiteCompleted { suite, cases } => self
                .verbose
                .then(|| format!("{} test suite {} completed ({} cases)", "ℹ".blue().bold(), suite, cases)),
            // The error itself is reported once by the caller
            BenchmarkProgress::Failed { phase, .. } => Some(format!(
                "{} {}",
                "✗".red().bold(),
                format!("aborted during {}", phase).red()
            )),
        }
    }
}

/// Dimmed detail line printed under a fatal error
pub fn error_footer(err: &BenchError) -> String {
    let root = err.root_cause();
    if err.is_transient() {
        format!("code: {} (transient, a later run may succeed)", root.error_code())
    } else {
        format!("code: {}", root.error_code())
    }
}
