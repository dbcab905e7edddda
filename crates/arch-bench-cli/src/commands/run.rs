//! `arch-bench run`

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, bail};
use arch_bench_core::{DefaultProviderFactory, Settings};
use arch_bench_eval::{
    BenchmarkLoader, BenchmarkRunner, ConsoleEmitter, EvaluatorConfig, ReportFormat, save_results,
};
use tracing::debug;

use crate::console::{CliConsole, Stream};

/// Resolved arguments of the run command
pub struct RunArgs {
    pub benchmark: String,
    pub test_suite: Option<String>,
    pub format: ReportFormat,
    pub output_dir: Option<PathBuf>,
    pub eval_provider: Option<String>,
    pub eval_model: Option<String>,
    pub timeout: Option<u64>,
    pub verbose: bool,
}

impl RunArgs {
    /// Fold flag overrides into the environment settings
    pub fn apply(&self, mut settings: Settings) -> Result<Settings> {
        if let Some(provider) = &self.eval_provider {
            settings.eval_provider = provider.clone();
        }
        if let Some(model) = &self.eval_model {
            settings.eval_model = model.clone();
        }
        if let Some(secs) = self.timeout {
            if secs == 0 {
                bail!("--timeout must be at least 1 second");
            }
            settings.call_timeout = Duration::from_secs(secs);
        }
        Ok(settings)
    }

    /// Status console; JSON reports own stdout, so status moves to stderr
    pub fn console(&self) -> CliConsole {
        let stream = match self.format {
            ReportFormat::Json => Stream::Stderr,
            _ => Stream::Stdout,
        };
        CliConsole::new(self.verbose).with_stream(stream)
    }
}

/// Load the benchmark, run it and report
pub async fn execute(args: RunArgs, settings: Settings) -> Result<()> {
    let console = args.console();
    let settings = args.apply(settings)?;

    let loader = BenchmarkLoader::new(&settings.benchmarks_dir, &args.benchmark)?;
    let config = loader.load(EvaluatorConfig::new(
        settings.eval_provider.clone(),
        settings.eval_model.clone(),
    ))?;
    debug!(
        benchmark = %config.name,
        suites = config.test_suites.len(),
        cases = config.case_count(),
        "benchmark loaded"
    );

    console.print_header(&format!("Benchmark: {}", config.name));
    console.info(&format!(
        "judge: {}/{}, call timeout: {}s",
        settings.eval_provider,
        settings.eval_model,
        settings.call_timeout.as_secs()
    ));

    let call_timeout = settings.call_timeout;
    let factory = Arc::new(DefaultProviderFactory::new(settings)?);
    let emitter = Arc::new(ConsoleEmitter::new(args.format));
    let mut runner = BenchmarkRunner::new(config, factory, emitter)?.with_call_timeout(call_timeout);

    runner.set_progress_callback(Box::new(move |event| console.print_progress(&event)));

    let benchmark = runner.run_benchmark(args.test_suite.as_deref()).await?;

    if let Some(suite) = args.test_suite.as_deref().filter(|s| !s.is_empty()) {
        if benchmark.is_empty() {
            console.warn(&format!(
                "no test suite named '{}' in benchmark '{}'",
                suite, args.benchmark
            ));
        }
    }

    if let Some(dir) = &args.output_dir {
        let path = save_results(&benchmark, dir)?;
        console.success(&format!("results saved to {}", path.display()));
    }

    Ok(())
}
