//! Command routing logic for CLI

use anyhow::Result;
use arch_bench_core::Settings;

use crate::args::{Cli, Commands};
use crate::commands::{self, RunArgs};

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> Result<()> {
    let mut settings = Settings::from_env()?;
    if let Some(dir) = cli.benchmarks_dir {
        settings.benchmarks_dir = dir;
    }

    match cli.command {
        Commands::Run {
            benchmark,
            test_suite,
            format,
            output_dir,
            eval_provider,
            eval_model,
            timeout,
        } => {
            let args = RunArgs {
                benchmark,
                test_suite,
                format,
                output_dir,
                eval_provider,
                eval_model,
                timeout,
                verbose: cli.verbose,
            };
            commands::run::execute(args, settings).await
        }
        Commands::List { target } => commands::list::execute(&target, &settings),
    }
}
