//! `arch-bench list`

use anyhow::Result;
use arch_bench_core::{DefaultProviderFactory, PricingTable, ProviderKind, Settings};
use arch_bench_eval::{list_benchmarks, list_test_suites};
use colored::*;

use crate::args::ListTarget;

pub fn execute(target: &ListTarget, settings: &Settings) -> Result<()> {
    match target {
        ListTarget::Benchmarks => benchmarks(settings),
        ListTarget::TestSuites { benchmark } => test_suites(settings, benchmark),
        ListTarget::Providers => {
            let factory = DefaultProviderFactory::new(settings.clone())?;
            print!("{}", providers_table(&factory)?);
            Ok(())
        }
    }
}

fn benchmarks(settings: &Settings) -> Result<()> {
    let names = list_benchmarks(&settings.benchmarks_dir)?;
    if names.is_empty() {
        println!(
            "No benchmarks found in {}.",
            settings.benchmarks_dir.display()
        );
        return Ok(());
    }

    println!("Available benchmarks:\n");
    for name in &names {
        println!("  {}", name.bold());
    }
    println!("\nTotal: {} benchmarks", names.len());
    Ok(())
}

fn test_suites(settings: &Settings, benchmark: &str) -> Result<()> {
    let names = list_test_suites(&settings.benchmarks_dir, benchmark)?;
    if names.is_empty() {
        println!("Benchmark '{}' has no test suites.", benchmark);
        return Ok(());
    }

    println!("Test suites of {}:\n", benchmark.bold());
    for name in &names {
        println!("  {}", name);
    }
    println!("\nTotal: {} test suites", names.len());
    Ok(())
}

/// Provider/model catalogue with prices and credential status
fn providers_table(factory: &DefaultProviderFactory) -> Result<String> {
    let settings = factory.settings();
    let pricing = PricingTable::global();
    let mut out = String::new();

    out.push_str(&format!(
        "{:<10} {:<28} {:>12} {:>12}\n",
        "Provider", "Model", "Input $/1M", "Output $/1M"
    ));
    out.push_str(&format!("{:-<65}\n", ""));

    for kind in ProviderKind::all() {
        for model in factory.catalogue(kind.name())?.list_models() {
            let Some(entry) = pricing.get(&model) else {
                continue;
            };
            out.push_str(&format!(
                "{:<10} {:<28} {:>12.2} {:>12.2}\n",
                kind.name(),
                model,
                entry.price.input,
                entry.price.output
            ));
        }

        let key = settings.provider_key(kind.name());
        let status = match (key.masked_key(), key.env_var_name) {
            (Some(masked), Some(var)) => format!("{} ({})", masked, var),
            (Some(masked), None) => masked,
            _ => "not set".to_string(),
        };
        out.push_str(&format!("\n{} API key: {}\n", kind.name(), status));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(settings: Settings) -> String {
        providers_table(&DefaultProviderFactory::new(settings).unwrap()).unwrap()
    }

    #[test]
    fn test_providers_table_lists_priced_models() {
        let table = render(Settings::default());
        assert!(table.contains("gpt-4o-mini"));
        assert!(table.contains("openai API key: not set"));
        assert!(table.lines().any(|l| l.starts_with("openai") && l.contains("0.15")));
    }

    #[test]
    fn test_providers_table_masks_key() {
        let settings = Settings::default().with_provider_key("openai", "sk-abcdefghijklmnop");
        let table = render(settings);
        assert!(!table.contains("sk-abcdefghijklmnop"));
        assert!(!table.contains("not set"));
    }
}
