mod common;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use arch_bench_eval::{BenchmarkLoader, BenchmarkRunner, EvaluatorConfig, save_results};
use common::*;
use tempfile::TempDir;

fn write(path: &Path, content: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn definition_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("architecture");
    write(&root.join("config.json"), br#"{"description": "Architecture knowledge"}"#);

    let suite = root.join("diagrams");
    write(
        &suite.join("config.json"),
        br#"{"provider": "openai", "model": "gpt-4o", "system_prompt": "You are an architect."}"#,
    );

    let text_case = suite.join("a-layers");
    write(
        &text_case.join("config.json"),
        br#"{"input": "input.txt", "expected": "expected.txt"}"#,
    );
    write(&text_case.join("input.txt"), b"Name the layers.");
    write(&text_case.join("expected.txt"), b"answer: Name the layers.");

    let image_case = suite.join("b-diagram");
    write(
        &image_case.join("config.json"),
        br#"{"input": "input.txt", "expected": "expected.txt", "attachments": ["c4.png"]}"#,
    );
    write(&image_case.join("input.txt"), b"What does this show?");
    write(&image_case.join("expected.txt"), b"A container diagram.");
    write(&image_case.join("c4.png"), &[0x89, b'P', b'N', b'G']);

    temp
}

#[tokio::test]
async fn loaded_definition_runs_end_to_end() {
    let temp = definition_tree();
    let config = BenchmarkLoader::new(temp.path(), "architecture")
        .unwrap()
        .load(EvaluatorConfig::new("openai", JUDGE_MODEL))
        .unwrap();

    let factory = Arc::new(ScriptedFactory::new());
    let emitter = Arc::new(RecordingEmitter::default());
    let mut runner = BenchmarkRunner::new(config, factory.clone(), emitter.clone()).unwrap();

    let benchmark = runner.run_benchmark(None).await.unwrap();

    assert_eq!(benchmark.name, "architecture");
    assert_eq!(benchmark.eval_model, JUDGE_MODEL);
    let cases: Vec<&str> = benchmark.test_suites[0]
        .test_cases
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(cases, vec!["a-layers", "b-diagram"]);

    let subject_calls: Vec<Call> = factory
        .calls()
        .into_iter()
        .filter(|c| c.role == "subject")
        .collect();
    assert_eq!(subject_calls.len(), 2);
    assert!(subject_calls.iter().all(|c| c.system_prompt == "You are an architect."));
    assert_eq!(subject_calls[0].attachments, 0);
    assert_eq!(subject_calls[1].attachments, 1);

    // exact match on the first case, mismatch on the second
    let first = benchmark.test_suites[0].test_cases[0].result.as_ref().unwrap();
    let second = benchmark.test_suites[0].test_cases[1].result.as_ref().unwrap();
    assert_eq!(first.metric("relevance"), Some(100.0));
    assert_eq!(second.metric("relevance"), Some(50.0));
    assert_eq!(emitter.suite_names(), vec!["diagrams"]);
}

#[tokio::test]
async fn results_are_saved_as_json() {
    let temp = definition_tree();
    let config = BenchmarkLoader::new(temp.path(), "architecture")
        .unwrap()
        .load(EvaluatorConfig::new("openai", JUDGE_MODEL))
        .unwrap();
    let mut runner = BenchmarkRunner::new(
        config,
        Arc::new(ScriptedFactory::new()),
        Arc::new(RecordingEmitter::default()),
    )
    .unwrap();
    let benchmark = runner.run_benchmark(None).await.unwrap();

    let out = TempDir::new().unwrap();
    let path = save_results(&benchmark, &out.path().join("results")).unwrap();

    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("benchmark_results_"));
    assert!(file_name.ends_with(".json"));

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["name"], "architecture");
    assert_eq!(value["test_suites"][0]["test_cases"][1]["name"], "b-diagram");
    assert!(value["test_suites"][0]["test_cases"][0]["result"]["duration"].is_number());
}
