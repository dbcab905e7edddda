//! Subject model invocation
//!
//! Encodes a case's attachments, calls the subject gateway under the call
//! deadline and prices the response. Any unreadable attachment fails the
//! whole invocation before the gateway is called.

use std::path::Path;
use std::time::{Duration, Instant};

use arch_bench_core::{Attachment, BenchError, BenchResult, ProviderGateway};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::deadline::with_deadline;
use crate::definition::TestCaseConfig;

/// Raw subject response with timing and price
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub output: String,
    /// Wall time of the gateway call
    pub duration: Duration,
    pub cost: f64,
}

/// Call the subject model for one case
pub async fn invoke(
    gateway: &dyn ProviderGateway,
    system_prompt: &str,
    case: &TestCaseConfig,
    call_timeout: Duration,
) -> BenchResult<Invocation> {
    let attachments = encode_attachments(case)?;

    let started = Instant::now();
    let generation = with_deadline(
        call_timeout,
        gateway.generate(system_prompt, &case.input, &attachments),
    )
    .await?;
    let duration = started.elapsed();

    let cost = gateway.cost(generation.usage, gateway.model())?;
    debug!(
        case = %case.name,
        model = gateway.model(),
        prompt_tokens = generation.usage.prompt_tokens,
        completion_tokens = generation.usage.completion_tokens,
        duration_ms = duration.as_millis() as u64,
        cost,
        "subject call completed"
    );

    Ok(Invocation {
        output: generation.text,
        duration,
        cost,
    })
}

/// Read and base64-encode every attachment, in declared order
pub fn encode_attachments(case: &TestCaseConfig) -> BenchResult<Vec<Attachment>> {
    case.resolved_attachments()
        .iter()
        .map(|path| encode_file(path))
        .collect()
}

fn encode_file(path: &Path) -> BenchResult<Attachment> {
    let bytes = std::fs::read(path)
        .map_err(|e| BenchError::attachment(path.display().to_string(), e.to_string()))?;
    Ok(Attachment::new(mime_type_for(path), STANDARD.encode(bytes)))
}

/// MIME type from the file extension
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
