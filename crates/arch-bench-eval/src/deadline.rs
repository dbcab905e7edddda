//! Per-call deadline for gateway calls

use std::future::Future;
use std::time::Duration;

use arch_bench_core::{BenchError, BenchResult};
use tokio::time::timeout;

/// Await `call`, failing with [`BenchError::Timeout`] once `limit` elapses
pub(crate) async fn with_deadline<T, F>(limit: Duration, call: F) -> BenchResult<T>
where
    F: Future<Output = BenchResult<T>>,
{
    match timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(BenchError::Timeout {
            seconds: limit.as_secs(),
        }),
    }
}
