/*!
 * Orchestration pipeline for style-adaptive translation with sentiment analysis.
 *
 * A run moves through fixed stages: validate the request, translate the text while
 * self-scoring the stylistic fit, analyze the sentiment of the original and the
 * translated text concurrently, then assemble the final result. Each stage has a
 * single responsibility and its own failure classification; any failure ends the
 * run without retries or partial results.
 *
 * Submodules:
 * - `core`: pipeline entry point, state tracking and result assembly
 * - `translate`: the translation stage
 * - `sentiment`: the concurrent sentiment fan-out stage
 */

use std::future::Future;
use std::time::Duration;

use crate::errors::ExecutorError;

pub use self::core::{Pipeline, PipelineOutcome, PipelineState, TranslationResult};
pub use self::sentiment::SentimentTarget;

pub mod core;
pub mod sentiment;
pub mod translate;

/// Bound an executor call with the pipeline's per-call timeout.
///
/// A timed-out call is indistinguishable from any other executor failure.
pub(crate) async fn bounded<T>(
    timeout: Duration,
    call: impl Future<Output = Result<T, ExecutorError>>,
) -> Result<T, ExecutorError> {
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(ExecutorError::RequestFailed(format!(
            "executor call timed out after {}s",
            timeout.as_secs()
        ))),
    }
}
