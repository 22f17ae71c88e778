/*!
 * Translation stage.
 *
 * Invokes the executor's translate operation once. The single call both translates
 * and self-scores the audience and tone fit, avoiding a second round trip and letting
 * the assessment reference the exact translation just produced.
 */

use std::time::Duration;

use log::debug;

use crate::errors::PipelineError;
use crate::executors::{PromptExecutor, TranslateInput, TranslateOutput};
use crate::pipeline::bounded;
use crate::request::TranslationRequest;

/// Run the translation stage.
///
/// Fails with [`PipelineError::TranslationFailed`] when the executor call fails or
/// returns an empty translation; the caller must not start sentiment analysis after
/// such a failure, there is nothing meaningful to analyze yet.
pub(crate) async fn execute(
    executor: &dyn PromptExecutor,
    request: &TranslationRequest,
    timeout: Duration,
) -> Result<TranslateOutput, PipelineError> {
    let output = bounded(timeout, executor.translate(TranslateInput::from(request)))
        .await
        .map_err(|e| PipelineError::TranslationFailed(e.to_string()))?;

    if output.translated_text.trim().is_empty() {
        return Err(PipelineError::TranslationFailed(
            "executor returned an empty translation".to_string(),
        ));
    }

    if let Some(adaptation) = &output.audience_adaptation {
        debug!("Audience adaptation score: {:.2}", adaptation.score);
    }
    if let Some(adaptation) = &output.tone_adaptation {
        debug!("Tone adaptation score: {:.2}", adaptation.score);
    }

    Ok(output)
}
