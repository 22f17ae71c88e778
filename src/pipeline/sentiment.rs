/*!
 * Sentiment fan-out stage.
 *
 * Issues two independent sentiment analyses concurrently, one for the original text
 * and one for the translation, and joins on both. Neither call waits on the other,
 * bounding the stage's latency to roughly one executor round trip. There is no
 * partial result: if either branch fails, the stage fails naming that branch and the
 * surviving branch's reading is discarded.
 */

use std::fmt;
use std::time::Duration;

use futures::future;
use serde::Serialize;

use crate::errors::{ExecutorError, PipelineError};
use crate::executors::{PromptExecutor, Sentiment, SentimentInput};
use crate::pipeline::bounded;
use crate::request::TranslationRequest;

/// Which branch of the sentiment fan-out a reading or failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTarget {
    /// The caller's source text
    Original,
    /// The text produced by the translation stage
    Translated,
}

impl fmt::Display for SentimentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Translated => write!(f, "translated"),
        }
    }
}

/// Run the sentiment fan-out stage, returning the original and translated readings.
pub(crate) async fn execute(
    executor: &dyn PromptExecutor,
    request: &TranslationRequest,
    translated_text: &str,
    timeout: Duration,
) -> Result<(Sentiment, Sentiment), PipelineError> {
    let original_call = bounded(
        timeout,
        executor.analyze_sentiment(SentimentInput {
            text: request.text.clone(),
            language_context: request.source_language.clone(),
        }),
    );
    let translated_call = bounded(
        timeout,
        executor.analyze_sentiment(SentimentInput {
            text: translated_text.to_string(),
            language_context: request.target_language.clone(),
        }),
    );

    // Both futures exist before either is polled; join drives them concurrently.
    let (original, translated) = future::join(original_call, translated_call).await;

    let original = checked(original, SentimentTarget::Original)?;
    let translated = checked(translated, SentimentTarget::Translated)?;
    Ok((original, translated))
}

/// Classify one branch's outcome, rejecting readings with an empty label
fn checked(
    result: Result<crate::executors::SentimentOutput, ExecutorError>,
    target: SentimentTarget,
) -> Result<Sentiment, PipelineError> {
    let output = result.map_err(|e| PipelineError::SentimentAnalysisFailed {
        target,
        message: e.to_string(),
    })?;

    if output.sentiment.label.is_empty() {
        return Err(PipelineError::SentimentAnalysisFailed {
            target,
            message: "executor omitted the sentiment label".to_string(),
        });
    }
    Ok(output.sentiment)
}
