/*!
 * Pipeline entry point and result assembly.
 *
 * This module contains the main Pipeline struct, which owns the prompt executor and
 * threads one request through the stages. The pipeline is stateless across requests
 * and reentrant; any number of runs may be in flight at once.
 */

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use serde::Serialize;

use crate::errors::PipelineError;
use crate::executors::{Adaptation, PromptExecutor, Sentiment, TranslateOutput};
use crate::pipeline::{sentiment, translate};
use crate::request::{RawRequest, TranslationRequest};

/// Default bound on each executor call, in seconds
pub const DEFAULT_CALL_TIMEOUT_SECS: u64 = 60;

/// Assembled, externally visible success value of a pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    /// The style-adapted translation
    pub translation: String,

    /// Sentiment reading of the source text
    pub original_sentiment: Sentiment,

    /// Sentiment reading of the translated text
    pub translated_sentiment: Sentiment,

    /// Self-assessment of the audience fit, when the executor provided one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_adaptation: Option<Adaptation>,

    /// Self-assessment of the tone fit, when the executor provided one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_adaptation: Option<Adaptation>,
}

/// Tagged outcome of one pipeline run: a complete result or a single classified error
pub type PipelineOutcome = Result<TranslationResult, PipelineError>;

/// Stage the pipeline is currently in, for logging and observability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// No run started yet
    Idle,
    /// Checking the request against structural constraints
    Validating,
    /// Waiting on the translate operation
    Translating,
    /// Waiting on the concurrent sentiment fan-out
    AnalyzingSentiment,
    /// Merging stage outputs into the final result
    Assembling,
    /// Terminal: the run produced a complete result
    Succeeded,
    /// Terminal: a stage failed and the remaining stages were skipped
    Failed,
}

/// Orchestrates one translation request through validation, translation, sentiment
/// fan-out and assembly
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// The language model capability both stages delegate to
    executor: Arc<dyn PromptExecutor>,

    /// Bound on each individual executor call
    call_timeout: Duration,
}

impl Pipeline {
    /// Create a pipeline over the given executor with the default call timeout
    pub fn new(executor: Arc<dyn PromptExecutor>) -> Self {
        Self {
            executor,
            call_timeout: Duration::from_secs(DEFAULT_CALL_TIMEOUT_SECS),
        }
    }

    /// Override the per-call timeout
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Run one request through the pipeline.
    ///
    /// Returns either a complete [`TranslationResult`] or a single classified error;
    /// no partially filled result exists. Validation failure is terminal and cheap,
    /// the executor is never invoked for it. Nothing is retried.
    pub async fn run(&self, raw: RawRequest) -> PipelineOutcome {
        let result = self.advance(raw).await;
        match &result {
            Ok(_) => self.transition(PipelineState::Succeeded),
            Err(e) => {
                self.transition(PipelineState::Failed);
                error!("Pipeline run failed: {}", e);
            }
        }
        result
    }

    /// Drive the stages in order, stopping at the first failure
    async fn advance(&self, raw: RawRequest) -> PipelineOutcome {
        self.transition(PipelineState::Validating);
        let request = TranslationRequest::validate(raw)?;

        self.transition(PipelineState::Translating);
        let translation =
            translate::execute(self.executor.as_ref(), &request, self.call_timeout).await?;
        info!(
            "Translated {} chars from {} to {}",
            request.text.chars().count(),
            request.source_language,
            request.target_language
        );

        self.transition(PipelineState::AnalyzingSentiment);
        let (original_sentiment, translated_sentiment) = sentiment::execute(
            self.executor.as_ref(),
            &request,
            &translation.translated_text,
            self.call_timeout,
        )
        .await?;

        self.transition(PipelineState::Assembling);
        Ok(assemble(translation, original_sentiment, translated_sentiment))
    }

    /// Record a state transition
    fn transition(&self, state: PipelineState) {
        debug!("Pipeline state: {:?}", state);
    }
}

/// Merge the stage outputs into the final result.
///
/// Pure and infallible: by the time this runs, every input is a validated success.
fn assemble(
    translation: TranslateOutput,
    original_sentiment: Sentiment,
    translated_sentiment: Sentiment,
) -> TranslationResult {
    TranslationResult {
        translation: translation.translated_text,
        original_sentiment,
        translated_sentiment,
        audience_adaptation: translation.audience_adaptation,
        tone_adaptation: translation.tone_adaptation,
    }
}
