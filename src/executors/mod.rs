/*!
 * Prompt executor implementations.
 *
 * The pipeline treats the language model as an opaque capability with two named
 * operations: style-adaptive translation and sentiment analysis. This module defines
 * that capability as a trait plus the typed records it exchanges, and provides the
 * concrete implementations:
 * - `gemini`: Google Gemini API client
 * - `mock`: deterministic in-process executor for tests and offline dry runs
 */

use std::fmt::Debug;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::app_config::{ExecutorConfig, ExecutorKind};
use crate::errors::ExecutorError;
use crate::request::TranslationRequest;

/// Input record for the translate operation
#[derive(Debug, Clone, Serialize)]
pub struct TranslateInput {
    /// The text to be translated
    pub text: String,
    /// Language of the input text
    pub source_language: String,
    /// Desired language for the translated text
    pub target_language: String,
    /// Audience the translation should be adapted for
    pub target_audience: String,
    /// Tone the translation should carry
    pub desired_tone: String,
}

impl From<&TranslationRequest> for TranslateInput {
    fn from(request: &TranslationRequest) -> Self {
        Self {
            text: request.text.clone(),
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
            target_audience: request.target_audience.clone(),
            desired_tone: request.desired_tone.clone(),
        }
    }
}

/// Scored self-assessment of how well a translation matches one stylistic dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adaptation {
    /// Score from 0.0 to 1.0 indicating how well the translation meets the requirement
    pub score: f32,
    /// Brief explanation for the score
    pub justification: String,
}

/// Output record of the translate operation
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateOutput {
    /// The translated text, adapted to the requested preferences
    pub translated_text: String,
    /// Self-assessment of the audience fit, when the executor provides one
    #[serde(default)]
    pub audience_adaptation: Option<Adaptation>,
    /// Self-assessment of the tone fit, when the executor provides one
    #[serde(default)]
    pub tone_adaptation: Option<Adaptation>,
}

/// Input record for the sentiment analysis operation
#[derive(Debug, Clone, Serialize)]
pub struct SentimentInput {
    /// The text to analyze
    pub text: String,
    /// Language of the text, used only to phrase the analysis request
    pub language_context: String,
}

/// Sentiment reading for one text sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Free-form sentiment category (e.g. positive, negative, neutral)
    pub label: String,
    /// Numerical score representing the sentiment strength
    pub score: f32,
}

/// Output record of the sentiment analysis operation
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentOutput {
    /// The sentiment reading
    pub sentiment: Sentiment,
}

/// Capability interface to the language model
///
/// Implementations must reject responses that do not conform to the declared output
/// shape rather than propagating malformed data downstream.
#[async_trait]
pub trait PromptExecutor: Send + Sync + Debug {
    /// Translate text, adapting it to the requested audience and tone.
    ///
    /// A single call performs the translation and self-scores the audience and tone
    /// fit, so the assessment can reference the exact translation just produced.
    async fn translate(&self, input: TranslateInput) -> Result<TranslateOutput, ExecutorError>;

    /// Analyze the sentiment of one text sample
    async fn analyze_sentiment(
        &self,
        input: SentimentInput,
    ) -> Result<SentimentOutput, ExecutorError>;

    /// Probe the executor, verifying it is reachable and authorized
    async fn test_connection(&self) -> Result<(), ExecutorError>;
}

/// Build the executor selected by the configuration
pub fn from_config(config: &ExecutorConfig) -> Result<Arc<dyn PromptExecutor>> {
    match config.kind {
        ExecutorKind::Gemini => Ok(Arc::new(gemini::Gemini::new(
            &config.api_key,
            &config.model,
            &config.endpoint,
            config.timeout_secs,
        ))),
        ExecutorKind::Mock => Ok(Arc::new(mock::MockExecutor::working())),
    }
}

pub mod gemini;
pub mod mock;
