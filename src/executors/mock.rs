/*!
 * Mock prompt executor for testing.
 *
 * This module provides a deterministic executor that simulates different behaviors:
 * - `MockExecutor::working()` - both operations succeed with canned output
 * - `MockExecutor::translate_failing()` - the translate operation always fails
 * - `MockExecutor::sentiment_failing()` - every sentiment call fails
 * - `MockExecutor::rendezvous()` - sentiment calls block until both have started,
 *   proving the fan-out issues them concurrently
 *
 * Call counts are shared across clones so tests can assert how often each
 * operation was invoked.
 */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Barrier;

use crate::errors::ExecutorError;
use crate::executors::{
    Adaptation, PromptExecutor, Sentiment, SentimentInput, SentimentOutput, TranslateInput,
    TranslateOutput,
};

/// Behavior mode for the mock executor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Both operations succeed
    Working,
    /// The translate operation fails with an API error
    TranslateFailing,
    /// The translate operation succeeds but returns an empty translation
    EmptyTranslation,
    /// Every sentiment call fails with an API error
    SentimentFailing,
    /// Sentiment calls succeed but return an empty label
    EmptySentimentLabel,
    /// Both operations succeed after a delay (for timeout testing)
    Slow {
        /// Delay applied to every call, in milliseconds
        delay_ms: u64,
    },
    /// Sentiment calls block until two of them have started
    Rendezvous,
}

/// Deterministic prompt executor double
#[derive(Debug, Clone)]
pub struct MockExecutor {
    /// Behavior mode
    behavior: MockBehavior,
    /// Canned translated text (defaults to a marker around the input)
    translation: Option<String>,
    /// Canned sentiment for the original text
    original_sentiment: Option<Sentiment>,
    /// Canned sentiment for the translated text
    translated_sentiment: Option<Sentiment>,
    /// Fail any sentiment call whose input text equals this value
    fail_sentiment_matching: Option<String>,
    /// Number of translate calls, shared across clones
    translate_calls: Arc<AtomicUsize>,
    /// Number of sentiment calls, shared across clones
    sentiment_calls: Arc<AtomicUsize>,
    /// Rendezvous point for the concurrency proof
    barrier: Arc<Barrier>,
}

impl MockExecutor {
    /// Create a new mock executor with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            translation: None,
            original_sentiment: None,
            translated_sentiment: None,
            fail_sentiment_matching: None,
            translate_calls: Arc::new(AtomicUsize::new(0)),
            sentiment_calls: Arc::new(AtomicUsize::new(0)),
            barrier: Arc::new(Barrier::new(2)),
        }
    }

    /// Create a working executor where both operations succeed
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create an executor whose translate operation always fails
    pub fn translate_failing() -> Self {
        Self::new(MockBehavior::TranslateFailing)
    }

    /// Create an executor that returns an empty translation
    pub fn empty_translation() -> Self {
        Self::new(MockBehavior::EmptyTranslation)
    }

    /// Create an executor whose sentiment calls always fail
    pub fn sentiment_failing() -> Self {
        Self::new(MockBehavior::SentimentFailing)
    }

    /// Create an executor whose sentiment calls return an empty label
    pub fn empty_sentiment_label() -> Self {
        Self::new(MockBehavior::EmptySentimentLabel)
    }

    /// Create an executor that delays every call
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Create an executor whose sentiment calls block until both have started
    pub fn rendezvous() -> Self {
        Self::new(MockBehavior::Rendezvous)
    }

    /// Set the canned translated text
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// Set the canned sentiments for the original and translated text
    pub fn with_sentiments(mut self, original: Sentiment, translated: Sentiment) -> Self {
        self.original_sentiment = Some(original);
        self.translated_sentiment = Some(translated);
        self
    }

    /// Fail the sentiment call whose input text equals the given value
    pub fn with_failing_sentiment_for(mut self, text: impl Into<String>) -> Self {
        self.fail_sentiment_matching = Some(text.into());
        self
    }

    /// Number of translate calls issued so far
    pub fn translate_call_count(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }

    /// Number of sentiment calls issued so far
    pub fn sentiment_call_count(&self) -> usize {
        self.sentiment_calls.load(Ordering::SeqCst)
    }

    /// Translated text this executor produces for the given input
    fn translation_for(&self, input: &TranslateInput) -> String {
        self.translation
            .clone()
            .unwrap_or_else(|| format!("[{}] {}", input.target_language, input.text))
    }

    /// Sentiment reading for the given input text
    fn sentiment_for(&self, text: &str) -> Sentiment {
        let canned = match &self.translation {
            Some(translation) if translation == text => &self.translated_sentiment,
            _ => &self.original_sentiment,
        };
        canned.clone().unwrap_or(Sentiment {
            label: "neutral".to_string(),
            score: 0.5,
        })
    }
}

#[async_trait]
impl PromptExecutor for MockExecutor {
    async fn translate(&self, input: TranslateInput) -> Result<TranslateOutput, ExecutorError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::TranslateFailing => Err(ExecutorError::ApiError {
                status_code: 500,
                message: "Simulated translate failure".to_string(),
            }),

            MockBehavior::EmptyTranslation => Ok(TranslateOutput {
                translated_text: String::new(),
                audience_adaptation: None,
                tone_adaptation: None,
            }),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(self.working_translation(&input))
            }

            _ => Ok(self.working_translation(&input)),
        }
    }

    async fn analyze_sentiment(
        &self,
        input: SentimentInput,
    ) -> Result<SentimentOutput, ExecutorError> {
        self.sentiment_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failing) = &self.fail_sentiment_matching {
            if *failing == input.text {
                return Err(ExecutorError::ApiError {
                    status_code: 503,
                    message: "Simulated sentiment failure".to_string(),
                });
            }
        }

        match self.behavior {
            MockBehavior::SentimentFailing => Err(ExecutorError::ApiError {
                status_code: 500,
                message: "Simulated sentiment failure".to_string(),
            }),

            MockBehavior::EmptySentimentLabel => Ok(SentimentOutput {
                sentiment: Sentiment {
                    label: String::new(),
                    score: 0.0,
                },
            }),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(SentimentOutput {
                    sentiment: self.sentiment_for(&input.text),
                })
            }

            MockBehavior::Rendezvous => {
                // Released only once a second sentiment call has arrived; sequential
                // awaiting would deadlock here.
                self.barrier.wait().await;
                Ok(SentimentOutput {
                    sentiment: self.sentiment_for(&input.text),
                })
            }

            _ => Ok(SentimentOutput {
                sentiment: self.sentiment_for(&input.text),
            }),
        }
    }

    async fn test_connection(&self) -> Result<(), ExecutorError> {
        // The mock is always reachable; probes don't count as operation calls.
        Ok(())
    }
}

impl MockExecutor {
    /// Successful translate output for the given input
    fn working_translation(&self, input: &TranslateInput) -> TranslateOutput {
        TranslateOutput {
            translated_text: self.translation_for(input),
            audience_adaptation: Some(Adaptation {
                score: 0.9,
                justification: format!("Adapted for {}", input.target_audience),
            }),
            tone_adaptation: Some(Adaptation {
                score: 0.85,
                justification: format!("Captured a {} tone", input.desired_tone),
            }),
        }
    }
}
