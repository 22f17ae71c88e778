/*!
 * # LinguaWeave - Style-Adaptive Translation with Sentiment Analysis
 *
 * A Rust library for translating text with stylistic preferences (target audience,
 * desired tone) and reading the sentiment of both the source and translated text,
 * using a generative language model.
 *
 * ## Features
 *
 * - Validate requests before any model call (size and shape constraints)
 * - Style-adaptive translation with self-scored audience and tone fit
 * - Concurrent sentiment analysis of the original and translated text
 * - Classified failures per stage, never a partial result
 * - Pluggable prompt executor (Gemini API or an in-process mock)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `request`: Request validation
 * - `pipeline`: The orchestration pipeline:
 *   - `pipeline::core`: Entry point, state tracking and result assembly
 *   - `pipeline::translate`: Translation stage
 *   - `pipeline::sentiment`: Concurrent sentiment fan-out stage
 * - `executors`: Prompt executor capability and its implementations:
 *   - `executors::gemini`: Google Gemini API client
 *   - `executors::mock`: Deterministic executor for tests and dry runs
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod executors;
pub mod pipeline;
pub mod request;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{ErrorKind, ExecutorError, PipelineError, ValidationError};
pub use executors::{Adaptation, PromptExecutor, Sentiment};
pub use pipeline::{Pipeline, PipelineOutcome, SentimentTarget, TranslationResult};
pub use request::{RawRequest, TranslationRequest};
