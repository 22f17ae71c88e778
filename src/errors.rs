/*!
 * Error types for the linguaweave application.
 *
 * This module contains custom error types for the different failure domains of the
 * pipeline, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

use crate::pipeline::SentimentTarget;

/// Errors that can occur when invoking the prompt executor
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse executor response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The executor answered but the response is missing required fields
    #[error("Executor returned incomplete output: {0}")]
    IncompleteOutput(String),
}

/// Constraint violations detected by the request validator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The text to translate is empty
    #[error("Text to translate cannot be empty")]
    EmptyText,

    /// The text exceeds the maximum accepted length
    #[error("Text is {length} characters, maximum is {max}")]
    TextTooLong {
        /// Actual length of the submitted text, in characters
        length: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// A required request field is absent or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Coarse category of a pipeline failure, for callers that match on kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never passed validation
    Validation,
    /// The translation stage failed
    TranslationFailed,
    /// One of the sentiment fan-out branches failed
    SentimentAnalysisFailed,
    /// Anything not classified above
    Unexpected,
}

/// Failure outcome of a pipeline run, classified by the stage that produced it
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The request was rejected before any executor call
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// The translation stage's executor call failed or returned incomplete data
    #[error("Translation failed: {0}")]
    TranslationFailed(String),

    /// A sentiment fan-out branch failed, tagged with which side
    #[error("Sentiment analysis of the {target} text failed: {message}")]
    SentimentAnalysisFailed {
        /// Which branch of the fan-out failed
        target: SentimentTarget,
        /// Human-readable failure description
        message: String,
    },

    /// Catch-all for failures escaping stage classification
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl PipelineError {
    /// Category tag for this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::TranslationFailed(_) => ErrorKind::TranslationFailed,
            Self::SentimentAnalysisFailed { .. } => ErrorKind::SentimentAnalysisFailed,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<anyhow::Error> for PipelineError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unexpected(error.to_string())
    }
}
