/*!
 * Tests for error types and conversions
 */

use linguaweave::errors::{ErrorKind, ExecutorError, PipelineError, ValidationError};
use linguaweave::pipeline::SentimentTarget;

#[test]
fn test_executorError_requestFailed_shouldDisplayCorrectly() {
    let error = ExecutorError::RequestFailed("Connection timeout".to_string());
    let display = format!("{}", error);
    assert!(display.contains("API request failed"));
    assert!(display.contains("Connection timeout"));
}

#[test]
fn test_executorError_apiError_shouldDisplayStatusAndMessage() {
    let error = ExecutorError::ApiError {
        status_code: 429,
        message: "Too many requests".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("429"));
    assert!(display.contains("Too many requests"));
}

#[test]
fn test_executorError_incompleteOutput_shouldDisplayCorrectly() {
    let error = ExecutorError::IncompleteOutput("no candidate text".to_string());
    let display = format!("{}", error);
    assert!(display.contains("incomplete output"));
    assert!(display.contains("no candidate text"));
}

#[test]
fn test_validationError_textTooLong_shouldDisplayLengths() {
    let error = ValidationError::TextTooLong {
        length: 6000,
        max: 5000,
    };
    let display = format!("{}", error);
    assert!(display.contains("6000"));
    assert!(display.contains("5000"));
}

#[test]
fn test_pipelineError_fromValidationError_shouldWrapCorrectly() {
    let error: PipelineError = ValidationError::EmptyText.into();
    assert_eq!(error.kind(), ErrorKind::Validation);
    let display = format!("{}", error);
    assert!(display.contains("Invalid request"));
    assert!(display.contains("cannot be empty"));
}

#[test]
fn test_pipelineError_sentimentFailure_shouldNameTheSide() {
    let error = PipelineError::SentimentAnalysisFailed {
        target: SentimentTarget::Translated,
        message: "API responded with error".to_string(),
    };
    assert_eq!(error.kind(), ErrorKind::SentimentAnalysisFailed);
    let display = format!("{}", error);
    assert!(display.contains("translated text"));
}

#[test]
fn test_pipelineError_fromAnyhow_shouldBecomeUnexpected() {
    let error: PipelineError = anyhow::anyhow!("stage panicked").into();
    assert_eq!(error.kind(), ErrorKind::Unexpected);
    let display = format!("{}", error);
    assert!(display.contains("Unexpected failure"));
    assert!(display.contains("stage panicked"));
}

#[test]
fn test_errorKinds_shouldCoverAllPipelineVariants() {
    assert_eq!(
        PipelineError::TranslationFailed("x".to_string()).kind(),
        ErrorKind::TranslationFailed
    );
    assert_eq!(
        PipelineError::Unexpected("x".to_string()).kind(),
        ErrorKind::Unexpected
    );
}
