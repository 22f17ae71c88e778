/*!
 * Tests for the orchestration pipeline.
 *
 * The mock executor shares its call counters across clones, so each test keeps a
 * clone to assert how often the pipeline invoked each operation.
 */

use std::sync::Arc;
use std::time::Duration;

use linguaweave::errors::{ErrorKind, PipelineError};
use linguaweave::executors::mock::MockExecutor;
use linguaweave::pipeline::{Pipeline, SentimentTarget};
use linguaweave::request::MAX_TEXT_LENGTH;

use crate::common::{raw_request, sentiment};

#[tokio::test]
async fn test_emptyText_shouldFailValidationWithoutExecutorCall() {
    let mock = MockExecutor::working();
    let pipeline = Pipeline::new(Arc::new(mock.clone()));

    let outcome = pipeline.run(raw_request("")).await;

    let error = outcome.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(mock.translate_call_count(), 0);
    assert_eq!(mock.sentiment_call_count(), 0);
}

#[tokio::test]
async fn test_oversizedText_shouldFailValidationWithoutExecutorCall() {
    let mock = MockExecutor::working();
    let pipeline = Pipeline::new(Arc::new(mock.clone()));

    let text = "a".repeat(MAX_TEXT_LENGTH + 1);
    let outcome = pipeline.run(raw_request(&text)).await;

    assert_eq!(outcome.unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(mock.translate_call_count(), 0);
    assert_eq!(mock.sentiment_call_count(), 0);
}

#[tokio::test]
async fn test_translateFailure_shouldAbortBeforeSentimentAnalysis() {
    let mock = MockExecutor::translate_failing();
    let pipeline = Pipeline::new(Arc::new(mock.clone()));

    let outcome = pipeline.run(raw_request("Hello")).await;

    let error = outcome.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::TranslationFailed);
    assert_eq!(mock.translate_call_count(), 1);
    assert_eq!(mock.sentiment_call_count(), 0);
}

#[tokio::test]
async fn test_emptyTranslation_shouldFailTranslationStage() {
    let mock = MockExecutor::empty_translation();
    let pipeline = Pipeline::new(Arc::new(mock.clone()));

    let outcome = pipeline.run(raw_request("Hello")).await;

    assert_eq!(outcome.unwrap_err().kind(), ErrorKind::TranslationFailed);
    assert_eq!(mock.sentiment_call_count(), 0);
}

#[tokio::test]
async fn test_translatedBranchFailure_shouldNameTheTranslatedSide() {
    // The translated text is canned as "Hola"; failing the sentiment call for
    // exactly that text fails only the translated branch.
    let mock = MockExecutor::working()
        .with_translation("Hola")
        .with_failing_sentiment_for("Hola");
    let pipeline = Pipeline::new(Arc::new(mock.clone()));

    let outcome = pipeline.run(raw_request("Hello")).await;

    match outcome.unwrap_err() {
        PipelineError::SentimentAnalysisFailed { target, .. } => {
            assert_eq!(target, SentimentTarget::Translated);
        }
        other => panic!("Expected SentimentAnalysisFailed, got {:?}", other),
    }
    // Both branches were invoked even though one failed.
    assert_eq!(mock.sentiment_call_count(), 2);
}

#[tokio::test]
async fn test_originalBranchFailure_shouldNameTheOriginalSide() {
    let mock = MockExecutor::working()
        .with_translation("Hola")
        .with_failing_sentiment_for("Hello");
    let pipeline = Pipeline::new(Arc::new(mock.clone()));

    let outcome = pipeline.run(raw_request("Hello")).await;

    match outcome.unwrap_err() {
        PipelineError::SentimentAnalysisFailed { target, .. } => {
            assert_eq!(target, SentimentTarget::Original);
        }
        other => panic!("Expected SentimentAnalysisFailed, got {:?}", other),
    }
    assert_eq!(mock.sentiment_call_count(), 2);
}

#[tokio::test]
async fn test_bothBranchesFailing_shouldReportTheOriginalSide() {
    let mock = MockExecutor::sentiment_failing();
    let pipeline = Pipeline::new(Arc::new(mock.clone()));

    let outcome = pipeline.run(raw_request("Hello")).await;

    match outcome.unwrap_err() {
        PipelineError::SentimentAnalysisFailed { target, .. } => {
            assert_eq!(target, SentimentTarget::Original);
        }
        other => panic!("Expected SentimentAnalysisFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_emptySentimentLabel_shouldFailTheFanOutStage() {
    let mock = MockExecutor::empty_sentiment_label();
    let pipeline = Pipeline::new(Arc::new(mock.clone()));

    let outcome = pipeline.run(raw_request("Hello")).await;
    assert_eq!(
        outcome.unwrap_err().kind(),
        ErrorKind::SentimentAnalysisFailed
    );
}

#[tokio::test]
async fn test_successfulRun_shouldAssembleAllReadings() {
    let mock = MockExecutor::working()
        .with_translation("Hola")
        .with_sentiments(sentiment("positive", 0.9), sentiment("positive", 0.8));
    let pipeline = Pipeline::new(Arc::new(mock.clone()));

    let result = pipeline.run(raw_request("Hello")).await.unwrap();

    assert_eq!(result.translation, "Hola");
    assert_eq!(result.original_sentiment, sentiment("positive", 0.9));
    assert_eq!(result.translated_sentiment, sentiment("positive", 0.8));
    assert!(result.audience_adaptation.is_some());
    assert!(result.tone_adaptation.is_some());
    assert_eq!(mock.translate_call_count(), 1);
    assert_eq!(mock.sentiment_call_count(), 2);
}

#[tokio::test]
async fn test_sentimentCalls_shouldRunConcurrently() {
    // The rendezvous executor releases a sentiment call only once the second one
    // has started; sequential awaiting would never finish.
    let mock = MockExecutor::rendezvous();
    let pipeline = Pipeline::new(Arc::new(mock.clone()));

    let outcome = tokio::time::timeout(
        Duration::from_secs(5),
        pipeline.run(raw_request("Hello")),
    )
    .await
    .expect("sentiment fan-out deadlocked, calls were issued sequentially");

    assert!(outcome.is_ok());
    assert_eq!(mock.sentiment_call_count(), 2);
}

#[tokio::test]
async fn test_identicalInputs_shouldYieldIdenticalOutcomes() {
    let mock = MockExecutor::working()
        .with_translation("Hola")
        .with_sentiments(sentiment("positive", 0.9), sentiment("positive", 0.8));
    let pipeline = Pipeline::new(Arc::new(mock));

    let first = pipeline.run(raw_request("Hello")).await.unwrap();
    let second = pipeline.run(raw_request("Hello")).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_slowExecutor_shouldFailTheStageOnTimeout() {
    let mock = MockExecutor::slow(200);
    let pipeline =
        Pipeline::new(Arc::new(mock.clone())).with_call_timeout(Duration::from_millis(20));

    let outcome = pipeline.run(raw_request("Hello")).await;

    // The timeout hits the translation stage first and is classified like any
    // other executor failure.
    assert_eq!(outcome.unwrap_err().kind(), ErrorKind::TranslationFailed);
    assert_eq!(mock.sentiment_call_count(), 0);
}

#[tokio::test]
async fn test_concurrentRuns_shouldNotInterfere() {
    let mock = MockExecutor::working()
        .with_translation("Hola")
        .with_sentiments(sentiment("positive", 0.9), sentiment("positive", 0.8));
    let pipeline = Pipeline::new(Arc::new(mock));

    let (first, second) = tokio::join!(
        pipeline.run(raw_request("Hello")),
        pipeline.run(raw_request("Hello"))
    );

    assert_eq!(first.unwrap(), second.unwrap());
}
