/*!
 * Common test utilities for the linguaweave test suite
 */

use linguaweave::executors::Sentiment;
use linguaweave::request::RawRequest;

/// A complete raw request with the given text
pub fn raw_request(text: &str) -> RawRequest {
    RawRequest {
        text: Some(text.to_string()),
        source_language: Some("English".to_string()),
        target_language: Some("Spanish".to_string()),
        target_audience: Some("children".to_string()),
        desired_tone: Some("playful".to_string()),
    }
}

/// A sentiment reading with the given label and score
pub fn sentiment(label: &str, score: f32) -> Sentiment {
    Sentiment {
        label: label.to_string(),
        score,
    }
}
