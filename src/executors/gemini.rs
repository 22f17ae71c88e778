/*!
 * Google Gemini API client.
 *
 * Implements the prompt executor capability against the Gemini `generateContent`
 * endpoint. Both operations request a JSON response and parse it into the declared
 * output shape; a response that does not conform is rejected with a parse error
 * instead of being passed downstream.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::errors::ExecutorError;
use crate::executors::{
    PromptExecutor, SentimentInput, SentimentOutput, TranslateInput, TranslateOutput,
};

/// Default public API endpoint
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Gemini client for interacting with the Google generative language API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (defaults to the public API when empty)
    endpoint: String,
    /// Model identifier, e.g. "gemini-2.0-flash"
    model: String,
}

/// Gemini generateContent request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation contents, a single user turn for our purposes
    contents: Vec<GeminiContent>,

    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// One content block in a Gemini conversation
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Role of the sender (user, model)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Parts making up the content
    pub parts: Vec<GeminiPart>,
}

/// A single text part
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// The text content
    pub text: String,
}

/// Generation parameters for a request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// MIME type forced on the response, "application/json" for structured output
    response_mime_type: String,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// Generated candidates, the first one carries the answer
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// One generated candidate
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// The generated content
    pub content: GeminiContent,
}

impl GeminiRequest {
    /// Create a JSON-output request for a single user prompt
    pub fn json_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: prompt.into(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                response_mime_type: "application/json".to_string(),
            }),
        }
    }
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// Send a generateContent request and return the first candidate's text
    async fn generate(&self, request: GeminiRequest) -> Result<String, ExecutorError> {
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        let api_url = format!(
            "{}/v1beta/models/{}:generateContent",
            base, self.model
        );

        let response = self
            .client
            .post(&api_url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ExecutorError::ConnectionError(e.to_string())
                } else {
                    ExecutorError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ExecutorError::AuthenticationError(error_text)
                }
                _ => ExecutorError::ApiError {
                    status_code: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let gemini_response = response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| ExecutorError::ParseError(e.to_string()))?;

        let text = extract_text_from_response(&gemini_response);
        if text.is_empty() {
            return Err(ExecutorError::IncompleteOutput(
                "response contained no candidate text".to_string(),
            ));
        }
        Ok(text)
    }

}

/// Extract the text parts of the first candidate
pub fn extract_text_from_response(response: &GeminiResponse) -> String {
    response
        .candidates
        .first()
        .map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect()
        })
        .unwrap_or_default()
}

/// Strip a markdown code fence from around a JSON payload, if present.
///
/// Even with a JSON response MIME type, some models wrap the payload in
/// ```json fences; the payload inside is what must be parsed.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.trim_end_matches('`').trim()
}

/// Build the prompt for the translate operation
pub fn translate_prompt(input: &TranslateInput) -> String {
    format!(
        "Translate the following text from {source} to {target}.\n\n\
         Your primary task is to adapt the translation to suit a target audience of \
         **{audience}** and a desired tone of **{tone}**.\n\n\
         After translating, you must evaluate your own work. Provide a score from 0.0 \
         to 1.0 and a justification for both how well you adapted to the audience and \
         how well you captured the tone.\n\n\
         Respond with a JSON object with keys \"translated_text\", \
         \"audience_adaptation\" and \"tone_adaptation\", where each adaptation is an \
         object with keys \"score\" and \"justification\".\n\n\
         Text to translate: {text}",
        source = input.source_language,
        target = input.target_language,
        audience = input.target_audience,
        tone = input.desired_tone,
        text = input.text,
    )
}

/// Build the prompt for the sentiment analysis operation
pub fn sentiment_prompt(input: &SentimentInput) -> String {
    format!(
        "Analyze the sentiment of the following {language} text.\n\n\
         Respond with a JSON object with a single key \"sentiment\", an object with \
         keys \"label\" (e.g. positive, negative, neutral) and \"score\" (a number \
         representing the sentiment strength).\n\n\
         Text: {text}",
        language = input.language_context,
        text = input.text,
    )
}

#[async_trait]
impl PromptExecutor for Gemini {
    async fn translate(&self, input: TranslateInput) -> Result<TranslateOutput, ExecutorError> {
        debug!(
            "Requesting translation {} -> {} from model {}",
            input.source_language, input.target_language, self.model
        );
        let request = GeminiRequest::json_prompt(translate_prompt(&input));
        let text = self.generate(request).await?;
        serde_json::from_str(strip_code_fence(&text))
            .map_err(|e| ExecutorError::ParseError(format!("translate output: {}", e)))
    }

    async fn analyze_sentiment(
        &self,
        input: SentimentInput,
    ) -> Result<SentimentOutput, ExecutorError> {
        debug!(
            "Requesting sentiment analysis of {} chars of {} text",
            input.text.chars().count(),
            input.language_context
        );
        let request = GeminiRequest::json_prompt(sentiment_prompt(&input));
        let text = self.generate(request).await?;
        serde_json::from_str(strip_code_fence(&text))
            .map_err(|e| ExecutorError::ParseError(format!("sentiment output: {}", e)))
    }

    async fn test_connection(&self) -> Result<(), ExecutorError> {
        let request = GeminiRequest::json_prompt("Reply with the JSON object {\"ok\": true}");
        self.generate(request).await?;
        Ok(())
    }
}
