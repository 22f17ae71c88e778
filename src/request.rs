/*!
 * Request validation.
 *
 * Inbound requests arrive as loosely-typed caller data. This module checks them
 * against the structural and size constraints of the pipeline and produces the
 * validated request that the stages operate on. Validation is pure and synchronous;
 * a rejected request never reaches the prompt executor.
 */

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Maximum accepted length of the text to translate, in characters
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Source language assumed when the caller does not specify one
pub const DEFAULT_SOURCE_LANGUAGE: &str = "English";

/// Untyped inbound request as received from the caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRequest {
    /// The text to translate and analyze
    pub text: Option<String>,

    /// Language of the input text, defaults to English when absent
    pub source_language: Option<String>,

    /// Desired language for the translated text
    pub target_language: Option<String>,

    /// Audience the translation should be adapted for (e.g. children, professionals)
    pub target_audience: Option<String>,

    /// Tone the translation should carry (e.g. formal, informal, friendly)
    pub desired_tone: Option<String>,
}

/// A request that has passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest {
    /// Text to translate, 1 to 5000 characters
    pub text: String,

    /// Language of the input text
    pub source_language: String,

    /// Language to translate into
    pub target_language: String,

    /// Audience the translation is adapted for
    pub target_audience: String,

    /// Tone the translation should carry
    pub desired_tone: String,
}

impl TranslationRequest {
    /// Validate a raw request against the pipeline's structural constraints.
    ///
    /// The text must be present and between 1 and [`MAX_TEXT_LENGTH`] characters.
    /// Target language, audience and tone are required; the source language falls
    /// back to [`DEFAULT_SOURCE_LANGUAGE`] when absent. The core accepts any
    /// source/target language pair, including identical ones.
    pub fn validate(raw: RawRequest) -> Result<Self, ValidationError> {
        let text = raw.text.ok_or(ValidationError::MissingField("text"))?;
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let length = text.chars().count();
        if length > MAX_TEXT_LENGTH {
            return Err(ValidationError::TextTooLong {
                length,
                max: MAX_TEXT_LENGTH,
            });
        }

        let target_language = required(raw.target_language, "target_language")?;
        let target_audience = required(raw.target_audience, "target_audience")?;
        let desired_tone = required(raw.desired_tone, "desired_tone")?;

        let source_language = raw
            .source_language
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE_LANGUAGE.to_string());

        Ok(Self {
            text,
            source_language,
            target_language,
            target_audience,
            desired_tone,
        })
    }
}

/// Reject absent or blank required fields
fn required(field: Option<String>, name: &'static str) -> Result<String, ValidationError> {
    field
        .filter(|value| !value.trim().is_empty())
        .ok_or(ValidationError::MissingField(name))
}
