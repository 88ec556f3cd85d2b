// This defines the request/response contract with the generation service.
// The service is a black box: asynchronous on its side, fallible, and its
// failures reach us only as human-readable messages. Nothing here retries
// or interprets them.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use brandkit_brief::AspectRatio;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MIME type for generated assets. v1 only deals in PNG.
pub const PNG_MIME: &str = "image/png";

/// Token budget granted to the thinking-mode model for suggestion requests.
pub const THINKING_BUDGET: u32 = 32_768;

/// Which model handles a suggestion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    Standard,
    Thinking,
}

impl ModelTier {
    pub fn from_thinking_mode(thinking_mode: bool) -> Self {
        if thinking_mode {
            ModelTier::Thinking
        } else {
            ModelTier::Standard
        }
    }

    /// Token budget a backend should grant this tier, if any.
    pub fn thinking_budget(&self) -> Option<u32> {
        match self {
            ModelTier::Standard => None,
            ModelTier::Thinking => Some(THINKING_BUDGET),
        }
    }
}

/// An image as it travels over the wire: base64 text plus its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayloadV1 {
    pub data: String,
    pub mime_type: String,
}

impl ImagePayloadV1 {
    /// Wrap raw bytes for transit.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            data: BASE64.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// Decode back to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, AiError> {
        Ok(BASE64.decode(&self.data)?)
    }
}

/// Request to generate a fresh image from a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequestV1 {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
}

/// Request for textual design advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequestV1 {
    pub prompt: String,
    pub model: ModelTier,
}

/// Request to rework an existing image with a natural-language instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEditRequestV1 {
    pub image: ImagePayloadV1,
    pub instruction: String,
}

/// Combined response for the template flow: the rendered asset plus the
/// designer-style advice that accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateResponseV1 {
    pub image: ImagePayloadV1,
    pub suggestions: String,
}

/// What the caller sees when the service fails. Opaque and user-displayable;
/// the UI shows the message and moves on.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("the response was empty or blocked: {message}")]
    Blocked { message: String },

    #[error("generation service error: {0}")]
    Backend(String),

    #[error("invalid image payload: {0}")]
    Payload(#[from] base64::DecodeError),
}

/// The seam between the UI and whatever actually talks to the model.
/// Implementations own transport, authentication, and concurrency.
pub trait DesignBackend {
    fn generate_image(&self, request: &ImageRequestV1) -> Result<ImagePayloadV1, AiError>;
    fn suggest(&self, request: &SuggestionRequestV1) -> Result<String, AiError>;
    fn edit_image(&self, request: &ImageEditRequestV1) -> Result<ImagePayloadV1, AiError>;
}

/// A parsed piece of the suggestion text. The service returns one string
/// using `**Title**` lines as headings; the UI renders blocks, not markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionBlock {
    Heading(String),
    Paragraph(String),
}

/// Split suggestion text into headings and paragraphs. Blank lines are
/// dropped; a heading is a line fully wrapped in `**`.
pub fn parse_suggestions(text: &str) -> Vec<SuggestionBlock> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim_end();
            if line.trim().is_empty() {
                None
            } else if line.starts_with("**") && line.ends_with("**") && line.len() > 4 {
                Some(SuggestionBlock::Heading(
                    line[2..line.len() - 2].to_string(),
                ))
            } else {
                Some(SuggestionBlock::Paragraph(line.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_payload_round_trips_bytes() {
        let bytes = b"\x89PNG\r\n\x1a\n fake image body";
        let payload = ImagePayloadV1::from_bytes(bytes, PNG_MIME);
        assert_eq!(payload.mime_type, PNG_MIME);
        assert_eq!(payload.decode().unwrap(), bytes);
    }

    #[test]
    fn corrupt_payload_is_an_error() {
        let payload = ImagePayloadV1 {
            data: "not base64 !!!".into(),
            mime_type: PNG_MIME.into(),
        };
        assert!(matches!(payload.decode(), Err(AiError::Payload(_))));
    }

    #[test]
    fn model_tier_follows_thinking_mode() {
        assert_eq!(ModelTier::from_thinking_mode(false), ModelTier::Standard);
        assert_eq!(ModelTier::from_thinking_mode(true), ModelTier::Thinking);
    }

    #[test]
    fn only_thinking_tier_gets_a_budget() {
        assert_eq!(ModelTier::Standard.thinking_budget(), None);
        assert_eq!(
            ModelTier::Thinking.thinking_budget(),
            Some(THINKING_BUDGET)
        );
    }

    #[test]
    fn template_response_rejects_unknown_fields() {
        let json = r#"{
            "image": { "data": "", "mime_type": "image/png" },
            "suggestions": "use teal",
            "extra": 1
        }"#;
        assert!(serde_json::from_str::<TemplateResponseV1>(json).is_err());
    }

    #[test]
    fn parse_suggestions_splits_headings_and_paragraphs() {
        let text = "**Color Palette**\nUse teal as the primary color.\n\n**Font Pairing**\nPair a geometric sans with a humanist body face.";
        let blocks = parse_suggestions(text);
        assert_eq!(
            blocks,
            vec![
                SuggestionBlock::Heading("Color Palette".into()),
                SuggestionBlock::Paragraph("Use teal as the primary color.".into()),
                SuggestionBlock::Heading("Font Pairing".into()),
                SuggestionBlock::Paragraph(
                    "Pair a geometric sans with a humanist body face.".into()
                ),
            ]
        );
    }

    #[test]
    fn parse_suggestions_ignores_blank_lines_and_short_stars() {
        let blocks = parse_suggestions("\n\n****\nplain line\n");
        assert_eq!(
            blocks,
            vec![
                SuggestionBlock::Paragraph("****".into()),
                SuggestionBlock::Paragraph("plain line".into()),
            ]
        );
    }
}
