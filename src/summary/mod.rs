//! AI summarization of caption text.
//!
//! Builds a prompt from the combined captions and the video title, asks the
//! model for a JSON-only reply, and parses it into a [`VideoSummary`]. Model
//! output is non-deterministic: two calls over the same captions may differ,
//! and each result replaces any earlier one wholesale.

use crate::config::SummarySettings;
use crate::error::{OppsumError, Result};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Marker appended when caption text is cut to the configured maximum.
const TRUNCATION_MARKER: &str = "...";

const SYSTEM_PROMPT: &str = "You are an assistant that summarizes video transcripts. \
Respond with a single JSON object and nothing else.";

/// Structured summary of one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub overview: String,
    pub key_points: Vec<String>,
    pub timestamps: Vec<SummaryTimestamp>,
}

/// A notable moment; `time` is MM:SS or HH:MM:SS as the model wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTimestamp {
    pub time: String,
    pub description: String,
}

/// Generates structured summaries from caption text.
pub struct Summarizer {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    max_caption_chars: usize,
    temperature: f32,
}

impl Summarizer {
    pub fn new(api_key: &str, settings: &SummarySettings) -> Self {
        Self {
            client: create_client(api_key),
            model: settings.model.clone(),
            max_caption_chars: settings.max_caption_chars,
            temperature: settings.temperature,
        }
    }

    /// Generate a summary for the given caption text and video title.
    #[instrument(skip(self, captions_text), fields(title = %video_title))]
    pub async fn summarize(
        &self,
        captions_text: &str,
        video_title: &str,
    ) -> Result<VideoSummary> {
        let truncated = truncate_chars(captions_text, self.max_caption_chars);
        let prompt = build_prompt(video_title, &truncated);

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_PROMPT)
                .build()
                .map_err(|e| OppsumError::Summarize(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| OppsumError::Summarize(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| OppsumError::Summarize(e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            OppsumError::Summarize(format!("Failed to generate summary: {}", e))
        })?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| OppsumError::Summarize("Empty response from model".to_string()))?;

        debug!(bytes = content.len(), "received summary response");

        let summary = parse_summary(content)?;
        info!(
            key_points = summary.key_points.len(),
            timestamps = summary.timestamps.len(),
            "generated summary"
        );
        Ok(summary)
    }
}

/// Cut text to `max_chars` characters on a char boundary, appending a marker
/// so the model knows the transcript was cut.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}{}", &text[..idx], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

fn build_prompt(video_title: &str, captions: &str) -> String {
    format!(
        r#"The following is the transcript of the video "{video_title}".

Transcript:
{captions}

Analyze the transcript and produce:

1. An overview: 3-5 sentences capturing the core content.
2. Key points: the 5-7 most important takeaways.
3. Major timestamps: 3-5 notable moments with their times.

Respond with ONLY a JSON object in this exact format:
{{
  "overview": "the overview",
  "keyPoints": ["point 1", "point 2", "point 3"],
  "timestamps": [
    {{"time": "00:00", "description": "what happens"}},
    {{"time": "05:30", "description": "what happens"}}
  ]
}}"#
    )
}

/// Strip a surrounding markdown code fence, language-tagged or bare.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline.
    let body = match body.find('\n') {
        Some(idx) => &body[idx + 1..],
        None => body,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a model reply into a summary.
///
/// An unparseable reply is a hard failure; nothing is repaired beyond fence
/// stripping and no partial summary is returned.
fn parse_summary(text: &str) -> Result<VideoSummary> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|e| OppsumError::SummaryParse(e.to_string()))
}
