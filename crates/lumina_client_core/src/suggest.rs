//! Optional generative-text suggestions for event descriptions and photo captions.
//! Every failure degrades to an empty suggestion.

use base64::{engine::general_purpose, Engine as _};
use log::warn;
use serde::Deserialize;

pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const TEXT_MODEL: &str = "gemini-2.5-flash";
pub const VISION_MODEL: &str = "gemini-2.5-flash-image";

#[allow(async_fn_in_trait)]
pub trait TextSuggester {
    async fn describe_event(&self, title: &str, date: &str) -> String;
    async fn caption_photo(&self, mime: &str, bytes: &[u8]) -> String;
}

/// Used when no API key is configured.
pub struct NoSuggestions;

impl TextSuggester for NoSuggestions {
    async fn describe_event(&self, _title: &str, _date: &str) -> String {
        String::new()
    }

    async fn caption_photo(&self, _mime: &str, _bytes: &[u8]) -> String {
        String::new()
    }
}

pub fn event_description_prompt(title: &str, date: &str) -> String {
    format!(
        "Write a short, elegant, and inviting description (max 2 sentences) for a photography album \
         event titled \"{title}\" which took place on {date}. Focus on capturing memories and emotions."
    )
}

pub const CAPTION_PROMPT: &str =
    "Describe this photo in one short, artistic sentence suitable for a gallery caption.";

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    text: Option<String>,
}

/// Concatenated text of the first candidate; empty for anything unexpected.
pub(crate) fn response_text(body: &str) -> String {
    serde_json::from_str::<GenerateResponse>(body)
        .ok()
        .and_then(|r| r.candidates.into_iter().next())
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

pub struct GeminiSuggester {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiSuggester {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(reqwest::Client::new(), api_key, GEMINI_ENDPOINT)
    }

    pub fn with_endpoint(client: reqwest::Client, api_key: Option<String>, endpoint: &str) -> Self {
        Self {
            client,
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    async fn generate(&self, model: &str, parts: serde_json::Value) -> String {
        let Some(key) = &self.api_key else {
            warn!("suggestions disabled: no API key configured");
            return String::new();
        };
        let url = format!("{}/{model}:generateContent", self.endpoint);
        let body = serde_json::json!({ "contents": [{ "parts": parts }] });
        let resp = match self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!("suggestion request failed: {e}");
                return String::new();
            }
        };
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            warn!("suggestion API returned {status}: {text}");
            return String::new();
        }
        response_text(&text)
    }
}

impl TextSuggester for GeminiSuggester {
    async fn describe_event(&self, title: &str, date: &str) -> String {
        let parts = serde_json::json!([{ "text": event_description_prompt(title, date) }]);
        self.generate(TEXT_MODEL, parts).await
    }

    async fn caption_photo(&self, mime: &str, bytes: &[u8]) -> String {
        let parts = serde_json::json!([
            { "inlineData": { "mimeType": mime, "data": general_purpose::STANDARD.encode(bytes) } },
            { "text": CAPTION_PROMPT }
        ]);
        self.generate(VISION_MODEL, parts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Golden light "},{"text":"on the pier."}]}}]}"#;
        assert_eq!(response_text(body), "Golden light on the pier.");
    }

    #[test]
    fn malformed_or_empty_responses_yield_nothing() {
        assert_eq!(response_text("not json"), "");
        assert_eq!(response_text(r#"{"candidates":[]}"#), "");
        assert_eq!(response_text(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#), "");
    }

    #[test]
    fn prompt_mentions_title_and_date() {
        let p = event_description_prompt("Smith Wedding", "2024-06-01");
        assert!(p.contains("\"Smith Wedding\""));
        assert!(p.contains("2024-06-01"));
    }

    #[tokio::test]
    async fn missing_key_returns_empty_without_network() {
        let s = GeminiSuggester::with_endpoint(reqwest::Client::new(), None, "http://127.0.0.1:9");
        assert_eq!(s.describe_event("x", "2024-01-01").await, "");
        assert_eq!(s.caption_photo("image/jpeg", b"abc").await, "");
    }
}
