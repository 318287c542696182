/// LLM Client: the single point of entry for all Gemini API calls in Masari.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All inference goes through `LlmClient`, which sits on top of the
/// `InferenceBackend` transport trait so tests can script responses.
///
/// One request per user action. There is no retry and no client-side timeout.
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::llm_client::schema::Schema;

pub mod prompts;
pub mod schema;
#[cfg(test)]
pub mod testing;

/// Model used for structured extraction and chat.
pub const TEXT_MODEL: &str = "gemini-2.5-flash";
/// Model used for image generation.
pub const IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM response contained no image")]
    NoImage,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (generateContent)
// ────────────────────────────────────────────────────────────────────────────

pub const ROLE_USER: &str = "user";
pub const ROLE_MODEL: &str = "model";

/// Base64 payload with its declared mime type (`inlineData`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
    /// Part kinds the app never sends and ignores on receipt.
    Other(serde_json::Value),
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn inline(blob: Blob) -> Self {
        Part::InlineData { inline_data: blob }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Content {
            role: Some(ROLE_USER.to_string()),
            parts,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Content {
            role: Some(ROLE_MODEL.to_string()),
            parts: vec![Part::text(text)],
        }
    }

    /// System instructions carry no role.
    pub fn system(text: impl Into<String>) -> Self {
        Content {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub image_size: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    fn parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
    }

    /// Why the first candidate stopped, e.g. `STOP`, `MAX_TOKENS` or `SAFETY`.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }

    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .parts()
            .iter()
            .filter_map(|p| match p {
                Part::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// The first inline image part of the first candidate.
    pub fn first_image(&self) -> Option<&Blob> {
        self.parts().iter().find_map(|p| match p {
            Part::InlineData { inline_data } => Some(inline_data),
            _ => None,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Transport
// ────────────────────────────────────────────────────────────────────────────

/// One request/response exchange with a generative model.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError>;
}

/// HTTP transport against the Gemini REST API.
pub struct GeminiTransport {
    client: Client,
    api_base: String,
    api_key: String,
}

impl GeminiTransport {
    pub fn new(api_base: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_base,
            api_key,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.api_base)
    }
}

#[async_trait]
impl InferenceBackend for GeminiTransport {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}: {}", status, body);
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        if let Some(reason) = parsed.finish_reason().filter(|r| *r != "STOP") {
            warn!("Gemini candidate finished early: model={}, reason={}", model, reason);
        }

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, candidate_tokens={}",
                model, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(parsed)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single LLM client used by all features.
/// Wraps a transport with the structured-output, chat and image helpers.
#[derive(Clone)]
pub struct LlmClient {
    backend: Arc<dyn InferenceBackend>,
}

impl LlmClient {
    pub fn new(config: &Config) -> Self {
        Self::with_backend(Arc::new(GeminiTransport::new(
            config.gemini_api_base.clone(),
            config.gemini_api_key.clone(),
        )))
    }

    pub fn with_backend(backend: Arc<dyn InferenceBackend>) -> Self {
        Self { backend }
    }

    /// Sends an optional attachment plus an instruction and deserializes the
    /// schema-constrained JSON answer.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        attachment: Option<Blob>,
        instruction: &str,
        schema: Schema,
    ) -> Result<T, LlmError> {
        let mut parts = Vec::with_capacity(2);
        if let Some(blob) = attachment {
            parts.push(Part::inline(blob));
        }
        parts.push(Part::text(instruction));

        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::user(parts)],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some(JSON_MIME_TYPE.to_string()),
                response_schema: Some(schema),
                image_config: None,
            }),
        };

        let response = self.backend.generate(TEXT_MODEL, &request).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them
        serde_json::from_str(strip_json_fences(&text)).map_err(LlmError::Parse)
    }

    /// One conversational turn: prior history plus the new user message.
    pub async fn chat(
        &self,
        system: &str,
        history: &[Content],
        message: &str,
    ) -> Result<String, LlmError> {
        let mut contents = history.to_vec();
        contents.push(Content::user(vec![Part::text(message)]));

        let request = GenerateContentRequest {
            system_instruction: Some(Content::system(system)),
            contents,
            generation_config: None,
        };

        let response = self.backend.generate(TEXT_MODEL, &request).await?;
        response.text().ok_or(LlmError::EmptyContent)
    }

    /// Generates an image and returns the first image part.
    pub async fn generate_image(&self, prompt: &str, image_size: &str) -> Result<Blob, LlmError> {
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::user(vec![Part::text(prompt)])],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    image_size: image_size.to_string(),
                }),
                ..GenerationConfig::default()
            }),
        };

        let response = self.backend.generate(IMAGE_MODEL, &request).await?;
        response.first_image().cloned().ok_or(LlmError::NoImage)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    stripped
        .trim_start()
        .strip_suffix("```")
        .map(|s| s.trim())
        .unwrap_or(stripped.trim_start())
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedBackend;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_request_serializes_to_generate_content_shape() {
        let request = GenerateContentRequest {
            system_instruction: Some(Content::system("be brief")),
            contents: vec![Content::user(vec![
                Part::inline(Blob {
                    mime_type: "application/pdf".to_string(),
                    data: "QUJD".to_string(),
                }),
                Part::text("extract"),
            ])],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(Schema::object([("score", Schema::number())])),
                image_config: None,
            }),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "systemInstruction": { "parts": [{ "text": "be brief" }] },
                "contents": [{
                    "role": "user",
                    "parts": [
                        { "inlineData": { "mimeType": "application/pdf", "data": "QUJD" } },
                        { "text": "extract" }
                    ]
                }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": {
                        "type": "OBJECT",
                        "properties": { "score": { "type": "NUMBER" } }
                    }
                }
            })
        );
    }

    #[test]
    fn test_response_text_joins_text_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Hel" }, { "text": "lo" }] } },
                { "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
            ],
            "usageMetadata": { "promptTokenCount": 3, "candidatesTokenCount": 2 }
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("Hello"));
        assert_eq!(response.usage_metadata.unwrap().candidates_token_count, 2);
    }

    #[test]
    fn test_response_first_image_skips_text_and_unknown_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "here you go" },
                    { "functionCall": { "name": "noop" } },
                    { "inlineData": { "mimeType": "image/png", "data": "iVBO" } }
                ] }
            }]
        }))
        .unwrap();

        let image = response.first_image().unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBO");
    }

    #[test]
    fn test_empty_candidates_have_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.text().is_none());
        assert!(response.first_image().is_none());
        assert!(response.finish_reason().is_none());
    }

    #[test]
    fn test_finish_reason_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "SAFETY" }]
        }))
        .unwrap();
        assert_eq!(response.finish_reason(), Some("SAFETY"));
        assert!(response.text().is_none());
    }

    #[tokio::test]
    async fn test_call_json_sends_attachment_before_instruction() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_text("```json\n{\"score\": 71}\n```");
        let llm = LlmClient::with_backend(backend.clone());

        #[derive(Deserialize)]
        struct Score {
            score: f64,
        }

        let blob = Blob {
            mime_type: "text/plain".to_string(),
            data: "aGk=".to_string(),
        };
        let parsed: Score = llm
            .call_json(
                Some(blob.clone()),
                "rate it",
                Schema::object([("score", Schema::number())]),
            )
            .await
            .unwrap();
        assert_eq!(parsed.score, 71.0);

        let (model, request) = backend.last_request().unwrap();
        assert_eq!(model, TEXT_MODEL);
        assert_eq!(
            request.contents[0].parts,
            vec![Part::inline(blob), Part::text("rate it")]
        );
    }

    #[tokio::test]
    async fn test_call_json_reports_parse_failure() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_text("not json at all");
        let llm = LlmClient::with_backend(backend);

        let result: Result<serde_json::Value, _> =
            llm.call_json(None, "x", Schema::string()).await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[tokio::test]
    async fn test_chat_appends_message_after_history() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_text("Tell me about yourself.");
        let llm = LlmClient::with_backend(backend.clone());

        let history = vec![
            Content::user(vec![Part::text("Hi")]),
            Content::model("Hello! Ready?"),
        ];
        let reply = llm.chat("coach", &history, "Yes").await.unwrap();
        assert_eq!(reply, "Tell me about yourself.");

        let (_, request) = backend.last_request().unwrap();
        assert_eq!(request.contents.len(), 3);
        assert_eq!(request.contents[2], Content::user(vec![Part::text("Yes")]));
        assert_eq!(request.system_instruction, Some(Content::system("coach")));
    }

    #[tokio::test]
    async fn test_generate_image_without_image_part_fails() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_text("I cannot draw that");
        let llm = LlmClient::with_backend(backend.clone());

        let result = llm.generate_image("a logo", "1K").await;
        assert!(matches!(result, Err(LlmError::NoImage)));
        assert_eq!(backend.last_request().unwrap().0, IMAGE_MODEL);
    }
}
