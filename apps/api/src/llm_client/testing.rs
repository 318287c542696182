//! Scripted `InferenceBackend` for unit and router tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Semaphore;

use super::{GenerateContentRequest, GenerateContentResponse, InferenceBackend, LlmError};

type Scripted = Result<GenerateContentResponse, LlmError>;

/// Replays queued responses in order and records every request it receives.
#[derive(Default)]
pub struct ScriptedBackend {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<(String, GenerateContentRequest)>>,
    gate: Option<Arc<Semaphore>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose calls block until a permit is added to the returned semaphore.
    pub fn gated() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let backend = Self {
            gate: Some(gate.clone()),
            ..Self::default()
        };
        (backend, gate)
    }

    pub fn push_text(&self, text: &str) {
        self.push(Ok(response(json!([{ "text": text }]))));
    }

    pub fn push_json(&self, value: serde_json::Value) {
        self.push_text(&value.to_string());
    }

    pub fn push_image(&self, mime_type: &str, data: &str) {
        self.push(Ok(response(json!([
            { "inlineData": { "mimeType": mime_type, "data": data } }
        ]))));
    }

    pub fn push_error(&self, status: u16, message: &str) {
        self.push(Err(LlmError::Api {
            status,
            message: message.to_string(),
        }));
    }

    fn push(&self, scripted: Scripted) {
        self.responses.lock().unwrap().push_back(scripted);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<(String, GenerateContentRequest)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

fn response(parts: serde_json::Value) -> GenerateContentResponse {
    serde_json::from_value(json!({
        "candidates": [{ "content": { "role": "model", "parts": parts }, "finishReason": "STOP" }]
    }))
    .unwrap()
}

#[async_trait]
impl InferenceBackend for ScriptedBackend {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), request.clone()));

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(LlmError::Api {
                    status: 500,
                    message: "no scripted response".to_string(),
                })
            })
    }
}
