//! Remote intent classification over an OpenAI-compatible chat endpoint.
//!
//! One low-temperature, non-streaming turn per call, no retries. The raw
//! assistant text is returned as-is; making sense of it is the extractor's
//! job.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::ClassifierConfig;

/// Fixed system instruction establishing the JSON output contract.
/// Lives in assets/ so prompt edits never touch code.
const SYSTEM_PROMPT: &str = include_str!("../assets/classifier_prompt.txt");

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("classifier endpoint returned {status}: {body}")]
    Endpoint { status: u16, body: String },
    #[error("response contained no assistant message")]
    EmptyResponse,
}

/// Seam for the hosted model so the dispatcher can be tested offline.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Ask the model to classify `text`. Returns the raw response text,
    /// which is expected (but not guaranteed) to contain a JSON object.
    async fn classify(&self, text: &str) -> Result<String, ClassifierError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Classifier backed by a hosted chat-completion model.
pub struct RemoteClassifier {
    client: reqwest::Client,
    config: ClassifierConfig,
}

impl RemoteClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn request_body<'a>(&'a self, text: &str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("用户输入：{}", text),
                },
            ],
            temperature: self.config.temperature,
            stream: false,
        }
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, text: &str) -> Result<String, ClassifierError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ClassifierError::EmptyResponse)?;

        let content = content.trim().to_string();
        debug!(raw = %content, "classifier response");
        Ok(content)
    }
}
