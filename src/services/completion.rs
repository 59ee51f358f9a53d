use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub const COMPLETION_MODEL: &str = "gpt-4";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("completion reply contained no choices")]
    EmptyReply,
}

#[derive(Debug, Clone)]
pub struct CompletionPrompt {
    pub system: String,
    pub user: String,
    pub json_response: bool,
}

#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: CompletionPrompt) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to create HTTP client"),
            api_key,
            base_url,
            model: COMPLETION_MODEL.to_string(),
        }
    }

    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        Self::new(api_key, base_url)
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(&self, prompt: CompletionPrompt) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            response_format: prompt
                .json_response
                .then_some(ResponseFormat { format: "json_object" }),
        };

        debug!("Sending completion request ({} chars)", prompt.user.len());

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CompletionError::Status(response.status()));
        }

        let reply: ChatReply = response.json().await?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyReply)?
            .message
            .content;

        info!("Completion reply received ({} chars)", content.len());

        Ok(content)
    }
}
