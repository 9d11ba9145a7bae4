//! Client for an OpenAI-compatible chat completions endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ArbiterConfig;
use crate::error::ProviderError;
use crate::move_token::MoveToken;
use crate::provider::{extract_move_token, MoveProvider};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// One shared HTTP client per process; cheap to clone, safe to use from
/// concurrent requests.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl CompletionClient {
    /// Create a client from config.
    /// Returns None if no API key is configured.
    pub fn new(config: &ArbiterConfig) -> Result<Option<Self>, ProviderError> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(None);
        };

        let client = Client::builder()
            .user_agent("LlmChess/1.0")
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Some(Self {
            client,
            url: config.completions_url(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }))
    }
}

#[async_trait]
impl MoveProvider for CompletionClient {
    async fn fetch_move(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<MoveToken, ProviderError> {
        let request = ChatRequest {
            model: &self.model,
            temperature,
            max_tokens: self.max_tokens,
            messages: [
                ChatMessage { role: "system", content: system_prompt },
                ChatMessage { role: "user", content: user_prompt },
            ],
        };

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ProviderError::Status(resp.status().as_u16()));
        }

        let body = resp.text().await?;
        let data: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::MalformedResponse(format!("JSON parse error: {e}")))?;

        let content = data
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ProviderError::MalformedResponse("No message content in first choice".into()))?;

        debug!(content = %content, "Completion reply");
        extract_move_token(&content)
    }
}
