use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use referee_common::error::{RefereeError, RefereeResult};
use referee_config::LlmSettings;

use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ModelList};

/// One prompt in, one completion out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> RefereeResult<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("HTTP {status}: {body}")]
    HttpError { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("completion response contained no choices")]
    EmptyResponse,
}

impl From<CompletionError> for RefereeError {
    fn from(err: CompletionError) -> Self {
        RefereeError::Upstream(err.to_string())
    }
}

/// Client for Groq's OpenAI-compatible endpoints. Issues exactly one request
/// per call: no retries, and no timeout beyond reqwest's defaults.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    settings: LlmSettings,
}

impl GroqClient {
    pub fn new(settings: &LlmSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/openai/v1/{}",
            self.settings.api_base.trim_end_matches('/'),
            endpoint
        )
    }

    /// Send a single user message and return the first choice's text.
    pub async fn chat(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = ChatCompletionRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let response = self
            .client
            .post(self.url("chat/completions"))
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::HttpError { status, body });
        }

        response
            .json::<ChatCompletionResponse>()
            .await?
            .first_content()
            .ok_or(CompletionError::EmptyResponse)
    }

    /// Model ids available to the configured API key.
    pub async fn list_models(&self) -> Result<Vec<String>, CompletionError> {
        let response = self
            .client
            .get(self.url("models"))
            .bearer_auth(&self.settings.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::HttpError { status, body });
        }

        let list = response.json::<ModelList>().await?;
        Ok(list.data.into_iter().map(|m| m.id).collect())
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, prompt: &str) -> RefereeResult<String> {
        tracing::debug!(model = %self.settings.model, prompt_chars = prompt.len(), "requesting completion");
        let text = self.chat(prompt).await.map_err(|e| {
            tracing::error!(error = %e, "completion request failed");
            RefereeError::from(e)
        })?;
        tracing::debug!(completion_chars = text.len(), "completion received");
        Ok(text)
    }
}
