use anyhow::{anyhow, Context, Result};

use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Chat Completions client. One request per call, no streaming, no retries.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ChatClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub async fn create(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        let endpoint = self.endpoint();
        tracing::debug!(
            "POST {} model={} messages={}",
            endpoint,
            request.model,
            request.messages.len()
        );

        let resp = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .with_context(|| format!("request to {endpoint} failed"))?;

        let status = resp.status();
        tracing::debug!("Response Status: {}", status);

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow!("chat completions http {status}: {text}"));
        }

        let body = resp
            .text()
            .await
            .context("failed to read chat completion body")?;
        serde_json::from_str(&body)
            .with_context(|| format!("unexpected chat completion payload: {body}"))
    }
}
