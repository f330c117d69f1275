use anyhow::Result;
use async_trait::async_trait;
use slide_chatgpt::{ChatClient, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

use crate::error::SlideError;

/// Persona sent as the system message of every request.
pub const SYSTEM_PERSONA: &str = "You are a presentation expert creating structured slide content.";

pub const TEMPERATURE: f32 = 0.7;

/// Anything that can answer a chat completion request.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn chat(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse>;
}

#[async_trait]
impl ModelClient for ChatClient {
    async fn chat(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        self.create(request).await
    }
}

pub fn completion_request(model: &str, prompt: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage::system(SYSTEM_PERSONA), ChatMessage::user(prompt)],
        temperature: TEMPERATURE,
    }
}

/// Issue one completion and return the first choice's text unmodified.
pub async fn request_completion(
    client: &dyn ModelClient,
    model: &str,
    prompt: &str,
) -> Result<String, SlideError> {
    let request = completion_request(model, prompt);
    let response = client
        .chat(&request)
        .await
        .map_err(|e| SlideError::Transport(format!("{e:#}")))?;

    if let Some(usage) = response.usage {
        tracing::debug!(
            "completion used {} prompt + {} completion tokens",
            usage.prompt_tokens,
            usage.completion_tokens
        );
    }

    response
        .first_content()
        .map(str::to_string)
        .ok_or_else(|| SlideError::Transport("completion contained no message content".into()))
}
