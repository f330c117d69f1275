//! Minimal client for OpenAI-compatible chat completion endpoints.

mod client;
mod types;

pub use client::ChatClient;
pub use client::DEFAULT_BASE_URL;
pub use types::ChatCompletionRequest;
pub use types::ChatCompletionResponse;
pub use types::ChatMessage;
pub use types::Choice;
pub use types::ResponseMessage;
pub use types::Role;
pub use types::Usage;
