use std::fmt;
use thiserror::Error;

use slide_common::InvalidRequest;
use slide_pptx::PptxError;

/// Which kind of slide the deck builder was creating when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOrigin {
    Title,
    Content { index: usize },
}

impl fmt::Display for SlideOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideOrigin::Title => f.write_str("title slide"),
            SlideOrigin::Content { index } => write!(f, "content slide {}", index + 1),
        }
    }
}

/// Every way a generation run can fail. None are retried; the first one
/// aborts the run and no partial deck is returned.
#[derive(Error, Debug)]
pub enum SlideError {
    /// No API key was supplied through any configuration source.
    #[error("Groq API key is not set! Please provide your API key.")]
    CredentialMissing,

    #[error("Invalid slide configuration: {0}")]
    InvalidRequest(#[from] InvalidRequest),

    /// The completion text is not JSON. `raw` is the text exactly as received.
    #[error("Invalid JSON response: {raw}")]
    InvalidResponseFormat {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required key is absent or has the wrong shape.
    #[error("Invalid content format: missing or malformed '{key}'")]
    InvalidContentFormat { key: String },

    #[error("Generated slides count mismatch: expected {expected}, got {actual}")]
    Validation { expected: usize, actual: usize },

    #[error("Slide creation error ({origin}): {source}")]
    SlideCreation {
        origin: SlideOrigin,
        #[source]
        source: PptxError,
    },

    /// Transport, authentication, rate-limit or payload failure from the model API.
    #[error("API Error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[source] PptxError),
}

impl SlideError {
    /// True when the failure looks like a rejected credential.
    pub fn is_authentication(&self) -> bool {
        match self {
            SlideError::CredentialMissing => true,
            SlideError::Transport(message) => {
                let message = message.to_lowercase();
                message.contains("authentication")
                    || message.contains("invalid api key")
                    || message.contains("401")
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SlideError>;
