//! prompt → model → parse/validate → build → serialize.

use slide_chatgpt::ChatClient;
use slide_common::{DeckFile, GenerationRequest};
use slide_pptx::Presentation;

use crate::client::{request_completion, ModelClient};
use crate::config::Config;
use crate::deck::build_deck;
use crate::error::Result;
use crate::prompt::build_prompt;
use crate::response::parse_deck_content;
use crate::serializer::serialize_deck;

/// Ask the model for content and lay it out as a presentation.
pub async fn generate_presentation(
    client: &dyn ModelClient,
    model: &str,
    request: &GenerationRequest,
) -> Result<Presentation> {
    let prompt = build_prompt(request);
    tracing::info!(
        "requesting {} slides x {} points on {:?} from {}",
        request.slide_count(),
        request.points_per_slide(),
        request.topic(),
        model
    );

    let raw = request_completion(client, model, &prompt).await?;
    tracing::debug!("model returned {} bytes", raw.len());

    let content = parse_deck_content(&raw, request)?;
    tracing::info!("validated deck content titled {:?}", content.title);

    build_deck(&content, request.points_per_slide())
}

/// Full run with a caller-supplied client.
pub async fn generate_deck_with(
    client: &dyn ModelClient,
    model: &str,
    request: &GenerationRequest,
) -> Result<DeckFile> {
    let presentation = generate_presentation(client, model, request).await?;
    let bytes = serialize_deck(&presentation)?;
    let file = DeckFile::for_topic(request.topic(), bytes);
    tracing::info!("generated {} ({} bytes)", file.file_name, file.bytes.len());
    Ok(file)
}

/// Full run against the provider named by `config`.
pub async fn generate_deck(config: &Config, request: &GenerationRequest) -> Result<DeckFile> {
    let api_key = config.require_api_key()?;
    let client = ChatClient::with_base_url(api_key.to_string(), config.base_url.clone());
    generate_deck_with(&client, &config.model, request).await
}
