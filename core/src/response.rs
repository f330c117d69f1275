//! Turns completion text into validated [`DeckContent`].

use serde_json::{Map, Value};
use slide_common::{DeckContent, GenerationRequest, SlideContent};

use crate::error::{Result, SlideError};

/// Parse the model's reply and check it against what was requested.
///
/// The slide count must match exactly; extra or missing slides are an error,
/// never truncated or padded.
pub fn parse_deck_content(raw: &str, request: &GenerationRequest) -> Result<DeckContent> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| SlideError::InvalidResponseFormat {
            raw: raw.to_string(),
            source,
        })?;

    let title = required_string(value.get("title"), "title")?;
    let slides = value
        .get("slides")
        .and_then(Value::as_array)
        .ok_or_else(|| missing("slides"))?;

    if slides.len() != request.slide_count() {
        return Err(SlideError::Validation {
            expected: request.slide_count(),
            actual: slides.len(),
        });
    }

    let slides = slides
        .iter()
        .enumerate()
        .map(|(index, slide)| parse_slide(index, slide))
        .collect::<Result<Vec<_>>>()?;

    Ok(DeckContent { title, slides })
}

fn parse_slide(index: usize, value: &Value) -> Result<SlideContent> {
    let fields: &Map<String, Value> = value
        .as_object()
        .ok_or_else(|| missing(&format!("slides[{index}]")))?;

    let title = required_string(fields.get("title"), &format!("slides[{index}].title"))?;
    let points = fields
        .get("content")
        .and_then(Value::as_array)
        .ok_or_else(|| missing(&format!("slides[{index}].content")))?
        .iter()
        .map(point_text)
        .collect();

    Ok(SlideContent { title, points })
}

fn required_string(value: Option<&Value>, key: &str) -> Result<String> {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| missing(key))
}

/// Bullet text: strings verbatim, anything else as its JSON text.
fn point_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn missing(key: &str) -> SlideError {
    SlideError::InvalidContentFormat {
        key: key.to_string(),
    }
}
