use slide_pptx::Presentation;

use crate::error::{Result, SlideError};

/// Encode a finished deck as `.pptx` bytes, entirely in memory.
pub fn serialize_deck(presentation: &Presentation) -> Result<Vec<u8>> {
    let bytes = presentation.to_bytes().map_err(SlideError::Serialization)?;
    tracing::debug!("serialized deck to {} bytes", bytes.len());
    Ok(bytes)
}
