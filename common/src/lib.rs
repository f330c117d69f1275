//! Types shared by every layer of the slide generator.

mod deck_file;
mod types;

pub use deck_file::file_name_for_topic;
pub use deck_file::DeckFile;
pub use deck_file::PPTX_EXTENSION;
pub use deck_file::PPTX_MIME_TYPE;
pub use types::DeckContent;
pub use types::GenerationRequest;
pub use types::InvalidRequest;
pub use types::SlideContent;
