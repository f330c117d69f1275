//! Slide-deck object model and PresentationML (`.pptx`) package writer.
//!
//! A [`Presentation`] starts with one slide master carrying two layouts,
//! "Title Slide" and "Title and Content". Slides clone the placeholders of the
//! layout they are created from; text goes into those placeholders and the
//! whole deck is written as a ZIP package with [`Presentation::to_bytes`].

pub mod error;
pub mod layout;
mod package;
mod presentation;
pub mod reader;
mod slide;
mod xml;

pub use error::{PptxError, Result};
pub use layout::{
    PlaceholderSpec, PlaceholderType, SlideLayout, TITLE_AND_CONTENT_LAYOUT, TITLE_SLIDE_LAYOUT,
};
pub use presentation::Presentation;
pub use reader::{read_outline, SlideOutline};
pub use slide::{Paragraph, Placeholder, Slide, TextFrame};
