use crate::error::{PptxError, Result};
use crate::layout::{default_layouts, SlideLayout};
use crate::slide::Slide;

/// First `<p:sldId id>` value PowerPoint accepts.
const FIRST_SLIDE_ID: u32 = 256;

/// An in-memory presentation built on the built-in master.
///
/// Slides keep insertion order. Serialization borrows the presentation, so a
/// written deck is never altered by the writer.
#[derive(Debug, Clone)]
pub struct Presentation {
    layouts: Vec<SlideLayout>,
    slides: Vec<Slide>,
    /// Slide width in EMUs (914400 EMU = 1 inch)
    slide_width: i64,
    slide_height: i64,
    title: Option<String>,
}

impl Presentation {
    /// Empty 10" x 7.5" (4:3) presentation.
    pub fn new() -> Self {
        Self {
            layouts: default_layouts(),
            slides: Vec::new(),
            slide_width: 9_144_000,
            slide_height: 6_858_000,
            title: None,
        }
    }

    pub fn layouts(&self) -> &[SlideLayout] {
        &self.layouts
    }

    /// Append a slide using the layout at `layout_index`.
    pub fn add_slide(&mut self, layout_index: usize) -> Result<&mut Slide> {
        let layout = self
            .layouts
            .get(layout_index)
            .ok_or(PptxError::LayoutNotFound {
                index: layout_index,
                available: self.layouts.len(),
            })?;
        let id = FIRST_SLIDE_ID + self.slides.len() as u32;
        let slide = Slide::from_layout(id, layout_index, layout);

        let index = self.slides.len();
        self.slides.push(slide);
        Ok(&mut self.slides[index])
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Document title stored in the core properties.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}
