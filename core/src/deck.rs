//! Maps validated content onto slides.

use slide_common::{DeckContent, SlideContent};
use slide_pptx::{Presentation, TITLE_AND_CONTENT_LAYOUT, TITLE_SLIDE_LAYOUT};

use crate::error::{Result, SlideError, SlideOrigin};

/// Body placeholder idx on the "Title and Content" layout.
const BODY_PLACEHOLDER_IDX: u32 = 1;

/// One title slide followed by one content slide per entry of
/// `content.slides`, each keeping at most `points_per_slide` bullets.
pub fn build_deck(content: &DeckContent, points_per_slide: usize) -> Result<Presentation> {
    let mut presentation = Presentation::new();
    presentation.set_title(&content.title);

    add_title_slide(&mut presentation, &content.title).map_err(|source| {
        SlideError::SlideCreation {
            origin: SlideOrigin::Title,
            source,
        }
    })?;

    for (index, slide) in content.slides.iter().enumerate() {
        add_content_slide(&mut presentation, slide, points_per_slide).map_err(|source| {
            SlideError::SlideCreation {
                origin: SlideOrigin::Content { index },
                source,
            }
        })?;
    }

    tracing::debug!("built deck with {} slides", presentation.slide_count());
    Ok(presentation)
}

fn add_title_slide(presentation: &mut Presentation, title: &str) -> slide_pptx::Result<()> {
    let slide = presentation.add_slide(TITLE_SLIDE_LAYOUT)?;
    let layout = slide.layout_name();
    slide
        .title_mut()
        .ok_or(slide_pptx::PptxError::PlaceholderNotFound { idx: 0, layout })?
        .set_text(title);
    Ok(())
}

fn add_content_slide(
    presentation: &mut Presentation,
    content: &SlideContent,
    points_per_slide: usize,
) -> slide_pptx::Result<()> {
    let slide = presentation.add_slide(TITLE_AND_CONTENT_LAYOUT)?;
    let layout = slide.layout_name();
    slide
        .title_mut()
        .ok_or(slide_pptx::PptxError::PlaceholderNotFound { idx: 0, layout })?
        .set_text(&content.title);

    let body = slide.require_placeholder_mut(BODY_PLACEHOLDER_IDX)?;
    for point in content.points.iter().take(points_per_slide) {
        body.add_paragraph(point, 0);
    }
    Ok(())
}
