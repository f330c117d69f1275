//! Reads the text outline back out of a `.pptx` package.

use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{PptxError, Result};

/// Title and bullet text of one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideOutline {
    pub title: Option<String>,
    /// Non-empty paragraphs of every non-title placeholder, in document order.
    pub body: Vec<String>,
}

/// Outline of every slide, in presentation order.
pub fn read_outline(bytes: &[u8]) -> Result<Vec<SlideOutline>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    let rel_ids = slide_rel_ids(&read_part(&mut archive, "ppt/presentation.xml")?)?;
    let targets = relationship_targets(&read_part(
        &mut archive,
        "ppt/_rels/presentation.xml.rels",
    )?)?;

    let mut outlines = Vec::with_capacity(rel_ids.len());
    for rel_id in rel_ids {
        let target = targets
            .get(&rel_id)
            .ok_or_else(|| PptxError::MissingPart(format!("relationship {rel_id}")))?;
        let path = resolve_target(target);
        let xml = read_part(&mut archive, &path)?;
        outlines.push(parse_slide(&xml)?);
    }
    Ok(outlines)
}

fn read_part<R: Read + Seek>(archive: &mut zip::ZipArchive<R>, name: &str) -> Result<String> {
    let mut file = archive
        .by_name(name)
        .map_err(|_| PptxError::MissingPart(name.to_string()))?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Targets in presentation.xml.rels are relative to `ppt/`.
fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("ppt/{target}"),
    }
}

fn attr_value(e: &BytesStart<'_>, local: &[u8], prefixed: bool) -> Option<String> {
    e.attributes().flatten().find_map(|attr| {
        let key = attr.key;
        let matches = key.local_name().as_ref() == local && key.prefix().is_some() == prefixed;
        matches.then(|| String::from_utf8_lossy(&attr.value).to_string())
    })
}

/// `r:id` of each `<p:sldId>`, in order.
fn slide_rel_ids(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut ids = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"sldId" => {
                if let Some(rel_id) = attr_value(&e, b"id", true) {
                    ids.push(rel_id);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(ids)
}

fn relationship_targets(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut targets = HashMap::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) =
                    (attr_value(&e, b"Id", false), attr_value(&e, b"Target", false))
                {
                    targets.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(targets)
}

fn is_title_placeholder(e: &BytesStart<'_>) -> bool {
    matches!(
        attr_value(e, b"type", false).as_deref(),
        Some("title" | "ctrTitle")
    )
}

fn parse_slide(xml: &str) -> Result<SlideOutline> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut outline = SlideOutline::default();
    let mut buf = Vec::new();
    let mut in_shape = false;
    let mut in_text = false;
    let mut shape_is_title = false;
    let mut shape_paragraphs: Vec<String> = Vec::new();
    let mut paragraph = String::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"sp" => {
                    in_shape = true;
                    shape_is_title = false;
                    shape_paragraphs.clear();
                }
                b"ph" if in_shape => shape_is_title = is_title_placeholder(&e),
                b"p" if in_shape => paragraph.clear(),
                b"t" if in_shape => in_text = true,
                _ => {}
            },
            Event::Empty(e) => {
                if in_shape && e.local_name().as_ref() == b"ph" {
                    shape_is_title = is_title_placeholder(&e);
                }
            }
            Event::Text(e) => {
                if in_text {
                    paragraph.push_str(&e.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" if in_shape => {
                    if !paragraph.trim().is_empty() {
                        shape_paragraphs.push(std::mem::take(&mut paragraph));
                    }
                }
                b"sp" => {
                    in_shape = false;
                    if shape_is_title {
                        if outline.title.is_none() && !shape_paragraphs.is_empty() {
                            outline.title = Some(shape_paragraphs.join("\n"));
                        }
                    } else {
                        outline.body.append(&mut shape_paragraphs);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{TITLE_AND_CONTENT_LAYOUT, TITLE_SLIDE_LAYOUT};
    use crate::Presentation;

    #[test]
    fn round_trips_titles_and_bullets() {
        let mut pres = Presentation::new();
        pres.add_slide(TITLE_SLIDE_LAYOUT)
            .unwrap()
            .title_mut()
            .unwrap()
            .set_text("Deck & Co");
        let slide = pres.add_slide(TITLE_AND_CONTENT_LAYOUT).unwrap();
        slide.title_mut().unwrap().set_text("Agenda");
        let body = slide.require_placeholder_mut(1).unwrap();
        body.add_paragraph("one", 0);
        body.add_paragraph("two <2>", 0);

        let outline = read_outline(&pres.to_bytes().unwrap()).unwrap();
        assert_eq!(
            outline,
            vec![
                SlideOutline {
                    title: Some("Deck & Co".into()),
                    body: vec![],
                },
                SlideOutline {
                    title: Some("Agenda".into()),
                    body: vec!["one".into(), "two <2>".into()],
                },
            ]
        );
    }

    #[test]
    fn follows_sld_id_order_not_part_names() {
        let xml = r#"<p:presentation xmlns:p="p" xmlns:r="r"><p:sldIdLst><p:sldId id="257" r:id="rId4"/><p:sldId id="256" r:id="rId3"/></p:sldIdLst></p:presentation>"#;
        assert_eq!(slide_rel_ids(xml).unwrap(), vec!["rId4", "rId3"]);
    }

    #[test]
    fn resolves_relative_and_absolute_targets() {
        assert_eq!(resolve_target("slides/slide1.xml"), "ppt/slides/slide1.xml");
        assert_eq!(resolve_target("/ppt/slides/slide9.xml"), "ppt/slides/slide9.xml");
    }

    #[test]
    fn rejects_non_zip_input() {
        assert!(matches!(
            read_outline(b"not a zip"),
            Err(PptxError::Zip(_))
        ));
    }
}
