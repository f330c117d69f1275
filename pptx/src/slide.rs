use std::fmt::Write as FmtWrite;

use crate::error::{PptxError, Result};
use crate::layout::{PlaceholderSpec, SlideLayout};
use crate::xml::{escape, push_group_shape_header, NS_DRAWING, NS_PRESENTATION, NS_RELATIONSHIPS};

/// One paragraph of a text frame. `level` 0 is a top-level bullet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Replace the frame's content with a single paragraph.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs.clear();
        self.add_paragraph(text, 0);
    }

    pub fn add_paragraph(&mut self, text: &str, level: u8) -> &mut Paragraph {
        let index = self.paragraphs.len();
        self.paragraphs.push(Paragraph {
            text: text.to_string(),
            level,
        });
        &mut self.paragraphs[index]
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        if self.paragraphs.is_empty() {
            xml.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
        }
        for paragraph in &self.paragraphs {
            xml.push_str("<a:p>");
            if paragraph.level > 0 {
                write!(xml, r#"<a:pPr lvl="{}"/>"#, paragraph.level)?;
            }
            if paragraph.text.is_empty() {
                xml.push_str(r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
            } else {
                xml.push_str("<a:r>");
                xml.push_str(r#"<a:rPr lang="en-US" dirty="0"/>"#);
                write!(xml, "<a:t>{}</a:t>", escape(&paragraph.text))?;
                xml.push_str("</a:r>");
            }
            xml.push_str("</a:p>");
        }
        xml.push_str("</p:txBody>");
        Ok(())
    }
}

/// A placeholder cloned from the slide's layout.
#[derive(Debug, Clone)]
pub struct Placeholder {
    spec: PlaceholderSpec,
    text_frame: TextFrame,
}

impl Placeholder {
    pub fn spec(&self) -> &PlaceholderSpec {
        &self.spec
    }

    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    fn write_xml(&self, xml: &mut String, shape_id: u32) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{shape_id}" name="{}"/>"#,
            escape(self.spec.name)
        )?;
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        match (self.spec.kind.xml_type(), self.spec.idx) {
            (Some(ty), 0) => write!(xml, r#"<p:nvPr><p:ph type="{ty}"/></p:nvPr>"#)?,
            (Some(ty), idx) => write!(xml, r#"<p:nvPr><p:ph type="{ty}" idx="{idx}"/></p:nvPr>"#)?,
            (None, idx) => write!(xml, r#"<p:nvPr><p:ph idx="{idx}"/></p:nvPr>"#)?,
        }
        xml.push_str("</p:nvSpPr>");
        xml.push_str("<p:spPr/>");
        self.text_frame.write_xml(xml)?;
        xml.push_str("</p:sp>");
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Slide {
    id: u32,
    layout_index: usize,
    layout_name: &'static str,
    placeholders: Vec<Placeholder>,
}

impl Slide {
    pub(crate) fn from_layout(id: u32, layout_index: usize, layout: &SlideLayout) -> Self {
        let placeholders = layout
            .placeholders
            .iter()
            .map(|spec| Placeholder {
                spec: *spec,
                text_frame: TextFrame::default(),
            })
            .collect();
        Self {
            id,
            layout_index,
            layout_name: layout.name,
            placeholders,
        }
    }

    /// Value of `<p:sldId id="..">` for this slide.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn layout_index(&self) -> usize {
        self.layout_index
    }

    pub fn layout_name(&self) -> &'static str {
        self.layout_name
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn title(&self) -> Option<&TextFrame> {
        self.placeholders
            .iter()
            .find(|ph| ph.spec.kind.is_title())
            .map(|ph| &ph.text_frame)
    }

    pub fn title_mut(&mut self) -> Option<&mut TextFrame> {
        self.placeholders
            .iter_mut()
            .find(|ph| ph.spec.kind.is_title())
            .map(|ph| &mut ph.text_frame)
    }

    pub fn placeholder(&self, idx: u32) -> Option<&TextFrame> {
        self.placeholders
            .iter()
            .find(|ph| ph.spec.idx == idx)
            .map(|ph| &ph.text_frame)
    }

    pub fn placeholder_mut(&mut self, idx: u32) -> Option<&mut TextFrame> {
        self.placeholders
            .iter_mut()
            .find(|ph| ph.spec.idx == idx)
            .map(|ph| &mut ph.text_frame)
    }

    /// Like [`Slide::placeholder_mut`] but reports which layout lacked it.
    pub fn require_placeholder_mut(&mut self, idx: u32) -> Result<&mut TextFrame> {
        let layout = self.layout_name;
        self.placeholder_mut(idx)
            .ok_or(PptxError::PlaceholderNotFound { idx, layout })
    }

    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(crate::xml::XML_DECLARATION);
        write!(
            xml,
            r#"<p:sld xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">"#
        )?;
        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");
        push_group_shape_header(&mut xml);

        // Group shape is id 1.
        for (offset, placeholder) in self.placeholders.iter().enumerate() {
            placeholder.write_xml(&mut xml, offset as u32 + 2)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_layouts, TITLE_AND_CONTENT_LAYOUT, TITLE_SLIDE_LAYOUT};

    fn slide(layout_index: usize) -> Slide {
        let layouts = default_layouts();
        Slide::from_layout(256, layout_index, &layouts[layout_index])
    }

    #[test]
    fn new_slide_clones_layout_placeholders() {
        let s = slide(TITLE_SLIDE_LAYOUT);
        assert_eq!(s.placeholders().len(), 2);
        assert!(s.title().is_some_and(TextFrame::is_empty));
    }

    #[test]
    fn body_placeholder_accepts_bullets() {
        let mut s = slide(TITLE_AND_CONTENT_LAYOUT);
        s.title_mut().unwrap().set_text("Agenda");
        let body = s.require_placeholder_mut(1).unwrap();
        body.add_paragraph("First", 0);
        body.add_paragraph("Second", 0);

        let xml = s.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<p:ph idx="1"/>"#));
        assert!(xml.contains("<a:t>Agenda</a:t>"));
        assert!(xml.contains("<a:t>First</a:t>"));
        assert!(xml.contains("<a:t>Second</a:t>"));
    }

    #[test]
    fn missing_placeholder_names_layout() {
        let mut s = slide(TITLE_AND_CONTENT_LAYOUT);
        let err = s.require_placeholder_mut(7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "placeholder idx=7 not found on slide layout 'Title and Content'"
        );
    }

    #[test]
    fn set_text_replaces_existing_paragraphs() {
        let mut frame = TextFrame::default();
        frame.add_paragraph("one", 0);
        frame.add_paragraph("two", 1);
        frame.set_text("only");
        assert_eq!(frame.text(), "only");
        assert_eq!(frame.paragraphs().len(), 1);
    }

    #[test]
    fn nested_levels_emit_ppr() {
        let mut s = slide(TITLE_AND_CONTENT_LAYOUT);
        s.require_placeholder_mut(1).unwrap().add_paragraph("deep", 1);
        let xml = s.to_xml().unwrap();
        assert!(xml.contains(r#"<a:pPr lvl="1"/>"#));
    }

    #[test]
    fn text_is_escaped() {
        let mut s = slide(TITLE_SLIDE_LAYOUT);
        s.title_mut().unwrap().set_text("R&D <2024>");
        let xml = s.to_xml().unwrap();
        assert!(xml.contains("<a:t>R&amp;D &lt;2024&gt;</a:t>"));
    }
}
