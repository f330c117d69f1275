//! Helpers for emitting PresentationML by hand.

use std::borrow::Cow;

pub(crate) const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub(crate) const NS_PRESENTATION: &str =
    "http://schemas.openxmlformats.org/presentationml/2006/main";
pub(crate) const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub(crate) const NS_PACKAGE_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";

/// Escape text for element content or attribute values.
///
/// Characters outside the XML 1.0 `Char` production are dropped since no
/// escaping makes them legal.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_illegal_xml_char) {
        let cleaned: String = text.chars().filter(|c| !is_illegal_xml_char(*c)).collect();
        Cow::Owned(quick_xml::escape::escape(cleaned.as_str()).into_owned())
    } else {
        quick_xml::escape::escape(text)
    }
}

fn is_illegal_xml_char(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Opening `<p:grpSpPr>` block every `spTree` starts with.
pub(crate) fn push_group_shape_header(xml: &mut String) {
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");
}
