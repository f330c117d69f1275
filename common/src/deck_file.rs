use base64::Engine;

/// MIME type of the PresentationML interchange format.
pub const PPTX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

pub const PPTX_EXTENSION: &str = "pptx";

/// Derive the download file name from a topic: lowercased, spaces become
/// underscores, `.pptx` appended.
pub fn file_name_for_topic(topic: &str) -> String {
    format!("{}.{PPTX_EXTENSION}", topic.replace(' ', "_").to_lowercase())
}

/// A serialized deck ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckFile {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: &'static str,
}

impl DeckFile {
    pub fn for_topic(topic: &str, bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            file_name: file_name_for_topic(topic),
            mime_type: PPTX_MIME_TYPE,
        }
    }

    pub fn data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{encoded}", self.mime_type)
    }

    /// HTML anchor that downloads the deck without a server round trip.
    pub fn download_link(&self) -> String {
        format!(
            r#"<a href="{}" download="{}">Download Presentation</a>"#,
            self.data_uri(),
            escape_attribute(&self.file_name)
        )
    }
}

/// Escape text for a double-quoted HTML attribute.
fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_lowercases_and_underscores() {
        assert_eq!(file_name_for_topic("Solar Energy"), "solar_energy.pptx");
        assert_eq!(
            file_name_for_topic("AI and Its Impact on Society"),
            "ai_and_its_impact_on_society.pptx"
        );
    }

    #[test]
    fn data_uri_carries_mime_and_payload() {
        let file = DeckFile::for_topic("Deck", b"PK\x03\x04".to_vec());
        assert_eq!(
            file.data_uri(),
            format!("data:{PPTX_MIME_TYPE};base64,UEsDBA==")
        );
    }

    #[test]
    fn download_link_escapes_file_name() {
        let file = DeckFile::for_topic("Q&A \"Live\"", Vec::new());
        let link = file.download_link();
        assert!(link.starts_with(r#"<a href="data:"#));
        assert!(link.contains(r#"download="q&amp;a_&quot;live&quot;.pptx""#));
        assert!(link.ends_with(">Download Presentation</a>"));
    }
}
