//! OOXML package writer.

use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Seek, Write};

use chrono::{SecondsFormat, Utc};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::layout::{SLIDE_MASTER_XML, THEME_XML};
use crate::presentation::Presentation;
use crate::xml::{
    escape, NS_DRAWING, NS_PACKAGE_RELATIONSHIPS, NS_PRESENTATION, NS_RELATIONSHIPS,
    XML_DECLARATION,
};

const RT_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const RT_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const RT_EXTENDED_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const RT_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const RT_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const RT_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const RT_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
const CT_CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_EXTENDED_PROPERTIES: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// presentation.xml.rels: rId1 master, rId2 theme, slides from rId3.
const FIRST_SLIDE_REL: usize = 3;

/// A list of `<Relationship>` entries for one `.rels` part.
#[derive(Debug, Default)]
struct Relationships {
    entries: Vec<(String, &'static str, String)>,
}

impl Relationships {
    fn add(&mut self, rel_type: &'static str, target: impl Into<String>) {
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push((id, rel_type, target.into()));
    }

    fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + self.entries.len() * 160);
        xml.push_str(XML_DECLARATION);
        write!(xml, r#"<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">"#)?;
        for (id, rel_type, target) in &self.entries {
            write!(
                xml,
                r#"<Relationship Id="{id}" Type="{rel_type}" Target="{}"/>"#,
                escape(target)
            )?;
        }
        xml.push_str("</Relationships>");
        Ok(xml)
    }
}

impl Presentation {
    /// Serialize the presentation into `writer` as a `.pptx` package.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let put = |zip: &mut ZipWriter<W>, name: &str, data: &str| -> Result<()> {
            zip.start_file(name, options)?;
            zip.write_all(data.as_bytes())?;
            Ok(())
        };

        put(&mut zip, "[Content_Types].xml", &self.content_types_xml()?)?;
        put(&mut zip, "_rels/.rels", &package_rels().to_xml()?)?;
        put(&mut zip, "docProps/core.xml", &self.core_properties_xml()?)?;
        put(&mut zip, "docProps/app.xml", &self.app_properties_xml()?)?;

        put(&mut zip, "ppt/presentation.xml", &self.presentation_xml()?)?;
        put(&mut zip, "ppt/_rels/presentation.xml.rels", &self.presentation_rels().to_xml()?)?;

        put(&mut zip, "ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER_XML)?;
        put(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &self.master_rels().to_xml()?,
        )?;
        for (index, layout) in self.layouts().iter().enumerate() {
            let number = index + 1;
            put(&mut zip, &format!("ppt/slideLayouts/slideLayout{number}.xml"), layout.xml)?;
            let mut rels = Relationships::default();
            rels.add(RT_SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
            put(
                &mut zip,
                &format!("ppt/slideLayouts/_rels/slideLayout{number}.xml.rels"),
                &rels.to_xml()?,
            )?;
        }
        put(&mut zip, "ppt/theme/theme1.xml", THEME_XML)?;

        for (index, slide) in self.slides().iter().enumerate() {
            let number = index + 1;
            put(&mut zip, &format!("ppt/slides/slide{number}.xml"), &slide.to_xml()?)?;
            let mut rels = Relationships::default();
            rels.add(
                RT_SLIDE_LAYOUT,
                format!("../slideLayouts/slideLayout{}.xml", slide.layout_index() + 1),
            );
            put(
                &mut zip,
                &format!("ppt/slides/_rels/slide{number}.xml.rels"),
                &rels.to_xml()?,
            )?;
        }

        Ok(zip.finish()?)
    }

    /// Serialize into an in-memory buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let cursor = self.write_to(Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    fn content_types_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);
        xml.push_str(XML_DECLARATION);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push_str(
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
        );
        xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

        let mut over = |part: &str, content_type: &str| -> Result<()> {
            write!(
                xml,
                r#"<Override PartName="{part}" ContentType="{content_type}"/>"#
            )?;
            Ok(())
        };
        over("/ppt/presentation.xml", CT_PRESENTATION)?;
        over("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER)?;
        for number in 1..=self.layouts().len() {
            over(&format!("/ppt/slideLayouts/slideLayout{number}.xml"), CT_SLIDE_LAYOUT)?;
        }
        for number in 1..=self.slide_count() {
            over(&format!("/ppt/slides/slide{number}.xml"), CT_SLIDE)?;
        }
        over("/ppt/theme/theme1.xml", CT_THEME)?;
        over("/docProps/core.xml", CT_CORE_PROPERTIES)?;
        over("/docProps/app.xml", CT_EXTENDED_PROPERTIES)?;

        xml.push_str("</Types>");
        Ok(xml)
    }

    fn presentation_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.slide_count() * 48);

        xml.push_str(XML_DECLARATION);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" saveSubsetFonts="1">"#
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides().is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, slide) in self.slides().iter().enumerate() {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                    slide.id(),
                    index + FIRST_SLIDE_REL
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
            self.slide_width(),
            self.slide_height()
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    fn presentation_rels(&self) -> Relationships {
        let mut rels = Relationships::default();
        rels.add(RT_SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        rels.add(RT_THEME, "theme/theme1.xml");
        for number in 1..=self.slide_count() {
            rels.add(RT_SLIDE, format!("slides/slide{number}.xml"));
        }
        rels
    }

    fn master_rels(&self) -> Relationships {
        let mut rels = Relationships::default();
        for number in 1..=self.layouts().len() {
            rels.add(RT_SLIDE_LAYOUT, format!("../slideLayouts/slideLayout{number}.xml"));
        }
        rels.add(RT_THEME, "../theme/theme1.xml");
        rels
    }

    fn core_properties_xml(&self) -> Result<String> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut xml = String::with_capacity(768);
        xml.push_str(XML_DECLARATION);
        xml.push_str(
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
        );
        if let Some(title) = self.title() {
            write!(xml, "<dc:title>{}</dc:title>", escape(title))?;
        }
        xml.push_str("<dc:creator>slide</dc:creator>");
        write!(
            xml,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created>"#
        )?;
        write!(
            xml,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified>"#
        )?;
        xml.push_str("</cp:coreProperties>");
        Ok(xml)
    }

    fn app_properties_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(384);
        xml.push_str(XML_DECLARATION);
        xml.push_str(
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
        );
        xml.push_str("<Application>slide</Application>");
        write!(xml, "<Slides>{}</Slides>", self.slide_count())?;
        xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
        xml.push_str("</Properties>");
        Ok(xml)
    }
}

fn package_rels() -> Relationships {
    let mut rels = Relationships::default();
    rels.add(RT_OFFICE_DOCUMENT, "ppt/presentation.xml");
    rels.add(RT_CORE_PROPERTIES, "docProps/core.xml");
    rels.add(RT_EXTENDED_PROPERTIES, "docProps/app.xml");
    rels
}
