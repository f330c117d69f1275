//! Built-in slide master layouts.

/// Index of the "Title Slide" layout in [`default_layouts`].
pub const TITLE_SLIDE_LAYOUT: usize = 0;
/// Index of the "Title and Content" layout in [`default_layouts`].
pub const TITLE_AND_CONTENT_LAYOUT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderType {
    CenteredTitle,
    Subtitle,
    Title,
    /// Generic content placeholder (`<p:ph idx=".."/>` with no type).
    Body,
}

impl PlaceholderType {
    /// Value of the `type` attribute on `<p:ph>`, `None` when omitted.
    pub(crate) fn xml_type(self) -> Option<&'static str> {
        match self {
            PlaceholderType::CenteredTitle => Some("ctrTitle"),
            PlaceholderType::Subtitle => Some("subTitle"),
            PlaceholderType::Title => Some("title"),
            PlaceholderType::Body => None,
        }
    }

    pub fn is_title(self) -> bool {
        matches!(self, PlaceholderType::CenteredTitle | PlaceholderType::Title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpec {
    pub kind: PlaceholderType,
    pub idx: u32,
    pub name: &'static str,
}

#[derive(Debug, Clone)]
pub struct SlideLayout {
    pub name: &'static str,
    pub(crate) xml: &'static str,
    pub placeholders: &'static [PlaceholderSpec],
}

const TITLE_SLIDE_PLACEHOLDERS: &[PlaceholderSpec] = &[
    PlaceholderSpec {
        kind: PlaceholderType::CenteredTitle,
        idx: 0,
        name: "Title 1",
    },
    PlaceholderSpec {
        kind: PlaceholderType::Subtitle,
        idx: 1,
        name: "Subtitle 2",
    },
];

const TITLE_AND_CONTENT_PLACEHOLDERS: &[PlaceholderSpec] = &[
    PlaceholderSpec {
        kind: PlaceholderType::Title,
        idx: 0,
        name: "Title 1",
    },
    PlaceholderSpec {
        kind: PlaceholderType::Body,
        idx: 1,
        name: "Content Placeholder 2",
    },
];

/// Layouts of the built-in master, in `sldLayoutIdLst` order.
pub fn default_layouts() -> Vec<SlideLayout> {
    vec![
        SlideLayout {
            name: "Title Slide",
            xml: include_str!("../resources/slideLayouts/slideLayout1.xml"),
            placeholders: TITLE_SLIDE_PLACEHOLDERS,
        },
        SlideLayout {
            name: "Title and Content",
            xml: include_str!("../resources/slideLayouts/slideLayout2.xml"),
            placeholders: TITLE_AND_CONTENT_PLACEHOLDERS,
        },
    ]
}

pub(crate) const SLIDE_MASTER_XML: &str = include_str!("../resources/slideMasters/slideMaster1.xml");
pub(crate) const THEME_XML: &str = include_str!("../resources/theme/theme1.xml");
