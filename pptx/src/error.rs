//! Error types for building and packaging decks.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PptxError>;

#[derive(Error, Debug)]
pub enum PptxError {
    /// No layout at the requested index on the slide master.
    #[error("slide layout {index} not found ({available} available)")]
    LayoutNotFound { index: usize, available: usize },

    /// The slide has no placeholder with the requested idx.
    #[error("placeholder idx={idx} not found on slide layout '{layout}'")]
    PlaceholderNotFound { idx: u32, layout: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("ZIP archive error: {0}")]
    Zip(String),

    #[error("XML error: {0}")]
    Xml(String),

    /// A part the package must contain is absent.
    #[error("missing package part: {0}")]
    MissingPart(String),
}

impl From<zip::result::ZipError> for PptxError {
    fn from(err: zip::result::ZipError) -> Self {
        PptxError::Zip(err.to_string())
    }
}

impl From<quick_xml::Error> for PptxError {
    fn from(err: quick_xml::Error) -> Self {
        PptxError::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for PptxError {
    fn from(err: std::fmt::Error) -> Self {
        PptxError::Xml(err.to_string())
    }
}
