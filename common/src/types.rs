use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected user input for a [`GenerationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("presentation topic must not be empty")]
    EmptyTopic,

    #[error("slide count must be at least 1, got {0}")]
    SlideCount(usize),

    #[error("points per slide must be at least 1, got {0}")]
    PointsPerSlide(usize),
}

/// What the user asked for. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    topic: String,
    slide_count: usize,
    points_per_slide: usize,
}

impl GenerationRequest {
    pub fn new(
        topic: impl Into<String>,
        slide_count: usize,
        points_per_slide: usize,
    ) -> Result<Self, InvalidRequest> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(InvalidRequest::EmptyTopic);
        }
        if slide_count < 1 {
            return Err(InvalidRequest::SlideCount(slide_count));
        }
        if points_per_slide < 1 {
            return Err(InvalidRequest::PointsPerSlide(points_per_slide));
        }
        Ok(Self {
            topic,
            slide_count,
            points_per_slide,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn points_per_slide(&self) -> usize {
        self.points_per_slide
    }
}

/// Structured deck content returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckContent {
    pub title: String,
    pub slides: Vec<SlideContent>,
}

/// One content slide. `points` may hold more entries than the request allows;
/// the deck builder truncates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    pub title: String,
    #[serde(rename = "content")]
    pub points: Vec<String>,
}
