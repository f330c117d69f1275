//! Topic-to-deck generation: prompt building, the model call, response
//! validation and slide layout.

pub mod client;
pub mod config;
pub mod deck;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod response;
pub mod serializer;

pub use client::ModelClient;
pub use config::Config;
pub use error::{Result, SlideError, SlideOrigin};
pub use pipeline::{generate_deck, generate_deck_with, generate_presentation};
