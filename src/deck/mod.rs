//! Deck assembly on top of the PresentationML writer.
mod builder;
mod config;

pub use builder::{DeckBuilder, SlideBuilder};
pub use config::DeckConfig;
