//! Unified error types for Deckhand.
use thiserror::Error;

/// Main error type for deck assembly and saving.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid part name inside the package
    #[error("Invalid part URI: {0}")]
    InvalidPartUri(String),

    /// An existing image file that could not be decoded
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// A shape handle that does not name a shape on the slide
    #[error("Shape {shape_id} not found on slide {slide_id}")]
    ShapeNotFound { slide_id: u32, shape_id: u32 },

    /// Deck configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for Deckhand operations.
pub type Result<T> = std::result::Result<T, Error>;
