//! Common types and utilities shared by the package writer and the deck builder.

// Submodule declarations
pub mod color;
pub mod error;
pub mod geometry;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use color::RgbColor;
pub use error::{Error, Result};
pub use geometry::{Point, Rect};
