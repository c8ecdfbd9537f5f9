//! Unified error types for Deckhand.
//!
//! Errors raised while packaging (ZIP, part URIs) are converted into the
//! crate-level [`Error`] so callers deal with a single type.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
