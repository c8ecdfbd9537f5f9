//! Deckhand - programmatic PowerPoint deck assembly
//!
//! This library builds Office Open XML presentations (.pptx) from code: title
//! slides, native rounded-rectangle diagrams with connectors, annotation boxes,
//! picture slides and speaker notes. Everything is kept in memory until a
//! single atomic save.
//!
//! # Features
//!
//! - **Deck Builder**: a small append-only API for assembling slides
//! - **Native shapes**: rounded rectangles, text boxes, straight connectors and pictures
//! - **Speaker notes**: notes slides are generated with a notes master
//! - **Atomic save**: the package is written to a temporary file and renamed into place
//!
//! # Example - Building a deck
//!
//! ```no_run
//! use deckhand::{DeckBuilder, Rect, RgbColor};
//!
//! # fn main() -> deckhand::Result<()> {
//! let mut deck = DeckBuilder::new();
//! deck.add_title_slide("Transformation Programme", "Business Case\nArchitecture");
//!
//! let mut slide = deck.add_blank_slide();
//! let plan = slide.add_shape_box(Rect::inches(1.0, 1.0, 3.0, 1.0), "Plan", RgbColor(255, 244, 230), 14.0, true);
//! let build = slide.add_shape_box(Rect::inches(1.0, 3.0, 3.0, 1.0), "Build", RgbColor(227, 242, 253), 14.0, false);
//! slide.add_connector(plan, build, "plan to build")?;
//!
//! deck.add_diagram_slide("Architecture", "architecture.png", "Rendered separately")?;
//! deck.save("deck.pptx")?;
//! println!("Total slides: {}", deck.slide_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Low-level presentation writer
//!
//! ```
//! use deckhand::ooxml::pptx::{MutablePresentation, SlideLayout};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide(SlideLayout::Blank);
//! slide.add_text_box("Hello", 914400, 914400, 2743200, 914400);
//! assert_eq!(pres.slide_count(), 1);
//! ```

/// Shared utilities: errors, units, colours and XML helpers
pub mod common;

/// High-level deck assembly API
///
/// The [`DeckBuilder`] applies a [`DeckConfig`] house style to the raw
/// presentation writer and exposes the slide-construction operations the
/// deck programs are written against.
pub mod deck;

/// OOXML (Office Open XML) package and PresentationML writer
pub mod ooxml;

pub use common::{Error, Rect, Result, RgbColor};
pub use deck::{DeckBuilder, DeckConfig, SlideBuilder};
pub use ooxml::pptx::{ShapeHandle, TextAlign, VerticalAnchor};
