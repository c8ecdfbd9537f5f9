/// PresentationML writer: presentations, slides, shapes and text.
pub mod pres;
pub mod relmap;
pub mod shape;
pub mod slide;
pub mod text;

pub use pres::MutablePresentation;
pub use shape::{MutableShape, Outline, PlaceholderKind, ShapeHandle, ShapeKind};
pub use slide::{MutableSlide, SlideLayout};
pub use text::{Paragraph, TextFrame};
