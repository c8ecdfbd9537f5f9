/// PowerPoint (.pptx) writer.
///
/// - [`writer`]: the in-memory presentation model ([`MutablePresentation`],
///   slides, shapes, text) and its PresentationML serialization
/// - [`package`]: assembly of all parts into an OPC package
/// - [`template`]: static master, layout and theme parts
pub mod format;
pub mod package;
pub mod template;
pub mod writer;

pub use format::{ImageFormat, RunFormat, TextAlign, VerticalAnchor};
pub use writer::{
    MutablePresentation, MutableShape, MutableSlide, Outline, Paragraph, PlaceholderKind,
    ShapeHandle, ShapeKind, SlideLayout, TextFrame,
};
