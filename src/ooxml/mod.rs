/// OOXML (Office Open XML) writer.
///
/// - `opc`: the Open Packaging Conventions container (parts, relationships, ZIP)
/// - `pptx`: PresentationML slides, shapes, notes and the static template parts
pub mod opc;
pub mod pptx;
