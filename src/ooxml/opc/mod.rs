/// Open Packaging Conventions (OPC) writer.
///
/// This module provides the packaging half of the OPC specification, which
/// defines how Office Open XML documents are stored:
///
/// - Package structure (parts, relationships)
/// - Content type management ([Content_Types].xml)
/// - ZIP-based physical packaging
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::{OpcPackage, Part};
pub use packuri::PackURI;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
