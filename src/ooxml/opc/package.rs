/// In-memory OPC package: a set of parts plus package-level relationships.
use super::error::Result;
use super::packuri::{PACKAGE_URI, PackURI};
use super::rel::Relationships;

/// A single part of the package with its content and outgoing relationships.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels: Relationships::new(),
        }
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the content, e.g. once the rIds it refers to are known.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate this part to `target` and return the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname.base_uri());
        self.rels.get_or_add(reltype, &target_ref)
    }
}

/// An OPC package under construction.
#[derive(Debug, Clone, Default)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package-level relationship (written to `/_rels/.rels`).
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> Result<String> {
        let package_uri = PackURI::new(PACKAGE_URI)?;
        let target_ref = target.relative_ref(package_uri.base_uri());
        Ok(self.rels.get_or_add(reltype, &target_ref))
    }

    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn part(&self, partname: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.partname.as_str() == partname)
    }
}
