//! XML helpers shared by the part writers.

mod escape;

pub use escape::escape_xml;
#[cfg(test)]
pub(crate) use escape::is_xml_char;
