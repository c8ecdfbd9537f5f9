/// Relationship ID mapper for tracking relationships during presentation generation.
///
/// Slide parts are related to their images and notes before the slide XML is
/// generated, so the XML can carry the actual relationship IDs.
use std::collections::HashMap;

/// Maps presentation elements to their relationship IDs.
///
/// The mapper is organized per-slide, as each slide has its own set of relationships.
#[derive(Debug, Default)]
pub struct RelationshipMapper {
    /// Maps (slide_index, picture shape id) to relationship ID
    image_ids: HashMap<(usize, u32), String>,
    /// Maps slide_index to notes slide relationship ID
    notes_ids: HashMap<usize, String>,
}

impl RelationshipMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the relationship ID of the image behind picture `shape_id`.
    pub fn add_image(&mut self, slide_index: usize, shape_id: u32, rel_id: String) {
        self.image_ids.insert((slide_index, shape_id), rel_id);
    }

    pub fn add_notes(&mut self, slide_index: usize, rel_id: String) {
        self.notes_ids.insert(slide_index, rel_id);
    }

    pub fn get_image_id(&self, slide_index: usize, shape_id: u32) -> Option<&str> {
        self.image_ids
            .get(&(slide_index, shape_id))
            .map(|s| s.as_str())
    }

    pub fn get_notes_id(&self, slide_index: usize) -> Option<&str> {
        self.notes_ids.get(&slide_index).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_per_slide() {
        let mut map = RelationshipMapper::new();
        map.add_image(0, 3, "rId2".to_string());
        map.add_image(1, 3, "rId5".to_string());
        map.add_notes(1, "rId6".to_string());

        assert_eq!(map.get_image_id(0, 3), Some("rId2"));
        assert_eq!(map.get_image_id(1, 3), Some("rId5"));
        assert_eq!(map.get_image_id(2, 3), None);
        assert_eq!(map.get_notes_id(0), None);
        assert_eq!(map.get_notes_id(1), Some("rId6"));
    }
}
