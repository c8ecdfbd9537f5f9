//! Presentation template module.
//!
//! Static parts every generated presentation carries: one slide master with
//! a Title Slide and a Blank layout, a notes master, the theme and the
//! presentation-level property parts. The XML lives under `resources/` and
//! is minified at compile time.

use xml_minifier::minified_xml;

/// Slide master with title/body placeholders and text styles.
///
/// Its `sldLayoutIdLst` expects the Title layout at `rId1` and the Blank
/// layout at `rId2`.
pub fn default_slide_master_xml() -> &'static str {
    minified_xml!("resources/slideMasters/slideMaster1.xml")
}

/// Slide layout 1 (Title Slide)
pub fn title_slide_layout_xml() -> &'static str {
    minified_xml!("resources/slideLayouts/slideLayout1.xml")
}

/// Slide layout 2 (Blank)
pub fn blank_slide_layout_xml() -> &'static str {
    minified_xml!("resources/slideLayouts/slideLayout2.xml")
}

/// Layout parts in `slideLayoutN.xml` order.
pub fn all_slide_layouts() -> [&'static str; 2] {
    [title_slide_layout_xml(), blank_slide_layout_xml()]
}

/// Notes master
pub fn default_notes_master_xml() -> &'static str {
    minified_xml!("resources/notesMasters/notesMaster1.xml")
}

/// Office theme, shared by the slide master and the notes master.
pub fn default_theme_xml() -> &'static str {
    minified_xml!("resources/theme/theme1.xml")
}

pub fn default_table_styles_xml() -> &'static str {
    minified_xml!("resources/tableStyles.xml")
}

pub fn default_view_props_xml() -> &'static str {
    minified_xml!("resources/viewProps.xml")
}

pub fn default_pres_props_xml() -> &'static str {
    minified_xml!("resources/presProps.xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_minified() {
        for xml in [
            default_slide_master_xml(),
            default_notes_master_xml(),
            default_theme_xml(),
            default_view_props_xml(),
        ] {
            assert!(xml.starts_with("<?xml"));
            assert!(!xml.contains("\n  "));
        }
    }

    #[test]
    fn test_layout_types() {
        let [title, blank] = all_slide_layouts();
        assert!(title.contains(r#"type="title""#));
        assert!(title.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(blank.contains(r#"type="blank""#));
    }
}
