/// Presentation writer for PPTX.
use crate::common::Result;
use crate::common::unit::inches_to_emu;
use std::fmt::Write as FmtWrite;

// Import shared format types
use super::super::format::ImageFormat;
use super::shape::{MutableShape, ShapeHandle};
use super::slide::{MutableSlide, SlideLayout};

/// First `p:sldId` value; lower ids are reserved by PresentationML.
const FIRST_SLIDE_ID: u32 = 256;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions and document metadata.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title for `docProps/core.xml`
    title: Option<String>,
    /// Document creator for `docProps/core.xml`
    creator: Option<String>,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inches_to_emu(10.0),
            slide_height: inches_to_emu(7.5),
            title: None,
            creator: None,
        }
    }

    /// Add a new slide using `layout` and return it.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut MutableSlide {
        let index = self.slides.len();
        let slide_id = FIRST_SLIDE_ID + index as u32;
        self.slides.push(MutableSlide::new(slide_id, layout));
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    pub fn slide_by_id(&self, slide_id: u32) -> Option<&MutableSlide> {
        self.slides.iter().find(|s| s.slide_id == slide_id)
    }

    pub fn slide_by_id_mut(&mut self, slide_id: u32) -> Option<&mut MutableSlide> {
        self.slides.iter_mut().find(|s| s.slide_id == slide_id)
    }

    /// Look up a shape anywhere in the presentation.
    pub fn shape(&self, handle: ShapeHandle) -> Option<&MutableShape> {
        self.slide_by_id(handle.slide_id)?.shape(handle.shape_id)
    }

    pub fn shape_mut(&mut self, handle: ShapeHandle) -> Option<&mut MutableShape> {
        self.slide_by_id_mut(handle.slide_id)?
            .shape_mut(handle.shape_id)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    pub fn set_creator(&mut self, creator: &str) {
        self.creator = Some(creator.to_string());
    }

    /// Whether any slide carries speaker notes (and so needs a notes master).
    pub fn has_notes(&self) -> bool {
        self.slides.iter().any(MutableSlide::has_notes)
    }

    /// Collect all images from all slides as (slide index, shape id, bytes, format).
    pub(crate) fn collect_all_images(&self) -> Vec<(usize, u32, &[u8], ImageFormat)> {
        let mut all_images = Vec::new();

        for (slide_index, slide) in self.slides.iter().enumerate() {
            for (shape_id, image_data, image_format) in slide.collect_images() {
                all_images.push((slide_index, shape_id, image_data, image_format));
            }
        }

        all_images
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        crate::ooxml::pptx::package::write_presentation(self)
    }

    /// Generate presentation.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `master_rel_id` - relationship ID of the slide master
    /// * `notes_master_rel_id` - relationship ID of the notes master, if any slide has notes
    /// * `slide_rel_ids` - relationship IDs for slides, in slide order
    pub(crate) fn generate_presentation_xml_with_rels(
        &self,
        master_rel_id: &str,
        notes_master_rel_id: Option<&str>,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(xml, r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#, master_rel_id)?;
        xml.push_str("</p:sldMasterIdLst>");

        if let Some(rel_id) = notes_master_rel_id {
            write!(
                xml,
                r#"<p:notesMasterIdLst><p:notesMasterId r:id="{}"/></p:notesMasterIdLst>"#,
                rel_id
            )?;
        }

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
