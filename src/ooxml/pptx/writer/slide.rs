/// Slide types and implementation for PPTX presentations.
use crate::common::{Error, Point, Rect, Result};

// Import shared format types
use super::super::format::{ImageFormat, RunFormat};
use super::relmap::RelationshipMapper;
use super::shape::{MutableShape, Outline, PlaceholderKind};
use super::text::{TextFrame, write_runs};

/// The slide layouts shipped in the package template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Centered title and subtitle placeholders
    Title,
    /// No placeholders
    Blank,
}

impl SlideLayout {
    /// 1-based index of the layout part (`slideLayoutN.xml`).
    pub(crate) fn part_index(self) -> usize {
        match self {
            Self::Title => 1,
            Self::Blank => 2,
        }
    }
}

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier, written to `p:sldId`)
    pub(crate) slide_id: u32,
    pub(crate) layout: SlideLayout,
    /// Shapes in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Speaker notes for the slide
    pub(crate) notes: Option<String>,
    /// Next free shape id; 1 belongs to the slide's group shape
    next_shape_id: u32,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        Self {
            slide_id,
            layout,
            shapes: Vec::new(),
            notes: None,
            next_shape_id: 2,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    /// Set speaker notes for the slide.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = Some(notes.to_string());
    }

    /// Get the speaker notes for the slide.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Check if the slide has speaker notes.
    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shape(&self, shape_id: u32) -> Option<&MutableShape> {
        self.shapes.iter().find(|s| s.shape_id == shape_id)
    }

    pub fn shape_mut(&mut self, shape_id: u32) -> Option<&mut MutableShape> {
        self.shapes.iter_mut().find(|s| s.shape_id == shape_id)
    }

    fn push(&mut self, build: impl FnOnce(u32) -> MutableShape) -> u32 {
        let shape_id = self.next_shape_id;
        self.next_shape_id += 1;
        self.shapes.push(build(shape_id));
        shape_id
    }

    /// Add a plain text box to the slide and return its shape id.
    pub fn add_text_box(&mut self, text: &str, x: i64, y: i64, width: i64, height: i64) -> u32 {
        let frame = TextFrame::from_lines(text, None, &Default::default()).word_wrap(false);
        self.add_text_frame(Rect::new(x, y, width, height), frame)
    }

    /// Add a text box with prepared paragraphs.
    pub fn add_text_frame(&mut self, rect: Rect, text: TextFrame) -> u32 {
        self.push(|id| MutableShape::new_text_box(id, rect, text))
    }

    pub fn add_rounded_rectangle(
        &mut self,
        rect: Rect,
        fill: crate::common::RgbColor,
        outline: Outline,
        text: TextFrame,
    ) -> u32 {
        self.push(|id| MutableShape::new_rounded_rectangle(id, rect, fill, outline, text))
    }

    /// Fill a layout placeholder with text.
    pub fn add_placeholder(&mut self, kind: PlaceholderKind, rect: Rect, text: TextFrame) -> u32 {
        self.push(|id| MutableShape::new_placeholder(id, kind, rect, text))
    }

    /// Add a straight connector from the bottom-centre of `from` to the
    /// top-centre of `to`.
    ///
    /// Endpoints are computed now and not tracked afterwards.
    pub fn add_connector(
        &mut self,
        from: u32,
        to: u32,
        outline: Outline,
        label: &str,
    ) -> Result<u32> {
        let begin = self.anchor(from, Rect::bottom_center)?;
        let end = self.anchor(to, Rect::top_center)?;
        Ok(self.push(|id| MutableShape::new_connector(id, begin, end, outline, label)))
    }

    fn anchor(&self, shape_id: u32, point: fn(&Rect) -> Point) -> Result<Point> {
        self.shape(shape_id)
            .map(|s| point(&s.rect))
            .ok_or(Error::ShapeNotFound {
                slide_id: self.slide_id,
                shape_id,
            })
    }

    /// Add a picture from image bytes.
    pub fn add_picture_from_bytes(
        &mut self,
        data: Vec<u8>,
        rect: Rect,
        description: Option<String>,
    ) -> Result<u32> {
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| Error::InvalidImage("Unknown image format".to_string()))?;

        let description = description.unwrap_or_else(|| "Picture".to_string());
        Ok(self.push(|id| MutableShape::new_picture(id, rect, data, format, description)))
    }

    /// Pictures on this slide as (shape id, bytes, format), in z-order.
    pub(crate) fn collect_images(&self) -> Vec<(u32, &[u8], ImageFormat)> {
        self.shapes
            .iter()
            .filter_map(|s| s.image_data().map(|(data, format)| (s.shape_id, data, format)))
            .collect()
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    pub(crate) fn to_xml_with_rels(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld><p:spTree>");
        write_group_shape_properties(&mut xml);

        for shape in &self.shapes {
            let image_rel_id = rel_mapper.get_image_id(slide_index, shape.shape_id);
            shape.to_xml(&mut xml, image_rel_id)?;
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate notes slide XML content.
    ///
    /// Each line of the notes becomes its own paragraph.
    pub(crate) fn generate_notes_xml(&self) -> Option<Result<String>> {
        let notes_text = self.notes.as_ref()?;
        Some(Self::notes_xml(notes_text))
    }

    fn notes_xml(notes_text: &str) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:notes xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld><p:spTree>");
        write_group_shape_properties(&mut xml);

        // Slide thumbnail
        xml.push_str("<p:sp><p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Slide Image Placeholder 1"/>"#);
        xml.push_str(
            r#"<p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr>"#,
        );
        xml.push_str(r#"<p:nvPr><p:ph type="sldImg"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr><p:spPr/></p:sp>");

        // Notes text
        xml.push_str("<p:sp><p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="3" name="Notes Placeholder 2"/>"#);
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str(r#"<p:nvPr><p:ph type="body" idx="1"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr><p:spPr/>");
        xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
        for line in notes_text.split('\n') {
            if line.is_empty() {
                xml.push_str("<a:p/>");
            } else {
                xml.push_str("<a:p>");
                write_runs(&mut xml, line, &RunFormat::default())?;
                xml.push_str("</a:p>");
            }
        }
        xml.push_str("</p:txBody></p:sp>");

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:notes>");

        Ok(xml)
    }
}

/// Group shape properties every `p:spTree` starts with (id 1).
fn write_group_shape_properties(xml: &mut String) {
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str(r#"<a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm>"#);
    xml.push_str("</p:grpSpPr>");
}
