/// Shape types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::common::{Error, Point, Rect, Result, RgbColor};
use std::fmt::Write as FmtWrite;

// Import shared format types
use super::super::format::ImageFormat;
use super::text::TextFrame;

/// Border or line of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub color: RgbColor,
    /// Line width in EMU
    pub width: i64,
}

impl Outline {
    pub const fn new(color: RgbColor, width: i64) -> Self {
        Self { color, width }
    }
}

/// Layout placeholders a title slide fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    CenterTitle,
    Subtitle,
}

/// Identity of a shape inside a presentation.
///
/// Handles are plain values: they stay valid for the life of the deck and
/// can be copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeHandle {
    pub slide_id: u32,
    pub shape_id: u32,
}

/// What a shape draws.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    TextBox,
    RoundedRectangle,
    /// A straight line. `begin`/`end` are fixed when the connector is created.
    Connector {
        begin: Point,
        end: Point,
        label: String,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        description: String,
    },
    Placeholder(PlaceholderKind),
}

/// A shape on a slide (text box, rounded rectangle, line or picture).
#[derive(Debug, Clone, PartialEq)]
pub struct MutableShape {
    pub(crate) shape_id: u32,
    pub(crate) name: String,
    pub(crate) rect: Rect,
    pub(crate) fill: Option<RgbColor>,
    pub(crate) outline: Option<Outline>,
    pub(crate) text: Option<TextFrame>,
    pub(crate) kind: ShapeKind,
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, rect: Rect, text: TextFrame) -> Self {
        Self {
            shape_id,
            name: format!("TextBox {}", shape_id - 1),
            rect,
            fill: None,
            outline: None,
            text: Some(text),
            kind: ShapeKind::TextBox,
        }
    }

    pub(crate) fn new_rounded_rectangle(
        shape_id: u32,
        rect: Rect,
        fill: RgbColor,
        outline: Outline,
        text: TextFrame,
    ) -> Self {
        Self {
            shape_id,
            name: format!("Rounded Rectangle {}", shape_id - 1),
            rect,
            fill: Some(fill),
            outline: Some(outline),
            text: Some(text),
            kind: ShapeKind::RoundedRectangle,
        }
    }

    /// A straight connector from `begin` to `end`.
    ///
    /// A non-empty label becomes the shape name; it is never drawn.
    pub(crate) fn new_connector(
        shape_id: u32,
        begin: Point,
        end: Point,
        outline: Outline,
        label: &str,
    ) -> Self {
        let name = if label.is_empty() {
            format!("Straight Connector {}", shape_id - 1)
        } else {
            label.to_string()
        };
        Self {
            shape_id,
            name,
            rect: Rect::spanning(begin, end),
            fill: None,
            outline: Some(outline),
            text: None,
            kind: ShapeKind::Connector {
                begin,
                end,
                label: label.to_string(),
            },
        }
    }

    pub(crate) fn new_picture(
        shape_id: u32,
        rect: Rect,
        data: Vec<u8>,
        format: ImageFormat,
        description: String,
    ) -> Self {
        Self {
            shape_id,
            name: format!("Picture {}", shape_id - 1),
            rect,
            fill: None,
            outline: None,
            text: None,
            kind: ShapeKind::Picture {
                data,
                format,
                description,
            },
        }
    }

    pub(crate) fn new_placeholder(
        shape_id: u32,
        kind: PlaceholderKind,
        rect: Rect,
        text: TextFrame,
    ) -> Self {
        let name = match kind {
            PlaceholderKind::CenterTitle => format!("Title {}", shape_id - 1),
            PlaceholderKind::Subtitle => format!("Subtitle {}", shape_id - 1),
        };
        Self {
            shape_id,
            name,
            rect,
            fill: None,
            outline: None,
            text: Some(text),
            kind: ShapeKind::Placeholder(kind),
        }
    }

    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    #[inline]
    pub fn fill(&self) -> Option<RgbColor> {
        self.fill
    }

    #[inline]
    pub fn outline(&self) -> Option<Outline> {
        self.outline
    }

    #[inline]
    pub fn text_frame(&self) -> Option<&TextFrame> {
        self.text.as_ref()
    }

    /// Plain text of the shape, one line per paragraph.
    pub fn text(&self) -> Option<String> {
        self.text.as_ref().map(TextFrame::text)
    }

    /// Begin and end points if this shape is a connector.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match self.kind {
            ShapeKind::Connector { begin, end, .. } => Some((begin, end)),
            _ => None,
        }
    }

    /// Move the shape so its top-left corner is at (`left`, `top`).
    ///
    /// Connectors attached to this shape keep their old endpoints.
    pub fn set_position(&mut self, left: i64, top: i64) -> &mut Self {
        let dx = left - self.rect.left;
        let dy = top - self.rect.top;
        self.rect.left = left;
        self.rect.top = top;

        if let ShapeKind::Connector { begin, end, .. } = &mut self.kind {
            *begin = Point::new(begin.x + dx, begin.y + dy);
            *end = Point::new(end.x + dx, end.y + dy);
        }
        self
    }

    /// Resize the shape, keeping its top-left corner.
    ///
    /// A connector keeps its begin point and direction.
    pub fn set_size(&mut self, width: i64, height: i64) -> &mut Self {
        self.rect.width = width;
        self.rect.height = height;

        if let ShapeKind::Connector { begin, end, .. } = &mut self.kind {
            let sx = if end.x < begin.x { -1 } else { 1 };
            let sy = if end.y < begin.y { -1 } else { 1 };
            *end = Point::new(begin.x + sx * width, begin.y + sy * height);
            self.rect = Rect::spanning(*begin, *end);
        }
        self
    }

    /// Image bytes and format if this shape is a picture.
    pub(crate) fn image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.kind {
            ShapeKind::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            _ => None,
        }
    }

    /// Generate XML for this shape.
    ///
    /// Pictures need the relationship id of their image part.
    pub(crate) fn to_xml(&self, xml: &mut String, image_rel_id: Option<&str>) -> Result<()> {
        match &self.kind {
            ShapeKind::TextBox => {
                self.write_sp(xml, r#"<p:cNvSpPr txBox="1"/>"#, "<p:nvPr/>", "rect")
            },
            ShapeKind::RoundedRectangle => {
                self.write_sp(xml, "<p:cNvSpPr/>", "<p:nvPr/>", "roundRect")
            },
            ShapeKind::Placeholder(kind) => {
                let nv_pr = match kind {
                    PlaceholderKind::CenterTitle => r#"<p:nvPr><p:ph type="ctrTitle"/></p:nvPr>"#,
                    PlaceholderKind::Subtitle => {
                        r#"<p:nvPr><p:ph type="subTitle" idx="1"/></p:nvPr>"#
                    },
                };
                self.write_sp(
                    xml,
                    r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
                    nv_pr,
                    "",
                )
            },
            ShapeKind::Connector { begin, end, .. } => self.write_cxn_sp(xml, *begin, *end),
            ShapeKind::Picture { description, .. } => {
                let rel_id = image_rel_id.ok_or_else(|| {
                    Error::Xml(format!("picture {} has no image relationship", self.shape_id))
                })?;
                self.write_pic(xml, description, rel_id)
            },
        }
    }

    fn write_c_nv_pr(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )?;
        Ok(())
    }

    fn write_xfrm(xml: &mut String, rect: Rect, flip_h: bool, flip_v: bool) -> Result<()> {
        xml.push_str("<a:xfrm");
        if flip_h {
            xml.push_str(r#" flipH="1""#);
        }
        if flip_v {
            xml.push_str(r#" flipV="1""#);
        }
        write!(
            xml,
            r#"><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            rect.left, rect.top, rect.width, rect.height
        )?;
        Ok(())
    }

    fn write_outline(xml: &mut String, outline: Option<Outline>) -> Result<()> {
        if let Some(outline) = outline {
            write!(
                xml,
                r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                outline.width, outline.color
            )?;
        }
        Ok(())
    }

    /// `p:sp`; an empty `preset` leaves geometry to the layout placeholder.
    fn write_sp(&self, xml: &mut String, c_nv_sp_pr: &str, nv_pr: &str, preset: &str) -> Result<()> {
        xml.push_str("<p:sp><p:nvSpPr>");
        self.write_c_nv_pr(xml)?;
        xml.push_str(c_nv_sp_pr);
        xml.push_str(nv_pr);
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        Self::write_xfrm(xml, self.rect, false, false)?;
        if !preset.is_empty() {
            write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, preset)?;
            match self.fill {
                Some(fill) => write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, fill)?,
                None => xml.push_str("<a:noFill/>"),
            }
        }
        Self::write_outline(xml, self.outline)?;
        xml.push_str("</p:spPr>");

        if let Some(ref text) = self.text {
            let inherit = matches!(self.kind, ShapeKind::Placeholder(_));
            text.write_tx_body(xml, inherit)?;
        }

        xml.push_str("</p:sp>");
        Ok(())
    }

    fn write_cxn_sp(&self, xml: &mut String, begin: Point, end: Point) -> Result<()> {
        xml.push_str("<p:cxnSp><p:nvCxnSpPr>");
        self.write_c_nv_pr(xml)?;
        xml.push_str("<p:cNvCxnSpPr/><p:nvPr/></p:nvCxnSpPr>");

        xml.push_str("<p:spPr>");
        Self::write_xfrm(xml, self.rect, end.x < begin.x, end.y < begin.y)?;
        xml.push_str(r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom>"#);
        Self::write_outline(xml, self.outline)?;
        xml.push_str("</p:spPr>");

        xml.push_str("</p:cxnSp>");
        Ok(())
    }

    fn write_pic(&self, xml: &mut String, description: &str, rel_id: &str) -> Result<()> {
        xml.push_str("<p:pic><p:nvPicPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}" descr="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name),
            escape_xml(description)
        )?;
        xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/>"#);
        xml.push_str("</p:nvPicPr>");

        xml.push_str("<p:blipFill>");
        write!(xml, r#"<a:blip r:embed="{}"/>"#, rel_id)?;
        xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
        xml.push_str("</p:blipFill>");

        xml.push_str("<p:spPr>");
        Self::write_xfrm(xml, self.rect, false, false)?;
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("</p:spPr>");

        xml.push_str("</p:pic>");
        Ok(())
    }
}
