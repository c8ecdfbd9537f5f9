//! Deck Builder: append-only slide assembly on top of the presentation writer.
use crate::common::unit::{inches_to_emu, pt_to_emu_f64, scale_width_to_height};
use crate::common::{Error, Rect, Result, RgbColor};
use crate::ooxml::pptx::{
    ImageFormat, MutablePresentation, MutableShape, MutableSlide, Outline, Paragraph, PlaceholderKind,
    RunFormat, ShapeHandle, SlideLayout, TextAlign, TextFrame, VerticalAnchor,
};
use std::io::{Cursor, Write};
use std::path::Path;

use super::config::DeckConfig;

/// Pictures on diagram slides are scaled to this height.
const DIAGRAM_IMAGE_HEIGHT_IN: f64 = 7.0;

/// Builds a deck slide by slide and writes it as a `.pptx` file.
///
/// # Examples
///
/// ```rust
/// use deckhand::{DeckBuilder, Rect, RgbColor};
///
/// let mut deck = DeckBuilder::new();
/// deck.add_title_slide("YTL Cement", "Business Case");
///
/// let mut slide = deck.add_blank_slide();
/// let a = slide.add_shape_box(Rect::inches(1.0, 1.0, 2.0, 0.8), "Procure-to-Pay", RgbColor(255, 244, 230), 11.0, false);
/// let b = slide.add_shape_box(Rect::inches(1.0, 3.0, 2.0, 0.8), "Invoice\nProcessing", RgbColor(255, 107, 107), 10.0, true);
/// let line = slide.add_connector(a, b, "")?;
///
/// assert_eq!(deck.slide_count(), 2);
/// assert_eq!(deck.shape(line).unwrap().endpoints().unwrap().0.y, Rect::inches(1.0, 1.0, 2.0, 0.8).bottom_center().y);
/// # Ok::<(), deckhand::Error>(())
/// ```
#[derive(Debug)]
pub struct DeckBuilder {
    pres: MutablePresentation,
    config: DeckConfig,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckBuilder {
    /// Create an empty 16" x 9" deck with the default house style.
    pub fn new() -> Self {
        Self::with_config(DeckConfig::default())
    }

    pub fn with_config(config: DeckConfig) -> Self {
        let mut pres = MutablePresentation::new();
        pres.set_slide_width(inches_to_emu(config.slide_width_in));
        pres.set_slide_height(inches_to_emu(config.slide_height_in));
        if let Some(ref title) = config.title {
            pres.set_title(title);
        }
        if let Some(ref creator) = config.creator {
            pres.set_creator(creator);
        }
        Self { pres, config }
    }

    #[inline]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// The underlying presentation.
    #[inline]
    pub fn presentation(&self) -> &MutablePresentation {
        &self.pres
    }

    pub fn slide_count(&self) -> usize {
        self.pres.slide_count()
    }

    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.pres.slide(index)
    }

    pub fn shape(&self, handle: ShapeHandle) -> Option<&MutableShape> {
        self.pres.shape(handle)
    }

    /// Mutable access to a placed shape, e.g. to move it.
    ///
    /// Connectors drawn to or from the shape are not updated.
    pub fn shape_mut(&mut self, handle: ShapeHandle) -> Option<&mut MutableShape> {
        self.pres.shape_mut(handle)
    }

    /// Rectangle given as fractions of the canvas.
    fn canvas_rect(&self, left: f64, top: f64, width: f64, height: f64) -> Rect {
        let w = self.pres.slide_width() as f64;
        let h = self.pres.slide_height() as f64;
        Rect::new(
            (left * w) as i64,
            (top * h) as i64,
            (width * w) as i64,
            (height * h) as i64,
        )
    }

    /// Append a title slide. Each line of `subtitle` becomes a paragraph.
    pub fn add_title_slide(&mut self, title: &str, subtitle: &str) -> SlideBuilder<'_> {
        let title_rect = self.canvas_rect(0.075, 0.31, 0.85, 0.214);
        let subtitle_rect = self.canvas_rect(0.15, 0.567, 0.7, 0.255);

        let slide = self.pres.add_slide(SlideLayout::Title);
        slide.add_placeholder(
            PlaceholderKind::CenterTitle,
            title_rect,
            TextFrame::from_lines(title, None, &RunFormat::new()),
        );
        slide.add_placeholder(
            PlaceholderKind::Subtitle,
            subtitle_rect,
            TextFrame::from_lines(subtitle, None, &RunFormat::new()),
        );

        SlideBuilder {
            slide,
            config: &self.config,
        }
    }

    /// Append an empty slide (Blank layout) for free shape placement.
    pub fn add_blank_slide(&mut self) -> SlideBuilder<'_> {
        let slide = self.pres.add_slide(SlideLayout::Blank);
        SlideBuilder {
            slide,
            config: &self.config,
        }
    }

    /// Append a slide with a centred 32pt heading, a picture and speaker notes.
    ///
    /// The picture is placed at (0.5in, 1.3in), 7in high with its width
    /// following the image's aspect ratio. A path that does not exist is
    /// skipped and the slide gets no picture. Empty `notes` adds no notes.
    ///
    /// Fails only if the file exists but is not a readable image; no slide
    /// is added in that case.
    pub fn add_diagram_slide<P: AsRef<Path>>(
        &mut self,
        title: &str,
        image_path: P,
        notes: &str,
    ) -> Result<SlideBuilder<'_>> {
        let image_path = image_path.as_ref();
        let picture = if image_path.exists() {
            Some(load_picture(
                image_path,
                inches_to_emu(0.5),
                inches_to_emu(1.3),
                inches_to_emu(DIAGRAM_IMAGE_HEIGHT_IN),
            )?)
        } else {
            tracing::debug!(path = %image_path.display(), "diagram image not found, skipping picture");
            None
        };

        let mut slide = self.add_blank_slide();
        slide.add_text_box(
            Rect::inches(0.5, 0.3, 15.0, 0.8),
            vec![
                Paragraph::new(title)
                    .align(TextAlign::Center)
                    .format(RunFormat::new().size(32.0).bold(true)),
            ],
        );

        if let Some((data, rect)) = picture {
            let description = image_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            slide.slide.add_picture_from_bytes(data, rect, description)?;
        }

        if !notes.is_empty() {
            slide.set_notes(notes);
        }

        Ok(slide)
    }

    /// Serialize the deck to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.pres.to_bytes()
    }

    /// Write the deck to `path`, replacing any existing file.
    ///
    /// The package is written to a temporary file next to `path` and renamed
    /// over it, so a failed save never leaves a partial file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut builder = tempfile::Builder::new();
        builder.prefix(".deckhand").suffix(".pptx.tmp");
        // A new file gets 0o666 less the umask, like any file created with open(2)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let mut file = builder.tempfile_in(dir)?;
        file.write_all(&bytes)?;
        file.as_file().sync_all()?;

        // Replacing a file keeps its permissions
        if let Ok(existing) = std::fs::metadata(path) {
            file.as_file().set_permissions(existing.permissions())?;
        }
        file.persist(path)?;

        tracing::info!(
            path = %path.display(),
            slides = self.slide_count(),
            bytes = bytes.len(),
            "saved deck"
        );
        Ok(())
    }
}

/// Read an image and size it to `height`, keeping its aspect ratio.
fn load_picture(path: &Path, left: i64, top: i64, height: i64) -> Result<(Vec<u8>, Rect)> {
    let data = std::fs::read(path)?;
    if ImageFormat::detect_from_bytes(&data).is_none() {
        return Err(Error::InvalidImage(format!(
            "{} is not a supported image",
            path.display()
        )));
    }
    let (width_px, height_px) = image::ImageReader::new(Cursor::new(&data))
        .with_guessed_format()?
        .into_dimensions()?;
    if height_px == 0 {
        return Err(Error::InvalidImage(format!(
            "{} has zero height",
            path.display()
        )));
    }

    let width = scale_width_to_height(width_px, height_px, height);
    Ok((data, Rect::new(left, top, width, height)))
}

/// Adds shapes to one slide of a [`DeckBuilder`].
///
/// Returned by the `add_*_slide` methods; drop it to go back to the deck.
#[derive(Debug)]
pub struct SlideBuilder<'a> {
    slide: &'a mut MutableSlide,
    config: &'a DeckConfig,
}

impl<'a> SlideBuilder<'a> {
    #[inline]
    pub fn slide_id(&self) -> u32 {
        self.slide.slide_id()
    }

    #[inline]
    pub fn shape_count(&self) -> usize {
        self.slide.shape_count()
    }

    pub fn shape(&self, handle: ShapeHandle) -> Option<&MutableShape> {
        if handle.slide_id != self.slide.slide_id() {
            return None;
        }
        self.slide.shape(handle.shape_id)
    }

    fn handle(&self, shape_id: u32) -> ShapeHandle {
        ShapeHandle {
            slide_id: self.slide.slide_id(),
            shape_id,
        }
    }

    fn shape_outline(&self) -> Outline {
        Outline::new(
            self.config.shape_outline,
            pt_to_emu_f64(self.config.shape_outline_pt),
        )
    }

    /// Rounded rectangle with a solid fill and centred, vertically middle text.
    ///
    /// Each line of `text` becomes a paragraph. Geometry is not checked
    /// against the canvas.
    pub fn add_shape_box(
        &mut self,
        rect: Rect,
        text: &str,
        fill: RgbColor,
        text_size: f64,
        bold: bool,
    ) -> ShapeHandle {
        let format = RunFormat::new()
            .size(text_size)
            .bold(bold)
            .font(self.config.font.as_str());
        let frame = TextFrame::from_lines(text, Some(TextAlign::Center), &format)
            .anchor(VerticalAnchor::Middle);

        let outline = self.shape_outline();
        let shape_id = self.slide.add_rounded_rectangle(rect, fill, outline, frame);
        self.handle(shape_id)
    }

    /// Shape box with a bold centred heading followed by left-aligned lines.
    pub fn add_rich_shape_box(
        &mut self,
        rect: Rect,
        fill: RgbColor,
        heading: &str,
        heading_size: f64,
        lines: &[&str],
        line_size: f64,
    ) -> ShapeHandle {
        let font = self.config.font.as_str();
        let mut paragraphs = Vec::with_capacity(lines.len() + 1);
        paragraphs.push(
            Paragraph::new(heading)
                .align(TextAlign::Center)
                .format(RunFormat::new().size(heading_size).bold(true).font(font)),
        );
        paragraphs.extend(
            lines
                .iter()
                .map(|line| Paragraph::new(*line).format(RunFormat::new().size(line_size).font(font))),
        );
        let frame = TextFrame::new(paragraphs).anchor(VerticalAnchor::Middle);

        let outline = self.shape_outline();
        let shape_id = self.slide.add_rounded_rectangle(rect, fill, outline, frame);
        self.handle(shape_id)
    }

    /// Light-yellow annotation box: a bold 10pt title and one 9pt paragraph per bullet.
    pub fn add_note_box(&mut self, rect: Rect, title: &str, bullets: &[&str]) -> ShapeHandle {
        let mut paragraphs = Vec::with_capacity(bullets.len() + 1);
        paragraphs.push(
            Paragraph::new(title)
                .align(TextAlign::Center)
                .format(RunFormat::new().size(10.0).bold(true)),
        );
        paragraphs.extend(
            bullets
                .iter()
                .map(|bullet| Paragraph::new(*bullet).format(RunFormat::new().size(9.0))),
        );
        let frame = TextFrame::new(paragraphs).anchor(VerticalAnchor::Middle);

        let outline = Outline::new(
            self.config.note_outline,
            pt_to_emu_f64(self.config.note_outline_pt),
        );
        let shape_id = self
            .slide
            .add_rounded_rectangle(rect, self.config.note_fill, outline, frame);
        self.handle(shape_id)
    }

    /// Borderless, unfilled text box that does not wrap.
    pub fn add_text_box(&mut self, rect: Rect, paragraphs: Vec<Paragraph>) -> ShapeHandle {
        let frame = TextFrame::new(paragraphs).word_wrap(false);
        let shape_id = self.slide.add_text_frame(rect, frame);
        self.handle(shape_id)
    }

    /// Straight line from the bottom-centre of `from` to the top-centre of `to`.
    ///
    /// The endpoints are fixed now: moving either shape later leaves the
    /// line where it is. `label` is stored as the connector's name only.
    pub fn add_connector(
        &mut self,
        from: ShapeHandle,
        to: ShapeHandle,
        label: &str,
    ) -> Result<ShapeHandle> {
        for handle in [from, to] {
            if handle.slide_id != self.slide.slide_id() {
                return Err(Error::ShapeNotFound {
                    slide_id: handle.slide_id,
                    shape_id: handle.shape_id,
                });
            }
        }

        let outline = Outline::new(
            self.config.connector_color,
            pt_to_emu_f64(self.config.connector_pt),
        );
        let shape_id = self
            .slide
            .add_connector(from.shape_id, to.shape_id, outline, label)?;
        Ok(self.handle(shape_id))
    }

    /// Place an image file at (`left`, `top`), `height` high.
    pub fn add_picture<P: AsRef<Path>>(
        &mut self,
        image_path: P,
        left: i64,
        top: i64,
        height: i64,
    ) -> Result<ShapeHandle> {
        let image_path = image_path.as_ref();
        let (data, rect) = load_picture(image_path, left, top, height)?;
        let description = image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        let shape_id = self.slide.add_picture_from_bytes(data, rect, description)?;
        Ok(self.handle(shape_id))
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.slide.set_notes(notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Point;
    use crate::ooxml::pptx::ShapeKind;
    use proptest::prelude::*;
    use std::io::Read;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        image::RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    fn read_member(bytes: &[u8], name: &str) -> Option<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut member = archive.by_name(name).ok()?;
        let mut content = String::new();
        member.read_to_string(&mut content).unwrap();
        Some(content)
    }

    #[test]
    fn test_title_and_content_slide() {
        let mut deck = DeckBuilder::new();
        deck.add_title_slide("YTL Cement - SAP S/4HANA Transformation", "Business Case");

        let mut slide = deck.add_blank_slide();
        let a = slide.add_shape_box(Rect::inches(0.9, 1.8, 2.0, 0.8), "Procure-to-Pay", RgbColor(255, 244, 230), 11.0, false);
        slide.add_shape_box(Rect::inches(3.1, 1.8, 2.0, 0.8), "Order-to-Cash", RgbColor(255, 244, 230), 11.0, false);
        let c = slide.add_shape_box(Rect::inches(0.9, 3.5, 1.6, 0.9), "Invoice\nProcessing", RgbColor(255, 107, 107), 10.0, true);
        slide.add_connector(a, c, "").unwrap();
        assert_eq!(slide.shape_count(), 4);

        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.slide(1).unwrap().shape_count(), 4);
        // title slide carries its two placeholders
        assert_eq!(deck.slide(0).unwrap().shape_count(), 2);
    }

    #[test]
    fn test_shape_box_style() {
        let mut deck = DeckBuilder::new();
        let mut slide = deck.add_blank_slide();
        let h = slide.add_shape_box(Rect::inches(0.5, 0.3, 15.0, 0.6), "Finance &\nReporting", RgbColor::WHITE, 24.0, true);

        let shape = deck.shape(h).unwrap();
        assert_eq!(shape.kind(), &ShapeKind::RoundedRectangle);
        assert_eq!(shape.fill(), Some(RgbColor::WHITE));
        assert_eq!(shape.outline(), Some(Outline::new(RgbColor(100, 100, 100), 12_700)));

        let frame = shape.text_frame().unwrap();
        assert_eq!(frame.anchor, VerticalAnchor::Middle);
        assert!(frame.word_wrap);
        assert_eq!(frame.paragraphs.len(), 2);
        for p in &frame.paragraphs {
            assert_eq!(p.align, Some(TextAlign::Center));
            assert_eq!(p.format.size_pt, Some(24.0));
            assert!(p.format.bold);
            assert_eq!(p.format.font.as_deref(), Some("Arial"));
        }
    }

    #[test]
    fn test_connector_snapshot() {
        let mut deck = DeckBuilder::new();
        let mut slide = deck.add_blank_slide();
        let a = slide.add_shape_box(Rect::new(1000, 1000, 3001, 500), "a", RgbColor::WHITE, 12.0, false);
        let b = slide.add_shape_box(Rect::new(8000, 4000, 2000, 500), "b", RgbColor::WHITE, 12.0, false);
        let line = slide.add_connector(a, b, "a to b").unwrap();

        let expected = (Point::new(2500, 1500), Point::new(9000, 4000));
        assert_eq!(deck.shape(line).unwrap().endpoints(), Some(expected));
        assert_eq!(deck.shape(line).unwrap().name(), "a to b");

        deck.shape_mut(a).unwrap().set_position(0, 0);
        deck.shape_mut(b).unwrap().set_size(10, 10);
        assert_eq!(deck.shape(line).unwrap().endpoints(), Some(expected));
    }

    #[test]
    fn test_connector_across_slides_fails() {
        let mut deck = DeckBuilder::new();
        let mut first = deck.add_blank_slide();
        let a = first.add_shape_box(Rect::default(), "a", RgbColor::WHITE, 12.0, false);

        let mut second = deck.add_blank_slide();
        let b = second.add_shape_box(Rect::default(), "b", RgbColor::WHITE, 12.0, false);
        let err = second.add_connector(a, b, "").unwrap_err();
        assert!(matches!(err, Error::ShapeNotFound { slide_id: 256, .. }));
        assert_eq!(second.shape_count(), 1);
    }

    #[test]
    fn test_note_box() {
        let mut deck = DeckBuilder::new();
        let mut slide = deck.add_blank_slide();
        let h = slide.add_note_box(
            Rect::inches(10.0, 1.5, 5.5, 1.2),
            "🔴 RED = Manual, Error-Prone",
            &["Current: 28K invoices/month", "Cost: $280K-560K annually"],
        );

        let shape = deck.shape(h).unwrap();
        assert_eq!(shape.fill(), Some(RgbColor(255, 255, 220)));
        assert_eq!(shape.outline().unwrap().color, RgbColor(200, 200, 100));

        let paragraphs = &shape.text_frame().unwrap().paragraphs;
        assert_eq!(paragraphs.len(), 3);
        assert!(paragraphs[0].format.bold);
        assert_eq!(paragraphs[0].format.size_pt, Some(10.0));
        assert_eq!(paragraphs[2].text, "Cost: $280K-560K annually");
        assert_eq!(paragraphs[2].format.size_pt, Some(9.0));
        assert!(!paragraphs[2].format.bold);
    }

    #[test]
    fn test_rich_shape_box() {
        let mut deck = DeckBuilder::new();
        let mut slide = deck.add_blank_slide();
        let h = slide.add_rich_shape_box(
            Rect::inches(0.5, 1.7, 4.5, 1.0),
            RgbColor(255, 153, 153),
            "AS-IS",
            10.0,
            &["• Manual 3-Way Match", "• 28K invoices/month"],
            8.0,
        );

        let frame = deck.shape(h).unwrap().text_frame().unwrap().clone();
        assert_eq!(frame.text(), "AS-IS\n• Manual 3-Way Match\n• 28K invoices/month");
        assert_eq!(frame.paragraphs[0].align, Some(TextAlign::Center));
        assert_eq!(frame.paragraphs[1].align, None);
        assert_eq!(frame.paragraphs[1].format.size_pt, Some(8.0));
    }

    #[test]
    fn test_diagram_slide_missing_image() {
        let mut deck = DeckBuilder::new();
        let slide = deck
            .add_diagram_slide("Data Flow Architecture", "/nonexistent/YTL_Data_Flow.png", "End-to-end data flow")
            .unwrap();
        assert_eq!(slide.shape_count(), 1);

        let slide = deck.slide(0).unwrap();
        assert_eq!(slide.notes(), Some("End-to-end data flow"));
        let heading = &slide.shapes()[0];
        assert_eq!(heading.kind(), &ShapeKind::TextBox);
        assert_eq!(heading.rect(), Rect::inches(0.5, 0.3, 15.0, 0.8));
        let paragraph = &heading.text_frame().unwrap().paragraphs[0];
        assert_eq!(paragraph.format.size_pt, Some(32.0));
        assert!(paragraph.format.bold);
        assert_eq!(paragraph.align, Some(TextAlign::Center));
    }

    #[test]
    fn test_diagram_slide_without_notes() {
        let mut deck = DeckBuilder::new();
        deck.add_diagram_slide("Title", "/nonexistent.png", "").unwrap();
        assert!(!deck.slide(0).unwrap().has_notes());
    }

    #[test]
    fn test_diagram_slide_scales_picture() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "landscape.png", 160, 90);

        let mut deck = DeckBuilder::new();
        deck.add_diagram_slide("Landscape", &path, "notes").unwrap();

        let slide = deck.slide(0).unwrap();
        assert_eq!(slide.shape_count(), 2);
        let picture = &slide.shapes()[1];
        assert!(matches!(picture.kind(), ShapeKind::Picture { .. }));
        assert_eq!(
            picture.rect(),
            Rect::new(inches_to_emu(0.5), inches_to_emu(1.3), 11_379_200, inches_to_emu(7.0))
        );
    }

    #[test]
    fn test_diagram_slide_invalid_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let mut deck = DeckBuilder::new();
        let err = deck.add_diagram_slide("Broken", &path, "").unwrap_err();
        assert!(matches!(err, Error::InvalidImage(_)));
        assert_eq!(deck.slide_count(), 0);
    }

    #[test]
    fn test_add_picture() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "portrait.png", 50, 100);

        let mut deck = DeckBuilder::new();
        let mut slide = deck.add_blank_slide();
        let h = slide.add_picture(&path, 1000, 2000, 400_000).unwrap();

        let picture = deck.shape(h).unwrap();
        assert_eq!(picture.rect(), Rect::new(1000, 2000, 200_000, 400_000));
        match picture.kind() {
            ShapeKind::Picture { description, .. } => assert_eq!(description, "portrait.png"),
            other => panic!("expected a picture, got {:?}", other),
        }
    }

    #[test]
    fn test_add_picture_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let mut deck = DeckBuilder::new();
        let mut slide = deck.add_blank_slide();
        let err = slide
            .add_picture(dir.path().join("missing.png"), 0, 0, 100)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(slide.shape_count(), 0);
    }

    #[test]
    fn test_save_writes_package() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_png(dir.path(), "diagram.png", 40, 20);
        let output = dir.path().join("deck.pptx");

        let mut deck = DeckBuilder::with_config(DeckConfig::new().with_title("Deck"));
        deck.add_title_slide("Title", "Line one\nLine two");
        deck.add_diagram_slide("With picture", &image, "Notes here").unwrap();
        deck.add_diagram_slide("Without picture", dir.path().join("missing.png"), "").unwrap();
        deck.save(&output).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/slide3.xml",
            "ppt/notesSlides/notesSlide2.xml",
            "ppt/media/image1.png",
        ] {
            assert!(read_member(&bytes, name).is_some(), "missing {}", name);
        }
        assert!(read_member(&bytes, "ppt/notesSlides/notesSlide3.xml").is_none());

        let title = read_member(&bytes, "ppt/slides/slide1.xml").unwrap();
        assert!(title.contains("<a:t>Line one</a:t>"));
        assert!(title.contains("<a:t>Line two</a:t>"));

        let core = read_member(&bytes, "docProps/core.xml").unwrap();
        assert!(core.contains("<dc:title>Deck</dc:title>"));

        let presentation = read_member(&bytes, "ppt/presentation.xml").unwrap();
        assert!(presentation.contains(r#"<p:sldSz cx="14630400" cy="8229600"/>"#));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("deck.pptx");
        std::fs::write(&output, b"stale").unwrap();

        let mut deck = DeckBuilder::new();
        deck.add_blank_slide();
        deck.save(&output).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[cfg(unix)]
    #[test]
    fn test_save_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let mode = |path: &Path| std::fs::metadata(path).unwrap().permissions().mode() & 0o777;

        // a plainly created file shows what the current umask allows
        let reference = dir.path().join("reference");
        std::fs::File::create(&reference).unwrap();

        let mut deck = DeckBuilder::new();
        deck.add_blank_slide();

        let fresh = dir.path().join("fresh.pptx");
        deck.save(&fresh).unwrap();
        assert_eq!(mode(&fresh), mode(&reference));

        let existing = dir.path().join("existing.pptx");
        std::fs::write(&existing, b"stale").unwrap();
        std::fs::set_permissions(&existing, std::fs::Permissions::from_mode(0o640)).unwrap();
        deck.save(&existing).unwrap();
        assert_eq!(mode(&existing), 0o640);
        assert_eq!(&std::fs::read(&existing).unwrap()[..2], b"PK");
    }

    #[test]
    fn test_save_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no-such-dir").join("deck.pptx");

        let deck = DeckBuilder::new();
        let err = deck.save(&output).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_config_canvas() {
        let config = DeckConfig::from_yaml_str("slide_width_in: 10\nslide_height_in: 7.5\nfont: Calibri\n").unwrap();
        let mut deck = DeckBuilder::with_config(config);
        assert_eq!(deck.presentation().slide_width(), 9_144_000);
        assert_eq!(deck.presentation().slide_height(), 6_858_000);

        let mut slide = deck.add_blank_slide();
        let h = slide.add_shape_box(Rect::default(), "x", RgbColor::WHITE, 12.0, false);
        let font = deck.shape(h).unwrap().text_frame().unwrap().paragraphs[0].format.font.clone();
        assert_eq!(font.as_deref(), Some("Calibri"));
    }

    proptest! {
        #[test]
        fn prop_shape_box_geometry_round_trips(
            left in -2_000_000i64..20_000_000,
            top in -2_000_000i64..12_000_000,
            width in 0i64..15_000_000,
            height in 0i64..9_000_000,
        ) {
            let rect = Rect::new(left, top, width, height);
            let mut deck = DeckBuilder::new();
            let mut slide = deck.add_blank_slide();
            let h = slide.add_shape_box(rect, "box", RgbColor::WHITE, 12.0, false);
            prop_assert_eq!(deck.shape(h).unwrap().rect(), rect);
        }

        #[test]
        fn prop_connector_anchors(
            a in (0i64..10_000_000, 0i64..5_000_000, 0i64..3_000_000, 0i64..1_000_000),
            b in (0i64..10_000_000, 0i64..5_000_000, 0i64..3_000_000, 0i64..1_000_000),
            moved in (0i64..10_000_000, 0i64..5_000_000),
        ) {
            let ra = Rect::new(a.0, a.1, a.2, a.3);
            let rb = Rect::new(b.0, b.1, b.2, b.3);
            let mut deck = DeckBuilder::new();
            let mut slide = deck.add_blank_slide();
            let ha = slide.add_shape_box(ra, "a", RgbColor::WHITE, 12.0, false);
            let hb = slide.add_shape_box(rb, "b", RgbColor::WHITE, 12.0, false);
            let line = slide.add_connector(ha, hb, "").unwrap();

            let expected = (
                Point::new(ra.left + ra.width / 2, ra.top + ra.height),
                Point::new(rb.left + rb.width / 2, rb.top),
            );
            prop_assert_eq!(deck.shape(line).unwrap().endpoints(), Some(expected));

            deck.shape_mut(ha).unwrap().set_position(moved.0, moved.1);
            prop_assert_eq!(deck.shape(line).unwrap().endpoints(), Some(expected));
        }
    }
}
