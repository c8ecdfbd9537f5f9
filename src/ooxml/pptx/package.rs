/// Package assembly for PowerPoint presentations.
///
/// Turns a [`MutablePresentation`] into the full set of OPC parts (slides,
/// notes, media, masters, theme, properties) and serializes them to ZIP bytes.
use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::MutablePresentation;
use crate::ooxml::pptx::writer::relmap::RelationshipMapper;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const NOTES_MASTER_URI: &str = "/ppt/notesMasters/notesMaster1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";
const NOTES_THEME_URI: &str = "/ppt/theme/theme2.xml";
const PRES_PROPS_URI: &str = "/ppt/presProps.xml";
const VIEW_PROPS_URI: &str = "/ppt/viewProps.xml";
const TABLE_STYLES_URI: &str = "/ppt/tableStyles.xml";
const CORE_PROPS_URI: &str = "/docProps/core.xml";
const APP_PROPS_URI: &str = "/docProps/app.xml";

/// Serialize `pres` into `.pptx` bytes.
pub fn write_presentation(pres: &MutablePresentation) -> Result<Vec<u8>> {
    let pkg = build_package(pres, Utc::now())?;
    Ok(PackageWriter::to_bytes(&pkg)?)
}

/// Image parts keyed by content hash, so identical bytes are stored once.
#[derive(Default)]
struct MediaStore {
    by_digest: HashMap<Vec<u8>, PackURI>,
    parts: Vec<Part>,
}

impl MediaStore {
    fn get_or_add(&mut self, data: &[u8], mime_type: &str, extension: &str) -> Result<PackURI> {
        let digest = Sha256::digest(data).to_vec();
        if let Some(uri) = self.by_digest.get(&digest) {
            return Ok(uri.clone());
        }

        let uri = PackURI::new(format!(
            "/ppt/media/image{}.{}",
            self.parts.len() + 1,
            extension
        ))?;
        self.parts
            .push(Part::new(uri.clone(), mime_type, data.to_vec()));
        self.by_digest.insert(digest, uri.clone());
        Ok(uri)
    }
}

fn xml_part(uri: &PackURI, content_type: &str, xml: &str) -> Part {
    Part::new(uri.clone(), content_type, xml.as_bytes().to_vec())
}

pub(crate) fn build_package(
    pres: &MutablePresentation,
    now: DateTime<Utc>,
) -> Result<OpcPackage> {
    let mut pkg = OpcPackage::new();

    let pres_uri = PackURI::new(PRESENTATION_URI)?;
    let master_uri = PackURI::new(SLIDE_MASTER_URI)?;
    let theme_uri = PackURI::new(THEME_URI)?;
    let layout_uris = (1..=template::all_slide_layouts().len())
        .map(|n| PackURI::new(format!("/ppt/slideLayouts/slideLayout{}.xml", n)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut pres_part = Part::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
    let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);

    // Slide master and layouts
    let mut master_part = xml_part(
        &master_uri,
        ct::PML_SLIDE_MASTER,
        template::default_slide_master_xml(),
    );
    for (layout_uri, layout_xml) in layout_uris.iter().zip(template::all_slide_layouts()) {
        master_part.relate_to(layout_uri, rt::SLIDE_LAYOUT);
        let mut layout_part = xml_part(layout_uri, ct::PML_SLIDE_LAYOUT, layout_xml);
        layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        pkg.add_part(layout_part);
    }
    master_part.relate_to(&theme_uri, rt::THEME);
    pkg.add_part(master_part);

    // Slides, their pictures and notes
    let notes_master_uri = PackURI::new(NOTES_MASTER_URI)?;
    let mut media = MediaStore::default();
    let mut rel_mapper = RelationshipMapper::new();
    let mut slide_rel_ids = Vec::with_capacity(pres.slide_count());

    let mut images_by_slide: HashMap<usize, Vec<_>> = HashMap::new();
    for (slide_index, shape_id, data, format) in pres.collect_all_images() {
        images_by_slide
            .entry(slide_index)
            .or_default()
            .push((shape_id, data, format));
    }

    for (slide_index, slide) in pres.slides.iter().enumerate() {
        let n = slide_index + 1;
        let slide_uri = PackURI::new(format!("/ppt/slides/slide{}.xml", n))?;
        let mut slide_part = Part::new(slide_uri.clone(), ct::PML_SLIDE, Vec::new());

        slide_part.relate_to(&layout_uris[slide.layout.part_index() - 1], rt::SLIDE_LAYOUT);

        for &(shape_id, data, format) in images_by_slide.get(&slide_index).into_iter().flatten() {
            let media_uri = media.get_or_add(data, format.mime_type(), format.extension())?;
            let rel_id = slide_part.relate_to(&media_uri, rt::IMAGE);
            rel_mapper.add_image(slide_index, shape_id, rel_id);
        }

        if let Some(notes_xml) = slide.generate_notes_xml() {
            let notes_uri = PackURI::new(format!("/ppt/notesSlides/notesSlide{}.xml", n))?;
            let mut notes_part = xml_part(&notes_uri, ct::PML_NOTES_SLIDE, &notes_xml?);
            notes_part.relate_to(&notes_master_uri, rt::NOTES_MASTER);
            notes_part.relate_to(&slide_uri, rt::SLIDE);
            pkg.add_part(notes_part);

            let rel_id = slide_part.relate_to(&notes_uri, rt::NOTES_SLIDE);
            rel_mapper.add_notes(slide_index, rel_id);
        }

        slide_part.set_blob(
            slide
                .to_xml_with_rels(slide_index, &rel_mapper)?
                .into_bytes(),
        );
        pkg.add_part(slide_part);

        slide_rel_ids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));
    }

    let image_count = media.parts.len();
    for part in media.parts {
        pkg.add_part(part);
    }

    // Notes master only when something uses it
    let notes_master_rel_id = if pres.has_notes() {
        let notes_theme_uri = PackURI::new(NOTES_THEME_URI)?;
        let mut notes_master_part = xml_part(
            &notes_master_uri,
            ct::PML_NOTES_MASTER,
            template::default_notes_master_xml(),
        );
        notes_master_part.relate_to(&notes_theme_uri, rt::THEME);
        pkg.add_part(notes_master_part);
        pkg.add_part(xml_part(
            &notes_theme_uri,
            ct::OFC_THEME,
            template::default_theme_xml(),
        ));
        Some(pres_part.relate_to(&notes_master_uri, rt::NOTES_MASTER))
    } else {
        None
    };

    // Presentation-level property parts
    for (uri, content_type, reltype, xml) in [
        (PRES_PROPS_URI, ct::PML_PRES_PROPS, rt::PRES_PROPS, template::default_pres_props_xml()),
        (VIEW_PROPS_URI, ct::PML_VIEW_PROPS, rt::VIEW_PROPS, template::default_view_props_xml()),
        (THEME_URI, ct::OFC_THEME, rt::THEME, template::default_theme_xml()),
        (
            TABLE_STYLES_URI,
            ct::PML_TABLE_STYLES,
            rt::TABLE_STYLES,
            template::default_table_styles_xml(),
        ),
    ] {
        let uri = PackURI::new(uri)?;
        pres_part.relate_to(&uri, reltype);
        pkg.add_part(xml_part(&uri, content_type, xml));
    }

    pres_part.set_blob(
        pres.generate_presentation_xml_with_rels(
            &master_rel_id,
            notes_master_rel_id.as_deref(),
            &slide_rel_ids,
        )?
        .into_bytes(),
    );
    pkg.add_part(pres_part);
    pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT)?;

    // Document properties
    let core_uri = PackURI::new(CORE_PROPS_URI)?;
    let core_xml = core_properties_xml(pres.title(), pres.creator(), now)?;
    pkg.add_part(xml_part(&core_uri, ct::OPC_CORE_PROPERTIES, &core_xml));
    pkg.relate_to(&core_uri, rt::CORE_PROPERTIES)?;

    let app_uri = PackURI::new(APP_PROPS_URI)?;
    let notes_count = pres.slides.iter().filter(|s| s.has_notes()).count();
    let app_xml = app_properties_xml(pres.slide_count(), notes_count)?;
    pkg.add_part(xml_part(&app_uri, ct::OFC_EXTENDED_PROPERTIES, &app_xml));
    pkg.relate_to(&app_uri, rt::EXTENDED_PROPERTIES)?;

    tracing::debug!(
        slides = pres.slide_count(),
        notes = notes_count,
        images = image_count,
        "assembled presentation package"
    );

    Ok(pkg)
}

/// `docProps/core.xml` with W3CDTF timestamps.
fn core_properties_xml(
    title: Option<&str>,
    creator: Option<&str>,
    now: DateTime<Utc>,
) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

    if let Some(title) = title {
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    }
    if let Some(creator) = creator {
        write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(creator))?;
        write!(xml, "<cp:lastModifiedBy>{}</cp:lastModifiedBy>", escape_xml(creator))?;
    }
    xml.push_str("<cp:revision>1</cp:revision>");

    let timestamp = now.format("%Y-%m-%dT%H:%M:%SZ");
    write!(
        xml,
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
        timestamp
    )?;
    write!(
        xml,
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
        timestamp
    )?;

    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// `docProps/app.xml` with slide and notes counts.
fn app_properties_xml(slides: usize, notes: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str("<TotalTime>0</TotalTime>");
    write!(xml, "<Application>{}</Application>", env!("CARGO_PKG_NAME"))?;
    xml.push_str("<PresentationFormat>Custom</PresentationFormat>");
    write!(xml, "<Slides>{}</Slides>", slides)?;
    write!(xml, "<Notes>{}</Notes>", notes)?;
    xml.push_str("<AppVersion>16.0000</AppVersion>");
    xml.push_str("</Properties>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;
    use crate::common::xml::is_xml_char;
    use crate::ooxml::pptx::writer::SlideLayout;
    use chrono::TimeZone;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
    }

    fn assert_well_formed(name: &str, blob: &[u8]) {
        // quick-xml does not reject control characters, so check the Char production here
        let text = std::str::from_utf8(blob).unwrap();
        if let Some(c) = text.chars().find(|&c| !is_xml_char(c)) {
            panic!("{} contains U+{:04X}, which XML 1.0 forbids", name, c as u32);
        }

        let mut reader = Reader::from_reader(blob);
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("{} is not well-formed: {}", name, e),
            }
            buf.clear();
        }
    }

    fn sample() -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        pres.set_title("Deck & Notes");
        pres.add_slide(SlideLayout::Title);

        let slide = pres.add_slide(SlideLayout::Blank);
        slide.add_text_box("Heading <1>", 0, 0, 100, 100);
        slide
            .add_picture_from_bytes(PNG.to_vec(), Rect::new(0, 0, 10, 10), None)
            .unwrap();
        slide.set_notes("Speaker notes");

        let slide = pres.add_slide(SlideLayout::Blank);
        slide
            .add_picture_from_bytes(PNG.to_vec(), Rect::new(0, 0, 10, 10), None)
            .unwrap();
        pres
    }

    #[test]
    fn test_package_parts() {
        let pkg = build_package(&sample(), fixed_time()).unwrap();
        for name in [
            "/ppt/presentation.xml",
            "/ppt/slides/slide1.xml",
            "/ppt/slides/slide2.xml",
            "/ppt/slides/slide3.xml",
            "/ppt/notesSlides/notesSlide2.xml",
            "/ppt/notesMasters/notesMaster1.xml",
            "/ppt/slideLayouts/slideLayout1.xml",
            "/ppt/slideLayouts/slideLayout2.xml",
            "/ppt/media/image1.png",
            "/docProps/core.xml",
            "/docProps/app.xml",
        ] {
            assert!(pkg.part(name).is_some(), "missing {}", name);
        }
        assert!(pkg.part("/ppt/notesSlides/notesSlide1.xml").is_none());
        // identical bytes are stored once
        assert!(pkg.part("/ppt/media/image2.png").is_none());

        for part in pkg.iter_parts() {
            if part.partname().ext() == "xml" {
                assert_well_formed(part.partname().as_str(), part.blob());
            }
        }
    }

    #[test]
    fn test_control_characters_stay_well_formed() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide(SlideLayout::Blank);
        slide.add_text_box("Line\u{b}Tab\u{1}x", 0, 0, 100, 100);
        slide.set_notes("note\u{c}feed\nsecond\u{b}line");

        let pkg = build_package(&pres, fixed_time()).unwrap();
        for part in pkg.iter_parts() {
            if part.partname().ext() == "xml" {
                assert_well_formed(part.partname().as_str(), part.blob());
            }
        }

        let slide = std::str::from_utf8(pkg.part("/ppt/slides/slide1.xml").unwrap().blob()).unwrap();
        assert!(slide.contains("<a:t>Line</a:t></a:r><a:br>"));
        assert!(slide.contains("<a:t>Tab_x0001_x</a:t>"));

        let notes =
            std::str::from_utf8(pkg.part("/ppt/notesSlides/notesSlide1.xml").unwrap().blob()).unwrap();
        assert!(notes.contains("<a:t>note_x000C_feed</a:t>"));
        assert!(notes.contains("<a:t>second</a:t></a:r><a:br>"));
    }

    #[test]
    fn test_slide_relationships() {
        let pkg = build_package(&sample(), fixed_time()).unwrap();

        let slide1 = pkg.part("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(
            slide1.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );

        let slide2 = pkg.part("/ppt/slides/slide2.xml").unwrap();
        assert_eq!(
            slide2.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout2.xml"
        );
        assert_eq!(slide2.rels().get("rId2").unwrap().target_ref(), "../media/image1.png");
        assert_eq!(
            slide2.rels().get("rId3").unwrap().target_ref(),
            "../notesSlides/notesSlide2.xml"
        );
        let xml = std::str::from_utf8(slide2.blob()).unwrap();
        assert!(xml.contains(r#"r:embed="rId2""#));

        let slide3 = pkg.part("/ppt/slides/slide3.xml").unwrap();
        assert_eq!(slide3.rels().get("rId2").unwrap().target_ref(), "../media/image1.png");
    }

    #[test]
    fn test_presentation_xml_lists_slides() {
        let pkg = build_package(&sample(), fixed_time()).unwrap();
        let pres = pkg.part("/ppt/presentation.xml").unwrap();
        let xml = std::str::from_utf8(pres.blob()).unwrap();
        assert_eq!(xml.matches("<p:sldId ").count(), 3);
        assert!(xml.contains("<p:notesMasterIdLst>"));
        assert_eq!(pkg.rels().len(), 3);
    }

    #[test]
    fn test_no_notes_master_without_notes() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::Blank);
        let pkg = build_package(&pres, fixed_time()).unwrap();
        assert!(pkg.part(NOTES_MASTER_URI).is_none());
        assert!(pkg.part(NOTES_THEME_URI).is_none());
    }

    #[test]
    fn test_core_properties() {
        let xml = core_properties_xml(Some("Deck & Notes"), Some("deckhand"), fixed_time()).unwrap();
        assert!(xml.contains("<dc:title>Deck &amp; Notes</dc:title>"));
        assert!(xml.contains("<dc:creator>deckhand</dc:creator>"));
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2025-01-15T09:30:00Z</dcterms:created>"#
        ));
    }

    #[test]
    fn test_app_properties() {
        let xml = app_properties_xml(11, 10).unwrap();
        assert!(xml.contains("<Slides>11</Slides>"));
        assert!(xml.contains("<Notes>10</Notes>"));
    }

    #[test]
    fn test_write_presentation_is_zip() {
        let bytes = write_presentation(&sample()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
