/// Text content of shapes: paragraphs, runs and the `p:txBody` writer.
use crate::common::Result;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

use super::super::format::{RunFormat, TextAlign, VerticalAnchor};

/// One paragraph of text with a single run of formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub align: Option<TextAlign>,
    pub format: RunFormat,
    /// Outline level (0 is the top level)
    pub level: u8,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn format(mut self, format: RunFormat) -> Self {
        self.format = format;
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        match (self.align, self.level) {
            (None, 0) => {},
            (align, level) => {
                xml.push_str("<a:pPr");
                if let Some(align) = align {
                    write!(xml, r#" algn="{}""#, align.as_attr())?;
                }
                if level > 0 {
                    write!(xml, r#" lvl="{}""#, level)?;
                }
                xml.push_str("/>");
            },
        }

        if self.text.is_empty() {
            xml.push_str(r#"<a:endParaRPr lang="en-US" dirty="0"/>"#);
        } else {
            write_runs(xml, &self.text, &self.format)?;
        }

        xml.push_str("</a:p>");
        Ok(())
    }
}

/// Runs for one paragraph of text.
///
/// A vertical tab is a soft line break (`a:br`) inside the paragraph.
pub(crate) fn write_runs(xml: &mut String, text: &str, format: &RunFormat) -> Result<()> {
    for (i, segment) in text.split('\u{b}').enumerate() {
        if i > 0 {
            xml.push_str("<a:br>");
            write_run_properties(xml, format)?;
            xml.push_str("</a:br>");
        }
        if segment.is_empty() {
            continue;
        }
        xml.push_str("<a:r>");
        write_run_properties(xml, format)?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(segment))?;
        xml.push_str("</a:r>");
    }
    Ok(())
}

fn write_run_properties(xml: &mut String, format: &RunFormat) -> Result<()> {
    xml.push_str(r#"<a:rPr lang="en-US""#);
    if let Some(size) = format.size_pt {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    if format.bold {
        xml.push_str(r#" b="1""#);
    }
    xml.push_str(r#" dirty="0""#);

    if format.color.is_none() && format.font.is_none() {
        xml.push_str("/>");
        return Ok(());
    }

    xml.push('>');
    // CT_TextCharacterProperties: fill comes before latin
    if let Some(color) = format.color {
        write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?;
    }
    if let Some(ref font) = format.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
    }
    xml.push_str("</a:rPr>");
    Ok(())
}

/// Text content of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    pub anchor: VerticalAnchor,
    pub word_wrap: bool,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            paragraphs: Vec::new(),
            anchor: VerticalAnchor::Top,
            word_wrap: true,
        }
    }
}

impl TextFrame {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            ..Default::default()
        }
    }

    /// One paragraph per `\n`-separated line, all sharing `align` and `format`.
    pub fn from_lines(text: &str, align: Option<TextAlign>, format: &RunFormat) -> Self {
        let paragraphs = text
            .split('\n')
            .map(|line| Paragraph {
                text: line.to_string(),
                align,
                format: format.clone(),
                level: 0,
            })
            .collect();
        Self::new(paragraphs)
    }

    pub fn anchor(mut self, anchor: VerticalAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn word_wrap(mut self, word_wrap: bool) -> Self {
        self.word_wrap = word_wrap;
        self
    }

    /// Concatenated text, one line per paragraph.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write `p:txBody`.
    ///
    /// Placeholders pass `inherit_body = true` so that body properties come
    /// from the layout instead of being overridden here.
    pub(crate) fn write_tx_body(&self, xml: &mut String, inherit_body: bool) -> Result<()> {
        xml.push_str("<p:txBody>");
        if inherit_body {
            xml.push_str("<a:bodyPr/>");
        } else {
            write!(
                xml,
                r#"<a:bodyPr wrap="{}" rtlCol="0" anchor="{}"><a:noAutofit/></a:bodyPr>"#,
                if self.word_wrap { "square" } else { "none" },
                self.anchor.as_attr()
            )?;
        }
        xml.push_str("<a:lstStyle/>");

        if self.paragraphs.is_empty() {
            // txBody requires at least one paragraph
            xml.push_str("<a:p/>");
        }
        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml)?;
        }

        xml.push_str("</p:txBody>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RgbColor;

    #[test]
    fn test_from_lines_splits_paragraphs() {
        let frame = TextFrame::from_lines(
            "Finance\n(SAP FI/CO)",
            Some(TextAlign::Center),
            &RunFormat::new().size(11.0),
        );
        assert_eq!(frame.paragraphs.len(), 2);
        assert_eq!(frame.paragraphs[1].text, "(SAP FI/CO)");
        assert_eq!(frame.text(), "Finance\n(SAP FI/CO)");
    }

    #[test]
    fn test_run_properties() {
        let para = Paragraph::new("ROI & <savings>")
            .align(TextAlign::Center)
            .format(
                RunFormat::new()
                    .size(10.5)
                    .bold(true)
                    .font("Arial")
                    .color(RgbColor(0, 100, 0)),
            );
        let mut xml = String::new();
        para.write_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<a:p><a:pPr algn="ctr"/><a:r>"#,
                r#"<a:rPr lang="en-US" sz="1050" b="1" dirty="0">"#,
                r#"<a:solidFill><a:srgbClr val="006400"/></a:solidFill>"#,
                r#"<a:latin typeface="Arial"/></a:rPr>"#,
                r#"<a:t>ROI &amp; &lt;savings&gt;</a:t></a:r></a:p>"#
            )
        );
    }

    #[test]
    fn test_empty_paragraph() {
        let mut xml = String::new();
        Paragraph::new("").write_xml(&mut xml).unwrap();
        assert_eq!(xml, r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
    }

    #[test]
    fn test_body_properties() {
        let frame = TextFrame::new(vec![Paragraph::new("x")]).anchor(VerticalAnchor::Middle);
        let mut xml = String::new();
        frame.write_tx_body(&mut xml, false).unwrap();
        assert!(xml.contains(r#"wrap="square""#));
        assert!(xml.contains(r#"anchor="ctr""#));

        let mut inherited = String::new();
        frame.write_tx_body(&mut inherited, true).unwrap();
        assert!(inherited.starts_with("<p:txBody><a:bodyPr/>"));
    }

    #[test]
    fn test_vertical_tab_becomes_line_break() {
        let para = Paragraph::new("Line\u{b}Tab\u{1}x").format(RunFormat::new().size(9.0));
        let mut xml = String::new();
        para.write_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<a:p><a:r><a:rPr lang="en-US" sz="900" dirty="0"/><a:t>Line</a:t></a:r>"#,
                r#"<a:br><a:rPr lang="en-US" sz="900" dirty="0"/></a:br>"#,
                r#"<a:r><a:rPr lang="en-US" sz="900" dirty="0"/><a:t>Tab_x0001_x</a:t></a:r></a:p>"#
            )
        );
    }
}
