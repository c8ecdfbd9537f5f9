//! House style for generated decks.
use crate::common::{Error, Result, RgbColor};
use serde::Deserialize;
use std::path::Path;

/// Canvas size, fonts, line styles and metadata applied by [`DeckBuilder`].
///
/// Every field has a default, so a YAML file only needs the keys it changes:
///
/// ```yaml
/// slide_width_in: 13.333
/// slide_height_in: 7.5
/// font: Calibri
/// connector_color: "#336699"
/// ```
///
/// # Examples
///
/// ```rust
/// use deckhand::{DeckConfig, RgbColor};
///
/// let config = DeckConfig::new()
///     .with_font("Calibri")
///     .with_connector(RgbColor(0, 0, 0), 1.5);
/// assert_eq!(config.font, "Calibri");
/// assert_eq!(config.slide_width_in, 16.0);
/// ```
///
/// [`DeckBuilder`]: crate::DeckBuilder
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    /// Canvas width in inches
    pub slide_width_in: f64,
    /// Canvas height in inches
    pub slide_height_in: f64,
    /// Typeface for shape-box text
    pub font: String,
    /// Border colour of shape boxes
    pub shape_outline: RgbColor,
    /// Border width of shape boxes, in points
    pub shape_outline_pt: f64,
    /// Line colour of connectors
    pub connector_color: RgbColor,
    /// Line width of connectors, in points
    pub connector_pt: f64,
    /// Background of note boxes
    pub note_fill: RgbColor,
    /// Border colour of note boxes
    pub note_outline: RgbColor,
    /// Border width of note boxes, in points
    pub note_outline_pt: f64,
    /// Document title written to the core properties
    pub title: Option<String>,
    /// Document author written to the core properties
    pub creator: Option<String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            slide_width_in: 16.0,
            slide_height_in: 9.0,
            font: "Arial".to_string(),
            shape_outline: RgbColor(100, 100, 100),
            shape_outline_pt: 1.0,
            connector_color: RgbColor(100, 100, 100),
            connector_pt: 2.0,
            note_fill: RgbColor(255, 255, 220),
            note_outline: RgbColor(200, 200, 100),
            note_outline_pt: 1.0,
            title: None,
            creator: None,
        }
    }
}

impl DeckConfig {
    /// Create a new `DeckConfig` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Set the canvas size in inches.
    #[inline]
    pub fn with_canvas(mut self, width_in: f64, height_in: f64) -> Self {
        self.slide_width_in = width_in;
        self.slide_height_in = height_in;
        self
    }

    #[inline]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Set the border used by shape boxes.
    #[inline]
    pub fn with_shape_outline(mut self, color: RgbColor, width_pt: f64) -> Self {
        self.shape_outline = color;
        self.shape_outline_pt = width_pt;
        self
    }

    /// Set the line used by connectors.
    #[inline]
    pub fn with_connector(mut self, color: RgbColor, width_pt: f64) -> Self {
        self.connector_color = color;
        self.connector_pt = width_pt;
        self
    }

    /// Set the fill and border used by note boxes.
    #[inline]
    pub fn with_note_style(mut self, fill: RgbColor, outline: RgbColor, outline_pt: f64) -> Self {
        self.note_fill = fill;
        self.note_outline = outline;
        self.note_outline_pt = outline_pt;
        self
    }

    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[inline]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_house_style() {
        let config = DeckConfig::default();
        assert_eq!(config.slide_width_in, 16.0);
        assert_eq!(config.slide_height_in, 9.0);
        assert_eq!(config.font, "Arial");
        assert_eq!(config.shape_outline, RgbColor(100, 100, 100));
        assert_eq!(config.connector_pt, 2.0);
        assert_eq!(config.note_fill, RgbColor(255, 255, 220));
        assert_eq!(config.note_outline, RgbColor(200, 200, 100));
    }

    #[test]
    fn test_yaml_overrides() {
        let config = DeckConfig::from_yaml_str(
            "slide_width_in: 13.333\nslide_height_in: 7.5\nfont: Calibri\nnote_fill: \"#FFFFFF\"\n",
        )
        .unwrap();
        assert_eq!(config.slide_width_in, 13.333);
        assert_eq!(config.slide_height_in, 7.5);
        assert_eq!(config.font, "Calibri");
        assert_eq!(config.note_fill, RgbColor::WHITE);
        // untouched keys keep defaults
        assert_eq!(config.connector_pt, 2.0);
    }

    #[test]
    fn test_yaml_errors() {
        assert!(matches!(
            DeckConfig::from_yaml_str("font: [unterminated"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            DeckConfig::from_yaml_str("connector_color: not-a-colour\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            DeckConfig::from_yaml_str("slide_depth_in: 3\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_yaml_file_missing() {
        let err = DeckConfig::from_yaml_file("/nonexistent/deck.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
