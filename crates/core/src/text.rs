//! Text content model: a frame holds paragraphs, paragraphs hold runs.
//!
//! Mirrors the nesting of the underlying document format, where a shape's
//! text body is a list of paragraphs and each paragraph is a list of
//! uniformly formatted runs.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Character formatting for a run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Size in points.
    pub size: f32,

    pub color: Color,

    pub bold: bool,

    /// Explicit font family; `None` inherits the theme font.
    pub family: Option<String>,
}

impl Font {
    /// Create a regular-weight font with no explicit family.
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            bold: false,
            family: None,
        }
    }

    /// Builder method: make the font bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder method: set an explicit font family.
    pub fn family(mut self, name: impl Into<String>) -> Self {
        self.family = Some(name.into());
        self
    }
}

/// A run of uniformly formatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub font: Font,
}

impl Run {
    /// Create a run with the given text and formatting.
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

/// One paragraph: ordered runs plus paragraph-level formatting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,

    pub alignment: Align,

    /// Space after the paragraph, in points.
    pub space_after: Option<f32>,
}

impl Paragraph {
    /// Create an empty left-aligned paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the alignment.
    pub fn aligned(mut self, alignment: Align) -> Self {
        self.alignment = alignment;
        self
    }

    /// Builder method: set the space after the paragraph, in points.
    pub fn spaced_after(mut self, points: f32) -> Self {
        self.space_after = Some(points);
        self
    }

    /// Builder method: append a run.
    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Append a run in place.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Text content of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFrame {
    /// Whether text wraps at the shape boundary.
    pub word_wrap: bool,

    /// Paragraphs in display order.
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Create an empty text frame with word wrap enabled.
    pub fn new() -> Self {
        Self {
            word_wrap: true,
            paragraphs: Vec::new(),
        }
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }
}

impl Default for TextFrame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    #[test]
    fn test_font_builders() {
        let font = Font::new(18.0, WHITE).bold().family("Consolas");
        assert_eq!(font.size, 18.0);
        assert!(font.bold);
        assert_eq!(font.family.as_deref(), Some("Consolas"));
    }

    #[test]
    fn test_default_font_inherits_family() {
        let font = Font::new(11.0, WHITE);
        assert!(!font.bold);
        assert!(font.family.is_none());
    }

    #[test]
    fn test_paragraph_text_concatenates_runs() {
        let p = Paragraph::new()
            .with_run(Run::new("▸ ", Font::new(16.0, WHITE)))
            .with_run(Run::new("First item", Font::new(16.0, WHITE)));
        assert_eq!(p.text(), "▸ First item");
    }

    #[test]
    fn test_text_frame_preserves_paragraph_order() {
        let mut tf = TextFrame::new();
        for label in ["one", "two", "three"] {
            tf.add_paragraph(Paragraph::new().with_run(Run::new(label, Font::new(12.0, WHITE))));
        }
        assert_eq!(tf.paragraph_count(), 3);
        assert_eq!(tf.paragraphs[0].text(), "one");
        assert_eq!(tf.paragraphs[2].text(), "three");
    }
}
