//! Positioned visual primitives and their fills.

use crate::color::Color;
use crate::error::{Error, Result};
use crate::length::Frame;
use crate::text::TextFrame;
use serde::{Deserialize, Serialize};

/// Preset geometry of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geometry {
    Rectangle,
    RoundedRectangle,
    /// A borderless box that only carries text.
    TextBox,
}

impl Geometry {
    /// Human-readable name, used for shape names and error context.
    pub fn label(self) -> &'static str {
        match self {
            Geometry::Rectangle => "Rectangle",
            Geometry::RoundedRectangle => "Rounded Rectangle",
            Geometry::TextBox => "TextBox",
        }
    }
}

/// A solid fill, optionally carrying an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub color: Color,

    /// Transparency in thousandths of a percent (100,000 = fully opaque).
    /// `None` means fully opaque with no alpha element written at all.
    pub alpha: Option<u32>,
}

impl Fill {
    /// An opaque solid fill.
    pub fn solid(color: Color) -> Self {
        Self { color, alpha: None }
    }
}

/// A positioned, sized visual primitive on a slide.
///
/// Shapes are created with a geometry and a frame, then styled through the
/// builder methods. No validation is performed on the frame: negative or
/// off-canvas geometry is accepted and simply renders degenerately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub geometry: Geometry,

    pub frame: Frame,

    /// Solid fill; `None` for unfilled shapes (text boxes).
    pub fill: Option<Fill>,

    /// When set, the shape writes an empty effect list to suppress the
    /// outer shadow inherited from the theme.
    pub suppress_shadow: bool,

    pub text: Option<TextFrame>,
}

impl Shape {
    /// Create an unfilled, shadow-inheriting shape with no text.
    pub fn new(geometry: Geometry, frame: Frame) -> Self {
        Self {
            geometry,
            frame,
            fill: None,
            suppress_shadow: false,
            text: None,
        }
    }

    /// Builder method: apply an opaque solid fill.
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(Fill::solid(color));
        self
    }

    /// Builder method: suppress the inherited outer shadow.
    pub fn without_shadow(mut self) -> Self {
        self.suppress_shadow = true;
        self
    }

    /// Apply an alpha channel on top of the existing solid fill.
    ///
    /// `percent` is an opacity percentage (0–100), stored in the document
    /// format's thousandths-of-a-percent convention (value × 1000). A solid
    /// fill must already be present; a shape without one is rejected rather
    /// than silently left opaque.
    pub fn set_fill_alpha(&mut self, percent: f64) -> Result<()> {
        match self.fill.as_mut() {
            Some(fill) => {
                fill.alpha = Some((percent * 1000.0).round() as u32);
                Ok(())
            }
            None => Err(Error::MissingSolidFill(self.geometry.label().to_string())),
        }
    }

    /// The shape's text frame, created on first access.
    pub fn text_frame(&mut self) -> &mut TextFrame {
        self.text.get_or_insert_with(TextFrame::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Frame;

    fn frame() -> Frame {
        Frame::from_inches(1.0, 1.0, 2.0, 2.0)
    }

    #[test]
    fn test_fill_defaults_to_opaque() {
        let shape = Shape::new(Geometry::RoundedRectangle, frame()).with_fill(Color::rgb(0, 0, 0));
        assert_eq!(shape.fill.unwrap().alpha, None);
    }

    #[test]
    fn test_alpha_scales_by_thousand() {
        let mut shape =
            Shape::new(Geometry::RoundedRectangle, frame()).with_fill(Color::rgb(0x16, 0x21, 0x3E));
        shape.set_fill_alpha(50.0).unwrap();
        assert_eq!(shape.fill.unwrap().alpha, Some(50_000));

        shape.set_fill_alpha(100.0).unwrap();
        assert_eq!(shape.fill.unwrap().alpha, Some(100_000));
    }

    #[test]
    fn test_alpha_without_fill_is_an_error() {
        let mut shape = Shape::new(Geometry::TextBox, frame());
        let err = shape.set_fill_alpha(50.0).unwrap_err();
        assert!(matches!(err, Error::MissingSolidFill(_)));
    }

    #[test]
    fn test_text_frame_created_on_first_access() {
        let mut shape = Shape::new(Geometry::TextBox, frame());
        assert!(shape.text.is_none());
        shape.text_frame();
        assert!(shape.text.is_some());
    }
}
