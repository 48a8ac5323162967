//! Layout helpers that place styled shapes on a slide.
//!
//! Each helper is a stateless wrapper: it builds a shape from its
//! arguments, pushes it onto the slide, and returns it for optional
//! further styling. Arguments are not validated; degenerate geometry is
//! passed through as-is.

use deck_core::{Align, Color, Font, Frame, Geometry, Paragraph, Result, Run, Shape, Slide};

use crate::palette::WHITE;

/// Glyph prefixed to every bulleted item.
pub const BULLET_GLYPH: &str = "▸ ";

/// Text styling for [`add_text`].
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub bold: bool,
    pub alignment: Align,
    pub family: &'static str,
}

impl TextStyle {
    /// Left-aligned regular Arial at the given size and color.
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            bold: false,
            alignment: Align::Left,
            family: "Arial",
        }
    }

    /// Builder method: bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder method: center alignment.
    pub fn centered(mut self) -> Self {
        self.alignment = Align::Center;
        self
    }

    /// Builder method: explicit font family.
    pub fn family(mut self, family: &'static str) -> Self {
        self.family = family;
        self
    }

    fn font(&self) -> Font {
        let font = Font::new(self.size, self.color).family(self.family);
        if self.bold {
            font.bold()
        } else {
            font
        }
    }
}

/// Bullet list styling for [`add_bullets`].
#[derive(Debug, Clone)]
pub struct BulletStyle {
    pub size: f32,
    pub color: Color,
    pub bullet_color: Color,
}

impl BulletStyle {
    /// White Arial body text at the given size, with the glyph drawn in
    /// the given accent color.
    pub fn new(size: f32, bullet_color: Color) -> Self {
        Self {
            size,
            color: WHITE,
            bullet_color,
        }
    }
}

/// Set the slide background to an opaque solid color.
pub fn set_background(slide: &mut Slide, color: Color) {
    slide.set_background(color);
}

/// Add a rounded card with a solid fill, no outline, and no shadow.
pub fn add_panel(slide: &mut Slide, frame: Frame, color: Color) -> &mut Shape {
    slide.add_shape(
        Shape::new(Geometry::RoundedRectangle, frame)
            .with_fill(color)
            .without_shadow(),
    )
}

/// Add a rounded card with a translucent solid fill.
///
/// `alpha` is an opacity percentage (0–100). The solid fill is applied
/// before the alpha, so the alpha always has a fill to attach to.
pub fn add_panel_with_alpha(
    slide: &mut Slide,
    frame: Frame,
    color: Color,
    alpha: f64,
) -> Result<&mut Shape> {
    let shape = add_panel(slide, frame, color);
    shape.set_fill_alpha(alpha)?;
    Ok(shape)
}

/// Add a word-wrapped text box.
///
/// Newlines split the content into one paragraph per line, all sharing the
/// same style.
pub fn add_text<'a>(
    slide: &'a mut Slide,
    frame: Frame,
    text: &str,
    style: TextStyle,
) -> &'a mut Shape {
    let shape = slide.add_shape(Shape::new(Geometry::TextBox, frame));
    let font = style.font();
    let text_frame = shape.text_frame();
    for line in text.split('\n') {
        text_frame.add_paragraph(
            Paragraph::new()
                .aligned(style.alignment)
                .with_run(Run::new(line, font.clone())),
        );
    }
    shape
}

/// Add a bulleted list: one paragraph per item, each a bold glyph run in
/// the accent color followed by the item text, with 6pt spacing between
/// items. Input order is preserved.
pub fn add_bullets<'a>(
    slide: &'a mut Slide,
    frame: Frame,
    items: &[&str],
    style: BulletStyle,
) -> &'a mut Shape {
    let shape = slide.add_shape(Shape::new(Geometry::TextBox, frame));
    let text_frame = shape.text_frame();
    for item in items {
        text_frame.add_paragraph(
            Paragraph::new()
                .spaced_after(6.0)
                .with_run(Run::new(
                    BULLET_GLYPH,
                    Font::new(style.size, style.bullet_color).bold(),
                ))
                .with_run(Run::new(
                    *item,
                    Font::new(style.size, style.color).family("Arial"),
                )),
        );
    }
    shape
}

/// Add a plain rectangle with a solid fill and no outline.
pub fn add_rect(slide: &mut Slide, frame: Frame, color: Color) -> &mut Shape {
    slide.add_shape(Shape::new(Geometry::Rectangle, frame).with_fill(color))
}

/// Add a rounded square badge with a centered, bold, white label.
///
/// The label does not wrap; the badge is sized by `size` on both axes.
pub fn add_badge<'a>(
    slide: &'a mut Slide,
    left: f64,
    top: f64,
    size: f64,
    color: Color,
    label: &str,
    font_size: f32,
) -> &'a mut Shape {
    let shape = slide.add_shape(
        Shape::new(
            Geometry::RoundedRectangle,
            Frame::from_inches(left, top, size, size),
        )
        .with_fill(color),
    );
    let text_frame = shape.text_frame();
    text_frame.word_wrap = false;
    text_frame.add_paragraph(
        Paragraph::new()
            .aligned(Align::Center)
            .with_run(Run::new(label, Font::new(font_size, WHITE).bold())),
    );
    shape
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ACCENT_GREEN, BG_CARD};

    fn frame() -> Frame {
        Frame::from_inches(1.0, 1.0, 4.0, 3.0)
    }

    #[test]
    fn test_panel_is_rounded_borderless_and_shadowless() {
        let mut slide = Slide::new();
        let shape = add_panel(&mut slide, frame(), BG_CARD);
        assert_eq!(shape.geometry, Geometry::RoundedRectangle);
        assert!(shape.suppress_shadow);
        assert_eq!(shape.fill.unwrap().color, BG_CARD);
        assert_eq!(shape.fill.unwrap().alpha, None);
    }

    #[test]
    fn test_panel_with_alpha_scales_to_per_mille() {
        let mut slide = Slide::new();
        let shape = add_panel_with_alpha(&mut slide, frame(), BG_CARD, 75.0).unwrap();
        assert_eq!(shape.fill.unwrap().alpha, Some(75_000));
    }

    #[test]
    fn test_text_splits_lines_into_paragraphs() {
        let mut slide = Slide::new();
        let shape = add_text(
            &mut slide,
            frame(),
            "first line\nsecond line",
            TextStyle::new(13.0, WHITE).family("Consolas"),
        );
        let text = shape.text.as_ref().unwrap();
        assert_eq!(text.paragraph_count(), 2);
        assert_eq!(text.paragraphs[0].text(), "first line");
        assert_eq!(text.paragraphs[1].text(), "second line");
        assert_eq!(
            text.paragraphs[0].runs[0].font.family.as_deref(),
            Some("Consolas")
        );
    }

    #[test]
    fn test_bullets_one_paragraph_per_item_in_order() {
        let mut slide = Slide::new();
        let items = ["alpha", "beta", "gamma"];
        let shape = add_bullets(
            &mut slide,
            frame(),
            &items,
            BulletStyle::new(15.0, ACCENT_GREEN),
        );
        let text = shape.text.as_ref().unwrap();
        assert_eq!(text.paragraph_count(), items.len());
        for (paragraph, item) in text.paragraphs.iter().zip(items) {
            assert_eq!(paragraph.runs.len(), 2);
            assert_eq!(paragraph.runs[0].text, BULLET_GLYPH);
            assert!(paragraph.runs[0].font.bold);
            assert_eq!(paragraph.runs[0].font.color, ACCENT_GREEN);
            assert_eq!(paragraph.runs[1].text, item);
            assert_eq!(paragraph.space_after, Some(6.0));
        }
    }

    #[test]
    fn test_bullets_accept_empty_item_list() {
        let mut slide = Slide::new();
        let shape = add_bullets(&mut slide, frame(), &[], BulletStyle::new(14.0, ACCENT_GREEN));
        assert_eq!(shape.text.as_ref().unwrap().paragraph_count(), 0);
    }

    #[test]
    fn test_badge_is_square_centered_and_unwrapped() {
        let mut slide = Slide::new();
        let shape = add_badge(&mut slide, 1.0, 1.0, 0.5, ACCENT_GREEN, "GO", 16.0);
        assert_eq!(shape.frame.width, shape.frame.height);
        let text = shape.text.as_ref().unwrap();
        assert!(!text.word_wrap);
        assert_eq!(text.paragraphs[0].alignment, Align::Center);
        assert_eq!(text.paragraphs[0].runs[0].font.color, WHITE);
        assert!(text.paragraphs[0].runs[0].font.bold);
    }

    #[test]
    fn test_negative_geometry_is_accepted() {
        let mut slide = Slide::new();
        let shape = add_rect(
            &mut slide,
            Frame::from_inches(-1.0, -1.0, -2.0, 0.0),
            ACCENT_GREEN,
        );
        assert!(shape.frame.width.raw() < 0);
    }
}
