//! Presentation and slide containers.

use crate::color::Color;
use crate::length::Emu;
use crate::shape::Shape;
use serde::{Deserialize, Serialize};

/// One page of the deck: a background fill plus an ordered shape list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Opaque solid background; `None` inherits the master background.
    pub background: Option<Color>,

    /// Shapes in z-order (first added is bottom-most).
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Create an empty slide with the inherited background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide background to an opaque solid color.
    pub fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    /// Add a shape, returning it for further styling.
    pub fn add_shape(&mut self, shape: Shape) -> &mut Shape {
        self.shapes.push(shape);
        self.shapes.last_mut().unwrap()
    }

    /// Number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}

/// A presentation document: canvas size plus ordered slides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presentation {
    /// Canvas width in EMU, shared by all slides.
    pub width: Emu,

    /// Canvas height in EMU, shared by all slides.
    pub height: Emu,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create an empty presentation with the given canvas size.
    pub fn new(width: Emu, height: Emu) -> Self {
        Self {
            width,
            height,
            slides: Vec::new(),
        }
    }

    /// Create an empty presentation with a 16:9 widescreen canvas
    /// (13.333 by 7.5 inches).
    pub fn widescreen() -> Self {
        Self::new(Emu::from_inches(13.333), Emu::from_inches(7.5))
    }

    /// Append a blank slide and return it for population.
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::new());
        self.slides.last_mut().unwrap()
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Frame;
    use crate::shape::{Geometry, Shape};

    #[test]
    fn test_widescreen_canvas() {
        let prs = Presentation::widescreen();
        assert_eq!(prs.width, Emu::from_inches(13.333));
        assert_eq!(prs.height, Emu::from_inches(7.5));
        assert_eq!(prs.slide_count(), 0);
    }

    #[test]
    fn test_slides_keep_insertion_order() {
        let mut prs = Presentation::widescreen();
        prs.add_slide().set_background(Color::rgb(0x11, 0x11, 0x11));
        prs.add_slide();
        assert_eq!(prs.slide_count(), 2);
        assert!(prs.slides[0].background.is_some());
        assert!(prs.slides[1].background.is_none());
    }

    #[test]
    fn test_add_shape_returns_the_stored_shape() {
        let mut slide = Slide::new();
        let shape = Shape::new(Geometry::Rectangle, Frame::from_inches(0.0, 0.0, 1.0, 1.0))
            .with_fill(Color::rgb(0, 255, 0));
        let stored = slide.add_shape(shape);
        stored.set_fill_alpha(40.0).unwrap();
        assert_eq!(slide.shape_count(), 1);
        assert_eq!(slide.shapes[0].fill.unwrap().alpha, Some(40_000));
    }
}
