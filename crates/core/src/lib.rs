//! Core document model for building presentation decks.
//!
//! A [`Presentation`] owns ordered [`Slide`]s; a slide owns ordered
//! [`Shape`]s; a shape optionally carries a [`TextFrame`] of paragraphs and
//! runs. The model is format-agnostic; serialization to PPTX lives in the
//! `deck-pptx` crate.

pub mod color;
pub mod document;
pub mod error;
pub mod length;
pub mod shape;
pub mod text;

pub use color::Color;
pub use document::{Presentation, Slide};
pub use error::{Error, Result};
pub use length::{Emu, Frame};
pub use shape::{Fill, Geometry, Shape};
pub use text::{Align, Font, Paragraph, Run, TextFrame};
