//! PPTX (Office Open XML) writer backend for presentation decks.
//!
//! Serializes the `deck-core` document model into a complete .pptx package:
//! one XML part per slide plus the fixed package scaffolding (slide master,
//! blank layout, theme, document properties) and the relationship wiring
//! that ties them together. The package is a ZIP archive with one deflated
//! entry per part.

pub mod package;

mod parts;
mod slide;
mod template;

pub use package::PptxWriter;
