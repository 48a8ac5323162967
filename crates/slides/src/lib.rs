//! Slide content for the Vibe Survival game project deck.
//!
//! Ten fixed slide procedures composed from a small palette and a set of
//! layout helpers; [`build`] assembles them into a `deck_core::Presentation`
//! in presentation order.

pub mod compose;
pub mod palette;
pub mod slides;

pub use slides::build;

/// File name of the generated deck.
pub const DECK_FILE_NAME: &str = "Vibe_Survival_Game_Presentation.pptx";
