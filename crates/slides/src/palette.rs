//! Fixed color palette for the deck.
//!
//! Semantic names mapped to literal RGB values; nothing here has behavior.

use deck_core::Color;

/// Near-black page background for the title and closing slides.
pub const BG_DARK: Color = Color::rgb(0x11, 0x11, 0x11);

/// Dark blue-violet page background for the content slides.
pub const BG_SLIDE: Color = Color::rgb(0x1A, 0x1A, 0x2E);

/// Card background.
pub const BG_CARD: Color = Color::rgb(0x16, 0x21, 0x3E);

pub const ACCENT_GREEN: Color = Color::rgb(0x00, 0xFF, 0x00);
pub const ACCENT_RED: Color = Color::rgb(0xFF, 0x44, 0x44);
pub const ACCENT_YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);
pub const ACCENT_BLUE: Color = Color::rgb(0x00, 0xD4, 0xFF);
pub const ACCENT_PURPLE: Color = Color::rgb(0xBB, 0x86, 0xFC);

pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const GRAY: Color = Color::rgb(0xAA, 0xAA, 0xAA);
pub const DARK_GRAY: Color = Color::rgb(0x66, 0x66, 0x66);
