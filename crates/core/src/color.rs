//! RGB colors for fills and text.

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
///
/// Transparency is not part of the color itself; it is applied per fill,
/// after the fact, via [`crate::Shape::set_fill_alpha`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Create a color from its RGB components.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Uppercase hex form used by DrawingML attributes (e.g. `"1A1A2E"`).
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}
