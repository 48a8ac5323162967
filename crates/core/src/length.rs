//! Length units for slide geometry.
//!
//! All geometry is expressed in EMU (English Metric Units); 914,400 EMU
//! equal one inch. Font sizes and paragraph spacing stay in points and are
//! converted by the format backend when the document is written.

use serde::{Deserialize, Serialize};

/// EMU per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// EMU per point (1/72 inch).
pub const EMU_PER_POINT: f64 = 12_700.0;

/// A length in English Metric Units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Emu(pub i64);

impl Emu {
    pub const ZERO: Emu = Emu(0);

    /// Convert a length in inches to EMU, rounding to the nearest unit.
    pub fn from_inches(inches: f64) -> Self {
        Emu((inches * EMU_PER_INCH).round() as i64)
    }

    /// Convert a length in points to EMU, rounding to the nearest unit.
    pub fn from_points(points: f64) -> Self {
        Emu((points * EMU_PER_POINT).round() as i64)
    }

    /// Raw EMU value.
    pub fn raw(self) -> i64 {
        self.0
    }
}

/// A positioned box on a slide: left/top corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Frame {
    /// Create a frame from EMU lengths.
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a frame from lengths given in inches.
    pub fn from_inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left: Emu::from_inches(left),
            top: Emu::from_inches(top),
            width: Emu::from_inches(width),
            height: Emu::from_inches(height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(Emu::from_inches(1.0), Emu(914_400));
        assert_eq!(Emu::from_inches(7.5), Emu(6_858_000));
        assert_eq!(Emu::from_inches(0.0), Emu::ZERO);
    }

    #[test]
    fn test_fractional_inches_round() {
        // 13.333 * 914400 = 12,192,175.2
        assert_eq!(Emu::from_inches(13.333), Emu(12_192_175));
        assert_eq!(Emu::from_inches(0.06), Emu(54_864));
    }

    #[test]
    fn test_points_to_emu() {
        assert_eq!(Emu::from_points(72.0), Emu(914_400));
        assert_eq!(Emu::from_points(6.0), Emu(76_200));
    }

    #[test]
    fn test_frame_from_inches() {
        let frame = Frame::from_inches(1.0, 2.0, 3.0, 4.0);
        assert_eq!(frame.left, Emu(914_400));
        assert_eq!(frame.top, Emu(1_828_800));
        assert_eq!(frame.width, Emu(2_743_200));
        assert_eq!(frame.height, Emu(3_657_600));
    }
}
