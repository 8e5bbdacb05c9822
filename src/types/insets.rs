//! Edge insets of opaque content.

use std::fmt;

/// Pixel margins between each image edge and the first row or column
/// holding an opaque pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Insets {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The inverted box reported when no pixel reaches the threshold.
    pub const fn nothing_found(width: u32, height: u32) -> Self {
        Self::new(width, height, 0, 0)
    }

    /// True when these insets are the "nothing found" marker for a
    /// `width` x `height` image.
    ///
    /// A lone opaque pixel in the bottom-right corner measures the same, so
    /// use [`InsetDetector::has_opaque`](crate::measure::InsetDetector::has_opaque)
    /// when the two must be told apart.
    pub fn is_nothing_found(&self, width: u32, height: u32) -> bool {
        width > 0 && height > 0 && *self == Self::nothing_found(width, height)
    }
}

impl fmt::Display for Insets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left {}, top {}, right {}, bottom {}",
            self.left, self.top, self.right, self.bottom
        )
    }
}
