//! Opaque-content inset detection.

use crate::types::{Insets, PixelBuffer};

/// Alpha at or above which a pixel counts as opaque.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 16;

/// Finds the tightest box around every pixel whose alpha reaches a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsetDetector {
    alpha_threshold: u8,
}

impl Default for InsetDetector {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA_THRESHOLD)
    }
}

impl InsetDetector {
    pub fn new(alpha_threshold: u8) -> Self {
        Self { alpha_threshold }
    }

    pub fn alpha_threshold(&self) -> u8 {
        self.alpha_threshold
    }

    /// Compute the insets of `buffer`.
    ///
    /// - An empty buffer yields zero insets.
    /// - A buffer with no opaque pixel yields [`Insets::nothing_found`].
    /// - Otherwise each edge is scanned inward on its own until a row or
    ///   column holds an opaque pixel.
    pub fn detect(&self, buffer: &PixelBuffer) -> Insets {
        if buffer.is_empty() {
            return Insets::ZERO;
        }

        let (width, height) = (buffer.width(), buffer.height());

        if !self.has_opaque(buffer) {
            return Insets::nothing_found(width, height);
        }

        let column_hit = |x: u32| (0..height).any(|y| self.is_opaque(buffer.alpha(x, y)));
        let row_hit = |y: u32| (0..width).any(|x| self.is_opaque(buffer.alpha(x, y)));

        let left = (0..width).take_while(|&x| !column_hit(x)).count() as u32;
        let right = (0..width).rev().take_while(|&x| !column_hit(x)).count() as u32;
        let top = (0..height).take_while(|&y| !row_hit(y)).count() as u32;
        let bottom = (0..height).rev().take_while(|&y| !row_hit(y)).count() as u32;

        Insets::new(left, top, right, bottom)
    }

    /// True when at least one pixel reaches the threshold.
    pub fn has_opaque(&self, buffer: &PixelBuffer) -> bool {
        buffer.pixels().iter().any(|p| self.is_opaque(p.a))
    }

    fn is_opaque(&self, alpha: u8) -> bool {
        alpha >= self.alpha_threshold
    }
}

/// Compute insets with an explicit alpha threshold.
pub fn compute_insets(buffer: &PixelBuffer, alpha_threshold: u8) -> Insets {
    InsetDetector::new(alpha_threshold).detect(buffer)
}
