//! Grid snapping of measured insets.
//!
//! A reference page's insets are pulled onto a fixed pixel grid and the
//! resulting box is expressed in grid cells, so one descriptor addresses
//! the same region of a sheet at every rendering scale.

use crate::catalog::IconSetPage;
use crate::error::{IconError, Result};
use crate::types::Insets;

/// Grid size reference pages are authored on.
pub const DEFAULT_DIVISOR: u32 = 6;

/// Offsets tried, in order, when pulling an inset onto the grid.
///
/// Shrinking by one or two wins over growing.
const SNAP_OFFSETS: [i64; 7] = [0, -1, -2, 1, 2, 3, 4];

/// A region descriptor in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SixBox {
    pub image_width: u32,
    pub image_height: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Pull `inset` onto a multiple of `divisor`.
///
/// Returns the inset unchanged when no offset lands on the grid, which
/// only happens for divisors larger than the offset window.
pub fn snap_inset(inset: u32, divisor: u32) -> u32 {
    let divisor = i64::from(divisor.max(1));
    SNAP_OFFSETS
        .iter()
        .map(|offset| i64::from(inset) + offset)
        .find(|candidate| *candidate >= 0 && candidate % divisor == 0)
        .map_or(inset, |candidate| candidate as u32)
}

/// Snap all four insets independently.
pub fn snap_insets(insets: Insets, divisor: u32) -> Insets {
    Insets::new(
        snap_inset(insets.left, divisor),
        snap_inset(insets.top, divisor),
        snap_inset(insets.right, divisor),
        snap_inset(insets.bottom, divisor),
    )
}

/// Quantizes a page's insets into a [`SixBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSnapper {
    divisor: u32,
}

impl Default for GridSnapper {
    fn default() -> Self {
        Self {
            divisor: DEFAULT_DIVISOR,
        }
    }
}

impl GridSnapper {
    /// Create a snapper for `divisor`. Returns `None` for zero.
    pub fn new(divisor: u32) -> Option<Self> {
        (divisor > 0).then_some(Self { divisor })
    }

    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    /// Slice a `width` x `height` image with raw `insets`.
    ///
    /// `page` names the image in errors.
    pub fn slice(&self, page: &str, width: u32, height: u32, insets: Insets) -> Result<SixBox> {
        self.check(page, "width", width)?;
        self.check(page, "height", height)?;

        let snapped = snap_insets(insets, self.divisor);

        let right = self.edge(page, "right", width, snapped.right)?;
        let bottom = self.edge(page, "bottom", height, snapped.bottom)?;

        self.check(page, "right", right)?;
        self.check(page, "bottom", bottom)?;

        let box_width = self.edge(page, "box width", right, snapped.left)?;
        let box_height = self.edge(page, "box height", bottom, snapped.top)?;

        self.check(page, "left", snapped.left)?;
        self.check(page, "top", snapped.top)?;
        self.check(page, "box width", box_width)?;
        self.check(page, "box height", box_height)?;

        let d = self.divisor;
        Ok(SixBox {
            image_width: width / d,
            image_height: height / d,
            x: snapped.left / d,
            y: snapped.top / d,
            width: box_width / d,
            height: box_height / d,
        })
    }

    /// Slice a loaded reference page.
    ///
    /// A page with no opaque pixel is an error rather than an empty box.
    pub fn slice_page(&self, page: &IconSetPage) -> Result<SixBox> {
        if !page.has_opaque {
            return Err(IconError::EmptyReference {
                page: page.name.clone(),
            });
        }
        self.slice(&page.name, page.width, page.height, page.insets)
    }

    fn check(&self, page: &str, edge: &'static str, value: u32) -> Result<()> {
        if value % self.divisor != 0 {
            return Err(IconError::GridMisalignment {
                page: page.to_string(),
                edge,
                value,
                divisor: self.divisor,
            });
        }
        Ok(())
    }

    fn edge(&self, page: &str, edge: &'static str, extent: u32, inset: u32) -> Result<u32> {
        extent.checked_sub(inset).ok_or_else(|| IconError::InvertedSlice {
            page: page.to_string(),
            edge,
            extent,
            inset,
        })
    }
}

/// Slice `page` on a `divisor` grid.
pub fn compute_six_box(page: &IconSetPage, divisor: u32) -> Result<SixBox> {
    let snapper = GridSnapper::new(divisor).ok_or_else(|| IconError::Config {
        message: "Grid divisor must be non-zero".to_string(),
        help: None,
    })?;
    snapper.slice_page(page)
}
