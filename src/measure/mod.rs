//! Measurement: pixels to insets, insets to grid cells.

mod insets;
mod sixbox;

pub use insets::{compute_insets, InsetDetector, DEFAULT_ALPHA_THRESHOLD};
pub use sixbox::{compute_six_box, snap_inset, snap_insets, GridSnapper, SixBox, DEFAULT_DIVISOR};
