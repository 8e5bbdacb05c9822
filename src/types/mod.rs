//! Core types for sixbox.

mod classification;
mod insets;
mod pixel;
mod scale;

pub use classification::{Classification, ClassificationInfo, Device, Orientation};
pub use insets::Insets;
pub use pixel::{Pixel, PixelBuffer};
pub use scale::Scale;
