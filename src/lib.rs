//! sixbox - icon inset measurement and six-grid slicing
//!
//! Measures the opaque bounds of icon images rendered at several device,
//! orientation and scale variants, snaps them onto a 6-pixel grid and
//! emits the slice declarations an app uses to cut icons from its sheets.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod measure;
pub mod output;
pub mod types;

pub use catalog::{
    build_asset, Asset, AssetBuilder, BundleLoader, IconSet, IconSetPage, IconSlice, ImageLoader,
};
pub use config::Manifest;
pub use emit::{emit_declaration, snake_to_camel, PackKind};
pub use error::{IconError, Result};
pub use measure::{compute_insets, compute_six_box, GridSnapper, InsetDetector, SixBox};
pub use types::{Classification, Device, Insets, Orientation, Pixel, PixelBuffer, Scale};
