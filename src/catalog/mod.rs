//! Asset catalog construction.
//!
//! Loads every (classification, scale) page of an asset, measures its
//! insets and groups the pages into one [`IconSet`] per classification.
//! Any missing or undecodable page aborts the build.

mod loader;
mod naming;
mod slice;

use std::io;
use std::path::PathBuf;

pub use loader::{load_png, BundleLoader, ImageLoader};
pub use naming::{
    asset_name, icon_set_name, page_file_name, page_name, parse_page_file_name, ParsedPageName,
    IMAGE_EXTENSION,
};
pub use slice::IconSlice;

use crate::error::{IconError, Result};
use crate::measure::{GridSnapper, InsetDetector};
use crate::output::Printer;
use crate::types::{Classification, Device, Insets, Scale};

/// One decoded variant of an icon.
#[derive(Debug, Clone)]
pub struct IconSetPage {
    /// Page name without extension.
    pub name: String,
    pub classification: Classification,
    pub scale: Scale,
    pub insets: Insets,
    /// False when no pixel reached the alpha threshold, in which case
    /// `insets` holds the nothing-found marker.
    pub has_opaque: bool,
    pub width: u32,
    pub height: u32,
    /// Encoded file contents.
    pub image_data: Vec<u8>,
    pub path: PathBuf,
}

/// All pages of one classification.
///
/// Always holds a reference-scale page.
#[derive(Debug, Clone)]
pub struct IconSet {
    file_name: String,
    classification: Classification,
    pages: Vec<IconSetPage>,
    reference: usize,
}

impl IconSet {
    /// Group `pages` into a set, failing without a reference-scale page.
    pub fn new(
        file_name: impl Into<String>,
        classification: Classification,
        pages: Vec<IconSetPage>,
    ) -> Result<Self> {
        let file_name = file_name.into();
        let reference = pages
            .iter()
            .position(|page| page.scale.is_reference())
            .ok_or_else(|| IconError::MissingReferenceScale {
                icon_set: file_name.clone(),
            })?;

        Ok(Self {
            file_name,
            classification,
            pages,
            reference,
        })
    }

    /// Icon set name, `{prefix}_{name}_{classification}`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn device(&self) -> Device {
        self.classification.device()
    }

    pub fn pages(&self) -> &[IconSetPage] {
        &self.pages
    }

    pub fn page(&self, scale: Scale) -> Option<&IconSetPage> {
        self.pages.iter().find(|page| page.scale == scale)
    }

    /// The page slices are measured from.
    pub fn reference_page(&self) -> &IconSetPage {
        &self.pages[self.reference]
    }

    /// Snap the reference page into a slice record.
    pub fn slice(&self, snapper: &GridSnapper) -> Result<IconSlice> {
        let sixbox = snapper.slice_page(self.reference_page())?;
        Ok(IconSlice::new(
            self.file_name.clone(),
            self.classification,
            sixbox,
        ))
    }
}

/// Every icon set built for one named asset.
#[derive(Debug, Clone)]
pub struct Asset {
    /// `{prefix}_{name}`
    pub name: String,
    pub icon_sets: Vec<IconSet>,
}

impl Asset {
    pub fn icon_set(&self, classification: Classification) -> Option<&IconSet> {
        self.icon_sets
            .iter()
            .find(|set| set.classification() == classification)
    }

    /// Slice every icon set, in build order.
    pub fn slices(&self, snapper: &GridSnapper) -> Result<Vec<IconSlice>> {
        self.icon_sets.iter().map(|set| set.slice(snapper)).collect()
    }
}

/// Scales loaded for `classification` out of the global `scales` list.
///
/// A scale is kept when the classification is authored at it or when it is
/// the reference scale. Global order is kept and repeats are dropped.
pub fn required_scales(classification: Classification, scales: &[Scale]) -> Vec<Scale> {
    let mut required = Vec::new();
    for &scale in scales {
        let wanted = scale.is_reference() || classification.scales().contains(&scale);
        if wanted && !required.contains(&scale) {
            required.push(scale);
        }
    }
    required
}

/// Builds assets from images served by an [`ImageLoader`].
pub struct AssetBuilder<'a, L: ImageLoader> {
    loader: &'a L,
    detector: InsetDetector,
    printer: &'a Printer,
}

impl<'a, L: ImageLoader> AssetBuilder<'a, L> {
    pub fn new(loader: &'a L, printer: &'a Printer) -> Self {
        Self {
            loader,
            detector: InsetDetector::default(),
            printer,
        }
    }

    /// Use a non-default inset detector.
    pub fn with_detector(mut self, detector: InsetDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Load and measure every page of `{prefix}_{name}`.
    pub fn build(
        &self,
        prefix: &str,
        name: &str,
        classifications: &[Classification],
        scales: &[Scale],
    ) -> Result<Asset> {
        let asset = asset_name(prefix, name);
        self.printer.status("Loading", &asset);

        let mut icon_sets = Vec::with_capacity(classifications.len());

        for &classification in classifications {
            let pages = required_scales(classification, scales)
                .into_iter()
                .map(|scale| self.load_page(prefix, name, classification, scale))
                .collect::<Result<Vec<_>>>()?;

            let set_name = icon_set_name(prefix, name, classification);
            icon_sets.push(IconSet::new(set_name, classification, pages)?);
        }

        Ok(Asset {
            name: asset,
            icon_sets,
        })
    }

    fn load_page(
        &self,
        prefix: &str,
        name: &str,
        classification: Classification,
        scale: Scale,
    ) -> Result<IconSetPage> {
        let file_name = page_file_name(prefix, name, classification, scale);
        let path = self.loader.resolve(&file_name);

        let image_data = self.loader.load(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => IconError::MissingAsset {
                file_name: file_name.clone(),
                asset: name.to_string(),
                help: Some(format!("Expected at {}", path.display())),
                path: path.clone(),
            },
            _ => IconError::Io {
                path: path.clone(),
                message: format!("Failed to read {} for {}: {}", file_name, name, e),
            },
        })?;

        let buffer = self
            .loader
            .decode(&image_data)
            .map_err(|e| IconError::DecodeFailure {
                file_name: file_name.clone(),
                asset: name.to_string(),
                message: e.to_string(),
            })?;

        if buffer.is_empty() {
            return Err(IconError::DecodeFailure {
                file_name,
                asset: name.to_string(),
                message: format!(
                    "image has zero dimensions ({}x{})",
                    buffer.width(),
                    buffer.height()
                ),
            });
        }

        let has_opaque = self.detector.has_opaque(&buffer);
        let insets = self.detector.detect(&buffer);
        if has_opaque {
            self.printer.verbose(
                "Measured",
                &format!(
                    "{} ({}x{}, {})",
                    file_name,
                    buffer.width(),
                    buffer.height(),
                    insets
                ),
            );
        } else {
            self.printer.verbose(
                "Measured",
                &format!(
                    "{} ({}x{}, no opaque pixels)",
                    file_name,
                    buffer.width(),
                    buffer.height()
                ),
            );
        }

        Ok(IconSetPage {
            name: page_name(prefix, name, classification, scale),
            classification,
            scale,
            insets,
            has_opaque,
            width: buffer.width(),
            height: buffer.height(),
            image_data,
            path,
        })
    }
}

/// Build `{prefix}_{name}` with the default detector.
pub fn build_asset<L: ImageLoader>(
    loader: &L,
    printer: &Printer,
    prefix: &str,
    name: &str,
    classifications: &[Classification],
    scales: &[Scale],
) -> Result<Asset> {
    AssetBuilder::new(loader, printer).build(prefix, name, classifications, scales)
}
