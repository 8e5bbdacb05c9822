//! Image loading.
//!
//! The builder asks an [`ImageLoader`] for files by name. [`BundleLoader`]
//! resolves those names against an asset directory on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};
use crate::types::PixelBuffer;

/// Source of encoded icon images.
pub trait ImageLoader {
    /// Resolve a file name to the path it is loaded from.
    fn resolve(&self, file_name: &str) -> PathBuf;

    /// Read the raw bytes at `path`.
    fn load(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Decode encoded bytes into a pixel buffer.
    fn decode(&self, bytes: &[u8]) -> std::result::Result<PixelBuffer, image::ImageError> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        Ok(PixelBuffer::from(&img))
    }
}

/// Loads images from a directory.
#[derive(Debug, Clone)]
pub struct BundleLoader {
    root: PathBuf,
}

impl BundleLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageLoader for BundleLoader {
    fn resolve(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    fn load(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Decode a single image file, outside of any asset build.
pub fn load_png(path: &Path) -> Result<PixelBuffer> {
    let loader = BundleLoader::new(path.parent().unwrap_or_else(|| Path::new(".")));
    let bytes = loader.load(path).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;
    loader.decode(&bytes).map_err(|e| IconError::DecodeFailure {
        file_name: path.display().to_string(),
        asset: "measure".to_string(),
        message: e.to_string(),
    })
}
