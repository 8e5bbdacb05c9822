//! Project manifest (sixbox.yaml) parsing.
//!
//! The manifest names the bundle directory images are resolved against and
//! the measurement settings. Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::measure::{GridSnapper, InsetDetector, DEFAULT_ALPHA_THRESHOLD, DEFAULT_DIVISOR};
use crate::types::Scale;

/// Manifest file name looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "sixbox.yaml";

/// Project manifest loaded from sixbox.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Bundle directory holding the PNG pages.
    pub assets: PathBuf,

    /// Alpha threshold for inset detection.
    pub threshold: u8,

    /// Grid divisor for slicing.
    pub divisor: u32,

    /// Global scale list.
    pub scales: Vec<Scale>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            threshold: DEFAULT_ALPHA_THRESHOLD,
            divisor: DEFAULT_DIVISOR,
            scales: Scale::defaults(),
        }
    }
}

impl Manifest {
    /// Load manifest from a sixbox.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        let mut manifest = Self::parse(&content)?;

        // Relative bundle paths are relative to the manifest
        if manifest.assets.is_relative() {
            if let Some(parent) = path.parent() {
                manifest.assets = parent.join(&manifest.assets);
            }
        }

        Ok(manifest)
    }

    /// Load `explicit` if given, else `sixbox.yaml` in `dir` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate manifest YAML.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(content).map_err(|e| IconError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if self.divisor == 0 {
            return Err(IconError::Config {
                message: "divisor must be non-zero".to_string(),
                help: None,
            });
        }
        if self.scales.is_empty() {
            return Err(IconError::Config {
                message: "scales must not be empty".to_string(),
                help: Some("Omit the key to use 1x, 2x, 3x, 4x, 6x".to_string()),
            });
        }
        Ok(())
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| IconError::Config {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    pub fn detector(&self) -> InsetDetector {
        InsetDetector::new(self.threshold)
    }

    pub fn snapper(&self) -> Result<GridSnapper> {
        GridSnapper::new(self.divisor).ok_or_else(|| IconError::Config {
            message: "divisor must be non-zero".to_string(),
            help: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_uses_defaults() {
        let manifest = Manifest::parse("{}").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.threshold, 16);
        assert_eq!(manifest.divisor, 6);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = "assets: icons\nthreshold: 32\ndivisor: 12\nscales: [2x, 6x]\n";
        let manifest = Manifest::parse(yaml).unwrap();
        assert_eq!(manifest.assets, PathBuf::from("icons"));
        assert_eq!(manifest.threshold, 32);
        assert_eq!(manifest.divisor, 12);
        assert_eq!(manifest.scales, vec![Scale::X2, Scale::X6]);
    }

    #[test]
    fn test_threshold_out_of_range() {
        assert!(matches!(
            Manifest::parse("threshold: 300"),
            Err(IconError::Config { .. })
        ));
    }

    #[test]
    fn test_zero_divisor_rejected() {
        assert!(Manifest::parse("divisor: 0").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Manifest::parse("output: dist").is_err());
    }

    #[test]
    fn test_unknown_scale_rejected() {
        assert!(Manifest::parse("scales: [5x]").is_err());
    }

    #[test]
    fn test_load_resolves_assets_against_manifest_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        std::fs::write(&path, "assets: art\n").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.assets, dir.path().join("art"));
    }

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        let manifest = Manifest::discover(None, dir.path()).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let manifest = Manifest::default();
        let yaml = manifest.to_yaml().unwrap();
        assert!(yaml.contains("6x"));
        assert_eq!(Manifest::parse(&yaml).unwrap(), manifest);
    }
}
