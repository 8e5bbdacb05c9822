//! List command implementation.
//!
//! Scans the asset bundle for pages that follow the naming convention and
//! reports which pages each asset still lacks.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use clap::Args;
use walkdir::WalkDir;

use crate::catalog::{page_file_name, parse_page_file_name, required_scales, ParsedPageName};
use crate::emit::PackKind;
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{Classification, Scale};

use super::ProjectArgs;

/// List icon pages found in the asset bundle
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Pages found for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetInventory {
    pub pack: PackKind,
    pub name: String,
    pub found: usize,
    /// File names of required pages that are absent.
    pub missing: Vec<String>,
}

impl AssetInventory {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let manifest = args.project.manifest()?;
    printer.status("Scanning", &display_path(&manifest.assets));

    let inventory = scan_bundle(&manifest.assets, &manifest.scales)?;
    if inventory.is_empty() {
        printer.warning("Warning", "no icon pages found");
        return Ok(());
    }

    for asset in &inventory {
        let label = format!("{}_{}", asset.pack.prefix(), asset.name);
        if asset.is_complete() {
            printer.info(
                "Complete",
                &format!("{} ({})", label, plural(asset.found, "page", "pages")),
            );
        } else {
            printer.warning(
                "Incomplete",
                &format!(
                    "{} {}",
                    label,
                    printer.dim(&format!("({} missing)", asset.missing.len()))
                ),
            );
            for file in &asset.missing {
                printer.verbose("Missing", file);
            }
        }
    }

    Ok(())
}

/// Group the bundle's page files by pack and asset name.
pub fn scan_bundle(root: &Path, scales: &[Scale]) -> Result<Vec<AssetInventory>> {
    if !root.is_dir() {
        return Err(IconError::Io {
            path: root.to_path_buf(),
            message: "Asset bundle directory not found".to_string(),
        });
    }

    let mut found: BTreeMap<(&'static str, String), BTreeSet<(usize, Scale)>> = BTreeMap::new();

    for entry in WalkDir::new(root)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        for pack in PackKind::ALL {
            if let Some(ParsedPageName {
                name,
                classification,
                scale,
            }) = parse_page_file_name(pack.prefix(), file_name)
            {
                found
                    .entry((pack.prefix(), name))
                    .or_default()
                    .insert((classification as usize, scale));
            }
        }
    }

    let mut inventory = Vec::with_capacity(found.len());
    for ((prefix, name), pages) in found {
        let Some(pack) = PackKind::ALL.into_iter().find(|p| p.prefix() == prefix) else {
            continue;
        };

        let mut missing = Vec::new();
        for c in Classification::ALL {
            for scale in required_scales(c, scales) {
                if !pages.contains(&(c as usize, scale)) {
                    missing.push(page_file_name(prefix, &name, c, scale));
                }
            }
        }

        inventory.push(AssetInventory {
            pack,
            name,
            found: pages.len(),
            missing,
        });
    }

    Ok(inventory)
}
