//! Init command implementation.
//!
//! Writes a `sixbox.yaml` manifest holding the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::error::{IconError, Result};
use crate::output::{display_path, Printer};

/// Write a default sixbox.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the manifest into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Asset bundle directory to record
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Overwrite existing sixbox.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(IconError::Usage {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let mut manifest = Manifest::default();
    if let Some(assets) = args.assets {
        manifest.assets = assets;
    }

    let yaml = manifest.to_yaml()?;
    fs::write(&manifest_path, &yaml).map_err(|e| IconError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}
