pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod measure;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Manifest;
use crate::error::Result;
use crate::output::{Printer, Verbosity};

/// sixbox - icon inset measurement and slice generation
#[derive(Parser, Debug)]
#[command(name = "sixbox")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print per-page measurements
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors and generated output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn printer(&self) -> Printer {
        let verbosity = if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Printer::with_verbosity(verbosity)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure icon pages and print slice declarations
    Build(build::BuildArgs),

    /// Print the size and insets of image files
    Measure(measure::MeasureArgs),

    /// List icon pages found in the asset bundle
    List(list::ListArgs),

    /// Write a default sixbox.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Manifest and bundle options shared by commands that read assets.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Path to sixbox.yaml (default: ./sixbox.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Asset bundle directory (overrides the manifest)
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Alpha threshold, 0-255 (overrides the manifest)
    #[arg(long)]
    pub threshold: Option<u8>,
}

impl ProjectArgs {
    /// Resolve the effective manifest: file values, then flag overrides.
    pub fn manifest(&self) -> Result<Manifest> {
        let mut manifest = Manifest::discover(self.config.as_deref(), std::path::Path::new("."))?;
        if let Some(assets) = &self.assets {
            manifest.assets = assets.clone();
        }
        if let Some(threshold) = self.threshold {
            manifest.threshold = threshold;
        }
        Ok(manifest)
    }
}
