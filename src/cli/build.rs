//! Build command implementation.
//!
//! Measures every page of the named assets and prints one icon-pack
//! declaration per asset.

use clap::Args;

use crate::catalog::{AssetBuilder, BundleLoader};
use crate::emit::{emit_declaration, PackKind};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::types::Classification;

use super::ProjectArgs;

/// Measure icon pages and print slice declarations
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Icon pack the assets belong to
    #[arg(value_enum)]
    pub pack: PackKind,

    /// Asset names, e.g. `sample` for check_box_sample_*.png
    #[arg(required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let declarations = render(&args, printer)?;

    for declaration in &declarations {
        println!();
        print!("{}", declaration);
        println!();
    }

    Ok(())
}

/// Build every asset and render its declaration.
///
/// Nothing is returned unless every asset builds.
pub fn render(args: &BuildArgs, printer: &Printer) -> Result<Vec<String>> {
    let manifest = args.project.manifest()?;
    let snapper = manifest.snapper()?;
    let loader = BundleLoader::new(&manifest.assets);
    let builder = AssetBuilder::new(&loader, printer).with_detector(manifest.detector());

    printer.verbose("Bundle", &display_path(loader.root()));

    let mut declarations = Vec::with_capacity(args.names.len());

    for name in &args.names {
        let asset = builder.build(
            args.pack.prefix(),
            name,
            &Classification::ALL,
            &manifest.scales,
        )?;

        let slices = asset.slices(&snapper)?;
        for slice in &slices {
            let b = &slice.sixbox;
            printer.verbose(
                "Sliced",
                &format!(
                    "{} ({}x{} cells, icon {}x{} at {},{})",
                    slice.file_name, b.image_width, b.image_height, b.width, b.height, b.x, b.y
                ),
            );
        }

        declarations.push(emit_declaration(args.pack, name, &slices)?);

        let pages: usize = asset.icon_sets.iter().map(|set| set.pages().len()).sum();
        printer.success(
            "Built",
            &format!("{} ({})", asset.name, plural(pages, "page", "pages")),
        );
    }

    Ok(declarations)
}
