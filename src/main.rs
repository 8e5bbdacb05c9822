use clap::Parser;
use miette::Result;
use sixbox::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = cli.printer();

    match cli.command {
        Commands::Build(args) => sixbox::cli::build::run(args, &printer)?,
        Commands::Measure(args) => sixbox::cli::measure::run(args, &printer)?,
        Commands::List(args) => sixbox::cli::list::run(args, &printer)?,
        Commands::Init(args) => sixbox::cli::init::run(args, &printer)?,
        Commands::Completions(args) => sixbox::cli::completions::run(args)?,
    }

    Ok(())
}
