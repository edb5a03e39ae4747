use addon_assets::cli::{Cli, Commands};
use addon_assets::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => addon_assets::cli::build::run(args, &printer)?,
        Commands::Textures(args) => addon_assets::cli::textures::run(args, &printer)?,
        Commands::Package(args) => addon_assets::cli::package::run(args, &printer)?,
    }

    Ok(())
}
