pub mod build;
pub mod package;
pub mod textures;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// addon-assets - Texture and archive builder for the Wizardiuz Staff addon
#[derive(Parser, Debug)]
#[command(name = "addon-assets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw all textures, then package the addon archive
    Build(ProjectArgs),

    /// Draw all textures only
    Textures(ProjectArgs),

    /// Package the addon archive from the existing pack trees
    Package(ProjectArgs),
}

/// Arguments shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Addon project root containing BP/ and RP/
    #[arg(default_value = ".")]
    pub root: PathBuf,
}
