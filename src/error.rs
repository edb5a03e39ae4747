use miette::Diagnostic;
use thiserror::Error;

/// Main error type for addon asset builds
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(addon_assets::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Archive error with {path}: {message}")]
    #[diagnostic(code(addon_assets::archive))]
    Archive {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Package error: {message}")]
    #[diagnostic(code(addon_assets::package))]
    Package {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;
