//! addon-assets - Texture and archive builder for a game content addon
//!
//! Keeps an addon repository text-only: item textures and pack icons are
//! drawn from fixed pixel-art recipes, encoded as PNG, and the pack trees
//! are zipped into a distributable `.mcaddon` archive on demand.

pub mod catalogue;
pub mod cli;
pub mod error;
pub mod output;
pub mod package;
pub mod render;
pub mod types;

pub use catalogue::{Layout, Recipe, Texture, TEXTURES};
pub use error::{AssetError, Result};
pub use package::{PackageSummary, Packager};
pub use render::{encode_png, write_png};
pub use types::{Colour, PixelBuffer};
