//! Textures command implementation.
//!
//! Draws every catalogue texture and writes it as PNG.

use crate::catalogue::{Layout, TEXTURES};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;

use super::ProjectArgs;

pub fn run(args: ProjectArgs, printer: &Printer) -> Result<()> {
    let layout = Layout::new(args.root);
    let count = write_textures(&layout, printer)?;
    printer.status("Finished", &plural(count, "texture", "textures"));
    Ok(())
}

/// Draw and write all textures under `layout`. Returns the count written.
pub fn write_textures(layout: &Layout, printer: &Printer) -> Result<usize> {
    for texture in &TEXTURES {
        let path = texture.path(layout);
        let (width, height) = texture.recipe.size();

        printer.status(
            "Drawing",
            &format!(
                "{} {}",
                display_path(&path, layout.root()),
                printer.dim(&format!("({}x{}, {})", width, height, texture.recipe.key_colour()))
            ),
        );

        write_png(&texture.recipe.draw(), &path)?;
    }

    Ok(TEXTURES.len())
}
