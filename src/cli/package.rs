//! Package command implementation.
//!
//! Zips the behaviour and resource packs into the addon archive.

use crate::catalogue::Layout;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::package::{PackageSummary, Packager};

use super::ProjectArgs;

pub fn run(args: ProjectArgs, printer: &Printer) -> Result<()> {
    let layout = Layout::new(args.root);
    package(&layout, printer)?;
    Ok(())
}

/// Package the addon for `layout`, reporting progress.
pub fn package(layout: &Layout, printer: &Printer) -> Result<PackageSummary> {
    let packager = Packager::for_layout(layout);
    printer.status(
        "Packaging",
        &display_path(&packager.archive_path(), layout.root()),
    );

    let summary = packager.run()?;
    printer.info(
        "Archived",
        &plural(summary.files, "file", "files"),
    );

    Ok(summary)
}
