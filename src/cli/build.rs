//! Build command implementation.
//!
//! Draws every texture into the pack trees, then packages the addon.

use crate::catalogue::Layout;
use crate::error::Result;
use crate::output::{display_path, Printer};

use super::{package, textures, ProjectArgs};

pub fn run(args: ProjectArgs, printer: &Printer) -> Result<()> {
    let layout = Layout::new(args.root);

    textures::write_textures(&layout, printer)?;
    let summary = package::package(&layout, printer)?;

    printer.status("Built", &display_path(&summary.archive, layout.root()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::{self, File};
    use std::io::Read;
    use tempfile::tempdir;
    use zip::ZipArchive;

    fn file_members(archive: &std::path::Path) -> Vec<String> {
        let archive = ZipArchive::new(File::open(archive).unwrap()).unwrap();
        let mut names: Vec<String> = archive
            .file_names()
            .filter(|n| !n.ends_with('/'))
            .map(String::from)
            .collect();
        names.sort();
        names
    }

    fn addon_project() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("BP/scripts")).unwrap();
        fs::create_dir_all(dir.path().join("RP")).unwrap();
        fs::write(dir.path().join("BP/manifest.json"), "{\"bp\":true}").unwrap();
        fs::write(dir.path().join("BP/scripts/main.js"), "// staff logic").unwrap();
        fs::write(dir.path().join("RP/manifest.json"), "{\"rp\":true}").unwrap();
        dir
    }

    #[test]
    fn test_build_end_to_end() {
        let dir = addon_project();

        run(
            ProjectArgs {
                root: dir.path().to_path_buf(),
            },
            &Printer::plain(),
        )
        .unwrap();

        let archive = dir.path().join("dist/Wizardiuz_Staff.mcaddon");
        let members = file_members(&archive);

        assert_eq!(members.len(), 3 + 12);
        assert!(members.contains(&"BP/pack_icon.png".to_string()));
        assert!(members.contains(&"RP/pack_icon.png".to_string()));
        assert!(members.contains(&"BP/scripts/main.js".to_string()));
        assert!(members.contains(&"RP/textures/items/wizardiuz_scroll_hail_requiem.png".to_string()));

        // archived texture is the exact PNG on disk
        let mut zipped = Vec::new();
        ZipArchive::new(File::open(&archive).unwrap())
            .unwrap()
            .by_name("RP/textures/items/wizardiuz_staff_wind.png")
            .unwrap()
            .read_to_end(&mut zipped)
            .unwrap();
        let on_disk = fs::read(dir.path().join("RP/textures/items/wizardiuz_staff_wind.png")).unwrap();
        assert_eq!(zipped, on_disk);

        assert!(!dir.path().join("dist/Wizardiuz_Staff").exists());
    }

    #[test]
    fn test_build_twice_produces_identical_archive() {
        let dir = addon_project();
        let args = ProjectArgs {
            root: dir.path().to_path_buf(),
        };
        let archive = dir.path().join("dist/Wizardiuz_Staff.mcaddon");

        run(args.clone(), &Printer::plain()).unwrap();
        let first = fs::read(&archive).unwrap();

        run(args, &Printer::plain()).unwrap();
        let second = fs::read(&archive).unwrap();

        assert_eq!(first, second);
    }
}
