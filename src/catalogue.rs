//! The fixed asset catalogue for the Wizardiuz Staff addon.
//!
//! Every colour, size and output path is compiled in; the only runtime
//! input is the project root the [`Layout`] is resolved against.

use std::path::{Path, PathBuf};

use crate::render::sprite;
use crate::types::{Colour, PixelBuffer};

/// Base name of the packaged addon.
pub const ADDON_NAME: &str = "Wizardiuz_Staff";

/// Extension the game expects for a packaged addon (a renamed zip).
pub const ARCHIVE_EXTENSION: &str = "mcaddon";

/// Behaviour pack directory name, also its name inside the archive.
pub const BEHAVIOR_PACK: &str = "BP";

/// Resource pack directory name, also its name inside the archive.
pub const RESOURCE_PACK: &str = "RP";

/// Edge length of the pack icons.
pub const PACK_ICON_SIZE: u32 = 256;

/// Directory layout of an addon project.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn behavior_pack(&self) -> PathBuf {
        self.root.join(BEHAVIOR_PACK)
    }

    pub fn resource_pack(&self) -> PathBuf {
        self.root.join(RESOURCE_PACK)
    }

    /// Where item textures live.
    pub fn items_dir(&self) -> PathBuf {
        self.resource_pack().join("textures").join("items")
    }

    /// Distribution output directory.
    pub fn dist_dir(&self) -> PathBuf {
        self.root.join("dist")
    }

    /// Final archive path, `dist/<ADDON_NAME>.<ARCHIVE_EXTENSION>`.
    pub fn archive_path(&self) -> PathBuf {
        self.dist_dir()
            .join(format!("{}.{}", ADDON_NAME, ARCHIVE_EXTENSION))
    }

    /// The pack trees bundled into the archive, as (archive name, source).
    pub fn pack_trees(&self) -> Vec<(String, PathBuf)> {
        vec![
            (BEHAVIOR_PACK.to_string(), self.behavior_pack()),
            (RESOURCE_PACK.to_string(), self.resource_pack()),
        ]
    }
}

/// Which pack a texture is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// `RP/textures/items/`
    Items,
    /// Behaviour pack root.
    BehaviorPack,
    /// Resource pack root.
    ResourcePack,
}

/// A drawing recipe and its colour parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    Staff { crystal: Colour },
    Scroll { tint: Colour },
    Solid { width: u32, height: u32, colour: Colour },
}

impl Recipe {
    /// Paint the recipe into a fresh buffer.
    pub fn draw(&self) -> PixelBuffer {
        match *self {
            Recipe::Staff { crystal } => sprite::staff(crystal),
            Recipe::Scroll { tint } => sprite::scroll(tint),
            Recipe::Solid { width, height, colour } => sprite::solid(width, height, colour),
        }
    }

    /// Output dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        match *self {
            Recipe::Staff { .. } | Recipe::Scroll { .. } => (sprite::ICON_SIZE, sprite::ICON_SIZE),
            Recipe::Solid { width, height, .. } => (width, height),
        }
    }

    /// The colour parameter that distinguishes this texture.
    pub fn key_colour(&self) -> Colour {
        match *self {
            Recipe::Staff { crystal } => crystal,
            Recipe::Scroll { tint } => tint,
            Recipe::Solid { colour, .. } => colour,
        }
    }
}

/// One generated texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    pub file_name: &'static str,
    pub location: Location,
    pub recipe: Recipe,
}

impl Texture {
    /// Resolve the output path under a project layout.
    pub fn path(&self, layout: &Layout) -> PathBuf {
        let dir = match self.location {
            Location::Items => layout.items_dir(),
            Location::BehaviorPack => layout.behavior_pack(),
            Location::ResourcePack => layout.resource_pack(),
        };
        dir.join(self.file_name)
    }
}

const fn item(file_name: &'static str, recipe: Recipe) -> Texture {
    Texture {
        file_name,
        location: Location::Items,
        recipe,
    }
}

const fn pack_icon(location: Location, colour: Colour) -> Texture {
    Texture {
        file_name: "pack_icon.png",
        location,
        recipe: Recipe::Solid {
            width: PACK_ICON_SIZE,
            height: PACK_ICON_SIZE,
            colour,
        },
    }
}

const fn staff(file_name: &'static str, r: u8, g: u8, b: u8) -> Texture {
    item(file_name, Recipe::Staff { crystal: Colour::rgb(r, g, b) })
}

const fn scroll(file_name: &'static str, r: u8, g: u8, b: u8) -> Texture {
    item(file_name, Recipe::Scroll { tint: Colour::rgb(r, g, b) })
}

/// Every texture the build produces, in build order.
pub const TEXTURES: [Texture; 12] = [
    staff("wizardiuz_staff_water.png", 55, 160, 255),
    staff("wizardiuz_staff_fire.png", 255, 72, 32),
    staff("wizardiuz_staff_wind.png", 193, 255, 236),
    staff("wizardiuz_staff_sand.png", 255, 215, 120),
    staff("wizardiuz_staff_hail.png", 150, 224, 255),
    scroll("wizardiuz_scroll_banished_sun.png", 255, 98, 64),
    scroll("wizardiuz_scroll_tide_warden.png", 72, 132, 255),
    scroll("wizardiuz_scroll_gale_sigil.png", 117, 255, 208),
    scroll("wizardiuz_scroll_dune_aegis.png", 233, 196, 124),
    scroll("wizardiuz_scroll_hail_requiem.png", 168, 221, 255),
    pack_icon(Location::BehaviorPack, Colour::rgb(255, 98, 64)),
    pack_icon(Location::ResourcePack, Colour::rgb(55, 160, 255)),
];
