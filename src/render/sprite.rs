//! Hand-authored pixel-art recipes for item icons and pack icons.
//!
//! Each recipe paints a fresh [`PixelBuffer`] from fixed coordinate tables.
//! Points are plotted in order, so later layers overwrite earlier ones.

use std::ops::Range;

use crate::types::{Colour, PixelBuffer};

/// Edge length of item icons.
pub const ICON_SIZE: u32 = 16;

const WOOD: Colour = Colour::rgb(92, 62, 35);
const GOLD: Colour = Colour::rgb(196, 156, 74);
const HIGHLIGHT: Colour = Colour::new(255, 255, 255, 200);

const SHAFT_COLUMNS: [i32; 2] = [7, 8];
const SHAFT_ROWS: Range<i32> = 3..16;
const HOOK: [(i32, i32); 7] = [(7, 2), (8, 2), (9, 2), (10, 3), (10, 4), (9, 5), (8, 5)];
const GRIP: [(i32, i32); 8] = [(8, 6), (9, 6), (8, 7), (9, 7), (8, 8), (9, 8), (7, 9), (8, 9)];
const CRYSTAL: [(i32, i32); 5] = [(11, 1), (12, 2), (11, 3), (10, 2), (11, 2)];
const CRYSTAL_GLINT: (i32, i32) = (11, 2);

const PAPER: Colour = Colour::rgb(224, 210, 172);
const EDGE: Colour = Colour::rgb(161, 126, 74);
const TINT_ALPHA: u8 = 180;

const SHEET_X: Range<i32> = 3..13;
const SHEET_Y: Range<i32> = 2..14;
const TINT_SPAN: Range<i32> = 4..12;
const ACCENTS: [(i32, Range<i32>); 3] = [(6, 5..11), (8, 5..11), (10, 5..10)];

fn plot(buf: &mut PixelBuffer, points: &[(i32, i32)], colour: Colour) {
    for &(x, y) in points {
        buf.set(x, y, colour);
    }
}

fn fill_rect(buf: &mut PixelBuffer, xs: Range<i32>, ys: Range<i32>, colour: Colour) {
    for y in ys {
        for x in xs.clone() {
            buf.set(x, y, colour);
        }
    }
}

/// A staff icon: wooden shaft and hook, gold grip, and a crystal in the
/// given colour with a translucent white glint.
pub fn staff(crystal: Colour) -> PixelBuffer {
    let mut buf = PixelBuffer::new(ICON_SIZE, ICON_SIZE);

    for y in SHAFT_ROWS {
        for x in SHAFT_COLUMNS {
            buf.set(x, y, WOOD);
        }
    }
    plot(&mut buf, &HOOK, WOOD);
    plot(&mut buf, &GRIP, GOLD);
    plot(&mut buf, &CRYSTAL, crystal);

    let (gx, gy) = CRYSTAL_GLINT;
    buf.set(gx, gy, HIGHLIGHT);

    buf
}

/// A scroll icon: bordered paper sheet with an inner tinted panel and
/// three text-line accents. The tint's alpha is always 180.
pub fn scroll(tint: Colour) -> PixelBuffer {
    let mut buf = PixelBuffer::new(ICON_SIZE, ICON_SIZE);

    fill_rect(&mut buf, SHEET_X, SHEET_Y, PAPER);

    for x in SHEET_X {
        buf.set(x, SHEET_Y.start, EDGE);
        buf.set(x, SHEET_Y.end - 1, EDGE);
    }
    for y in SHEET_Y {
        buf.set(SHEET_X.start, y, EDGE);
        buf.set(SHEET_X.end - 1, y, EDGE);
    }

    fill_rect(&mut buf, TINT_SPAN, TINT_SPAN, tint.with_alpha(TINT_ALPHA));

    for (y, xs) in ACCENTS {
        for x in xs {
            buf.set(x, y, EDGE);
        }
    }

    buf
}

/// A flat swatch of one colour, used for pack icons.
pub fn solid(width: u32, height: u32, colour: Colour) -> PixelBuffer {
    PixelBuffer::filled(width, height, colour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::encode_png;

    fn pixel(buf: &PixelBuffer, x: u32, y: u32) -> Colour {
        let i = ((y * buf.width() + x) * 4) as usize;
        let b = &buf.as_bytes()[i..i + 4];
        Colour::new(b[0], b[1], b[2], b[3])
    }

    /// Map every pixel back to its legend glyph, `?` for unknown colours.
    fn glyphs(buf: &PixelBuffer, legend: &[(char, Colour)]) -> Vec<String> {
        (0..buf.height())
            .map(|y| {
                (0..buf.width())
                    .map(|x| {
                        let colour = pixel(buf, x, y);
                        legend
                            .iter()
                            .find(|(_, c)| *c == colour)
                            .map_or('?', |(g, _)| *g)
                    })
                    .collect::<String>()
            })
            .collect()
    }

    const STAFF_GRID: [&str; 16] = [
        "................",
        "...........c....",
        ".......wwwchc...",
        ".......ww.wc....",
        ".......ww.w.....",
        ".......www......",
        ".......wgg......",
        ".......wgg......",
        ".......wgg......",
        ".......gg.......",
        ".......ww.......",
        ".......ww.......",
        ".......ww.......",
        ".......ww.......",
        ".......ww.......",
        ".......ww.......",
    ];

    const SCROLL_GRID: [&str; 16] = [
        "................",
        "................",
        "...eeeeeeeeee...",
        "...eppppppppe...",
        "...etttttttte...",
        "...etttttttte...",
        "...eteeeeeete...",
        "...etttttttte...",
        "...eteeeeeete...",
        "...etttttttte...",
        "...eteeeeette...",
        "...etttttttte...",
        "...eppppppppe...",
        "...eeeeeeeeee...",
        "................",
        "................",
    ];

    const STAFF_CRYSTALS: [(u8, u8, u8); 5] = [
        (55, 160, 255),
        (255, 72, 32),
        (193, 255, 236),
        (255, 215, 120),
        (150, 224, 255),
    ];

    const SCROLL_TINTS: [(u8, u8, u8); 5] = [
        (255, 98, 64),
        (72, 132, 255),
        (117, 255, 208),
        (233, 196, 124),
        (168, 221, 255),
    ];

    #[test]
    fn test_staff_full_grid() {
        for crystal in STAFF_CRYSTALS.map(Colour::from) {
            let buf = staff(crystal);
            assert_eq!((buf.width(), buf.height()), (16, 16));

            let legend = [
                ('.', Colour::TRANSPARENT),
                ('w', WOOD),
                ('g', GOLD),
                ('c', crystal),
                ('h', HIGHLIGHT),
            ];
            pretty_assertions::assert_eq!(glyphs(&buf, &legend), STAFF_GRID);
        }
    }

    #[test]
    fn test_staff_glint_ignores_crystal_colour() {
        for crystal in [Colour::rgb(255, 72, 32), Colour::rgb(193, 255, 236), Colour::TRANSPARENT] {
            assert_eq!(pixel(&staff(crystal), 11, 2), HIGHLIGHT);
        }
    }

    #[test]
    fn test_scroll_full_grid() {
        for tint in SCROLL_TINTS.map(Colour::from) {
            let buf = scroll(tint);
            assert_eq!((buf.width(), buf.height()), (16, 16));

            let legend = [
                ('.', Colour::TRANSPARENT),
                ('p', PAPER),
                ('e', EDGE),
                ('t', tint.with_alpha(180)),
            ];
            pretty_assertions::assert_eq!(glyphs(&buf, &legend), SCROLL_GRID);
        }
    }

    #[test]
    fn test_scroll_forces_tint_alpha() {
        let buf = scroll(Colour::new(72, 132, 255, 10));
        assert_eq!(pixel(&buf, 7, 7), Colour::new(72, 132, 255, 180));
    }

    #[test]
    fn test_solid_swatch_decodes_uniform() {
        let colour = Colour::new(255, 98, 64, 255);
        let img = image::load_from_memory(&encode_png(&solid(4, 4, colour)))
            .unwrap()
            .to_rgba8();

        assert_eq!(img.pixels().count(), 16);
        assert!(img.pixels().all(|p| p.0 == [255, 98, 64, 255]));
    }
}
