//! Pixel buffer - a flat RGBA canvas that drawing recipes paint into.

use super::Colour;

/// A rectangular grid of RGBA pixels stored row-major as raw bytes.
///
/// The byte length is always `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a fully transparent buffer.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Colour::TRANSPARENT)
    }

    /// Create a buffer with every pixel set to `colour`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        assert!(
            width > 0 && height > 0,
            "pixel buffer dimensions must be positive, got {width}x{height}"
        );

        let mut buf = Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        };
        buf.fill(colour);
        buf
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set a pixel.
    ///
    /// Coordinates outside the buffer, negative ones included, are ignored.
    /// Recipes rely on this to plot coordinate lists without bounds checks.
    pub fn set(&mut self, x: i32, y: i32, colour: Colour) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x >= self.width || y >= self.height {
            return;
        }

        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&colour.to_rgba());
    }

    /// Set every pixel to `colour`.
    pub fn fill(&mut self, colour: Colour) {
        let rgba = colour.to_rgba();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Raw row-major RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over rows, each `width * 4` bytes long.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width as usize * 4)
    }
}
