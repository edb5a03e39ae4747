//! PNG output for pixel buffers.
//!
//! Encodes 8-bit RGBA, non-interlaced images with a single IDAT chunk and
//! filter type 0 on every scanline. Output is deterministic: no ancillary
//! chunks, no timestamps.

use std::fs;
use std::path::Path;

use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};

use crate::error::{AssetError, Result};
use crate::types::PixelBuffer;

use super::crc::Crc32;

/// The eight-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOUR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// A length-prefixed, CRC-checked PNG chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub tag: [u8; 4],
    pub data: Vec<u8>,
}

impl Chunk {
    pub fn new(tag: &[u8; 4], data: Vec<u8>) -> Self {
        Self { tag: *tag, data }
    }

    /// Image header: dimensions plus fixed format fields.
    pub fn header(width: u32, height: u32) -> Self {
        let mut data = Vec::with_capacity(13);
        data.extend_from_slice(&width.to_be_bytes());
        data.extend_from_slice(&height.to_be_bytes());
        // bit depth, colour type, compression, filter, interlace
        data.extend_from_slice(&[BIT_DEPTH, COLOUR_TYPE_RGBA, 0, 0, 0]);
        Self::new(b"IHDR", data)
    }

    /// Image data chunk holding the zlib stream.
    pub fn image_data(compressed: Vec<u8>) -> Self {
        Self::new(b"IDAT", compressed)
    }

    /// Terminator chunk.
    pub fn end() -> Self {
        Self::new(b"IEND", Vec::new())
    }

    /// Append length, tag, payload and CRC-32 of tag + payload.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        let len = payload_length(self.data.len());

        let mut crc = Crc32::new();
        crc.update(&self.tag);
        crc.update(&self.data);

        out.reserve(12 + self.data.len());
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&crc.finish().to_be_bytes());
    }
}

/// Chunk length field. A payload must fit in 32 bits; every image is a
/// single IDAT, so an oversized buffer is a caller error.
fn payload_length(len: usize) -> u32 {
    u32::try_from(len)
        .expect("PNG chunk payload exceeds u32::MAX; images are written as a single IDAT")
}

/// Prefix every row with filter type 0 and concatenate.
fn filter_rows(pixels: &PixelBuffer) -> Vec<u8> {
    let mut raw = Vec::with_capacity(pixels.as_bytes().len() + pixels.height() as usize);
    for row in pixels.rows() {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }
    raw
}

/// Encode a pixel buffer as a complete PNG byte stream.
pub fn encode_png(pixels: &PixelBuffer) -> Vec<u8> {
    let compressed = compress_to_vec_zlib(
        &filter_rows(pixels),
        CompressionLevel::BestCompression as u8,
    );

    let mut out = PNG_SIGNATURE.to_vec();
    Chunk::header(pixels.width(), pixels.height()).write_to(&mut out);
    Chunk::image_data(compressed).write_to(&mut out);
    Chunk::end().write_to(&mut out);
    out
}

/// Encode a pixel buffer and write it to `path`.
///
/// Parent directories are created as needed and any existing file at
/// `path` is removed first.
pub fn write_png(pixels: &PixelBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AssetError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    if path.exists() {
        fs::remove_file(path).map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to remove stale PNG: {}", e),
        })?;
    }

    fs::write(path, encode_png(pixels)).map_err(|e| AssetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
