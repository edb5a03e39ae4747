//! Rendering module for addon textures.
//!
//! Sprite recipes paint pixel buffers; the PNG encoder turns them into
//! bytes on disk.

mod crc;
mod png;
pub mod sprite;

pub use crc::{crc32, Crc32};
pub use png::{encode_png, write_png, Chunk, PNG_SIGNATURE};
