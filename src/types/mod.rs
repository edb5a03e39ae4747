//! Core data types for addon asset generation.

mod colour;
mod pixels;

pub use colour::Colour;
pub use pixels::PixelBuffer;
