//! Helpers for moving between byte encodings and scalar field elements.
mod scalar_decode;
pub use scalar_decode::scalar_from_le_bytes;
