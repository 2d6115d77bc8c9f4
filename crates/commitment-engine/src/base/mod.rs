//! Basic shared functionality of the engine.
/// Deterministic derivation of the row generators commitments sum over.
pub mod generator;
/// Decoding of little-endian values into scalar field elements.
pub mod scalar;
/// Descriptions of the value sequences commitments are computed over.
pub mod sequence;
pub(crate) mod slice_ops;

mod rayon_cfg;
pub(crate) use rayon_cfg::if_rayon;
