//! Descriptions of the value columns commitments are computed over.
mod dense_sequence;
pub use dense_sequence::DenseSequence;

mod sequence;
pub use sequence::{IndexedSequence, Sequence};
