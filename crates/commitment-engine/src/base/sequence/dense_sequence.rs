use crate::base::scalar::scalar_from_le_bytes;
use curve25519_dalek::scalar::Scalar;

/// A densely packed column of little-endian values of uniform byte width.
///
/// Values narrower than the scalar field are zero-extended when decoded,
/// so a one byte column and a widened copy of it commit to the same
/// group element.
#[derive(Clone, Copy, Debug)]
pub struct DenseSequence<'a> {
    /// The little-endian encoded values, `element_nbytes` bytes each.
    pub data: &'a [u8],
    /// The byte width of each value. Must lie in `1..=32`.
    pub element_nbytes: usize,
}

impl DenseSequence<'_> {
    /// The number of values in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        debug_assert!(self.element_nbytes > 0);
        self.data.len() / self.element_nbytes
    }

    /// Whether the sequence holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Decodes the value at `row` into a scalar field element.
    pub(crate) fn scalar_at(&self, row: usize) -> Scalar {
        let start = row * self.element_nbytes;
        scalar_from_le_bytes(&self.data[start..start + self.element_nbytes])
    }
}
