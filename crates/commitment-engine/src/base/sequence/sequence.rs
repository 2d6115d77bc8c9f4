use super::DenseSequence;

/// A tagged description of one commitment input column.
///
/// Only dense columns are defined today. Sparse columns, where most
/// values are zero and the nonzero values are encoded as (index, value)
/// pairs, are anticipated but unimplemented.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Sequence<'a> {
    /// Densely packed little-endian values.
    Dense(DenseSequence<'a>),
}

impl Sequence<'_> {
    /// The number of rows in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Sequence::Dense(dense) => dense.len(),
        }
    }

    /// Whether the sequence holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte width of each encoded value.
    #[must_use]
    pub fn element_nbytes(&self) -> usize {
        match self {
            Sequence::Dense(dense) => dense.element_nbytes,
        }
    }
}

/// A sequence together with the logical row index of its first value.
///
/// The offset lets one generator selection function be shared across
/// sequences that occupy different spans of the same table: row `i` of
/// the sequence is committed against the generator for `offset + i`.
#[derive(Clone, Copy, Debug)]
pub struct IndexedSequence<'a> {
    /// The underlying value sequence.
    pub sequence: Sequence<'a>,
    /// The row index assigned to the first value.
    pub offset: u64,
}

impl<'a> From<Sequence<'a>> for IndexedSequence<'a> {
    fn from(sequence: Sequence<'a>) -> Self {
        IndexedSequence {
            sequence,
            offset: 0,
        }
    }
}
