//! The immutable cell node.

use std::sync::Arc;

use crate::CellSlice;

/// A single node in a cell tree.
///
/// A cell holds up to 1023 bits of data and up to 4 references to child
/// cells. Cells are immutable once built; trees are shared through
/// [`Arc`] references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Packed data bits (big-endian within each byte).
    data: Vec<u8>,
    /// Number of meaningful bits in `data`.
    bit_len: usize,
    /// References to child cells.
    references: Vec<Arc<Cell>>,
}

impl Cell {
    pub(crate) fn new(data: Vec<u8>, bit_len: usize, references: Vec<Arc<Cell>>) -> Self {
        Cell {
            data,
            bit_len,
            references,
        }
    }

    /// Begin reading this cell's data.
    pub fn begin_read(&self) -> CellSlice<'_> {
        CellSlice::new(self)
    }

    /// Raw data bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of data bits.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Number of child references.
    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    /// Get a child reference by index.
    pub fn reference(&self, index: usize) -> Option<&Arc<Cell>> {
        self.references.get(index)
    }

    /// Iterate over child references.
    pub fn references(&self) -> impl Iterator<Item = &Arc<Cell>> {
        self.references.iter()
    }
}
