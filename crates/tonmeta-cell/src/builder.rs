//! CellBuilder for constructing cells.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::dict::store_dict_root;
use crate::{Cell, CellError, CellResult, MAX_CELL_BITS, MAX_CELL_BYTES, MAX_CELL_REFS};

/// Builder for constructing cells.
///
/// Provides bit-level stores plus the snake-string and dictionary encoders,
/// then finalizes with [`build`](Self::build).
///
/// # Example
///
/// ```
/// use tonmeta_cell::CellBuilder;
///
/// let mut builder = CellBuilder::new();
/// builder.store_uint(0x12345678, 32).unwrap();
/// builder.store_bytes(&[1, 2, 3, 4]).unwrap();
/// let cell = builder.build().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CellBuilder {
    data: Vec<u8>,
    bit_len: usize,
    references: Vec<Arc<Cell>>,
}

impl CellBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        CellBuilder {
            data: Vec::with_capacity(128),
            bit_len: 0,
            references: Vec::new(),
        }
    }

    /// Store a single bit.
    pub fn store_bit(&mut self, bit: bool) -> CellResult<&mut Self> {
        if self.bit_len >= MAX_CELL_BITS {
            return Err(CellError::DataTooLong(self.bit_len + 1));
        }

        let byte_index = self.bit_len / 8;
        let bit_index = 7 - (self.bit_len % 8);

        if byte_index >= self.data.len() {
            self.data.push(0);
        }

        if bit {
            self.data[byte_index] |= 1 << bit_index;
        }

        self.bit_len += 1;
        Ok(self)
    }

    /// Store an unsigned integer with a specific bit width (big-endian).
    pub fn store_uint(&mut self, value: u64, bits: usize) -> CellResult<&mut Self> {
        if bits == 0 {
            return Ok(self);
        }

        if bits > 64 {
            return Err(CellError::InvalidBitLength(bits));
        }

        if self.bit_len + bits > MAX_CELL_BITS {
            return Err(CellError::DataTooLong(self.bit_len + bits));
        }

        for i in (0..bits).rev() {
            self.store_bit(((value >> i) & 1) == 1)?;
        }

        Ok(self)
    }

    /// Store an unsigned 8-bit integer.
    pub fn store_u8(&mut self, value: u8) -> CellResult<&mut Self> {
        self.store_uint(value as u64, 8)
    }

    /// Store a byte array.
    pub fn store_bytes(&mut self, bytes: &[u8]) -> CellResult<&mut Self> {
        for &byte in bytes {
            self.store_u8(byte)?;
        }
        Ok(self)
    }

    /// Store a reference to another cell.
    pub fn store_ref(&mut self, cell: Arc<Cell>) -> CellResult<&mut Self> {
        if self.references.len() >= MAX_CELL_REFS {
            return Err(CellError::TooManyRefs(self.references.len() + 1));
        }

        self.references.push(cell);
        Ok(self)
    }

    /// Store a string in snake format (no tag byte).
    ///
    /// Stores as many whole bytes as fit in this cell, then chains the rest
    /// through continuation cells linked by a single reference each. Segment
    /// capacity is derived from the cell bit budget.
    pub fn store_string_snake(&mut self, s: &str) -> CellResult<&mut Self> {
        let bytes = s.as_bytes();
        let available_bytes = self.bits_left() / 8;

        if bytes.len() <= available_bytes {
            self.store_bytes(bytes)?;
        } else {
            self.store_bytes(&bytes[..available_bytes])?;
            let continuation = build_snake_continuation(&bytes[available_bytes..])?;
            self.store_ref(Arc::new(continuation))?;
        }

        Ok(self)
    }

    /// Store a dictionary with fixed-width keys.
    ///
    /// Stores the maybe-bit, and for a non-empty map a reference to the root
    /// of the edge-labelled binary trie. Every key must be exactly
    /// `key_bits / 8` bytes; each value cell is stored as one reference at
    /// its leaf.
    pub fn store_dict(
        &mut self,
        key_bits: usize,
        entries: &BTreeMap<Vec<u8>, Arc<Cell>>,
    ) -> CellResult<&mut Self> {
        store_dict_root(self, key_bits, entries)?;
        Ok(self)
    }

    /// Number of bits that can still be stored.
    pub fn bits_left(&self) -> usize {
        MAX_CELL_BITS - self.bit_len
    }

    /// Number of references that can still be added.
    pub fn refs_left(&self) -> usize {
        MAX_CELL_REFS - self.references.len()
    }

    /// Current number of bits stored.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Current number of references.
    pub fn ref_count(&self) -> usize {
        self.references.len()
    }

    /// Build the cell, consuming the builder.
    pub fn build(self) -> CellResult<Cell> {
        Ok(Cell::new(self.data, self.bit_len, self.references))
    }
}

impl Default for CellBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds continuation cells for snake format.
fn build_snake_continuation(data: &[u8]) -> CellResult<Cell> {
    let mut builder = CellBuilder::new();

    if data.len() <= MAX_CELL_BYTES {
        builder.store_bytes(data)?;
    } else {
        builder.store_bytes(&data[..MAX_CELL_BYTES])?;
        let continuation = build_snake_continuation(&data[MAX_CELL_BYTES..])?;
        builder.store_ref(Arc::new(continuation))?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builder() {
        let builder = CellBuilder::new();
        assert_eq!(builder.bit_len(), 0);
        assert_eq!(builder.ref_count(), 0);
        assert_eq!(builder.bits_left(), MAX_CELL_BITS);
        assert_eq!(builder.refs_left(), MAX_CELL_REFS);
    }

    #[test]
    fn test_store_bit_layout() {
        let mut builder = CellBuilder::new();
        builder.store_bit(true).unwrap();
        builder.store_bit(false).unwrap();
        builder.store_bit(true).unwrap();

        let cell = builder.build().unwrap();
        assert_eq!(cell.data(), &[0b10100000]);
        assert_eq!(cell.bit_len(), 3);
    }

    #[test]
    fn test_store_uint_layout() {
        let mut builder = CellBuilder::new();
        builder.store_uint(0x12345678, 32).unwrap();

        let cell = builder.build().unwrap();
        assert_eq!(cell.data(), &[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_snake_continuation_chain_length() {
        // 300 payload bytes after a 1-byte tag: 126 in the root, then
        // 127 + 47 across two continuation cells.
        let mut builder = CellBuilder::new();
        builder.store_u8(0x00).unwrap();
        builder.store_string_snake(&"y".repeat(300)).unwrap();
        let root = builder.build().unwrap();

        assert_eq!(root.bit_len(), 8 + 126 * 8);
        let first = root.reference(0).unwrap();
        assert_eq!(first.bit_len(), 127 * 8);
        let second = first.reference(0).unwrap();
        assert_eq!(second.bit_len(), 47 * 8);
        assert_eq!(second.reference_count(), 0);
    }
}
