//! CellSlice for reading data from cells.
//!
//! A CellSlice is a bit cursor over one cell, tracking the current position
//! within the cell's data and references.

use crate::{Cell, CellError, CellResult};

/// A read cursor into a [`Cell`].
///
/// Tracks the current bit position and reference position, and allows
/// sequential reading of bits, integers, bytes, references and strings.
#[derive(Debug, Clone)]
pub struct CellSlice<'a> {
    /// The underlying cell.
    pub(crate) cell: &'a Cell,
    /// Current bit offset within the cell data.
    pub(crate) bit_offset: usize,
    /// Number of bits remaining from `bit_offset`.
    pub(crate) bit_len: usize,
    /// Current reference offset.
    pub(crate) ref_offset: usize,
}

impl<'a> CellSlice<'a> {
    /// Create a new slice positioned at the start of a cell.
    pub fn new(cell: &'a Cell) -> Self {
        CellSlice {
            cell,
            bit_offset: 0,
            bit_len: cell.bit_len(),
            ref_offset: 0,
        }
    }

    /// Load a single bit.
    pub fn load_bit(&mut self) -> CellResult<bool> {
        if self.bit_len == 0 {
            return Err(CellError::NotEnoughBits { need: 1, have: 0 });
        }

        let bit = self.get_bit_at(self.bit_offset);
        self.bit_offset += 1;
        self.bit_len -= 1;
        Ok(bit)
    }

    /// Load an unsigned integer with a specific bit width (big-endian).
    pub fn load_uint(&mut self, bits: usize) -> CellResult<u64> {
        if bits == 0 {
            return Ok(0);
        }

        if bits > 64 {
            return Err(CellError::InvalidBitLength(bits));
        }

        if bits > self.bit_len {
            return Err(CellError::NotEnoughBits {
                need: bits,
                have: self.bit_len,
            });
        }

        let mut result: u64 = 0;
        for _ in 0..bits {
            result = (result << 1) | (self.load_bit()? as u64);
        }

        Ok(result)
    }

    /// Load an unsigned 8-bit integer.
    pub fn load_u8(&mut self) -> CellResult<u8> {
        self.load_uint(8).map(|v| v as u8)
    }

    /// Load a byte array.
    pub fn load_bytes(&mut self, count: usize) -> CellResult<Vec<u8>> {
        let bits_needed = count * 8;
        if bits_needed > self.bit_len {
            return Err(CellError::NotEnoughBits {
                need: bits_needed,
                have: self.bit_len,
            });
        }

        let mut result = Vec::with_capacity(count);
        for _ in 0..count {
            result.push(self.load_u8()?);
        }
        Ok(result)
    }

    /// Load the next reference.
    pub fn load_ref(&mut self) -> CellResult<&'a Cell> {
        if self.refs_left() == 0 {
            return Err(CellError::NotEnoughRefs { need: 1, have: 0 });
        }

        let reference = self
            .cell
            .reference(self.ref_offset)
            .ok_or(CellError::NotEnoughRefs { need: 1, have: 0 })?;
        self.ref_offset += 1;
        Ok(reference.as_ref())
    }

    /// Decode the remainder of this slice as a plain string.
    ///
    /// Reads all remaining whole bytes, follows the single continuation
    /// reference chain across cells, and interprets the result as UTF-8.
    /// No chunk tag is expected. An empty remainder yields an empty string.
    pub fn load_string(&mut self) -> CellResult<String> {
        let mut bytes = Vec::new();

        while self.bits_left() >= 8 {
            bytes.push(self.load_u8()?);
        }

        let mut next = if self.refs_left() > 0 {
            Some(self.load_ref()?)
        } else {
            None
        };

        while let Some(cell) = next {
            let mut segment = cell.begin_read();
            while segment.bits_left() >= 8 {
                bytes.push(segment.load_u8()?);
            }
            next = if segment.refs_left() > 0 {
                Some(segment.load_ref()?)
            } else {
                None
            };
        }

        String::from_utf8(bytes).map_err(|e| CellError::InvalidSnakeString(e.to_string()))
    }

    /// Decode a snake string: a 1-byte `0x00` tag followed by the chained
    /// payload of [`load_string`](Self::load_string).
    pub fn load_string_snake(&mut self) -> CellResult<String> {
        let tag = self.load_u8()?;
        if tag != 0x00 {
            return Err(CellError::InvalidSnakeString(format!(
                "unexpected tag 0x{tag:02x}"
            )));
        }
        self.load_string()
    }

    /// Decode chunked string content.
    ///
    /// Chunked content shares the snake layout: a `0x00` tag on the first
    /// segment, then payload cells linked by a single forward reference each.
    pub fn load_string_chunked(&mut self) -> CellResult<String> {
        self.load_string_snake()
    }

    /// Number of bits remaining.
    pub fn bits_left(&self) -> usize {
        self.bit_len
    }

    /// Number of references remaining.
    pub fn refs_left(&self) -> usize {
        self.cell.reference_count() - self.ref_offset
    }

    /// Skip a number of bits.
    pub fn skip_bits(&mut self, count: usize) -> CellResult<()> {
        if count > self.bit_len {
            return Err(CellError::NotEnoughBits {
                need: count,
                have: self.bit_len,
            });
        }

        self.bit_offset += count;
        self.bit_len -= count;
        Ok(())
    }

    /// Check if the slice has no bits or refs left.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0 && self.refs_left() == 0
    }

    pub(crate) fn get_bit_at(&self, index: usize) -> bool {
        let byte_index = index / 8;
        let bit_index = 7 - (index % 8);

        if byte_index < self.cell.data().len() {
            (self.cell.data()[byte_index] >> bit_index) & 1 == 1
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::CellBuilder;

    #[test]
    fn test_load_bit() {
        let mut builder = CellBuilder::new();
        builder.store_bit(true).unwrap();
        builder.store_bit(false).unwrap();
        builder.store_bit(true).unwrap();
        let cell = builder.build().unwrap();

        let mut slice = cell.begin_read();
        assert!(slice.load_bit().unwrap());
        assert!(!slice.load_bit().unwrap());
        assert!(slice.load_bit().unwrap());
        assert!(slice.load_bit().is_err());
    }

    #[test]
    fn test_skip_bits() {
        let mut builder = CellBuilder::new();
        builder.store_u8(0xAB).unwrap();
        builder.store_u8(0xCD).unwrap();
        let cell = builder.build().unwrap();

        let mut slice = cell.begin_read();
        slice.skip_bits(8).unwrap();
        assert_eq!(slice.load_u8().unwrap(), 0xCD);
    }

    #[test]
    fn test_plain_string_roundtrip() {
        let mut builder = CellBuilder::new();
        builder.store_bytes("hello".as_bytes()).unwrap();
        let cell = builder.build().unwrap();

        assert_eq!(cell.begin_read().load_string().unwrap(), "hello");
    }

    #[test]
    fn test_plain_string_empty() {
        let cell = CellBuilder::new().build().unwrap();
        assert_eq!(cell.begin_read().load_string().unwrap(), "");
    }

    #[test]
    fn test_snake_string_roundtrip_short() {
        let mut builder = CellBuilder::new();
        builder.store_u8(0x00).unwrap();
        builder.store_string_snake("hello").unwrap();
        let cell = builder.build().unwrap();

        assert_eq!(cell.begin_read().load_string_snake().unwrap(), "hello");
    }

    #[test]
    fn test_snake_string_roundtrip_multi_segment() {
        // 300 bytes needs three chain segments (126 + 127 + 47).
        let long: String = "abcdefghij".repeat(30);
        let mut builder = CellBuilder::new();
        builder.store_u8(0x00).unwrap();
        builder.store_string_snake(&long).unwrap();
        let cell = builder.build().unwrap();

        assert_eq!(cell.begin_read().load_string_snake().unwrap(), long);
    }

    #[test]
    fn test_snake_string_empty() {
        let mut builder = CellBuilder::new();
        builder.store_u8(0x00).unwrap();
        builder.store_string_snake("").unwrap();
        let cell = builder.build().unwrap();

        assert_eq!(cell.begin_read().load_string_snake().unwrap(), "");
    }

    #[test]
    fn test_snake_string_bad_tag() {
        let mut builder = CellBuilder::new();
        builder.store_u8(0x42).unwrap();
        let cell = builder.build().unwrap();

        assert!(cell.begin_read().load_string_snake().is_err());
    }

    #[test]
    fn test_chunked_matches_snake_layout() {
        let data = "x".repeat(200);
        let mut builder = CellBuilder::new();
        builder.store_u8(0x00).unwrap();
        builder.store_string_snake(&data).unwrap();
        let cell = builder.build().unwrap();

        assert_eq!(cell.begin_read().load_string_chunked().unwrap(), data);
    }
}
