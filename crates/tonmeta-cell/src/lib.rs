//! Minimal TON cell tree for token metadata.
//!
//! This crate provides the cell-level primitives the TEP-64 metadata codec
//! reads and writes:
//!
//! - **Cell**: an immutable node holding up to 1023 bits and 4 references
//! - **CellBuilder**: bit-level writer, including snake strings and
//!   dictionaries
//! - **CellSlice**: bit cursor, including the plain/snake/chunked string
//!   decoders
//! - **HashmapE dictionaries**: decode/encode of the 256-bit-keyed binary
//!   trie used by on-chain content
//!
//! # Example
//!
//! ```
//! use tonmeta_cell::CellBuilder;
//!
//! let mut builder = CellBuilder::new();
//! builder.store_u8(0x01).unwrap();
//! builder.store_string_snake("https://example.com/a.json").unwrap();
//! let cell = builder.build().unwrap();
//!
//! let mut slice = cell.begin_read();
//! assert_eq!(slice.load_u8().unwrap(), 0x01);
//! assert_eq!(slice.load_string().unwrap(), "https://example.com/a.json");
//! ```

use thiserror::Error;

mod builder;
mod cell;
mod dict;
mod slice;

pub use builder::CellBuilder;
pub use cell::Cell;
pub use dict::try_load_dict;
pub use slice::CellSlice;

/// Errors that can occur during cell operations.
#[derive(Debug, Error)]
pub enum CellError {
    /// The cell data exceeds the maximum of 1023 bits.
    #[error("Cell data too long: {0} bits (max 1023)")]
    DataTooLong(usize),

    /// The cell has too many references (max 4).
    #[error("Too many cell references: {0} (max 4)")]
    TooManyRefs(usize),

    /// Not enough bits available.
    #[error("Not enough bits: need {need}, have {have}")]
    NotEnoughBits { need: usize, have: usize },

    /// Not enough references available.
    #[error("Not enough refs: need {need}, have {have}")]
    NotEnoughRefs { need: usize, have: usize },

    /// Invalid bit length for an integer load/store.
    #[error("Invalid bit length: {0}")]
    InvalidBitLength(usize),

    /// Invalid snake string format.
    #[error("Invalid snake string format: {0}")]
    InvalidSnakeString(String),

    /// Invalid dictionary structure.
    #[error("Invalid dictionary: {0}")]
    InvalidDictionary(String),
}

/// Result type for cell operations.
pub type CellResult<T> = Result<T, CellError>;

/// Maximum number of bits in a cell's data.
pub const MAX_CELL_BITS: usize = 1023;

/// Maximum number of references a cell can have.
pub const MAX_CELL_REFS: usize = 4;

/// Maximum whole bytes that fit in a fresh cell.
pub const MAX_CELL_BYTES: usize = MAX_CELL_BITS / 8;
