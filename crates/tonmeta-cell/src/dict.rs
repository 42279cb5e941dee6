//! HashmapE dictionary codec.
//!
//! On-chain content stores its categories in a `HashmapE` — an edge-labelled
//! binary trie over fixed-width keys, rooted behind a maybe-bit. Edge labels
//! use one of three encodings:
//!
//! - `hml_short$0`: unary length, then the label bits
//! - `hml_long$10`: binary length, then the label bits
//! - `hml_same$11`: one bit repeated a binary-encoded number of times
//!
//! A leaf (no key bits remaining) carries its value; a fork carries two
//! references, left for bit 0 and right for bit 1. Values are stored as a
//! single reference per leaf, and the decoder descends into a lone value
//! reference so both layouts read back as a positioned cursor.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{Cell, CellBuilder, CellError, CellResult, CellSlice};

/// Try to parse a dictionary from the current cursor position.
///
/// Returns `None` if the structure is absent or malformed, and
/// `Some(vec![])` for a present dictionary with zero entries (maybe-bit 0).
/// Keys come out as `key_bits / 8` bytes; values are unread cursors
/// positioned at the start of each entry's content.
pub fn try_load_dict<'a>(
    slice: &mut CellSlice<'a>,
    key_bits: usize,
) -> Option<Vec<(Vec<u8>, CellSlice<'a>)>> {
    load_dict(slice, key_bits).ok()
}

fn load_dict<'a>(
    slice: &mut CellSlice<'a>,
    key_bits: usize,
) -> CellResult<Vec<(Vec<u8>, CellSlice<'a>)>> {
    if key_bits == 0 || key_bits % 8 != 0 {
        return Err(CellError::InvalidDictionary(format!(
            "unsupported key width: {key_bits} bits"
        )));
    }

    if !slice.load_bit()? {
        return Ok(Vec::new());
    }

    let root = slice.load_ref()?;
    let mut entries = Vec::new();
    load_edge(root, Vec::new(), key_bits, &mut entries)?;
    Ok(entries)
}

fn load_edge<'a>(
    cell: &'a Cell,
    mut prefix: Vec<bool>,
    remaining: usize,
    entries: &mut Vec<(Vec<u8>, CellSlice<'a>)>,
) -> CellResult<()> {
    let mut slice = cell.begin_read();
    let label_len = load_label(&mut slice, remaining, &mut prefix)?;

    if label_len > remaining {
        return Err(CellError::InvalidDictionary(format!(
            "label of {label_len} bits exceeds {remaining} remaining key bits"
        )));
    }

    let left = remaining - label_len;
    if left == 0 {
        // Leaf. A remainder that is exactly one reference holds the value
        // behind that reference.
        let value = if slice.bits_left() == 0 && slice.refs_left() == 1 {
            slice.load_ref()?.begin_read()
        } else {
            slice
        };
        entries.push((bits_to_bytes(&prefix), value));
        return Ok(());
    }

    let left_cell = slice.load_ref()?;
    let right_cell = slice.load_ref()?;

    let mut left_prefix = prefix.clone();
    left_prefix.push(false);
    load_edge(left_cell, left_prefix, left - 1, entries)?;

    prefix.push(true);
    load_edge(right_cell, prefix, left - 1, entries)
}

/// Parse an edge label, appending its bits to `prefix`. Returns the label
/// length.
fn load_label(slice: &mut CellSlice<'_>, remaining: usize, prefix: &mut Vec<bool>) -> CellResult<usize> {
    if !slice.load_bit()? {
        // hml_short$0: unary length.
        let mut len = 0;
        while slice.load_bit()? {
            len += 1;
        }
        for _ in 0..len {
            prefix.push(slice.load_bit()?);
        }
        Ok(len)
    } else if !slice.load_bit()? {
        // hml_long$10
        let len = slice.load_uint(len_bits(remaining))? as usize;
        for _ in 0..len {
            prefix.push(slice.load_bit()?);
        }
        Ok(len)
    } else {
        // hml_same$11
        let bit = slice.load_bit()?;
        let len = slice.load_uint(len_bits(remaining))? as usize;
        for _ in 0..len {
            prefix.push(bit);
        }
        Ok(len)
    }
}

/// Store the maybe-bit and, for a non-empty map, the trie root reference.
pub(crate) fn store_dict_root(
    builder: &mut CellBuilder,
    key_bits: usize,
    entries: &BTreeMap<Vec<u8>, Arc<Cell>>,
) -> CellResult<()> {
    if key_bits == 0 || key_bits % 8 != 0 {
        return Err(CellError::InvalidDictionary(format!(
            "unsupported key width: {key_bits} bits"
        )));
    }

    if entries.is_empty() {
        builder.store_bit(false)?;
        return Ok(());
    }

    let mut pairs = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        if key.len() * 8 != key_bits {
            return Err(CellError::InvalidDictionary(format!(
                "key is {} bits, expected {key_bits}",
                key.len() * 8
            )));
        }
        pairs.push((bytes_to_bits(key), value.clone()));
    }

    builder.store_bit(true)?;
    builder.store_ref(Arc::new(build_edge(&pairs, key_bits)?))?;
    Ok(())
}

fn build_edge(pairs: &[(Vec<bool>, Arc<Cell>)], remaining: usize) -> CellResult<Cell> {
    let label_len = common_prefix_len(pairs);
    let label = &pairs[0].0[..label_len];

    let mut builder = CellBuilder::new();
    store_label(&mut builder, label, remaining)?;

    let left = remaining - label_len;
    if left == 0 {
        builder.store_ref(pairs[0].1.clone())?;
        return builder.build();
    }

    let mut zeros = Vec::new();
    let mut ones = Vec::new();
    for (key, value) in pairs {
        let rest = key[label_len + 1..].to_vec();
        if key[label_len] {
            ones.push((rest, value.clone()));
        } else {
            zeros.push((rest, value.clone()));
        }
    }

    builder.store_ref(Arc::new(build_edge(&zeros, left - 1)?))?;
    builder.store_ref(Arc::new(build_edge(&ones, left - 1)?))?;
    builder.build()
}

/// Store an edge label with the smallest of the three encodings.
fn store_label(builder: &mut CellBuilder, label: &[bool], remaining: usize) -> CellResult<()> {
    let len = label.len();
    let width = len_bits(remaining);

    let same = len > 0 && label.iter().all(|&b| b == label[0]);
    let short_cost = 2 * len + 2;
    let long_cost = 2 + width + len;
    let same_cost = 3 + width;

    if same && same_cost < short_cost && same_cost < long_cost {
        builder.store_uint(0b11, 2)?;
        builder.store_bit(label[0])?;
        builder.store_uint(len as u64, width)?;
    } else if short_cost <= long_cost {
        builder.store_bit(false)?;
        for _ in 0..len {
            builder.store_bit(true)?;
        }
        builder.store_bit(false)?;
        for &bit in label {
            builder.store_bit(bit)?;
        }
    } else {
        builder.store_uint(0b10, 2)?;
        builder.store_uint(len as u64, width)?;
        for &bit in label {
            builder.store_bit(bit)?;
        }
    }

    Ok(())
}

/// Bits needed to encode a label length in `0..=n`.
fn len_bits(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

fn common_prefix_len(pairs: &[(Vec<bool>, Arc<Cell>)]) -> usize {
    let first = &pairs[0].0;
    let mut len = first.len();
    for (key, _) in &pairs[1..] {
        let shared = first
            .iter()
            .zip(key.iter())
            .take_while(|(a, b)| a == b)
            .count();
        len = len.min(shared);
    }
    len
}

fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 == 1);
        }
    }
    bits
}

fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; bits.len() / 8];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            bytes[i / 8] |= 1 << (7 - (i % 8));
        }
    }
    bytes
}
