//! SECS-II binary encoder.
//!
//! Wire layout per item:
//!
//! ```text
//! 7  6  5  4  3  2   1  0
//! ┌────────────────┬──────┐
//! │  format code   │  N   │
//! ├────────────────┴──────┤
//! │ length bytes (N, big-endian, most significant first)
//! ├───────────────────────┤
//! │ item body             │
//! └───────────────────────┘
//! ```
//!
//! The length is the body size in bytes for a leaf item and the direct
//! element count for a list; a list body is the concatenation of its
//! encoded elements. The encoder always emits the minimum N that admits
//! the length. Multi-byte elements are written big-endian.

use std::mem::size_of;

use crate::constants::*;
use crate::errors::*;
use crate::value::{Format, Item};

/// Number of length bytes required for `len`, or `None` past [`MAX_LENGTH`].
pub(crate) const fn length_byte_count(len: usize) -> Option<usize> {
    if len <= u8::MAX as usize {
        Some(1)
    } else if len <= u16::MAX as usize {
        Some(2)
    } else if len <= MAX_LENGTH {
        Some(3)
    } else {
        None
    }
}

/// Wire length of an item: body size in bytes for a leaf, direct element
/// count for a list.
pub fn wire_length(item: &Item) -> usize {
    match item {
        Item::List(v) => v.len(),
        Item::Binary(v) => v.len(),
        Item::Boolean(v) => v.len(),
        Item::Ascii(v) => v.len(),
        Item::I1(v) => v.len(),
        Item::I2(v) => v.len() * size_of::<i16>(),
        Item::I4(v) => v.len() * size_of::<i32>(),
        Item::I8(v) => v.len() * size_of::<i64>(),
        Item::U1(v) => v.len(),
        Item::U2(v) => v.len() * size_of::<u16>(),
        Item::U4(v) => v.len() * size_of::<u32>(),
        Item::U8(v) => v.len() * size_of::<u64>(),
        Item::F4(v) => v.len() * size_of::<f32>(),
        Item::F8(v) => v.len() * size_of::<f64>(),
    }
}

/// Append the encoded form of `item` to `buf`.
///
/// Returns the number of bytes appended. On any failure `buf` is truncated
/// back to its pre-call length, so the call is all-or-nothing even when a
/// nested element fails midway through a list.
pub fn write_message(item: &Item, buf: &mut Vec<u8>) -> Result<usize, Secs2Error> {
    let start = buf.len();
    match write_item(item, buf, 0) {
        Ok(written) => Ok(written),
        Err(err) => {
            buf.truncate(start);
            Err(err)
        }
    }
}

/// Encode one item at the given nesting depth.
///
/// Depth semantics: the root call starts at 0 and entering a list checks
/// `depth + 1` against `MAX_DEPTH`; leaves never increment.
fn write_item(item: &Item, buf: &mut Vec<u8>, depth: usize) -> Result<usize, Secs2Error> {
    let len = wire_length(item);
    let Some(len_byte_count) = length_byte_count(len) else {
        return Err(Secs2Error::new(
            ErrorKind::LengthOverflow,
            format!("{} length {} exceeds maximum {}", item.format(), len, MAX_LENGTH),
        ));
    };
    if let Item::List(_) = item {
        if depth + 1 > MAX_DEPTH {
            return Err(Secs2Error::new(
                ErrorKind::TooDeep,
                format!("list nesting exceeds {} levels", MAX_DEPTH),
            ));
        }
    }

    let start = buf.len();
    push_header(buf, item.format(), len, len_byte_count);
    match item {
        Item::List(elems) => {
            for elem in elems {
                write_item(elem, buf, depth + 1)?;
            }
        }
        Item::Binary(vals) => buf.extend_from_slice(vals),
        Item::Boolean(vals) => buf.extend(vals.iter().map(|&b| b as u8)),
        Item::Ascii(vals) => buf.extend_from_slice(vals),
        Item::I1(vals) => buf.extend(vals.iter().map(|&v| v as u8)),
        Item::I2(vals) => push_elems(buf, vals, |v| v.to_be_bytes()),
        Item::I4(vals) => push_elems(buf, vals, |v| v.to_be_bytes()),
        Item::I8(vals) => push_elems(buf, vals, |v| v.to_be_bytes()),
        Item::U1(vals) => buf.extend_from_slice(vals),
        Item::U2(vals) => push_elems(buf, vals, |v| v.to_be_bytes()),
        Item::U4(vals) => push_elems(buf, vals, |v| v.to_be_bytes()),
        Item::U8(vals) => push_elems(buf, vals, |v| v.to_be_bytes()),
        Item::F4(vals) => push_elems(buf, vals, |v| v.to_be_bytes()),
        Item::F8(vals) => push_elems(buf, vals, |v| v.to_be_bytes()),
    }
    Ok(buf.len() - start)
}

/// Append the format byte and `len_byte_count` big-endian length bytes.
fn push_header(buf: &mut Vec<u8>, format: Format, len: usize, len_byte_count: usize) {
    buf.push(format.code() << LENGTH_BIT_COUNT | len_byte_count as u8);
    let be = (len as u32).to_be_bytes();
    buf.extend_from_slice(&be[size_of::<u32>() - len_byte_count..]);
}

fn push_elems<T: Copy, const W: usize>(buf: &mut Vec<u8>, vals: &[T], to_be: impl Fn(T) -> [u8; W]) {
    for &val in vals {
        buf.extend_from_slice(&to_be(val));
    }
}
