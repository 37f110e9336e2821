//! SECS-II binary decoder.
//!
//! Decodes one complete message from the front of a buffer and reports how
//! many bytes it consumed; trailing bytes are left for the caller. The
//! decoder accepts any length-byte count in 1..=3 even when a smaller one
//! would have sufficed — the minimal-length rule binds encoders only, and
//! other SECS-II implementations do ship non-minimal headers.
//!
//! Dispatch over the 14 formats is an exhaustive `match`, so adding a
//! variant without a loader is a compile error.

use crate::constants::*;
use crate::errors::*;
use crate::value::{Format, Item};

/// Decode one message from the front of `bytes`.
///
/// Returns the item and the number of bytes consumed.
pub fn read_message(bytes: &[u8]) -> Result<(Item, usize), Secs2Error> {
    read_item(bytes, 0)
}

/// Decode one item at the given nesting depth.
fn read_item(bytes: &[u8], depth: usize) -> Result<(Item, usize), Secs2Error> {
    let Some(&format_byte) = bytes.first() else {
        return Err(Secs2Error::new(ErrorKind::Incomplete, "empty buffer"));
    };
    let len_byte_count = (format_byte & LENGTH_BITS_MASK) as usize;
    if len_byte_count == 0 {
        return Err(Secs2Error::new(
            ErrorKind::InvalidLengthByteCount,
            format!("format byte 0x{format_byte:02X} declares zero length bytes"),
        ));
    }
    if bytes.len() < 1 + len_byte_count {
        return Err(Secs2Error::new(
            ErrorKind::Incomplete,
            format!(
                "header needs {} bytes, buffer has {}",
                1 + len_byte_count,
                bytes.len()
            ),
        ));
    }

    let mut len = 0usize;
    for &b in &bytes[1..1 + len_byte_count] {
        len = len << 8 | b as usize;
    }

    let code = format_byte >> LENGTH_BIT_COUNT;
    let Some(format) = Format::from_code(code) else {
        return Err(Secs2Error::new(
            ErrorKind::UnknownFormat,
            format!("unknown format code 0x{code:02X}"),
        ));
    };

    let body = &bytes[1 + len_byte_count..];
    let (item, consumed) = match format {
        Format::List => read_list(body, len, depth)?,
        Format::Binary => {
            let (vals, n) = read_elems(body, format, len, |b: [u8; 1]| b[0])?;
            (Item::Binary(vals), n)
        }
        Format::Boolean => {
            // Any nonzero byte is true, not just 0x01.
            let (vals, n) = read_elems(body, format, len, |b: [u8; 1]| b[0] != 0)?;
            (Item::Boolean(vals), n)
        }
        Format::Ascii => {
            let (vals, n) = read_elems(body, format, len, |b: [u8; 1]| b[0])?;
            (Item::Ascii(vals), n)
        }
        Format::I1 => {
            let (vals, n) = read_elems(body, format, len, |b: [u8; 1]| b[0] as i8)?;
            (Item::I1(vals), n)
        }
        Format::I2 => {
            let (vals, n) = read_elems(body, format, len, i16::from_be_bytes)?;
            (Item::I2(vals), n)
        }
        Format::I4 => {
            let (vals, n) = read_elems(body, format, len, i32::from_be_bytes)?;
            (Item::I4(vals), n)
        }
        Format::I8 => {
            let (vals, n) = read_elems(body, format, len, i64::from_be_bytes)?;
            (Item::I8(vals), n)
        }
        Format::U1 => {
            let (vals, n) = read_elems(body, format, len, |b: [u8; 1]| b[0])?;
            (Item::U1(vals), n)
        }
        Format::U2 => {
            let (vals, n) = read_elems(body, format, len, u16::from_be_bytes)?;
            (Item::U2(vals), n)
        }
        Format::U4 => {
            let (vals, n) = read_elems(body, format, len, u32::from_be_bytes)?;
            (Item::U4(vals), n)
        }
        Format::U8 => {
            let (vals, n) = read_elems(body, format, len, u64::from_be_bytes)?;
            (Item::U8(vals), n)
        }
        Format::F4 => {
            let (vals, n) = read_elems(body, format, len, f32::from_be_bytes)?;
            (Item::F4(vals), n)
        }
        Format::F8 => {
            let (vals, n) = read_elems(body, format, len, f64::from_be_bytes)?;
            (Item::F8(vals), n)
        }
    };
    Ok((item, 1 + len_byte_count + consumed))
}

/// Decode `count` nested items as the body of a list.
///
/// Depth semantics mirror the encoder: the root starts at 0 and entering a
/// list checks `depth + 1` against `MAX_DEPTH`; leaves never increment.
fn read_list(body: &[u8], count: usize, depth: usize) -> Result<(Item, usize), Secs2Error> {
    if depth + 1 > MAX_DEPTH {
        return Err(Secs2Error::new(
            ErrorKind::TooDeep,
            format!("list nesting exceeds {} levels", MAX_DEPTH),
        ));
    }

    // The header can declare up to MAX_LENGTH children without backing
    // them with bytes; cap the reservation by what the buffer could
    // actually hold (every encoded child takes at least two bytes).
    let mut elems = Vec::with_capacity(count.min(body.len() / 2));
    let mut consumed = 0;
    for _ in 0..count {
        let (elem, n) = read_item(&body[consumed..], depth + 1)?;
        consumed += n;
        elems.push(elem);
    }
    Ok((Item::List(elems), consumed))
}

/// Decode a leaf body of `len` bytes into elements of width `W`.
fn read_elems<T, const W: usize>(
    body: &[u8],
    format: Format,
    len: usize,
    read: impl Fn([u8; W]) -> T,
) -> Result<(Vec<T>, usize), Secs2Error> {
    if body.len() < len {
        return Err(Secs2Error::new(
            ErrorKind::Incomplete,
            format!("{} body needs {} bytes, buffer has {}", format, len, body.len()),
        ));
    }
    if len % W != 0 {
        return Err(Secs2Error::new(
            ErrorKind::UnalignedLength,
            format!("length {len} is not aligned to {format} element size {W}"),
        ));
    }

    // The buffer is known to hold `len` bytes at this point, so the
    // reservation below is backed by real input.
    let count = len / W;
    let mut vals = Vec::with_capacity(count);
    for chunk in body[..len].chunks_exact(W) {
        let mut elem = [0u8; W];
        elem.copy_from_slice(chunk);
        vals.push(read(elem));
    }
    Ok((vals, len))
}
