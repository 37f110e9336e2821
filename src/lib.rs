//! # secs2 — SECS-II (SEMI E5) message codec
//!
//! Serialization, deserialization and SML (SECS Message Language)
//! representation of the SECS-II data items exchanged between
//! semiconductor-manufacturing equipment and host controllers.
//!
//! ```
//! use secs2::{decode, encode, render_sml, Item};
//!
//! let report = Item::List(vec![
//!     Item::ascii("LOT-42"),
//!     Item::U2(vec![1, 2, 3]),
//! ]);
//!
//! let bytes = encode(&report).unwrap();
//! let (decoded, consumed) = decode(&bytes).unwrap();
//! assert_eq!(decoded, report);
//! assert_eq!(consumed, bytes.len());
//!
//! println!("{}", render_sml(&decoded, 4));
//! ```
//!
//! The library is transport-agnostic: it begins and ends at the byte
//! buffer. Framing messages over HSMS or a serial line, and interpreting
//! stream/function codes, are the caller's concern.

pub mod constants;
pub mod decode;
pub mod encode;
pub mod errors;
pub mod json_adapter;
pub mod sml;
pub mod value;

pub use constants::{DEFAULT_INDENT_WIDTH, MAX_DEPTH, MAX_LENGTH};
pub use errors::{ErrorKind, Secs2Error};
pub use json_adapter::{item_from_json, item_to_json};
pub use value::{Format, Item};

// ── Core API ─────────────────────────────────────────────────

/// Decode one message from the front of `bytes`.
///
/// Returns the decoded item and the number of bytes consumed. Bytes beyond
/// the decoded message are left alone; the consumed count lets the caller
/// locate them.
pub fn decode(bytes: &[u8]) -> Result<(Item, usize), Secs2Error> {
    decode::read_message(bytes)
}

/// Encode `item` to a fresh byte buffer.
///
/// Fails with [`ErrorKind::LengthOverflow`] when any node's length exceeds
/// [`MAX_LENGTH`], and with [`ErrorKind::TooDeep`] past [`MAX_DEPTH`]
/// nested lists. Use [`encode::write_message`] to append to an existing
/// buffer instead.
pub fn encode(item: &Item) -> Result<Vec<u8>, Secs2Error> {
    let mut buf = Vec::with_capacity(encode::wire_length(item) + 1 + constants::MAX_LENGTH_BYTE_COUNT);
    encode::write_message(item, &mut buf)?;
    Ok(buf)
}

/// Render `item` as an SML string with `indent_width` spaces per nesting
/// level.
///
/// `Item` also implements `Display` using [`DEFAULT_INDENT_WIDTH`].
pub fn render_sml(item: &Item, indent_width: usize) -> String {
    sml::render(item, indent_width)
}
