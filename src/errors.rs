//! SECS-II codec error type.
//!
//! Errors are plain values: a machine-readable kind plus a human-readable
//! message. The deepest failure is returned verbatim to the caller; nothing
//! is swallowed or remapped on the way up. Callers should match on `kind` —
//! message text is diagnostic only and not part of the contract.

use std::fmt;

/// Machine-readable category of a codec failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The buffer ended before the declared length was satisfied.
    Incomplete,
    /// The format byte declares zero length bytes.
    InvalidLengthByteCount,
    /// The format code is not one of the 14 SECS-II codes.
    UnknownFormat,
    /// A leaf item's length is not a multiple of its element width.
    UnalignedLength,
    /// A length exceeds [`MAX_LENGTH`](crate::constants::MAX_LENGTH).
    LengthOverflow,
    /// List nesting exceeds [`MAX_DEPTH`](crate::constants::MAX_DEPTH).
    TooDeep,
    /// JSON text does not describe a SECS-II item.
    InvalidJson,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Incomplete => "incomplete data",
            ErrorKind::InvalidLengthByteCount => "invalid length-byte count",
            ErrorKind::UnknownFormat => "unknown format",
            ErrorKind::UnalignedLength => "unaligned length",
            ErrorKind::LengthOverflow => "length overflow",
            ErrorKind::TooDeep => "nesting too deep",
            ErrorKind::InvalidJson => "invalid JSON item",
        };
        f.write_str(label)
    }
}

/// A SECS-II processing error.
///
/// The `kind` field is what tests and callers compare against; `message`
/// carries context for logs and debugging.
#[derive(Debug, Clone)]
pub struct Secs2Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Secs2Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Secs2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Secs2Error {}
