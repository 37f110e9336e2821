//! SECS-II wire-format constants — header bit layout and normative limits.

/// Maximum length a header can declare: the largest value that fits in
/// three length bytes (2^24 - 1).
///
/// For a leaf item the length is its body size in bytes; for a list it is
/// the number of direct elements, not counting anything nested inside them.
pub const MAX_LENGTH: usize = 0xFF_FFFF;

/// Maximum number of length bytes following the format byte.
pub const MAX_LENGTH_BYTE_COUNT: usize = 3;

// ── Format byte layout ───────────────────────────────────────
// Bit 7 is most significant:
//
//   7  6  5  4  3  2   1  0
//   [  format code   ] [ N ]
//
// The high six bits hold the format code, the low two bits hold N, the
// number of big-endian length bytes that follow.

/// Number of low bits holding the length-byte count.
pub const LENGTH_BIT_COUNT: u32 = 2;

/// Mask extracting the length-byte count from a format byte.
pub const LENGTH_BITS_MASK: u8 = 0b0000_0011;

// ── Safety limits ────────────────────────────────────────────

/// Maximum nesting depth of lists accepted by the encoder and decoder.
///
/// A hostile buffer can declare millions of nested lists in a few dozen
/// bytes; without a ceiling the recursive decoder would exhaust the call
/// stack long before it ran out of input.
pub const MAX_DEPTH: usize = 64;

// ── SML rendering ────────────────────────────────────────────

/// Default number of spaces per indentation level in SML output.
pub const DEFAULT_INDENT_WIDTH: usize = 4;
