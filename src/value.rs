//! SECS-II item model.
//!
//! A message is a tree of [`Item`]s: thirteen homogeneous leaf kinds plus
//! `List`, whose elements are themselves items. Items own their data —
//! element sequences are `Vec`s and lists hold owned children — so a child
//! lives exactly as long as its parent.
//!
//! `Ascii` stores raw bytes rather than `String`: the wire format permits
//! any byte inside an ASCII item, and decoding must preserve the content
//! verbatim.

use std::fmt;

/// The SECS-II format codes.
///
/// Each variant's discriminant is the 6-bit code carried in the high six
/// bits of an item's format byte. Any other 6-bit code is rejected during
/// decoding; the model never holds an unrecognized format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Format {
    /// List of SECS-II items.
    List = 0b000000,
    /// Binary bytes.
    Binary = 0b001000,
    /// Boolean values.
    Boolean = 0b001001,
    /// An ASCII character string.
    Ascii = 0b010000,
    /// 8-byte signed integers.
    I8 = 0b011000,
    /// 1-byte signed integers.
    I1 = 0b011001,
    /// 2-byte signed integers.
    I2 = 0b011010,
    /// 4-byte signed integers.
    I4 = 0b011100,
    /// 8-byte floating points.
    F8 = 0b100000,
    /// 4-byte floating points.
    F4 = 0b100100,
    /// 8-byte unsigned integers.
    U8 = 0b101000,
    /// 1-byte unsigned integers.
    U1 = 0b101001,
    /// 2-byte unsigned integers.
    U2 = 0b101010,
    /// 4-byte unsigned integers.
    U4 = 0b101100,
}

impl Format {
    /// The 6-bit wire code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a format by its 6-bit wire code.
    pub fn from_code(code: u8) -> Option<Format> {
        match code {
            0b000000 => Some(Format::List),
            0b001000 => Some(Format::Binary),
            0b001001 => Some(Format::Boolean),
            0b010000 => Some(Format::Ascii),
            0b011000 => Some(Format::I8),
            0b011001 => Some(Format::I1),
            0b011010 => Some(Format::I2),
            0b011100 => Some(Format::I4),
            0b100000 => Some(Format::F8),
            0b100100 => Some(Format::F4),
            0b101000 => Some(Format::U8),
            0b101001 => Some(Format::U1),
            0b101010 => Some(Format::U2),
            0b101100 => Some(Format::U4),
            _ => None,
        }
    }

    /// Look up a format by its display name (`"List"`, `"ASCII"`, `"U2"`, …).
    pub fn from_name(name: &str) -> Option<Format> {
        match name {
            "List" => Some(Format::List),
            "Binary" => Some(Format::Binary),
            "Boolean" => Some(Format::Boolean),
            "ASCII" => Some(Format::Ascii),
            "I8" => Some(Format::I8),
            "I1" => Some(Format::I1),
            "I2" => Some(Format::I2),
            "I4" => Some(Format::I4),
            "F8" => Some(Format::F8),
            "F4" => Some(Format::F4),
            "U8" => Some(Format::U8),
            "U1" => Some(Format::U1),
            "U2" => Some(Format::U2),
            "U4" => Some(Format::U4),
            _ => None,
        }
    }

    /// Display name of the format.
    pub const fn name(self) -> &'static str {
        match self {
            Format::List => "List",
            Format::Binary => "Binary",
            Format::Boolean => "Boolean",
            Format::Ascii => "ASCII",
            Format::I8 => "I8",
            Format::I1 => "I1",
            Format::I2 => "I2",
            Format::I4 => "I4",
            Format::F8 => "F8",
            Format::F4 => "F4",
            Format::U8 => "U8",
            Format::U1 => "U1",
            Format::U2 => "U2",
            Format::U4 => "U4",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A SECS-II data item: a single leaf or a list of nested items.
///
/// Equality is structural — same variant and same element sequence for
/// leaves, same sequence of equal children for lists. A decoded list and a
/// hand-built list with equal children compare equal. Float elements
/// compare with IEEE-754 `==`, so `NaN != NaN`; compare bit patterns when
/// that matters.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Ordered sequence of nested items.
    List(Vec<Item>),
    /// Opaque octets.
    Binary(Vec<u8>),
    /// Truth values.
    Boolean(Vec<bool>),
    /// ASCII text as raw bytes. Not NUL-terminated; any byte is allowed.
    Ascii(Vec<u8>),
    /// 1-byte signed integers.
    I1(Vec<i8>),
    /// 2-byte signed integers.
    I2(Vec<i16>),
    /// 4-byte signed integers.
    I4(Vec<i32>),
    /// 8-byte signed integers.
    I8(Vec<i64>),
    /// 1-byte unsigned integers.
    U1(Vec<u8>),
    /// 2-byte unsigned integers.
    U2(Vec<u16>),
    /// 4-byte unsigned integers.
    U4(Vec<u32>),
    /// 8-byte unsigned integers.
    U8(Vec<u64>),
    /// 4-byte floating points.
    F4(Vec<f32>),
    /// 8-byte floating points.
    F8(Vec<f64>),
}

impl Item {
    /// Build an ASCII item from text or raw bytes.
    pub fn ascii(text: impl Into<Vec<u8>>) -> Item {
        Item::Ascii(text.into())
    }

    /// The format of this item.
    pub fn format(&self) -> Format {
        match self {
            Item::List(_) => Format::List,
            Item::Binary(_) => Format::Binary,
            Item::Boolean(_) => Format::Boolean,
            Item::Ascii(_) => Format::Ascii,
            Item::I1(_) => Format::I1,
            Item::I2(_) => Format::I2,
            Item::I4(_) => Format::I4,
            Item::I8(_) => Format::I8,
            Item::U1(_) => Format::U1,
            Item::U2(_) => Format::U2,
            Item::U4(_) => Format::U4,
            Item::U8(_) => Format::U8,
            Item::F4(_) => Format::F4,
            Item::F8(_) => Format::F8,
        }
    }

    /// Number of elements in a leaf, or direct children in a list.
    ///
    /// A list counts only its own elements; nothing nested inside them.
    pub fn len(&self) -> usize {
        match self {
            Item::List(v) => v.len(),
            Item::Binary(v) => v.len(),
            Item::Boolean(v) => v.len(),
            Item::Ascii(v) => v.len(),
            Item::I1(v) => v.len(),
            Item::I2(v) => v.len(),
            Item::I4(v) => v.len(),
            Item::I8(v) => v.len(),
            Item::U1(v) => v.len(),
            Item::U2(v) => v.len(),
            Item::U4(v) => v.len(),
            Item::U8(v) => v.len(),
            Item::F4(v) => v.len(),
            Item::F8(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Typed projections ────────────────────────────────────────
// Each accessor returns the element slice if and only if the item is the
// matching variant.

macro_rules! projection {
    ($name:ident, $variant:ident, $elem:ty) => {
        /// The element slice, if this item is the matching variant.
        pub fn $name(&self) -> Option<&[$elem]> {
            match self {
                Item::$variant(v) => Some(v),
                _ => None,
            }
        }
    };
}

impl Item {
    projection!(as_list, List, Item);
    projection!(as_binary, Binary, u8);
    projection!(as_boolean, Boolean, bool);
    projection!(as_ascii, Ascii, u8);
    projection!(as_i1, I1, i8);
    projection!(as_i2, I2, i16);
    projection!(as_i4, I4, i32);
    projection!(as_i8, I8, i64);
    projection!(as_u1, U1, u8);
    projection!(as_u2, U2, u16);
    projection!(as_u4, U4, u32);
    projection!(as_u8, U8, u64);
    projection!(as_f4, F4, f32);
    projection!(as_f8, F8, f64);
}
