//! SML (SECS Message Language) rendering.
//!
//! Renders an item as the indented bracketed text form used in equipment
//! logs and test fixtures:
//!
//! ```text
//! <L [2]
//!     <U2 [3] 1 2 3>
//!     <A [5] "hello">
//! >
//! ```
//!
//! Leaves render on one line as `<TAG [count] elem elem …>`, or
//! `<TAG [0]>` when empty; the count is the element count, not the wire
//! length. Each list element takes its own line, one level deeper; the
//! closing `>` sits at the list's own indent.

use std::fmt;

use crate::constants::DEFAULT_INDENT_WIDTH;
use crate::value::{Format, Item};

/// Render `item` as an SML string with `indent_width` spaces per nesting
/// level. Level 0 has no leading spaces and the output carries no trailing
/// newline.
pub fn render(item: &Item, indent_width: usize) -> String {
    Sml { item, indent_width }.to_string()
}

impl Item {
    /// SML form of this item. See [`render`].
    pub fn to_sml(&self, indent_width: usize) -> String {
        render(self, indent_width)
    }
}

/// Single-character or full SML tag of a format.
const fn sml_tag(format: Format) -> &'static str {
    match format {
        Format::List => "L",
        Format::Binary => "B",
        Format::Ascii => "A",
        // Boolean keeps its full name in SML.
        _ => format.name(),
    }
}

/// Formats the item at the default indent width, so items can be printed
/// directly with `{}`.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_item(f, self, 0, DEFAULT_INDENT_WIDTH)
    }
}

struct Sml<'a> {
    item: &'a Item,
    indent_width: usize,
}

impl fmt::Display for Sml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_item(f, self.item, 0, self.indent_width)
    }
}

fn write_item(
    f: &mut fmt::Formatter<'_>,
    item: &Item,
    level: usize,
    width: usize,
) -> fmt::Result {
    let pad = level * width;
    match item {
        Item::List(elems) => {
            writeln!(f, "{:pad$}<L [{}]", "", elems.len())?;
            for elem in elems {
                write_item(f, elem, level + 1, width)?;
                f.write_str("\n")?;
            }
            write!(f, "{:pad$}>", "")
        }
        Item::Ascii(bytes) => {
            if bytes.is_empty() {
                return write!(f, "{:pad$}<A [0]>", "");
            }
            write!(f, "{:pad$}<A [{}] \"", "", bytes.len())?;
            for &b in bytes {
                write!(f, "{}", b as char)?;
            }
            f.write_str("\">")
        }
        Item::Binary(vals) => write_leaf(f, item, pad, vals, |f, b| write!(f, "0x{b:02X}")),
        Item::Boolean(vals) => write_leaf(f, item, pad, vals, |f, v| write!(f, "{v}")),
        Item::I1(vals) => write_leaf(f, item, pad, vals, |f, v| write!(f, "{v}")),
        Item::I2(vals) => write_leaf(f, item, pad, vals, |f, v| write!(f, "{v}")),
        Item::I4(vals) => write_leaf(f, item, pad, vals, |f, v| write!(f, "{v}")),
        Item::I8(vals) => write_leaf(f, item, pad, vals, |f, v| write!(f, "{v}")),
        Item::U1(vals) => write_leaf(f, item, pad, vals, |f, v| write!(f, "{v}")),
        Item::U2(vals) => write_leaf(f, item, pad, vals, |f, v| write!(f, "{v}")),
        Item::U4(vals) => write_leaf(f, item, pad, vals, |f, v| write!(f, "{v}")),
        Item::U8(vals) => write_leaf(f, item, pad, vals, |f, v| write!(f, "{v}")),
        Item::F4(vals) => write_leaf(f, item, pad, vals, |f, v| write!(f, "{v}")),
        Item::F8(vals) => write_leaf(f, item, pad, vals, |f, v| write!(f, "{v}")),
    }
}

/// Write a one-line leaf form: `<TAG [count] elem elem …>`.
fn write_leaf<T>(
    f: &mut fmt::Formatter<'_>,
    item: &Item,
    pad: usize,
    vals: &[T],
    write_val: impl Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    write!(f, "{:pad$}<{} [{}]", "", sml_tag(item.format()), vals.len())?;
    for val in vals {
        f.write_str(" ")?;
        write_val(f, val)?;
    }
    f.write_str(">")
}
