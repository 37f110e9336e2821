//! JSON representation of SECS-II items.
//!
//! Serializes an item as a tagged object and back:
//!
//! ```text
//! List    : {"format": "List",    "value": [item, …]}
//! Binary  : {"format": "Binary",  "value": [1, 255]}
//! Boolean : {"format": "Boolean", "value": [true, false]}
//! ASCII   : {"format": "ASCII",   "value": "hello"}
//! I*/U*   : {"format": "I2",      "value": [-1, 2]}
//! F*      : {"format": "F8",      "value": [1.5]}
//! ```
//!
//! The element type depends on the `"format"` tag, and the two keys may
//! arrive in either order, so `Deserialize` is a hand-written visitor that
//! buffers the value as `serde_json::Value` and converts once the tag is
//! known.
//!
//! Numeric elements must fit the variant's element type and Binary
//! elements must be octets. ASCII serializes lossily to a JSON string when
//! the item holds non-UTF-8 bytes; the wire codec, not this adapter, is
//! the fidelity path.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::{ErrorKind, Secs2Error};
use crate::value::{Format, Item};

/// Parse the JSON form of an item.
pub fn item_from_json(raw: &str) -> Result<Item, Secs2Error> {
    serde_json::from_str(raw).map_err(|e| Secs2Error::new(ErrorKind::InvalidJson, e.to_string()))
}

/// Render an item in its JSON form.
pub fn item_to_json(item: &Item) -> Result<String, Secs2Error> {
    serde_json::to_string(item).map_err(|e| Secs2Error::new(ErrorKind::InvalidJson, e.to_string()))
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("format", self.format().name())?;
        match self {
            Item::List(v) => map.serialize_entry("value", v)?,
            Item::Binary(v) => map.serialize_entry("value", v)?,
            Item::Boolean(v) => map.serialize_entry("value", v)?,
            Item::Ascii(v) => map.serialize_entry("value", &String::from_utf8_lossy(v))?,
            Item::I1(v) => map.serialize_entry("value", v)?,
            Item::I2(v) => map.serialize_entry("value", v)?,
            Item::I4(v) => map.serialize_entry("value", v)?,
            Item::I8(v) => map.serialize_entry("value", v)?,
            Item::U1(v) => map.serialize_entry("value", v)?,
            Item::U2(v) => map.serialize_entry("value", v)?,
            Item::U4(v) => map.serialize_entry("value", v)?,
            Item::U8(v) => map.serialize_entry("value", v)?,
            Item::F4(v) => map.serialize_entry("value", v)?,
            Item::F8(v) => map.serialize_entry("value", v)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ItemVisitor)
    }
}

struct ItemVisitor;

impl<'de> Visitor<'de> for ItemVisitor {
    type Value = Item;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with \"format\" and \"value\" keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Item, A::Error> {
        let mut format: Option<String> = None;
        let mut value: Option<serde_json::Value> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "format" => format = Some(map.next_value()?),
                "value" => value = Some(map.next_value()?),
                other => return Err(de::Error::unknown_field(other, &["format", "value"])),
            }
        }

        let format = format.ok_or_else(|| de::Error::missing_field("format"))?;
        let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
        item_from_parts(&format, value).map_err(de::Error::custom)
    }
}

/// Convert a `"format"` tag and its buffered `"value"` into an item.
fn item_from_parts(name: &str, value: serde_json::Value) -> Result<Item, String> {
    let format =
        Format::from_name(name).ok_or_else(|| format!("unknown format name {name:?}"))?;

    match format {
        Format::List => {
            let elems = into_array(value, format)?;
            let mut items = Vec::with_capacity(elems.len());
            for elem in elems {
                items.push(serde_json::from_value(elem).map_err(|e| e.to_string())?);
            }
            Ok(Item::List(items))
        }
        Format::Ascii => match value {
            serde_json::Value::String(s) => Ok(Item::Ascii(s.into_bytes())),
            other => Err(format!("ASCII value must be a string, got {other}")),
        },
        Format::Boolean => collect(value, format, |v| {
            v.as_bool().ok_or("a boolean")
        })
        .map(Item::Boolean),
        Format::Binary => collect(value, format, |v| {
            v.as_u64().and_then(|n| u8::try_from(n).ok()).ok_or("an octet")
        })
        .map(Item::Binary),
        Format::I1 => collect(value, format, |v| {
            v.as_i64().and_then(|n| i8::try_from(n).ok()).ok_or("an i8")
        })
        .map(Item::I1),
        Format::I2 => collect(value, format, |v| {
            v.as_i64().and_then(|n| i16::try_from(n).ok()).ok_or("an i16")
        })
        .map(Item::I2),
        Format::I4 => collect(value, format, |v| {
            v.as_i64().and_then(|n| i32::try_from(n).ok()).ok_or("an i32")
        })
        .map(Item::I4),
        Format::I8 => collect(value, format, |v| v.as_i64().ok_or("an i64")).map(Item::I8),
        Format::U1 => collect(value, format, |v| {
            v.as_u64().and_then(|n| u8::try_from(n).ok()).ok_or("a u8")
        })
        .map(Item::U1),
        Format::U2 => collect(value, format, |v| {
            v.as_u64().and_then(|n| u16::try_from(n).ok()).ok_or("a u16")
        })
        .map(Item::U2),
        Format::U4 => collect(value, format, |v| {
            v.as_u64().and_then(|n| u32::try_from(n).ok()).ok_or("a u32")
        })
        .map(Item::U4),
        Format::U8 => collect(value, format, |v| v.as_u64().ok_or("a u64")).map(Item::U8),
        Format::F4 => collect(value, format, |v| {
            v.as_f64().map(|n| n as f32).ok_or("a number")
        })
        .map(Item::F4),
        Format::F8 => collect(value, format, |v| v.as_f64().ok_or("a number")).map(Item::F8),
    }
}

fn into_array(value: serde_json::Value, format: Format) -> Result<Vec<serde_json::Value>, String> {
    match value {
        serde_json::Value::Array(elems) => Ok(elems),
        other => Err(format!("{format} value must be an array, got {other}")),
    }
}

/// Convert every element of a JSON array with `convert`, naming the
/// expected element type in the error.
fn collect<T>(
    value: serde_json::Value,
    format: Format,
    convert: impl Fn(&serde_json::Value) -> Result<T, &'static str>,
) -> Result<Vec<T>, String> {
    let elems = into_array(value, format)?;
    let mut vals = Vec::with_capacity(elems.len());
    for elem in &elems {
        vals.push(
            convert(elem).map_err(|expected| format!("{format} element must be {expected}, got {elem}"))?,
        );
    }
    Ok(vals)
}
