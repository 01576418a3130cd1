//! Bind values for raw SQL statements.
//!
//! The [`Value`] enum carries the arguments bound to a
//! [`RawQuery`](crate::query::RawQuery). Its core variants follow SQLite's
//! storage classes; the typed variants (dates, UUIDs, JSON) are bound as text
//! by the executing layer.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A single bind argument of a raw query.
///
/// Equality is reflexive: `Real` values compare by bit pattern with every
/// `NaN` treated as one value and `-0.0` folded onto `0.0`. `Hash` agrees
/// with it, and JSON documents hash structurally.
///
/// # Examples
///
/// ```
/// use storio_rs_sqlite::value::Value;
///
/// assert_eq!(Value::from(7_i32), Value::Integer(7));
/// assert_eq!(Value::from("arg1"), Value::Text("arg1".to_string()));
/// assert_eq!(Value::from(None::<i64>), Value::Null);
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// SQL NULL.
    Null,
    /// A boolean, bound as 0 or 1.
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
    /// A UTF-8 string.
    Text(String),
    /// Raw binary data.
    Blob(Vec<u8>),
    /// A calendar date.
    Date(chrono::NaiveDate),
    /// A date and time without timezone.
    DateTime(chrono::NaiveDateTime),
    /// A date and time in UTC.
    DateTimeUtc(chrono::DateTime<chrono::Utc>),
    /// A UUID.
    Uuid(uuid::Uuid),
    /// A JSON document.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this value is `Null`.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is a `Bool`.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is an `Integer`.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float, if this is a `Real`.
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string slice, if this is `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the value as a SQL literal, e.g. `'O''Brien'` or `X'0A1B'`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{}", u8::from(*b)),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Text(s) => write_quoted(f, s),
            Self::Blob(bytes) => {
                f.write_str("X'")?;
                for byte in bytes {
                    write!(f, "{byte:02X}")?;
                }
                f.write_str("'")
            }
            Self::Date(d) => write_quoted(f, &d.to_string()),
            Self::DateTime(dt) => write_quoted(f, &dt.to_string()),
            Self::DateTimeUtc(dt) => write_quoted(f, &dt.to_rfc3339()),
            Self::Uuid(u) => write_quoted(f, &u.to_string()),
            Self::Json(j) => write_quoted(f, &j.to_string()),
        }
    }
}

pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "'{}'", s.replace('\'', "''"))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => float_bits(*a) == float_bits(*b),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Blob(a), Self::Blob(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::DateTimeUtc(a), Self::DateTimeUtc(b)) => a == b,
            (Self::Uuid(a), Self::Uuid(b)) => a == b,
            (Self::Json(a), Self::Json(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Integer(i) => i.hash(state),
            Self::Real(v) => float_bits(*v).hash(state),
            Self::Text(s) => s.hash(state),
            Self::Blob(bytes) => bytes.hash(state),
            Self::Date(d) => d.hash(state),
            Self::DateTime(dt) => dt.hash(state),
            Self::DateTimeUtc(dt) => dt.hash(state),
            Self::Uuid(u) => u.hash(state),
            Self::Json(j) => hash_json(j, state),
        }
    }
}

#[allow(clippy::float_cmp)]
fn float_bits(v: f64) -> u64 {
    // NaN payloads collapse to one value; 0.0 and -0.0 differ only in sign bit.
    if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0.0_f64.to_bits()
    } else {
        v.to_bits()
    }
}

fn hash_json<H: Hasher>(value: &serde_json::Value, state: &mut H) {
    std::mem::discriminant(value).hash(state);
    match value {
        serde_json::Value::Null => {}
        serde_json::Value::Bool(b) => b.hash(state),
        serde_json::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                0_u8.hash(state);
                u.hash(state);
            } else if let Some(i) = n.as_i64() {
                1_u8.hash(state);
                i.hash(state);
            } else if let Some(v) = n.as_f64() {
                2_u8.hash(state);
                float_bits(v).hash(state);
            }
        }
        serde_json::Value::String(s) => s.hash(state),
        serde_json::Value::Array(items) => {
            items.len().hash(state);
            for item in items {
                hash_json(item, state);
            }
        }
        serde_json::Value::Object(map) => {
            // Object equality ignores key order.
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            entries.len().hash(state);
            for (key, item) in entries {
                key.hash(state);
                hash_json(item, state);
            }
        }
    }
}

// ── From implementations ───────────────────────────────────────────────

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[allow(clippy::useless_conversion)]
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i8 => Integer,
    i16 => Integer,
    i32 => Integer,
    i64 => Integer,
    u8 => Integer,
    u16 => Integer,
    u32 => Integer,
    f32 => Real,
    f64 => Real,
    String => Text,
    &str => Text,
    &String => Text,
    Vec<u8> => Blob,
    &[u8] => Blob,
    chrono::NaiveDate => Date,
    chrono::NaiveDateTime => DateTime,
    chrono::DateTime<chrono::Utc> => DateTimeUtc,
    uuid::Uuid => Uuid,
    serde_json::Value => Json,
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
