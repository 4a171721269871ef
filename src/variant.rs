//! Dynamically-typed value container.
//!
//! A [`Variant`] holds exactly one of: null, signed/unsigned integer, boolean,
//! double, narrow string, wide string, array of variants, or an
//! insertion-ordered map of string to variant. Loosely-typed call sites
//! (decoded JSON, RPC payloads, settings) read it through the `as_*`
//! conversions, each of which takes a fallback instead of failing.
//!
//! Wrong-tag operations never error:
//! - conversions return the caller's fallback;
//! - reads of missing keys/positions return the shared [`Variant::ConstNull`]
//!   sentinel;
//! - writes to invalid targets go to an inert [`Slot`] and vanish.
//!
//! The first array-style (`push_back`, `reserve`, `erase_at`) or object-style
//! (`entry`, `erase_key`) mutation on a `Null` variant turns it into an empty
//! array or object in place ("auto-vivification").
pub mod access;
pub mod convert;
pub mod iter;
pub mod slot;

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;

use crate::wide::WideString;

pub use iter::ObjectIterMut;
pub use slot::Slot;

pub type VariantArray = Vec<Variant>;

/// Insertion-ordered; equality ignores order.
pub type VariantMap = IndexMap<String, Variant>;

/// Read-only sentinel handed out for invalid lookups. Being a `static`, it can
/// never be borrowed mutably, so no write (or swap) can reach it.
static CONST_NULL: Variant = Variant::ConstNull;

// ------------------------------- Types ----------------------------------- //

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Variant {
    #[default]
    Null,
    /// Write-absorbing null. Assignment into it is a no-op.
    ConstNull,
    Integer(i64),
    UnsignedInteger(u64),
    Boolean(bool),
    Double(f64),
    String(String),
    WideString(WideString),
    Array(VariantArray),
    Object(VariantMap),
}

/// The tag of a [`Variant`]. Codecs branch on this when mapping wire types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariantType {
    Null,
    ConstNull,
    Integer,
    UnsignedInteger,
    Boolean,
    Double,
    String,
    WideString,
    Array,
    Object,
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariantType::Null => "null",
            VariantType::ConstNull => "constnull",
            VariantType::Integer => "integer",
            VariantType::UnsignedInteger => "unsigned",
            VariantType::Boolean => "boolean",
            VariantType::Double => "double",
            VariantType::String => "string",
            VariantType::WideString => "wstring",
            VariantType::Array => "array",
            VariantType::Object => "object",
        };
        f.write_str(name)
    }
}

// ---------------------------- Construction ------------------------------- //

impl Variant {
    pub fn new() -> Self { Self::Null }

    /// The zero value of `ty`: `0`, `false`, `0.0` or an empty container.
    pub fn of_type(ty: VariantType) -> Self {
        match ty {
            VariantType::Null => Variant::Null,
            VariantType::ConstNull => Variant::ConstNull,
            VariantType::Integer => Variant::Integer(0),
            VariantType::UnsignedInteger => Variant::UnsignedInteger(0),
            VariantType::Boolean => Variant::Boolean(false),
            VariantType::Double => Variant::Double(0.0),
            VariantType::String => Variant::String(String::new()),
            VariantType::WideString => Variant::WideString(WideString::new()),
            VariantType::Array => Variant::Array(VariantArray::new()),
            VariantType::Object => Variant::Object(VariantMap::new()),
        }
    }

    /// Narrow string from the first `length` bytes of `s`. A cut through a
    /// multi-byte character is replaced lossily.
    pub fn with_length(s: &str, length: usize) -> Self {
        let bytes = &s.as_bytes()[..length.min(s.len())];
        Variant::String(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Wide string from the first `length` code units of `units`.
    pub fn wide_with_length(units: &[u16], length: usize) -> Self {
        Variant::WideString(WideString::from_units_prefix(units, length))
    }

    /// The shared sentinel returned by lookups that miss.
    pub fn const_null() -> &'static Variant { &CONST_NULL }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self { Variant::Integer(i64::from(v)) }
}

impl From<i64> for Variant {
    fn from(v: i64) -> Self { Variant::Integer(v) }
}

impl From<u32> for Variant {
    fn from(v: u32) -> Self { Variant::UnsignedInteger(u64::from(v)) }
}

impl From<u64> for Variant {
    fn from(v: u64) -> Self { Variant::UnsignedInteger(v) }
}

impl From<bool> for Variant {
    fn from(v: bool) -> Self { Variant::Boolean(v) }
}

impl From<f32> for Variant {
    fn from(v: f32) -> Self { Variant::Double(f64::from(v)) }
}

impl From<f64> for Variant {
    fn from(v: f64) -> Self { Variant::Double(v) }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self { Variant::String(v.to_owned()) }
}

impl From<String> for Variant {
    fn from(v: String) -> Self { Variant::String(v) }
}

impl From<&String> for Variant {
    fn from(v: &String) -> Self { Variant::String(v.clone()) }
}

impl From<WideString> for Variant {
    fn from(v: WideString) -> Self { Variant::WideString(v) }
}

impl From<Vec<String>> for Variant {
    fn from(items: Vec<String>) -> Self {
        Variant::Array(items.into_iter().map(Variant::String).collect())
    }
}

impl From<&[&str]> for Variant {
    fn from(items: &[&str]) -> Self {
        Variant::Array(items.iter().map(|s| Variant::from(*s)).collect())
    }
}

impl From<BTreeMap<String, String>> for Variant {
    fn from(map: BTreeMap<String, String>) -> Self {
        Variant::Object(map.into_iter().map(|(k, v)| (k, Variant::String(v))).collect())
    }
}

impl From<BTreeMap<String, Variant>> for Variant {
    fn from(map: BTreeMap<String, Variant>) -> Self {
        Variant::Object(map.into_iter().collect())
    }
}

impl From<VariantArray> for Variant {
    fn from(items: VariantArray) -> Self { Variant::Array(items) }
}

impl From<VariantMap> for Variant {
    fn from(map: VariantMap) -> Self { Variant::Object(map) }
}

impl FromIterator<Variant> for Variant {
    fn from_iter<I: IntoIterator<Item = Variant>>(iter: I) -> Self {
        Variant::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Variant)> for Variant {
    fn from_iter<I: IntoIterator<Item = (String, Variant)>>(iter: I) -> Self {
        Variant::Object(iter.into_iter().collect())
    }
}

// ----------------------------- Predicates -------------------------------- //

impl Variant {
    pub fn variant_type(&self) -> VariantType {
        match self {
            Variant::Null => VariantType::Null,
            Variant::ConstNull => VariantType::ConstNull,
            Variant::Integer(_) => VariantType::Integer,
            Variant::UnsignedInteger(_) => VariantType::UnsignedInteger,
            Variant::Boolean(_) => VariantType::Boolean,
            Variant::Double(_) => VariantType::Double,
            Variant::String(_) => VariantType::String,
            Variant::WideString(_) => VariantType::WideString,
            Variant::Array(_) => VariantType::Array,
            Variant::Object(_) => VariantType::Object,
        }
    }

    /// True for both `Null` and the `ConstNull` sentinel, even though the
    /// two never compare equal.
    pub fn is_null(&self) -> bool { matches!(self, Variant::Null | Variant::ConstNull) }

    pub fn is_const_null(&self) -> bool { matches!(self, Variant::ConstNull) }

    /// Signed or unsigned.
    pub fn is_integer(&self) -> bool { self.is_signed_integer() || self.is_unsigned_integer() }

    pub fn is_signed_integer(&self) -> bool { matches!(self, Variant::Integer(_)) }

    pub fn is_unsigned_integer(&self) -> bool { matches!(self, Variant::UnsignedInteger(_)) }

    pub fn is_boolean(&self) -> bool { matches!(self, Variant::Boolean(_)) }

    pub fn is_double(&self) -> bool { matches!(self, Variant::Double(_)) }

    pub fn is_string(&self) -> bool { matches!(self, Variant::String(_)) }

    pub fn is_wide_string(&self) -> bool { matches!(self, Variant::WideString(_)) }

    pub fn is_array(&self) -> bool { matches!(self, Variant::Array(_)) }

    pub fn is_object(&self) -> bool { matches!(self, Variant::Object(_)) }
}

// ------------------------- Assignment & lifetime ------------------------- //

impl Variant {
    /// Copy-assign: replace the current payload with a deep copy of `rhs`.
    pub fn assign(&mut self, rhs: &Variant) -> &mut Self {
        if self.absorbs_writes() {
            return self;
        }
        *self = rhs.clone();
        self
    }

    /// Move-assign from an owned value.
    pub fn set(&mut self, value: impl Into<Variant>) -> &mut Self {
        if self.absorbs_writes() {
            return self;
        }
        *self = value.into();
        self
    }

    /// Move-assign out of `source`, which is left `Null`.
    pub fn take_from(&mut self, source: &mut Variant) -> &mut Self {
        if self.absorbs_writes() {
            return self;
        }
        *self = std::mem::take(source);
        self
    }

    /// Move the payload out, leaving `Null` behind. A `ConstNull` instance
    /// keeps its tag and yields `ConstNull`.
    pub fn take(&mut self) -> Variant {
        if self.is_const_null() {
            return Variant::ConstNull;
        }
        std::mem::take(self)
    }

    /// Drop a string/array/object payload and reset to `Null`. Scalars and
    /// nulls are left alone, so calling this twice is harmless.
    pub fn release(&mut self) {
        if matches!(
            self,
            Variant::String(_) | Variant::WideString(_) | Variant::Array(_) | Variant::Object(_)
        ) {
            *self = Variant::Null;
        }
    }

    /// Constant-time exchange of tag and payload.
    pub fn swap(&mut self, other: &mut Variant) {
        std::mem::swap(self, other);
    }

    fn absorbs_writes(&self) -> bool {
        if self.is_const_null() {
            log::trace!("write to ConstNull variant discarded");
            return true;
        }
        false
    }
}

// ------------------------------- Tests ------------------------------------ //
