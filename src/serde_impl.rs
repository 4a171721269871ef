//! serde bridge, so any serde format can build or emit variants.
//!
//! Tag mapping:
//! - `Null` and `ConstNull` serialize as unit; unit/none deserialize as `Null`.
//! - integers that fit `i64` deserialize as `Integer`, larger ones as
//!   `UnsignedInteger`.
//! - wide strings serialize as (lossily decoded) text and come back narrow.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::variant::{Variant, VariantArray, VariantMap};

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Variant::Null | Variant::ConstNull => serializer.serialize_unit(),
            Variant::Integer(i) => serializer.serialize_i64(*i),
            Variant::UnsignedInteger(u) => serializer.serialize_u64(*u),
            Variant::Boolean(b) => serializer.serialize_bool(*b),
            Variant::Double(d) => serializer.serialize_f64(*d),
            Variant::String(s) => serializer.serialize_str(s),
            Variant::WideString(w) => serializer.serialize_str(&w.to_string_lossy()),
            Variant::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Variant::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

struct VariantVisitor;

impl<'de> Visitor<'de> for VariantVisitor {
    type Value = Variant;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any self-describing value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Variant, E> {
        Ok(Variant::Boolean(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Variant, E> {
        Ok(Variant::Integer(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Variant, E> {
        Ok(match i64::try_from(value) {
            Ok(i) => Variant::Integer(i),
            Err(_) => Variant::UnsignedInteger(value),
        })
    }

    fn visit_f64<E>(self, value: f64) -> Result<Variant, E> {
        Ok(Variant::Double(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Variant, E> {
        Ok(Variant::String(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<Variant, E> {
        Ok(Variant::String(value))
    }

    fn visit_unit<E>(self) -> Result<Variant, E> {
        Ok(Variant::Null)
    }

    fn visit_none<E>(self) -> Result<Variant, E> {
        Ok(Variant::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Variant, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Variant, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = VariantArray::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Variant::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Variant, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = VariantMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Variant>()? {
            entries.insert(key, value);
        }
        Ok(Variant::Object(entries))
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(VariantVisitor)
    }
}

// ------------------------------ serde_json -------------------------------- //

impl From<Value> for Variant {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Variant::Null,
            Value::Bool(b) => Variant::Boolean(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Variant::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Variant::UnsignedInteger(u)
                } else {
                    Variant::Double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Variant::String(s),
            Value::Array(xs) => Variant::Array(xs.into_iter().map(Variant::from).collect()),
            Value::Object(m) => Variant::Object(m.into_iter().map(|(k, v)| (k, Variant::from(v))).collect()),
        }
    }
}

impl Variant {
    /// JSON view of this variant. Non-finite doubles become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Variant::Null | Variant::ConstNull => Value::Null,
            Variant::Integer(i) => Value::from(*i),
            Variant::UnsignedInteger(u) => Value::from(*u),
            Variant::Boolean(b) => Value::Bool(*b),
            Variant::Double(d) => Number::from_f64(*d).map_or(Value::Null, Value::Number),
            Variant::String(s) => Value::String(s.clone()),
            Variant::WideString(w) => Value::String(w.to_string_lossy()),
            Variant::Array(items) => Value::Array(items.iter().map(Variant::to_json).collect()),
            Variant::Object(entries) => {
                Value::Object(entries.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
            }
        }
    }
}

impl From<&Variant> for Value {
    fn from(v: &Variant) -> Self {
        v.to_json()
    }
}
