//! Container-style access: keyed and indexed lookup, mutation, sizing.

use std::ops::Index;

use super::{Slot, Variant, VariantArray, VariantMap};

impl Variant {
    fn vivify_array(&mut self) {
        if matches!(self, Variant::Null) {
            *self = Variant::Array(VariantArray::new());
        }
    }

    fn vivify_object(&mut self) {
        if matches!(self, Variant::Null) {
            *self = Variant::Object(VariantMap::new());
        }
    }

    // ---- keyed ----

    /// Value under `key`, or the `ConstNull` sentinel when absent or when this
    /// is not an object. Never inserts.
    pub fn get(&self, key: &str) -> &Variant {
        match self {
            Variant::Object(map) => map.get(key).unwrap_or(Variant::const_null()),
            _ => Variant::const_null(),
        }
    }

    /// Mutable access to `key`, inserting `Null` if missing. A `Null` variant
    /// becomes an empty object first; any other non-object gives an inert slot.
    pub fn entry(&mut self, key: &str) -> Slot<'_> {
        self.vivify_object();
        match self {
            Variant::Object(map) => Slot::Live(map.entry(key.to_owned()).or_default()),
            _ => Slot::Inert,
        }
    }

    /// Consume an object and return the value under `key` (`Null` when the
    /// key is absent). Non-objects yield `ConstNull`.
    pub fn take_key(self, key: &str) -> Variant {
        match self {
            Variant::Object(mut map) => map.swap_remove(key).unwrap_or_default(),
            _ => Variant::ConstNull,
        }
    }

    pub fn is_member(&self, key: &str) -> bool {
        match self {
            Variant::Object(map) => map.contains_key(key),
            _ => false,
        }
    }

    /// Remove `key`, keeping the remaining entries in insertion order.
    /// A `Null` variant becomes an empty object.
    pub fn erase_key(&mut self, key: &str) {
        match self {
            Variant::Null => self.vivify_object(),
            Variant::Object(map) => {
                map.shift_remove(key);
            }
            _ => {}
        }
    }

    // ---- indexed ----

    /// Element at `position`, or the sentinel when out of range or not an array.
    pub fn at(&self, position: usize) -> &Variant {
        match self {
            Variant::Array(items) => items.get(position).unwrap_or(Variant::const_null()),
            _ => Variant::const_null(),
        }
    }

    /// Mutable element access. Unlike [`entry`](Self::entry) this never
    /// vivifies: only an existing array position is live.
    pub fn at_mut(&mut self, position: usize) -> Slot<'_> {
        match self {
            Variant::Array(items) => items.get_mut(position).map_or(Slot::Inert, Slot::Live),
            _ => Slot::Inert,
        }
    }

    /// Consume an array and return the element at `position`, or `ConstNull`.
    pub fn into_element(self, position: usize) -> Variant {
        match self {
            Variant::Array(mut items) if position < items.len() => items.swap_remove(position),
            _ => Variant::ConstNull,
        }
    }

    /// Append to an array, turning `Null` into one first. No-op for other tags.
    pub fn push_back(&mut self, value: impl Into<Variant>) {
        self.vivify_array();
        match self {
            Variant::Array(items) => items.push(value.into()),
            _ => log::trace!("push_back on {} ignored", self.variant_type()),
        }
    }

    pub fn append(&mut self, value: impl Into<Variant>) {
        self.push_back(value);
    }

    pub fn reserve(&mut self, additional: usize) {
        self.vivify_array();
        if let Variant::Array(items) = self {
            items.reserve(additional);
        }
    }

    /// Remove the element at `position` if it exists. A `Null` variant becomes
    /// an empty array.
    pub fn erase_at(&mut self, position: usize) {
        self.vivify_array();
        if let Variant::Array(items) = self {
            if position < items.len() {
                items.remove(position);
            }
        }
    }

    // ---- sizing ----

    /// Empty the contents of a string/array/object, keeping its tag.
    pub fn clear(&mut self) {
        match self {
            Variant::String(s) => s.clear(),
            Variant::WideString(w) => w.clear(),
            Variant::Array(items) => items.clear(),
            Variant::Object(map) => map.clear(),
            _ => {}
        }
    }

    /// Entries, elements, or code units (bytes for narrow strings). Zero for
    /// scalars and nulls.
    pub fn len(&self) -> usize {
        match self {
            Variant::Object(map) => map.len(),
            Variant::Array(items) => items.len(),
            Variant::String(s) => s.len(),
            Variant::WideString(w) => w.len(),
            _ => 0,
        }
    }

    /// True for `Null` and for empty containers/strings. Scalars and the
    /// `ConstNull` sentinel are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Variant::Object(map) => map.is_empty(),
            Variant::Array(items) => items.is_empty(),
            Variant::String(s) => s.is_empty(),
            Variant::WideString(w) => w.is_empty(),
            Variant::Null => true,
            _ => false,
        }
    }
}

impl Index<&str> for Variant {
    type Output = Variant;

    fn index(&self, key: &str) -> &Variant {
        self.get(key)
    }
}

impl Index<usize> for Variant {
    type Output = Variant;

    fn index(&self, position: usize) -> &Variant {
        self.at(position)
    }
}
