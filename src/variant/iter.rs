//! Iteration over array elements and object entries.
//!
//! Asking for the wrong container kind is not an error: immutable iteration
//! borrows a shared empty container, mutable iteration is simply empty.

use once_cell::sync::Lazy;

use super::{Variant, VariantArray, VariantMap};

// Process-wide empty fallbacks. Immutable statics, so they stay empty.
static EMPTY_ARRAY: VariantArray = Vec::new();
static EMPTY_OBJECT: Lazy<VariantMap> = Lazy::new(VariantMap::new);

/// Mutable object iterator; empty when the variant is not an object.
pub struct ObjectIterMut<'a> {
    inner: Option<indexmap::map::IterMut<'a, String, Variant>>,
}

impl<'a> Iterator for ObjectIterMut<'a> {
    type Item = (&'a String, &'a mut Variant);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |it| it.size_hint())
    }
}

impl Variant {
    pub fn empty_array() -> &'static VariantArray { &EMPTY_ARRAY }

    pub fn empty_object() -> &'static VariantMap { &EMPTY_OBJECT }

    pub fn iter_array(&self) -> std::slice::Iter<'_, Variant> {
        match self {
            Variant::Array(items) => items.iter(),
            _ => EMPTY_ARRAY.iter(),
        }
    }

    pub fn iter_array_mut(&mut self) -> std::slice::IterMut<'_, Variant> {
        match self {
            Variant::Array(items) => items.iter_mut(),
            _ => Default::default(),
        }
    }

    pub fn iter_object(&self) -> indexmap::map::Iter<'_, String, Variant> {
        match self {
            Variant::Object(map) => map.iter(),
            _ => EMPTY_OBJECT.iter(),
        }
    }

    pub fn iter_object_mut(&mut self) -> ObjectIterMut<'_> {
        let inner = match self {
            Variant::Object(map) => Some(map.iter_mut()),
            _ => None,
        };
        ObjectIterMut { inner }
    }
}
