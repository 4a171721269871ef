//! Owned wide string: a sequence of UTF-16 code units.
//!
//! Wide strings are kept as raw code units, so unpaired surrogates survive a
//! round trip. Text views (`to_string_lossy`, `Display`) replace them.

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WideString(Vec<u16>);

impl WideString {
    pub fn new() -> Self { Self(Vec::new()) }

    pub fn from_units(units: Vec<u16>) -> Self { Self(units) }

    /// At most `length` code units from `units`.
    pub fn from_units_prefix(units: &[u16], length: usize) -> Self {
        Self(units[..length.min(units.len())].to_vec())
    }

    pub fn as_units(&self) -> &[u16] { &self.0 }

    pub fn into_units(self) -> Vec<u16> { self.0 }

    /// Length in code units, not characters.
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn clear(&mut self) { self.0.clear() }

    pub fn push_str(&mut self, s: &str) { self.0.extend(s.encode_utf16()) }

    pub fn to_string_lossy(&self) -> String { String::from_utf16_lossy(&self.0) }

    /// Compare against narrow text without allocating.
    pub fn eq_str(&self, s: &str) -> bool {
        self.0.iter().copied().eq(s.encode_utf16())
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self { Self(s.encode_utf16().collect()) }
}

impl From<String> for WideString {
    fn from(s: String) -> Self { Self::from(s.as_str()) }
}

impl From<Vec<u16>> for WideString {
    fn from(units: Vec<u16>) -> Self { Self(units) }
}

impl From<&[u16]> for WideString {
    fn from(units: &[u16]) -> Self { Self(units.to_vec()) }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.0.iter().copied()) {
            write!(f, "{}", c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_code_units() {
        // U+1F600 is a surrogate pair
        let w = WideString::from("a\u{1F600}");
        assert_eq!(w.len(), 3);
        assert_eq!(w.to_string_lossy(), "a\u{1F600}");
    }

    #[test]
    fn prefix_is_clamped() {
        let units: Vec<u16> = "hello".encode_utf16().collect();
        assert_eq!(WideString::from_units_prefix(&units, 2), WideString::from("he"));
        assert_eq!(WideString::from_units_prefix(&units, 99), WideString::from("hello"));
    }

    #[test]
    fn embedded_nul_is_kept() {
        let w = WideString::from_units(vec![0x61, 0x00, 0x62]);
        assert_eq!(w.len(), 3);
        assert!(!w.eq_str("ab"));
        assert!(w.eq_str("a\0b"));
    }

    #[test]
    fn lone_surrogate_displays_replacement() {
        let w = WideString::from_units(vec![0xD800]);
        assert_eq!(w.to_string(), "\u{FFFD}");
    }
}
