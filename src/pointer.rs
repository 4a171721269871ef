//! JSON Pointer (RFC 6901) lookup over a variant tree.

use crate::error::{Error, Result};
use crate::variant::Variant;

/// Split a pointer into unescaped reference tokens. The empty pointer names
/// the whole document.
pub fn parse_pointer(pointer: &str) -> Result<Vec<String>> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(Error::InvalidPointer(pointer.to_string()));
    };
    rest.split('/')
        .map(|token| unescape(token).ok_or_else(|| Error::InvalidPointer(pointer.to_string())))
        .collect()
}

// single pass, so "~01" decodes to "~1" and not "/"
fn unescape(token: &str) -> Option<String> {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                _ => return None,
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

fn array_index(token: &str) -> Option<usize> {
    // no leading zeros, no sign
    if token.is_empty() || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

impl Variant {
    /// Follow `pointer` through objects and arrays. Malformed pointers and
    /// misses return the `ConstNull` sentinel.
    ///
    /// ```
    /// use variant::Variant;
    ///
    /// let mut v = Variant::new();
    /// v.entry("a/b").entry("list").push_back(7);
    /// assert_eq!(v.pointer("/a~1b/list/0").as_integer(0), 7);
    /// assert!(v.pointer("/missing").is_null());
    /// ```
    pub fn pointer(&self, pointer: &str) -> &Variant {
        let Ok(tokens) = parse_pointer(pointer) else {
            return Variant::const_null();
        };
        let mut node = self;
        for token in &tokens {
            node = match node {
                Variant::Object(_) => node.get(token),
                Variant::Array(_) => match array_index(token) {
                    Some(i) => node.at(i),
                    None => return Variant::const_null(),
                },
                _ => return Variant::const_null(),
            };
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn doc() -> Variant {
        let mut v = Variant::new();
        v.entry("items").push_back("first");
        v.entry("items").push_back("second");
        v.entry("m~n").set(1);
        v.entry("").set("empty key");
        v
    }

    #[test_case("", Expect::Object ; "whole document")]
    #[test_case("/items/1", Expect::Text("second") ; "array element")]
    #[test_case("/m~0n", Expect::Int(1) ; "tilde escape")]
    #[test_case("/", Expect::Text("empty key") ; "empty token")]
    #[test_case("/items/01", Expect::Missing ; "leading zero")]
    #[test_case("/items/-", Expect::Missing ; "append marker")]
    #[test_case("/items/2", Expect::Missing ; "out of range")]
    #[test_case("/items/0/deeper", Expect::Missing ; "through scalar")]
    #[test_case("items", Expect::Missing ; "no leading slash")]
    #[test_case("/bad~2", Expect::Missing ; "bad escape")]
    fn resolves(pointer: &str, expected: Expect) {
        let v = doc();
        let got = v.pointer(pointer);
        match expected {
            Expect::Object => assert!(got.is_object()),
            Expect::Text(s) => assert_eq!(got.as_str(), Some(s)),
            Expect::Int(i) => assert_eq!(got.as_integer(-1), i),
            Expect::Missing => assert!(got.is_const_null()),
        }
    }

    enum Expect {
        Object,
        Text(&'static str),
        Int(i64),
        Missing,
    }

    #[test]
    fn parse_reports_malformed() {
        assert!(matches!(parse_pointer("x"), Err(Error::InvalidPointer(_))));
        assert!(matches!(parse_pointer("/a~"), Err(Error::InvalidPointer(_))));
        assert_eq!(parse_pointer("/a~1b/~01").unwrap(), ["a/b", "~1"]);
    }
}
