//! Best-effort conversions. Each `as_*` takes the value to return when the
//! current tag has no sensible reading as the requested type.
//!
//! | from \ to          | integer        | unsigned       | double | boolean          | string / wide     |
//! |--------------------|----------------|----------------|--------|------------------|-------------------|
//! | Integer            | identity       | bit reinterpret| cast   | `!= 0`           | decimal text      |
//! | UnsignedInteger    | bit reinterpret| identity       | cast   | `!= 0`           | decimal text      |
//! | Double             | truncate       | truncate       | identity | `!= 0.0`       | fallback          |
//! | Boolean            | fallback       | fallback       | fallback | identity       | `"true"`/`"false"`|
//! | String/WideString  | parse          | parse          | parse  | `""`,`"0"`,`"false"` → false | own kind only |
//! | Null/Array/Object  | fallback       | fallback       | fallback | fallback       | fallback          |

use super::Variant;
use crate::numparse;
use crate::wide::WideString;

impl Variant {
    pub fn as_integer(&self, fallback: i64) -> i64 {
        match self {
            Variant::Integer(i) => *i,
            Variant::UnsignedInteger(u) => *u as i64,
            Variant::Double(d) => *d as i64,
            Variant::String(s) => numparse::str_to_i64(s, fallback),
            Variant::WideString(w) => numparse::wide_to_i64(w, fallback),
            _ => fallback,
        }
    }

    /// Narrowing cast of [`as_integer`](Self::as_integer); out-of-range values
    /// wrap rather than fall back.
    pub fn as_integer32(&self, fallback: i32) -> i32 {
        self.as_integer(i64::from(fallback)) as i32
    }

    pub fn as_unsigned_integer(&self, fallback: u64) -> u64 {
        match self {
            Variant::UnsignedInteger(u) => *u,
            Variant::Integer(i) => *i as u64,
            Variant::Double(d) => *d as u64,
            Variant::String(s) => numparse::str_to_u64(s, fallback),
            Variant::WideString(w) => numparse::wide_to_u64(w, fallback),
            _ => fallback,
        }
    }

    /// Narrowing cast, like [`as_integer32`](Self::as_integer32).
    pub fn as_unsigned_integer32(&self, fallback: u32) -> u32 {
        self.as_unsigned_integer(u64::from(fallback)) as u32
    }

    pub fn as_double(&self, fallback: f64) -> f64 {
        match self {
            Variant::Double(d) => *d,
            Variant::Integer(i) => *i as f64,
            Variant::UnsignedInteger(u) => *u as f64,
            Variant::String(s) => numparse::str_to_f64(s, fallback),
            Variant::WideString(w) => numparse::wide_to_f64(w, fallback),
            _ => fallback,
        }
    }

    pub fn as_float(&self, fallback: f32) -> f32 {
        match self {
            Variant::Double(d) => *d as f32,
            Variant::Integer(i) => *i as f32,
            Variant::UnsignedInteger(u) => *u as f32,
            Variant::String(s) => numparse::str_to_f64(s, f64::from(fallback)) as f32,
            Variant::WideString(w) => numparse::wide_to_f64(w, f64::from(fallback)) as f32,
            _ => fallback,
        }
    }

    /// Strings are false only when empty, `"0"` or `"false"`.
    pub fn as_boolean(&self, fallback: bool) -> bool {
        match self {
            Variant::Boolean(b) => *b,
            Variant::Integer(i) => *i != 0,
            Variant::UnsignedInteger(u) => *u != 0,
            Variant::Double(d) => *d != 0.0,
            Variant::String(s) => !(s.is_empty() || s == "0" || s == "false"),
            Variant::WideString(w) => !(w.is_empty() || w.eq_str("0") || w.eq_str("false")),
            _ => fallback,
        }
    }

    pub fn as_string(&self, fallback: &str) -> String {
        match self {
            Variant::String(s) => s.clone(),
            Variant::Boolean(b) => bool_text(*b).to_owned(),
            Variant::Integer(i) => i.to_string(),
            Variant::UnsignedInteger(u) => u.to_string(),
            _ => fallback.to_owned(),
        }
    }

    /// Like [`as_string`](Self::as_string), but a `String` payload is moved
    /// out instead of copied.
    pub fn into_string(self, fallback: &str) -> String {
        match self {
            Variant::String(s) => s,
            other => other.as_string(fallback),
        }
    }

    pub fn as_wide_string(&self, fallback: &WideString) -> WideString {
        match self {
            Variant::WideString(w) => w.clone(),
            Variant::Boolean(b) => WideString::from(bool_text(*b)),
            Variant::Integer(i) => WideString::from(i.to_string()),
            Variant::UnsignedInteger(u) => WideString::from(u.to_string()),
            _ => fallback.clone(),
        }
    }

    /// Moves a `WideString` payload out; anything else converts by copy.
    pub fn into_wide_string(self, fallback: &WideString) -> WideString {
        match self {
            Variant::WideString(w) => w,
            other => other.as_wide_string(fallback),
        }
    }

    /// Borrowed view of a `String` payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::String(s) => Some(s),
            _ => None,
        }
    }
}

fn bool_text(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Variant::from(-3i64), -3 ; "integer")]
    #[test_case(Variant::from(u64::MAX), -1 ; "unsigned reinterpreted")]
    #[test_case(Variant::from(-2.9), -2 ; "double truncates toward zero")]
    #[test_case(Variant::from("  42  "), 42 ; "padded text")]
    #[test_case(Variant::from("12abc"), 99 ; "garbage text")]
    #[test_case(Variant::from(WideString::from("0x10")), 16 ; "wide hex")]
    #[test_case(Variant::from(true), 99 ; "boolean")]
    #[test_case(Variant::Null, 99 ; "null")]
    #[test_case(Variant::Array(vec![Variant::from(1)]), 99 ; "array")]
    fn as_integer_table(v: Variant, expected: i64) {
        assert_eq!(v.as_integer(99), expected);
    }

    #[test_case(Variant::from(-1i64), u64::MAX ; "negative reinterpreted")]
    #[test_case(Variant::from(7.8), 7 ; "double truncates")]
    #[test_case(Variant::from("0777"), 511 ; "octal text")]
    #[test_case(Variant::from(false), 5 ; "boolean")]
    #[test_case(Variant::ConstNull, 5 ; "sentinel")]
    fn as_unsigned_table(v: Variant, expected: u64) {
        assert_eq!(v.as_unsigned_integer(5), expected);
    }

    #[test_case(Variant::from(3i64), 3.0 ; "integer")]
    #[test_case(Variant::from(4u64), 4.0 ; "unsigned")]
    #[test_case(Variant::from("2.5"), 2.5 ; "text")]
    #[test_case(Variant::from("2.5.1"), -1.0 ; "bad text")]
    #[test_case(Variant::from(true), -1.0 ; "boolean")]
    fn as_double_table(v: Variant, expected: f64) {
        assert_eq!(v.as_double(-1.0), expected);
    }

    #[test_case(Variant::from("false"), true, false ; "false text")]
    #[test_case(Variant::from("0"), true, false ; "zero text")]
    #[test_case(Variant::from(""), true, false ; "empty text")]
    #[test_case(Variant::from("no"), false, true ; "other text")]
    #[test_case(Variant::from(WideString::from("false")), true, false ; "wide false")]
    #[test_case(Variant::from(WideString::from("yes")), false, true ; "wide other")]
    #[test_case(Variant::from(0i64), true, false ; "zero")]
    #[test_case(Variant::from(2u64), false, true ; "unsigned")]
    #[test_case(Variant::from(0.0), true, false ; "zero double")]
    #[test_case(Variant::Null, true, true ; "null")]
    #[test_case(Variant::Object(Default::default()), false, false ; "object")]
    fn as_boolean_table(v: Variant, fallback: bool, expected: bool) {
        assert_eq!(v.as_boolean(fallback), expected);
    }

    #[test_case(Variant::from("s"), "s" ; "string")]
    #[test_case(Variant::from(true), "true" ; "true")]
    #[test_case(Variant::from(false), "false" ; "false")]
    #[test_case(Variant::from(-12i64), "-12" ; "integer")]
    #[test_case(Variant::from(12u64), "12" ; "unsigned")]
    #[test_case(Variant::from(1.5), "fb" ; "double")]
    #[test_case(Variant::from(WideString::from("w")), "fb" ; "wide")]
    #[test_case(Variant::Null, "fb" ; "null")]
    fn as_string_table(v: Variant, expected: &str) {
        assert_eq!(v.as_string("fb"), expected);
    }

    #[test]
    fn wide_conversions_mirror_narrow() {
        let fb = WideString::from("fb");
        assert_eq!(Variant::from(7i64).as_wide_string(&fb), WideString::from("7"));
        assert_eq!(Variant::from(true).as_wide_string(&fb), WideString::from("true"));
        assert_eq!(Variant::from("narrow").as_wide_string(&fb), fb);
        assert_eq!(Variant::from(0.5).as_wide_string(&fb), fb);
    }

    #[test]
    fn thirty_two_bit_forms_narrow() {
        let big = Variant::from(0x1_0000_0005i64);
        assert_eq!(big.as_integer32(0), 5);
        assert_eq!(big.as_unsigned_integer32(0), 5);
        assert_eq!(Variant::Null.as_integer32(-4), -4);
        assert_eq!(Variant::Null.as_unsigned_integer32(4), 4);
    }

    #[test]
    fn as_float_reads_all_numeric_kinds() {
        assert_eq!(Variant::from(1.25).as_float(0.0), 1.25);
        assert_eq!(Variant::from("0.5").as_float(0.0), 0.5);
        assert_eq!(Variant::from("x").as_float(3.0), 3.0);
    }

    #[test]
    fn into_string_moves_or_converts() {
        assert_eq!(Variant::from("owned").into_string(""), "owned");
        assert_eq!(Variant::from(9i64).into_string(""), "9");
        assert_eq!(Variant::Null.into_string("fb"), "fb");

        let w = WideString::from("wide");
        assert_eq!(Variant::from(w.clone()).into_wide_string(&WideString::new()), w);
        assert_eq!(Variant::from(false).into_wide_string(&WideString::new()), WideString::from("false"));
    }

    #[test]
    fn scalar_round_trips() {
        assert_eq!(Variant::from(i64::MIN).as_integer(0), i64::MIN);
        assert_eq!(Variant::from(u64::MAX).as_unsigned_integer(0), u64::MAX);
        assert_eq!(Variant::from(0.1).as_double(0.0).to_bits(), 0.1f64.to_bits());
        assert!(Variant::from(true).as_boolean(false));
        assert_eq!(Variant::from("héllo").as_string(""), "héllo");
    }

    #[test]
    fn as_str_only_for_strings() {
        assert_eq!(Variant::from("x").as_str(), Some("x"));
        assert_eq!(Variant::from(1).as_str(), None);
    }
}
