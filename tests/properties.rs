use variant::{Variant, VariantType, WideString};

fn nested() -> Variant {
    let mut v = Variant::new();
    v.entry("list").push_back(1);
    v.entry("list").push_back("two");
    v.entry("inner").entry("flag").set(true);
    v
}

#[test]
fn scalar_payloads_round_trip() {
    assert_eq!(Variant::from(-42i64).as_integer(0), -42);
    assert_eq!(Variant::from(42u64).as_unsigned_integer(0), 42);
    assert!(!Variant::from(false).as_boolean(true));
    let d: f64 = 1.0 / 3.0;
    assert_eq!(Variant::from(d).as_double(0.0).to_bits(), d.to_bits());
    assert_eq!(Variant::from("narrow").as_string(""), "narrow");
    let w = WideString::from("wide");
    assert_eq!(Variant::from(w.clone()).as_wide_string(&WideString::new()), w);
}

#[test]
fn copies_are_independent() {
    let original = nested();
    let mut copy = original.clone();
    copy.entry("list").push_back(3);
    copy.entry("inner").entry("flag").set(false);
    copy.erase_key("list");

    assert_eq!(original["list"].len(), 2);
    assert!(original["inner"]["flag"].as_boolean(false));
    assert_ne!(original, copy);

    let mut assigned = Variant::from(0);
    assigned.assign(&original);
    if let Some(inner) = assigned.entry("inner").into_mut() {
        inner.clear();
    }
    assert!(assigned["inner"].is_empty());
    assert!(original["inner"].is_member("flag"));
}

#[test]
fn move_leaves_source_null() {
    let mut source = nested();
    let mut target = Variant::new();
    target.take_from(&mut source);
    assert_eq!(source.variant_type(), VariantType::Null);
    assert!(source.is_empty());
    assert_eq!(source.len(), 0);
    assert_eq!(target, nested());

    let mut again = nested();
    let taken = again.take();
    assert!(again.is_empty() && again.is_null());
    // dropping both afterwards must be harmless
    drop(taken);
    drop(again);
}

#[test]
fn sentinel_absorbs_writes() {
    let mut s = Variant::from("string");
    s.entry("k").set(Variant::from(99));
    s.entry("k").assign(&nested());
    assert_eq!(s, Variant::from("string"));
    assert!(s["k"].is_null());
    assert!(Variant::const_null().is_null());
    assert!(Variant::const_null().is_const_null());
}

#[test]
fn auto_vivification() {
    let mut a = Variant::new();
    a.push_back(Variant::from(1));
    assert_eq!(a.variant_type(), VariantType::Array);
    assert_eq!(a.len(), 1);

    let mut o = Variant::new();
    o.entry("k").set(Variant::from(1));
    assert_eq!(o.variant_type(), VariantType::Object);
    assert!(o.is_member("k"));
}

#[test]
fn equality_is_tag_sensitive() {
    let zeros = [
        Variant::from(0i64),
        Variant::from(0u64),
        Variant::from(0.0),
        Variant::from(false),
    ];
    for (i, a) in zeros.iter().enumerate() {
        for (j, b) in zeros.iter().enumerate() {
            assert_eq!(i == j, a == b, "{a:?} vs {b:?}");
        }
        assert!(!a.as_boolean(true));
    }
    assert_ne!(Variant::Null, Variant::ConstNull);
}

#[test]
fn boolean_coercion_from_text() {
    assert!(!Variant::from("false").as_boolean(true));
    assert!(!Variant::from("0").as_boolean(true));
    assert!(!Variant::from("").as_boolean(true));
    assert!(Variant::from("no").as_boolean(false));
}

#[test]
fn bad_numeric_text_falls_back() {
    assert_eq!(Variant::from("12abc").as_integer(-1), -1);
    assert_eq!(Variant::from("  42  ").as_integer(-1), 42);
}

#[test]
fn hex_text_reads_the_same_as_integer_and_double() {
    let v = Variant::from("0x10");
    assert_eq!(v.as_integer(-1), 16);
    assert_eq!(v.as_double(-1.0), 16.0);
    assert_eq!(v.as_float(-1.0), 16.0);
    assert_eq!(Variant::from(WideString::from("-0x10")).as_double(-1.0), -16.0);
}

#[test]
fn out_of_range_index_is_sentinel() {
    let v = nested();
    let list = &v["list"];
    assert!(list[5].is_null());
    assert!(list.at(2).is_const_null());
    assert!(list.clone().into_element(2).is_null());
}

#[test]
fn keyed_access_on_string_never_mutates() {
    let mut s = Variant::from("keep");
    assert!(s["x"].is_null());
    assert!(s.entry("x").is_inert());
    assert!(s.clone().take_key("x").is_const_null());
    assert_eq!(s.as_str(), Some("keep"));
}
