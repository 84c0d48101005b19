use super::*;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let x = interner.intern("x");
    let y = interner.intern("y");
    let x2 = interner.intern("x");

    assert_eq!(x, x2);
    assert_ne!(x, y);

    assert_eq!(interner.lookup(x), "x");
    assert_eq!(interner.lookup(y), "y");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    let empty = interner.intern("");
    assert_eq!(empty, Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert!(interner.is_empty());
}

#[test]
fn test_len_counts_distinct_strings() {
    let interner = StringInterner::new();
    interner.intern("a");
    interner.intern("b");
    interner.intern("a");
    assert_eq!(interner.len(), 3);
}

#[test]
fn test_lookup_unknown_name() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(99)), "<unknown>");
}

#[test]
fn test_shared_interner() {
    let interner = SharedInterner::new();
    let interner2 = interner.clone();

    let name = interner.intern("counter");
    assert_eq!(interner2.intern("counter"), name);
    assert_eq!(interner2.lookup(name), "counter");
}
