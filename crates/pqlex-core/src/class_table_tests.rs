use crate::{ClassTable, class_family};

#[test]
fn intern_deduplicates() {
    let mut table = ClassTable::new(".pq");

    let a = table.intern("keyword");
    let b = table.intern("keyword");
    let c = table.intern("identifier");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(table.len(), 2);
}

#[test]
fn resolve_appends_postfix() {
    let mut table = ClassTable::new(".pq");

    let id = table.intern("string.escape");
    assert_eq!(table.resolve(id), "string.escape.pq");
    assert_eq!(table.base_name(id), "string.escape");
}

#[test]
fn empty_class_has_no_postfix() {
    let mut table = ClassTable::new(".pq");

    let id = table.intern("");
    assert_eq!(table.resolve(id), "");
    assert_eq!(table.base_name(id), "");
}

#[test]
fn get_does_not_intern() {
    let mut table = ClassTable::new("");
    assert!(table.get("comment").is_none());

    let id = table.intern("comment");
    assert_eq!(table.get("comment"), Some(id));
    assert_eq!(table.len(), 1);
}

#[test]
fn ids_follow_insertion_order() {
    let mut table = ClassTable::new(".x");
    let z = table.intern("z");
    let a = table.intern("a");

    assert!(z < a);
    let names: Vec<_> = table.iter().map(|(_, name)| name).collect();
    assert_eq!(names, ["z.x", "a.x"]);
}

#[test]
fn try_resolve_foreign_id() {
    let mut big = ClassTable::new("");
    big.intern("a");
    let b = big.intern("b");

    let small = ClassTable::new("");
    assert!(small.try_resolve(b).is_none());
}

#[test]
fn family_is_first_segment() {
    assert_eq!(class_family("string.escape.pq"), "string");
    assert_eq!(class_family("white"), "white");
    assert_eq!(class_family(""), "");
}
