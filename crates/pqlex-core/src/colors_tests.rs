use crate::Colors;

#[test]
fn off_is_empty() {
    let colors = Colors::new(false);
    assert!(!colors.is_enabled());
    assert_eq!(colors.for_class("keyword.pq"), "");
}

#[test]
fn class_families() {
    let c = Colors::ON;
    assert_eq!(c.for_class("keyword.pq"), c.blue);
    assert_eq!(c.for_class("type.pq"), c.blue);
    assert_eq!(c.for_class("string.escape.pq"), c.green);
    assert_eq!(c.for_class("number.hex.pq"), c.yellow);
    assert_eq!(c.for_class("delimiter.square.pq"), c.magenta);
    assert_eq!(c.for_class("comment.pq"), c.dim);
    assert_eq!(c.for_class("identifier.pq"), "");
    assert_eq!(c.for_class(""), "");
}
