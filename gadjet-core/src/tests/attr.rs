use super::util::*;
use crate::attr::{parse_float, parse_int};

#[test]
fn float_prefix() {
    assert_eq!(parse_float("50"), 50.0);
    assert_eq!(parse_float("50px"), 50.0);
    assert_eq!(parse_float("  -2.5e2rem"), -250.0);
    assert_eq!(parse_float(".5"), 0.5);
    assert_eq!(parse_float("1e"), 1.0);
    assert!(parse_float("abc").is_nan());
    assert!(parse_float("").is_nan());
    assert!(parse_float("-").is_nan());
}

#[test]
fn int_prefix() {
    assert_eq!(parse_int("700"), Some(700));
    assert_eq!(parse_int("12.9"), Some(12));
    assert_eq!(parse_int("-3ms"), Some(-3));
    assert_eq!(parse_int("ms"), None);
}

#[test]
fn names_ignore_case() {
    let mut attrs = Attributes::new().with("showAt", "800px");
    assert_eq!(attrs.get("showat"), Some("800px"));
    assert!(attrs.has("SHOWAT"));

    attrs.set("SHOWAT", "900px");
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs.get("showAt"), Some("900px"));

    assert_eq!(attrs.int_or("missing", 5), 5);
    assert!(attrs.float("missing").is_nan());
}
