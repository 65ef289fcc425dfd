use super::super::util::*;
use crate::attr::Attributes;

use time::macros::date;

fn input_date(registry: &mut Registry, attributes: Attributes) -> InputDate {
    InputDate::define(registry, "el-input-date").unwrap();
    InputDate::new(registry, Element::with_attributes(attributes)).unwrap()
}

#[test]
fn initial_value_is_shown() {
    let mut registry = registry();
    let input = input_date(&mut registry, Attributes::new().with("value", "2024-02-29"));

    assert_eq!(input.value(), Some(date!(2024 - 02 - 29)));
    assert_eq!(input.display.text, "2024-02-29");
    assert_eq!(input.input.attributes.get("type"), Some("date"));
}

#[test]
fn invalid_values_clear() {
    let mut registry = registry();
    let mut input = input_date(&mut registry, Attributes::new().with("value", "2023-02-29"));
    assert_eq!(input.value_text(), "");

    input.set_value("2024-13-01");
    assert_eq!(input.value(), None);
    assert_eq!(input.display.text, "");
}

#[test]
fn changes_mirror_on_the_display() {
    let mut registry = registry();
    let mut input = input_date(&mut registry, Attributes::new());

    input.set_date(date!(2021 - 07 - 04));
    assert_eq!(input.value_text(), "2021-07-04");
    assert_eq!(input.display.text, "2021-07-04");

    let events = input.host_mut().element.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].detail, Detail::Text("2021-07-04".into()));
}
